//! Presenter: mission state in, view models out.
//!
//! Pure functions only. The controller calls [`build_screen`] after every
//! mutation and pushes the result to the views as a whole; there is no
//! incremental patching of markers, path or rows.

use waymark_types::{Coord, Mode, format_component};

use crate::selection::Selection;
use crate::view_models::{
    EditPanelViewModel, MapViewModel, MarkerViewModel, PopupViewModel, ScreenViewModel,
    TableRowViewModel, TableViewModel,
};

pub fn build_screen(
    points: &[Coord],
    selection: Selection,
    mode: Mode,
    center_on: Option<Coord>,
) -> ScreenViewModel {
    ScreenViewModel {
        map: build_map(points, selection, mode, center_on),
        table: build_table(points, selection),
        edit_panel: build_edit_panel(points, selection, mode),
    }
}

pub fn build_map(
    points: &[Coord],
    selection: Selection,
    mode: Mode,
    center_on: Option<Coord>,
) -> MapViewModel {
    let interaction = mode.interaction();

    let markers = points
        .iter()
        .enumerate()
        .map(|(index, coord)| MarkerViewModel {
            index,
            order: index + 1,
            coord: *coord,
            selected: selection == Some(index),
            draggable: interaction.markers_draggable,
        })
        .collect();

    let path = (points.len() >= 2).then(|| points.to_vec());

    let popup = selection
        .and_then(|index| points.get(index).map(|coord| (index, coord)))
        .map(|(index, coord)| PopupViewModel {
            index,
            coord: *coord,
            lines: vec![
                "Point".to_string(),
                format!("Lat: {}", coord.lat_text()),
                format!("Lon: {}", coord.lng_text()),
            ],
        });

    MapViewModel {
        markers,
        path,
        center_on,
        popup,
        interaction,
    }
}

pub fn build_table(points: &[Coord], selection: Selection) -> TableViewModel {
    let last = points.len().saturating_sub(1);
    let rows = points
        .iter()
        .enumerate()
        .map(|(index, coord)| TableRowViewModel {
            index,
            position: index + 1,
            lat: format_component(coord.lat),
            lng: format_component(coord.lng),
            selected: selection == Some(index),
            can_move_up: index > 0,
            can_move_down: index < last,
        })
        .collect();

    TableViewModel {
        rows,
        selected: selection.filter(|index| *index < points.len()),
    }
}

pub fn build_edit_panel(points: &[Coord], selection: Selection, mode: Mode) -> EditPanelViewModel {
    match selection.and_then(|index| points.get(index).map(|coord| (index, coord))) {
        Some((index, coord)) => EditPanelViewModel {
            lat: coord.lat_text(),
            lng: coord.lng_text(),
            selected: Some(index),
            mode,
        },
        None => EditPanelViewModel {
            lat: String::new(),
            lng: String::new(),
            selected: None,
            mode,
        },
    }
}
