//! Derived, render-ready data for the three passive views.
//!
//! Nothing here is retained between mutations: the presenter rebuilds every
//! view model from the mission state after each change.

use serde::Serialize;
use waymark_types::{Coord, Interaction, Mode};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerViewModel {
    pub index: usize,
    /// Order badge, `index + 1`
    pub order: usize,
    pub coord: Coord,
    pub selected: bool,
    pub draggable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupViewModel {
    pub index: usize,
    pub coord: Coord,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapViewModel {
    pub markers: Vec<MarkerViewModel>,
    /// Connecting path in list order; absent below two points
    pub path: Option<Vec<Coord>>,
    /// Set only by operations that re-centre the map
    pub center_on: Option<Coord>,
    pub popup: Option<PopupViewModel>,
    pub interaction: Interaction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRowViewModel {
    pub index: usize,
    pub position: usize,
    pub lat: String,
    pub lng: String,
    pub selected: bool,
    pub can_move_up: bool,
    pub can_move_down: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableViewModel {
    pub rows: Vec<TableRowViewModel>,
    pub selected: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditPanelViewModel {
    /// Empty when nothing is selected
    pub lat: String,
    pub lng: String,
    pub selected: Option<usize>,
    pub mode: Mode,
}

impl EditPanelViewModel {
    pub fn is_cleared(&self) -> bool {
        self.selected.is_none() && self.lat.is_empty() && self.lng.is_empty()
    }
}

/// Everything the host needs for one full redraw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenViewModel {
    pub map: MapViewModel,
    pub table: TableViewModel,
    pub edit_panel: EditPanelViewModel,
}
