use std::collections::VecDeque;

use chrono::Local;
use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use waymark_engine::{
    EditPanelViewModel, MapViewModel, MissionView, Notice, Step, TableViewModel,
};
use waymark_types::UploadTarget;

use super::viewport::Viewport;
use crate::presentation::views::tui::arrows_column;

const NOTICE_HISTORY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldId {
    Lat,
    Lng,
    Ip,
    Port,
    Height,
    ImportPath,
}

impl FieldId {
    /// Tab order; the import prompt is only reachable through `i`
    pub fn next(self) -> Option<FieldId> {
        match self {
            FieldId::Lat => Some(FieldId::Lng),
            FieldId::Lng => Some(FieldId::Ip),
            FieldId::Ip => Some(FieldId::Port),
            FieldId::Port => Some(FieldId::Height),
            FieldId::Height | FieldId::ImportPath => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Map,
    Field(FieldId),
}

/// Pointer gesture in progress, keyed by where the button went down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Gesture {
    /// Pressed on empty map; becomes a pan once the pointer moves
    MapPress { column: u16, row: u16, moved: bool },
    MarkerDrag { index: usize },
    RowDrag { index: usize },
}

#[derive(Debug, Clone)]
pub(crate) struct NoticeLine {
    pub time: String,
    pub notice: Notice,
}

/// Regions from the last frame, used to route mouse events
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LayoutAreas {
    pub map: Rect,
    pub table: Rect,
}

/// Terminal host for the mission controller.
///
/// Holds whatever the controller last pushed plus purely local UI state
/// (viewport, focus, typed text, gestures). It never edits mission data.
pub(crate) struct EditorApp {
    pub map: Option<MapViewModel>,
    pub table: Option<TableViewModel>,
    pub edit_panel: Option<EditPanelViewModel>,
    pub notices: VecDeque<NoticeLine>,

    pub viewport: Viewport,
    pub focus: Focus,
    pub lat_input: String,
    pub lng_input: String,
    pub target: UploadTarget,
    pub import_path: String,
    pub table_state: TableState,
    pub gesture: Option<Gesture>,
    pub layout: LayoutAreas,
    pub upload_in_flight: bool,
    pub should_quit: bool,
}

impl EditorApp {
    pub fn new(viewport: Viewport, target: UploadTarget, import_path: String) -> Self {
        Self {
            map: None,
            table: None,
            edit_panel: None,
            notices: VecDeque::new(),
            viewport,
            focus: Focus::Map,
            lat_input: String::new(),
            lng_input: String::new(),
            target,
            import_path,
            table_state: TableState::default(),
            gesture: None,
            layout: LayoutAreas::default(),
            upload_in_flight: false,
            should_quit: false,
        }
    }

    pub fn field_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Lat => &mut self.lat_input,
            FieldId::Lng => &mut self.lng_input,
            FieldId::Ip => &mut self.target.ip,
            FieldId::Port => &mut self.target.port,
            FieldId::Height => &mut self.target.height,
            FieldId::ImportPath => &mut self.import_path,
        }
    }

    pub fn field(&self, field: FieldId) -> &str {
        match field {
            FieldId::Lat => &self.lat_input,
            FieldId::Lng => &self.lng_input,
            FieldId::Ip => &self.target.ip,
            FieldId::Port => &self.target.port,
            FieldId::Height => &self.target.height,
            FieldId::ImportPath => &self.import_path,
        }
    }

    pub fn is_focused(&self, field: FieldId) -> bool {
        self.focus == Focus::Field(field)
    }

    pub fn latest_notice(&self) -> Option<&NoticeLine> {
        self.notices.back()
    }

    /// Index of the marker drawn at a terminal cell, if any
    pub fn marker_at(&self, column: u16, row: u16) -> Option<usize> {
        let map = self.map.as_ref()?;
        let area = self.layout.map;
        // topmost marker wins, matching draw order
        map.markers.iter().rev().find_map(|marker| {
            let (x, y) = self.viewport.coord_to_cell(area, marker.coord)?;
            (x.abs_diff(column) <= 1 && y == row).then_some(marker.index)
        })
    }

    /// Table row under a terminal cell (header and borders excluded)
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.layout.table;
        let inside = column > area.x
            && column < area.x + area.width.saturating_sub(1)
            && row > area.y + 1
            && row < area.y + area.height.saturating_sub(1);
        if !inside {
            return None;
        }
        let index = usize::from(row - area.y - 2) + self.table_state.offset();
        let rows = self.table.as_ref().map(|t| t.rows.len()).unwrap_or(0);
        (index < rows).then_some(index)
    }

    /// Reorder arrow under a terminal cell, only where the row shows that glyph
    pub fn row_arrow_at(&self, column: u16, row: u16) -> Option<(usize, Step)> {
        let index = self.row_at(column, row)?;
        let arrows = arrows_column(self.layout.table);
        let cells = self.table.as_ref()?.rows.get(index)?;
        if column == arrows.x && cells.can_move_up {
            Some((index, Step::Up))
        } else if column == arrows.x + 1 && cells.can_move_down {
            Some((index, Step::Down))
        } else {
            None
        }
    }
}

impl MissionView for EditorApp {
    fn render_map(&mut self, map: &MapViewModel) {
        if let Some(center) = map.center_on {
            self.viewport.center_on(center);
        }
        self.map = Some(map.clone());
    }

    fn render_table(&mut self, table: &TableViewModel) {
        self.table_state.select(table.selected);
        self.table = Some(table.clone());
    }

    fn render_edit_panel(&mut self, panel: &EditPanelViewModel) {
        self.lat_input = panel.lat.clone();
        self.lng_input = panel.lng.clone();
        self.edit_panel = Some(panel.clone());
    }

    fn notify(&mut self, notice: &Notice) {
        self.notices.push_back(NoticeLine {
            time: Local::now().format("%H:%M:%S").to_string(),
            notice: notice.clone(),
        });
        while self.notices.len() > NOTICE_HISTORY {
            self.notices.pop_front();
        }
    }
}
