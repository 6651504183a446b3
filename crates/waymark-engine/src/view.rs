use serde::Serialize;

use crate::view_models::{EditPanelViewModel, MapViewModel, ScreenViewModel, TableViewModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// User-facing message raised by an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }
}

/// The passive views driven by the controller.
///
/// Implementations only draw what they are handed. They never hold mission
/// state of their own and never write back; user intents go through the
/// controller's operations instead.
pub trait MissionView {
    fn render_map(&mut self, map: &MapViewModel);

    fn render_table(&mut self, table: &TableViewModel);

    fn render_edit_panel(&mut self, panel: &EditPanelViewModel);

    fn notify(&mut self, notice: &Notice);
}

/// Headless view that keeps the most recent frame and every notice.
///
/// Used by non-interactive commands and by tests to observe exactly what a
/// real host would have been asked to draw.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    map: Option<MapViewModel>,
    table: Option<TableViewModel>,
    edit_panel: Option<EditPanelViewModel>,
    notices: Vec<Notice>,
    renders: usize,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest complete frame, if all three views have been drawn
    pub fn screen(&self) -> Option<ScreenViewModel> {
        Some(ScreenViewModel {
            map: self.map.clone()?,
            table: self.table.clone()?,
            edit_panel: self.edit_panel.clone()?,
        })
    }

    pub fn map(&self) -> Option<&MapViewModel> {
        self.map.as_ref()
    }

    pub fn table(&self) -> Option<&TableViewModel> {
        self.table.as_ref()
    }

    pub fn edit_panel(&self) -> Option<&EditPanelViewModel> {
        self.edit_panel.as_ref()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Number of full redraws (counted on the map, which is drawn first)
    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl MissionView for FrameRecorder {
    fn render_map(&mut self, map: &MapViewModel) {
        self.renders += 1;
        self.map = Some(map.clone());
    }

    fn render_table(&mut self, table: &TableViewModel) {
        self.table = Some(table.clone());
    }

    fn render_edit_panel(&mut self, panel: &EditPanelViewModel) {
        self.edit_panel = Some(panel.clone());
    }

    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}
