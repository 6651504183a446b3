//! TUI views for the mission editor.
//!
//! Stateless Ratatui widgets: each takes references to the view models the
//! controller pushed (plus the bits of local UI state it needs to draw, such
//! as focus or the viewport) and maps them to cells. No mission logic here.

pub mod edit_panel;
pub mod map;
pub mod status_bar;
pub mod table;

pub(crate) use edit_panel::{EditPanelView, UploadPanelView};
pub use map::MapView;
pub(crate) use status_bar::StatusBarView;
pub use table::{arrows_column, waypoint_table};

use ratatui::style::Color;
use waymark_engine::NoticeLevel;

/// Selected marker and table highlight
pub(crate) const SELECTED_COLOR: Color = Color::Rgb(0x0b, 0x6d, 0x40);
/// Unselected markers and the connecting path
pub(crate) const PATH_COLOR: Color = Color::Rgb(0xad, 0x19, 0x2f);

pub(crate) fn notice_level_to_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Success => Color::Green,
        NoticeLevel::Info => Color::Cyan,
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    }
}
