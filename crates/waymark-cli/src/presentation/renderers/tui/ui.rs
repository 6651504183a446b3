use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::{EditorApp, Focus, Gesture};
use crate::presentation::views::tui::{
    EditPanelView, MapView, StatusBarView, UploadPanelView, waypoint_table,
};

pub(crate) fn draw(f: &mut Frame, app: &mut EditorApp, endpoint: &str) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[0]);

    let side = Layout::vertical([
        Constraint::Min(5),
        Constraint::Length(5),
        Constraint::Length(6),
    ])
    .split(columns[1]);

    if let Some(map) = &app.map {
        let view = MapView::new(map, &app.viewport, app.focus == Focus::Map);
        app.layout.map = view.block().inner(columns[0]);
        f.render_widget(view, columns[0]);
    }

    app.layout.table = side[0];
    if let Some(table) = &app.table {
        let drag_from = match app.gesture {
            Some(Gesture::RowDrag { index }) => Some(index),
            _ => None,
        };
        let widget = waypoint_table(table, drag_from);
        f.render_stateful_widget(widget, side[0], &mut app.table_state);
    }

    if let Some(panel) = &app.edit_panel {
        f.render_widget(EditPanelView::new(panel, app), side[1]);
    }
    f.render_widget(UploadPanelView::new(app, endpoint), side[2]);
    f.render_widget(StatusBarView::new(app), rows[1]);
}
