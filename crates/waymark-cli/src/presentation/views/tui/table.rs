use ratatui::{
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};
use waymark_engine::TableViewModel;

use super::SELECTED_COLOR;

/// Position, lat, lng, reorder arrows
const TABLE_WIDTHS: [Constraint; 4] = [
    Constraint::Length(4),
    Constraint::Length(13),
    Constraint::Length(13),
    Constraint::Length(2),
];
const COLUMN_SPACING: u16 = 1;

/// Cells holding the ↑/↓ glyphs for a table drawn into `area`; the up
/// arrow is the first column of the returned rect, the down arrow the second.
pub fn arrows_column(area: Rect) -> Rect {
    let inner = area.inner(Margin::new(1, 1));
    Layout::horizontal(TABLE_WIDTHS)
        .spacing(COLUMN_SPACING)
        .flex(Flex::Start)
        .split(inner)[3]
}

/// Waypoint table; render with the app's `TableState` so the selection
/// row stays scrolled into view. `drag_from` marks a row being dragged.
pub fn waypoint_table(model: &TableViewModel, drag_from: Option<usize>) -> Table<'static> {
    let header = Row::new(vec!["#", "Lat", "Lng", ""])
        .style(Style::default().add_modifier(Modifier::BOLD | Modifier::DIM));

    let rows: Vec<Row> = model
        .rows
        .iter()
        .map(|row| {
            let arrows = format!(
                "{}{}",
                if row.can_move_up { "↑" } else { " " },
                if row.can_move_down { "↓" } else { " " }
            );
            let mut style = Style::default();
            if drag_from == Some(row.index) {
                style = style.fg(Color::Yellow).add_modifier(Modifier::ITALIC);
            }
            Row::new(vec![
                Cell::from(row.position.to_string()),
                Cell::from(row.lat.clone()),
                Cell::from(row.lng.clone()),
                Cell::from(Line::from(arrows).style(Style::default().fg(Color::DarkGray))),
            ])
            .style(style)
        })
        .collect();

    let title = format!(" Points ({}) ", model.rows.len());

    Table::new(rows, TABLE_WIDTHS)
        .column_spacing(COLUMN_SPACING)
        .flex(Flex::Start)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL))
        .row_highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(SELECTED_COLOR)
                .add_modifier(Modifier::BOLD),
        )
}
