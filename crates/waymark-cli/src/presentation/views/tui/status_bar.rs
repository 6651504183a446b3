use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::notice_level_to_color;
use crate::presentation::renderers::tui::app::{EditorApp, Focus};

const MAP_HINTS: &str = "a add · e edit · m toggle · ⏎ place · [ ] select · K/J move · ⌫ delete · x export · i import · C clear · u upload · Tab fields · q quit";
const FIELD_HINTS: &str = "⏎ apply · Tab next · Esc map";

/// Last notice on the first line, key hints on the second
pub(crate) struct StatusBarView<'a> {
    app: &'a EditorApp,
}

impl<'a> StatusBarView<'a> {
    pub(crate) fn new(app: &'a EditorApp) -> Self {
        Self { app }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let notice_line = match self.app.latest_notice() {
            Some(line) => Line::from(vec![
                Span::styled(
                    format!("[{}] ", line.time),
                    Style::default().add_modifier(Modifier::DIM),
                ),
                Span::styled(
                    line.notice.message.as_str(),
                    Style::default().fg(notice_level_to_color(line.notice.level)),
                ),
            ]),
            None => Line::from(Span::styled(
                "Click the map to add waypoints.",
                Style::default().add_modifier(Modifier::DIM),
            )),
        };

        let hints = match self.app.focus {
            Focus::Map => MAP_HINTS,
            Focus::Field(_) => FIELD_HINTS,
        };

        Paragraph::new(vec![
            notice_line,
            Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
        ])
        .render(area, buf);
    }
}
