use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use waymark_engine::EditPanelViewModel;
use waymark_types::Mode;

use crate::presentation::renderers::tui::app::{EditorApp, FieldId};

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let label_style = Style::default().add_modifier(Modifier::DIM);
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default()
    };
    let mut spans = vec![
        Span::styled(format!("{:<8}", label), label_style),
        Span::styled(value, value_style),
    ];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn mode_span(mode: Mode, active: Mode) -> Span<'static> {
    let text = format!(" {} ", mode.label());
    if mode == active {
        Span::styled(
            text,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(text, Style::default().fg(Color::DarkGray))
    }
}

/// Selected point fields plus the mode control
pub(crate) struct EditPanelView<'a> {
    model: &'a EditPanelViewModel,
    app: &'a EditorApp,
}

impl<'a> EditPanelView<'a> {
    pub(crate) fn new(model: &'a EditPanelViewModel, app: &'a EditorApp) -> Self {
        Self { model, app }
    }
}

impl<'a> Widget for EditPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.model.selected {
            Some(index) => format!(" Point {} ", index + 1),
            None => " No point selected ".to_string(),
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("Mode    ", Style::default().add_modifier(Modifier::DIM)),
                mode_span(Mode::Adding, self.model.mode),
                Span::raw(" "),
                mode_span(Mode::Editing, self.model.mode),
            ]),
            field_line(
                "Lat",
                self.app.field(FieldId::Lat),
                self.app.is_focused(FieldId::Lat),
            ),
            field_line(
                "Lng",
                self.app.field(FieldId::Lng),
                self.app.is_focused(FieldId::Lng),
            ),
        ];

        Paragraph::new(lines)
            .block(Block::default().title(title).borders(Borders::ALL))
            .render(area, buf);
    }
}

/// Upload target fields and the import prompt
pub(crate) struct UploadPanelView<'a> {
    app: &'a EditorApp,
    endpoint: &'a str,
}

impl<'a> UploadPanelView<'a> {
    pub(crate) fn new(app: &'a EditorApp, endpoint: &'a str) -> Self {
        Self { app, endpoint }
    }
}

impl<'a> Widget for UploadPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let app = self.app;
        let mut lines = vec![
            field_line("IP", app.field(FieldId::Ip), app.is_focused(FieldId::Ip)),
            field_line("Port", app.field(FieldId::Port), app.is_focused(FieldId::Port)),
            field_line(
                "Height",
                app.field(FieldId::Height),
                app.is_focused(FieldId::Height),
            ),
        ];

        if app.is_focused(FieldId::ImportPath) {
            lines.push(field_line("Import", app.field(FieldId::ImportPath), true));
        } else if app.upload_in_flight {
            lines.push(Line::from(Span::styled(
                "Uploading…",
                Style::default().fg(Color::Yellow),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                self.endpoint,
                Style::default().fg(Color::DarkGray),
            )));
        }

        Paragraph::new(lines)
            .block(Block::default().title(" Upload ").borders(Borders::ALL))
            .render(area, buf);
    }
}
