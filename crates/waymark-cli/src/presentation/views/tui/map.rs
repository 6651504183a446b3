//! Map surface: markers with order badges, the connecting path, the popup
//! of the selected point and a crosshair at the viewport centre.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Widget,
        canvas::{Canvas, Line as CanvasLine},
    },
};
use waymark_engine::MapViewModel;

use super::{PATH_COLOR, SELECTED_COLOR};
use crate::presentation::renderers::tui::viewport::Viewport;

pub struct MapView<'a> {
    model: &'a MapViewModel,
    viewport: &'a Viewport,
    focused: bool,
}

impl<'a> MapView<'a> {
    pub fn new(model: &'a MapViewModel, viewport: &'a Viewport, focused: bool) -> Self {
        Self {
            model,
            viewport,
            focused,
        }
    }

    pub fn block(&self) -> Block<'static> {
        let mode = if self.model.interaction.clicks_place_points {
            "Add"
        } else {
            "Edit"
        };
        let border = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::default()
            .title(format!(
                " Map · {} mode · z{} ",
                mode,
                self.viewport.zoom()
            ))
            .borders(Borders::ALL)
            .border_style(border)
    }
}

impl<'a> Widget for MapView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let bounds = self.viewport.bounds(inner);
        let lng_per_cell = (bounds.lng_max - bounds.lng_min) / f64::from(inner.width);
        let center = self.viewport.center();
        let model = self.model;

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([bounds.lng_min, bounds.lng_max])
            .y_bounds([bounds.lat_min, bounds.lat_max])
            .paint(move |ctx| {
                if let Some(path) = &model.path {
                    for pair in path.windows(2) {
                        ctx.draw(&CanvasLine {
                            x1: pair[0].lng,
                            y1: pair[0].lat,
                            x2: pair[1].lng,
                            y2: pair[1].lat,
                            color: PATH_COLOR,
                        });
                    }
                }
                ctx.layer();

                ctx.print(
                    center.lng,
                    center.lat,
                    Span::styled("+", Style::default().fg(Color::DarkGray)),
                );

                for marker in &model.markers {
                    let color = if marker.selected {
                        SELECTED_COLOR
                    } else {
                        PATH_COLOR
                    };
                    let mut style = Style::default().fg(color);
                    if marker.draggable {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    ctx.print(marker.coord.lng, marker.coord.lat, Span::styled("●", style));
                    ctx.print(
                        marker.coord.lng + lng_per_cell,
                        marker.coord.lat,
                        Span::styled(
                            marker.order.to_string(),
                            Style::default().fg(Color::White).bg(color),
                        ),
                    );
                }
            });
        canvas.render(inner, buf);

        self.render_popup(inner, buf);
    }
}

impl<'a> MapView<'a> {
    fn render_popup(&self, inner: Rect, buf: &mut Buffer) {
        let Some(popup) = &self.model.popup else {
            return;
        };
        let Some((column, row)) = self.viewport.coord_to_cell(inner, popup.coord) else {
            return;
        };

        let width = popup
            .lines
            .iter()
            .map(|line| line.chars().count() as u16)
            .max()
            .unwrap_or(0)
            + 2;
        let height = popup.lines.len() as u16 + 2;

        // above the marker when there is room, otherwise below
        let y = if row >= inner.y + height {
            row - height
        } else {
            row + 1
        };
        let x = column
            .saturating_sub(width / 2)
            .max(inner.x)
            .min((inner.x + inner.width).saturating_sub(width));
        let rect = Rect::new(x, y, width, height).intersection(inner);
        if rect.width < 3 || rect.height < 3 {
            return;
        }

        let lines: Vec<Line> = popup
            .lines
            .iter()
            .enumerate()
            .map(|(i, text)| {
                if i == 0 {
                    Line::from(Span::styled(
                        text.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(text.clone())
                }
            })
            .collect();

        Clear.render(rect, buf);
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(SELECTED_COLOR)),
            )
            .render(rect, buf);
    }
}
