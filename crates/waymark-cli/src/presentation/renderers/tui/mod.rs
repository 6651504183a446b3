pub(crate) mod app;
mod ui;
pub mod viewport;

use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;
use tracing::{debug, info};
use waymark_engine::{Notice, Step, WaypointController};
use waymark_runtime::{MapConfig, UploadClient, UploadReport, export_to, import_from, spawn_upload};
use waymark_types::{Mode, ModeEvent, UploadTarget};

use app::{EditorApp, FieldId, Focus, Gesture};
use viewport::Viewport;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const KEY_PAN_CELLS: i32 = 4;

pub struct EditorOptions {
    pub initial_file: Option<PathBuf>,
    pub target: UploadTarget,
    pub map: MapConfig,
    pub export_path: PathBuf,
    pub client: UploadClient,
}

/// Open the editor on the alternate screen and block until the user quits
pub fn run(options: EditorOptions) -> Result<()> {
    let mut editor = Editor::new(options);

    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        TerminalGuard::restore();
        std::process::exit(0);
    })?;

    editor.event_loop(&mut terminal)
}

/// Raw mode, alternate screen and mouse capture for the editor's lifetime
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }

    fn restore() {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        Self::restore();
    }
}

struct Editor {
    controller: WaypointController<EditorApp>,
    client: UploadClient,
    export_path: PathBuf,
    tx: Sender<UploadReport>,
    rx: Receiver<UploadReport>,
}

impl Editor {
    fn new(options: EditorOptions) -> Self {
        let viewport = Viewport::new(options.map.center(), options.map.zoom);
        let import_path = options
            .initial_file
            .as_ref()
            .unwrap_or(&options.export_path)
            .display()
            .to_string();
        let app = EditorApp::new(viewport, options.target, import_path);
        let (tx, rx) = mpsc::channel();

        let mut editor = Self {
            controller: WaypointController::new(app),
            client: options.client,
            export_path: options.export_path,
            tx,
            rx,
        };
        if let Some(path) = &options.initial_file {
            editor.import(path);
        }
        editor
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.controller.view().should_quit {
            let endpoint = self.client.url();
            let app = self.controller.view_mut();
            terminal.draw(|f| ui::draw(f, app, endpoint))?;

            self.poll_uploads();

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }
        }
        info!("editor closed");
        Ok(())
    }

    fn app(&self) -> &EditorApp {
        self.controller.view()
    }

    fn app_mut(&mut self) -> &mut EditorApp {
        self.controller.view_mut()
    }

    // ------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.app_mut().should_quit = true;
            return;
        }
        match self.app().focus {
            Focus::Map => self.handle_map_key(key),
            Focus::Field(field) => self.handle_field_key(field, key),
        }
    }

    fn handle_map_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.app_mut().should_quit = true,
            KeyCode::Char('a') => self.controller.set_mode(Mode::Adding),
            KeyCode::Char('e') => self.controller.set_mode(Mode::Editing),
            KeyCode::Char('m') => self.controller.apply_mode_event(ModeEvent::Toggle),
            KeyCode::Enter => {
                let center = self.app().viewport.center();
                if self.controller.place_point(center).is_none() {
                    self.controller
                        .notify(Notice::info("Press a to switch to Add mode first."));
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.app_mut().viewport.zoom_in(),
            KeyCode::Char('-') => self.app_mut().viewport.zoom_out(),
            KeyCode::Char('[') => {
                self.controller.select_previous();
            }
            KeyCode::Char(']') => {
                self.controller.select_next();
            }
            KeyCode::Char('K') => self.step_selected(Step::Up),
            KeyCode::Char('J') => self.step_selected(Step::Down),
            KeyCode::Delete | KeyCode::Backspace => {
                self.controller.delete_point(None);
            }
            KeyCode::Char('x') => self.export(),
            KeyCode::Char('i') => self.app_mut().focus = Focus::Field(FieldId::ImportPath),
            KeyCode::Char('C') => self.controller.clear_all(),
            KeyCode::Char('u') => self.upload(),
            KeyCode::Tab => self.app_mut().focus = Focus::Field(FieldId::Lat),
            KeyCode::Left => self.arrow(-1, 0),
            KeyCode::Right => self.arrow(1, 0),
            KeyCode::Up => self.arrow(0, -1),
            KeyCode::Down => self.arrow(0, 1),
            _ => {}
        }
    }

    fn step_selected(&mut self, step: Step) {
        if let Some(index) = self.controller.state().selection() {
            self.controller.move_step(index, step);
        }
    }

    /// Editing nudges the selected point; otherwise arrows pan the map
    fn arrow(&mut self, dx: i32, dy: i32) {
        let state = self.controller.state();
        if state.mode() == Mode::Editing {
            if let (Some(index), Some(point)) = (state.selection(), state.selected_point()) {
                let moved = self.app().viewport.nudge(point, dx, dy);
                self.controller.drag_point(index, moved);
            }
            return;
        }
        if state.mode().interaction().map_panning {
            self.app_mut()
                .viewport
                .pan_cells(dx * KEY_PAN_CELLS, dy * KEY_PAN_CELLS / 2);
        }
    }

    fn handle_field_key(&mut self, field: FieldId, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.leave_fields(),
            KeyCode::Tab => match field.next() {
                Some(next) => self.app_mut().focus = Focus::Field(next),
                None => self.leave_fields(),
            },
            KeyCode::Enter => self.submit_field(field),
            KeyCode::Backspace => {
                self.app_mut().field_mut(field).pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.app_mut().field_mut(field).push(c);
            }
            _ => {}
        }
    }

    /// Back to the map, dropping unapplied coordinate edits
    fn leave_fields(&mut self) {
        let app = self.app_mut();
        app.focus = Focus::Map;
        if let Some(panel) = &app.edit_panel {
            app.lat_input = panel.lat.clone();
            app.lng_input = panel.lng.clone();
        }
    }

    fn submit_field(&mut self, field: FieldId) {
        match field {
            FieldId::Lat | FieldId::Lng => {
                let lat = self.app().lat_input.clone();
                let lng = self.app().lng_input.clone();
                if let Ok(false) = self.controller.update_selected_coordinates(&lat, &lng) {
                    self.controller
                        .notify(Notice::info("Select a point to edit its coordinates."));
                }
            }
            FieldId::ImportPath => {
                let path = PathBuf::from(self.app().import_path.trim());
                self.app_mut().focus = Focus::Map;
                self.import(&path);
            }
            FieldId::Ip | FieldId::Port | FieldId::Height => {
                self.app_mut().focus = match field.next() {
                    Some(next) => Focus::Field(next),
                    None => Focus::Map,
                };
            }
        }
    }

    // ------------------------------------------------------------------
    // Mouse
    // ------------------------------------------------------------------

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        let in_map = self.app().viewport.cell_to_coord(self.app().layout.map, column, row);
        let gesture = self.app().gesture;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some((index, step)) = self.app().row_arrow_at(column, row) {
                    self.controller.move_step(index, step);
                } else if let Some(index) = self.app().row_at(column, row) {
                    self.controller.select(index);
                    self.app_mut().gesture = Some(Gesture::RowDrag { index });
                } else if in_map.is_some() {
                    self.app_mut().focus = Focus::Map;
                    if let Some(index) = self.app().marker_at(column, row) {
                        self.controller.select(index);
                        if self.controller.state().mode().interaction().markers_draggable {
                            self.app_mut().gesture = Some(Gesture::MarkerDrag { index });
                        }
                    } else {
                        self.app_mut().gesture = Some(Gesture::MapPress {
                            column,
                            row,
                            moved: false,
                        });
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => match gesture {
                Some(Gesture::MarkerDrag { index }) => {
                    if let Some(coord) = in_map {
                        self.controller.drag_point(index, coord);
                    }
                }
                Some(Gesture::MapPress {
                    column: last_column,
                    row: last_row,
                    ..
                }) => {
                    let panning = self.controller.state().mode().interaction().map_panning;
                    let app = self.app_mut();
                    if panning {
                        app.viewport.pan_cells(
                            i32::from(last_column) - i32::from(column),
                            i32::from(last_row) - i32::from(row),
                        );
                    }
                    app.gesture = Some(Gesture::MapPress {
                        column,
                        row,
                        moved: true,
                    });
                }
                _ => {}
            },
            MouseEventKind::Up(MouseButton::Left) => match self.app_mut().gesture.take() {
                Some(Gesture::MapPress { moved: false, .. }) => {
                    if let Some(coord) = in_map {
                        self.controller.place_point(coord);
                    }
                }
                Some(Gesture::RowDrag { index }) => {
                    if let Some(target) = self.app().row_at(column, row)
                        && target != index
                    {
                        self.controller.move_point(index, target);
                    }
                }
                _ => {}
            },
            MouseEventKind::ScrollUp if in_map.is_some() => self.app_mut().viewport.zoom_in(),
            MouseEventKind::ScrollDown if in_map.is_some() => self.app_mut().viewport.zoom_out(),
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Files and upload
    // ------------------------------------------------------------------

    fn export(&mut self) {
        let count = self.controller.points().len();
        match export_to(&self.controller, &self.export_path) {
            Ok(path) => self.controller.notify(Notice::success(format!(
                "Exported {} point(s) to {}",
                count,
                path.display()
            ))),
            Err(err) => self
                .controller
                .notify(Notice::error(format!("Export failed: {}", err))),
        }
    }

    fn import(&mut self, path: &Path) {
        match import_from(&mut self.controller, path) {
            Ok(count) => self.controller.notify(Notice::success(format!(
                "Imported {} point(s) from {}",
                count,
                path.display()
            ))),
            // the controller already reported the rejected document
            Err(waymark_runtime::Error::Edit(_)) => {}
            Err(err) => self.controller.notify(Notice::error(format!(
                "Could not read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    fn upload(&mut self) {
        if self.app().upload_in_flight {
            self.controller
                .notify(Notice::info("An upload is already in progress."));
            return;
        }

        let target = self.app().target.clone();
        let Ok(request) = self.controller.prepare_upload(&target) else {
            return;
        };

        debug!(waypoints = request.data.len(), "starting upload");
        self.controller.notify(Notice::info(format!(
            "Uploading {} point(s) to {}…",
            request.data.len(),
            self.client.url()
        )));
        self.app_mut().upload_in_flight = true;
        spawn_upload(self.client.clone(), request, self.tx.clone());
    }

    fn poll_uploads(&mut self) {
        while let Ok(report) = self.rx.try_recv() {
            let message = report.outcome.message();
            let notice = if report.outcome.is_success() {
                Notice::success(message)
            } else {
                Notice::error(message)
            };
            self.controller.notify(notice);

            let app = self.app_mut();
            app.upload_in_flight = false;
            if let Some(line) = app.notices.back_mut() {
                line.time = report
                    .finished_at
                    .with_timezone(&Local)
                    .format("%H:%M:%S")
                    .to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use waymark_types::Coord;

    const MAP: Rect = Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 30,
    };
    const TABLE: Rect = Rect {
        x: 60,
        y: 0,
        width: 40,
        height: 20,
    };

    fn editor() -> Editor {
        let mut editor = Editor::new(EditorOptions {
            initial_file: None,
            target: UploadTarget::default(),
            map: MapConfig::default(),
            export_path: PathBuf::from("points.json"),
            client: UploadClient::for_url("http://127.0.0.1:9/upload", 1).unwrap(),
        });
        editor.app_mut().layout.map = MAP;
        editor.app_mut().layout.table = TABLE;
        editor
    }

    fn mouse(editor: &mut Editor, kind: MouseEventKind, column: u16, row: u16) {
        editor.handle_mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn click(editor: &mut Editor, column: u16, row: u16) {
        mouse(editor, MouseEventKind::Down(MouseButton::Left), column, row);
        mouse(editor, MouseEventKind::Up(MouseButton::Left), column, row);
    }

    fn key(editor: &mut Editor, c: char) {
        editor.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    fn with_points(lats: &[f64]) -> (Editor, Vec<Coord>) {
        let mut editor = editor();
        let points: Vec<Coord> = lats.iter().map(|&lat| Coord::new(lat, 20.0).unwrap()).collect();
        for point in &points {
            editor.controller.add_point(*point, None).unwrap();
        }
        (editor, points)
    }

    #[test]
    fn test_map_click_places_point_when_adding() {
        let mut editor = editor();
        let target = editor.app().viewport.cell_to_coord(MAP, 20, 10).unwrap();

        click(&mut editor, 20, 10);

        assert_eq!(editor.controller.points(), &[target]);
        assert_eq!(editor.controller.state().selection(), Some(0));
        assert_eq!(editor.app().gesture, None);
    }

    #[test]
    fn test_map_press_then_move_pans_instead_of_placing() {
        let mut editor = editor();
        let before = editor.app().viewport.center();

        mouse(&mut editor, MouseEventKind::Down(MouseButton::Left), 20, 10);
        mouse(&mut editor, MouseEventKind::Drag(MouseButton::Left), 26, 10);
        mouse(&mut editor, MouseEventKind::Up(MouseButton::Left), 26, 10);

        assert!(editor.controller.points().is_empty());
        assert!(editor.app().viewport.center().lng < before.lng);
    }

    #[test]
    fn test_map_click_in_editing_does_not_place() {
        let mut editor = editor();
        key(&mut editor, 'e');

        click(&mut editor, 20, 10);

        assert!(editor.controller.points().is_empty());
    }

    #[test]
    fn test_marker_drag_moves_point_when_editing() {
        let mut editor = editor();
        click(&mut editor, 20, 10);
        key(&mut editor, 'e');

        // placing re-centres the map on the new marker
        let placed = editor.controller.points()[0];
        let (column, row) = editor.app().viewport.coord_to_cell(MAP, placed).unwrap();
        let target = editor.app().viewport.cell_to_coord(MAP, 10, 5).unwrap();

        mouse(&mut editor, MouseEventKind::Down(MouseButton::Left), column, row);
        assert_eq!(editor.app().gesture, Some(Gesture::MarkerDrag { index: 0 }));
        mouse(&mut editor, MouseEventKind::Drag(MouseButton::Left), 10, 5);
        mouse(&mut editor, MouseEventKind::Up(MouseButton::Left), 10, 5);

        assert_eq!(editor.controller.points(), &[target]);
        assert_eq!(editor.app().gesture, None);
    }

    #[test]
    fn test_marker_press_when_adding_selects_without_drag() {
        let mut editor = editor();
        click(&mut editor, 20, 10);
        click(&mut editor, 40, 20);
        let first = editor.controller.points()[0];
        let (column, row) = editor.app().viewport.coord_to_cell(MAP, first).unwrap();

        mouse(&mut editor, MouseEventKind::Down(MouseButton::Left), column, row);

        assert_eq!(editor.controller.state().selection(), Some(0));
        assert_eq!(editor.app().gesture, None);
        assert_eq!(editor.controller.points().len(), 2);
    }

    #[test]
    fn test_row_drag_moves_point_and_selection() {
        let (mut editor, points) = with_points(&[53.0, 53.1, 53.2]);

        // first data row sits below the border and header
        mouse(&mut editor, MouseEventKind::Down(MouseButton::Left), 62, 2);
        assert_eq!(editor.app().gesture, Some(Gesture::RowDrag { index: 0 }));
        mouse(&mut editor, MouseEventKind::Up(MouseButton::Left), 62, 4);

        assert_eq!(editor.controller.points(), &[points[1], points[2], points[0]]);
        assert_eq!(editor.controller.state().selection(), Some(2));
    }

    #[test]
    fn test_row_release_on_same_row_only_selects() {
        let (mut editor, points) = with_points(&[53.0, 53.1, 53.2]);

        click(&mut editor, 62, 3);

        assert_eq!(editor.controller.points(), points.as_slice());
        assert_eq!(editor.controller.state().selection(), Some(1));
    }

    #[test]
    fn test_arrow_click_steps_row() {
        let (mut editor, points) = with_points(&[53.0, 53.1, 53.2]);

        // ↓ on the first row
        click(&mut editor, 95, 2);
        assert_eq!(editor.controller.points(), &[points[1], points[0], points[2]]);
        assert_eq!(editor.app().gesture, None);

        // ↑ on the last row
        click(&mut editor, 94, 4);
        assert_eq!(editor.controller.points(), &[points[1], points[2], points[0]]);

        // the first row has no ↑
        click(&mut editor, 94, 2);
        assert_eq!(editor.controller.points(), &[points[1], points[2], points[0]]);
    }

    #[test]
    fn test_mode_toggle_key() {
        let mut editor = editor();
        assert_eq!(editor.controller.state().mode(), Mode::Adding);

        key(&mut editor, 'm');
        assert_eq!(editor.controller.state().mode(), Mode::Editing);
        assert_eq!(editor.app().edit_panel.as_ref().map(|p| p.mode), Some(Mode::Editing));

        key(&mut editor, 'm');
        assert_eq!(editor.controller.state().mode(), Mode::Adding);
    }

    #[test]
    fn test_arrow_keys_nudge_selected_point_when_editing() {
        let (mut editor, points) = with_points(&[53.0]);
        key(&mut editor, 'e');

        editor.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));

        let moved = editor.controller.points()[0];
        assert!(moved.lat > points[0].lat);
        assert_eq!(moved.lng, points[0].lng);
    }
}
