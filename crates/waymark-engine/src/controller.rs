//! Waypoint list controller.
//!
//! Owns the mission state and the views. Every public operation either
//! leaves state untouched (no-op or validation failure) or applies its
//! mutation completely and then redraws all three views from scratch.

use tracing::{debug, warn};
use waymark_types::{Coord, Mode, ModeEvent, SnapshotPoint, UploadRequest, UploadTarget};

use crate::error::{EditError, Result};
use crate::presenter::build_screen;
use crate::selection::{self, Step};
use crate::snapshot;
use crate::state::MissionState;
use crate::view::{MissionView, Notice};

pub struct WaypointController<V: MissionView> {
    state: MissionState,
    view: V,
}

impl<V: MissionView> WaypointController<V> {
    /// Start with an empty mission in `Adding` mode and draw the first frame
    pub fn new(view: V) -> Self {
        let mut controller = Self {
            state: MissionState::new(),
            view,
        };
        controller.sync(None);
        controller
    }

    pub fn state(&self) -> &MissionState {
        &self.state
    }

    pub fn points(&self) -> &[Coord] {
        self.state.points()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Forward a host-side message (e.g. an upload outcome) to the views
    pub fn notify(&mut self, notice: Notice) {
        self.view.notify(&notice);
    }

    pub fn set_mode(&mut self, mode: Mode) {
        let event = match mode {
            Mode::Adding => ModeEvent::StartAdding,
            Mode::Editing => ModeEvent::StartEditing,
        };
        self.apply_mode_event(event);
    }

    pub fn apply_mode_event(&mut self, event: ModeEvent) {
        if self.state.apply_mode(event) {
            debug!(mode = %self.state.mode(), "mode changed");
        }
        self.sync(None);
    }

    /// Insert after `after` when it is a valid index, otherwise append.
    /// The new point becomes the selection.
    pub fn add_point(&mut self, coord: Coord, after: Option<usize>) -> Result<usize> {
        let coord = match Coord::new(coord.lat, coord.lng) {
            Ok(coord) => coord,
            Err(err) => return Err(self.reject(err.into())),
        };
        let index = self.state.insert(coord, after);
        debug!(index, %coord, "point added");
        self.sync(Some(coord));
        Ok(index)
    }

    /// Map click. Only `Adding` places points; the new point goes right
    /// after the current selection.
    pub fn place_point(&mut self, coord: Coord) -> Option<usize> {
        if !self.state.mode().interaction().clicks_place_points {
            return None;
        }
        let after = self.state.selection();
        self.add_point(coord, after).ok()
    }

    /// Delete `index`, or the selected point when `index` is `None`
    pub fn delete_point(&mut self, index: Option<usize>) -> bool {
        let Some(index) = index.or(self.state.selection()) else {
            return false;
        };
        let was_selected = self.state.selection() == Some(index);
        if self.state.remove(index).is_none() {
            return false;
        }
        debug!(index, remaining = self.state.len(), "point deleted");

        let center = if was_selected {
            self.state.selected_point()
        } else {
            None
        };
        self.sync(center);
        true
    }

    /// Splice-move `from` to `to`; the selection keeps pointing at the same
    /// logical point
    pub fn move_point(&mut self, from: usize, to: usize) -> bool {
        if !self.state.relocate(from, to) {
            return false;
        }
        debug!(from, to, "point moved");
        self.sync(self.state.selected_point());
        true
    }

    /// Adjacent reorder used by the table's up/down controls
    pub fn move_step(&mut self, index: usize, step: Step) -> bool {
        match selection::step_target(index, step, self.state.len()) {
            Some(target) => self.move_point(index, target),
            None => false,
        }
    }

    pub fn select(&mut self, index: usize) -> bool {
        if !self.state.select(index) {
            return false;
        }
        self.sync(self.state.selected_point());
        true
    }

    pub fn select_next(&mut self) -> bool {
        let next = match self.state.selection() {
            Some(index) => index + 1,
            None => 0,
        };
        self.select(next)
    }

    pub fn select_previous(&mut self) -> bool {
        match self.state.selection() {
            Some(index) if index > 0 => self.select(index - 1),
            Some(_) => false,
            None => self.select(self.state.len().saturating_sub(1)),
        }
    }

    /// Apply the edit panel. Returns `Ok(false)` when nothing is selected.
    pub fn update_selected_coordinates(&mut self, lat: &str, lng: &str) -> Result<bool> {
        let Some(index) = self.state.selection() else {
            return Ok(false);
        };
        let coord = match Coord::parse(lat, lng) {
            Ok(coord) => coord,
            Err(err) => return Err(self.reject(err.into())),
        };
        self.state.set_coord(index, coord);
        debug!(index, %coord, "selected point updated");
        self.sync(Some(coord));
        Ok(true)
    }

    /// Marker drag. Only honoured while markers are draggable (`Editing`);
    /// the map is not re-centred.
    pub fn drag_point(&mut self, index: usize, coord: Coord) -> bool {
        if !self.state.mode().interaction().markers_draggable {
            return false;
        }
        let Ok(coord) = Coord::new(coord.lat, coord.lng) else {
            return false;
        };
        if !self.state.set_coord(index, coord) {
            return false;
        }
        self.sync(None);
        true
    }

    pub fn clear_all(&mut self) {
        self.state.reset();
        debug!("mission cleared");
        self.sync(None);
    }

    pub fn export_snapshot(&self) -> Vec<SnapshotPoint> {
        snapshot::export_points(self.state.points())
    }

    pub fn export_json(&self) -> Result<String> {
        snapshot::to_json(self.state.points())
    }

    /// Replace the whole list, appending in the supplied order. The mode
    /// is kept; the last imported point ends up selected.
    pub fn import_snapshot(&mut self, points: &[Coord]) -> Result<usize> {
        if let Some(bad) = points.iter().find(|c| !(c.lat.is_finite() && c.lng.is_finite())) {
            let err = EditError::InvalidSnapshot(format!("non-finite coordinate {:?}", bad));
            return Err(self.reject(err));
        }

        self.state.clear_points();
        for coord in points {
            self.state.insert(*coord, None);
        }
        debug!(count = points.len(), "snapshot imported");
        self.sync(self.state.selected_point());
        Ok(points.len())
    }

    /// Validate a whole import document, then replace the list with it.
    /// A malformed document leaves the current mission untouched.
    pub fn import_json(&mut self, text: &str) -> Result<usize> {
        match snapshot::parse_snapshot(text) {
            Ok(points) => self.import_snapshot(&points),
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Build the upload body, refusing an empty mission
    pub fn prepare_upload(&mut self, target: &UploadTarget) -> Result<UploadRequest> {
        if self.state.is_empty() {
            return Err(self.reject(EditError::EmptyMission));
        }
        Ok(UploadRequest::new(self.state.points(), target))
    }

    fn reject(&mut self, err: EditError) -> EditError {
        warn!(error = %err, "operation rejected");
        let notice = match err {
            EditError::EmptyMission => Notice::warning(err.user_message()),
            _ => Notice::error(err.user_message()),
        };
        self.view.notify(&notice);
        err
    }

    fn sync(&mut self, center_on: Option<Coord>) {
        let screen = build_screen(
            self.state.points(),
            self.state.selection(),
            self.state.mode(),
            center_on,
        );
        self.view.render_map(&screen.map);
        self.view.render_table(&screen.table);
        self.view.render_edit_panel(&screen.edit_panel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{FrameRecorder, NoticeLevel};

    fn point(lat: f64, lng: f64) -> Coord {
        Coord::new(lat, lng).unwrap()
    }

    fn controller_with(points: &[(f64, f64)]) -> WaypointController<FrameRecorder> {
        let mut controller = WaypointController::new(FrameRecorder::new());
        for (lat, lng) in points {
            controller.add_point(point(*lat, *lng), None).unwrap();
        }
        controller
    }

    #[test]
    fn test_move_keeps_selected_point() {
        let mut controller = controller_with(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        assert!(controller.select(1));
        assert!(controller.move_point(1, 0));

        assert_eq!(
            controller.points(),
            &[point(1.0, 1.0), point(0.0, 0.0), point(2.0, 2.0)]
        );
        assert_eq!(controller.state().selection(), Some(0));
        assert_eq!(controller.state().selected_point(), Some(point(1.0, 1.0)));
    }

    #[test]
    fn test_delete_selected_first_selects_successor() {
        let mut controller = controller_with(&[(0.0, 0.0), (1.0, 1.0)]);
        controller.select(0);
        assert!(controller.delete_point(Some(0)));

        assert_eq!(controller.points(), &[point(1.0, 1.0)]);
        assert_eq!(controller.state().selection(), Some(0));
        assert_eq!(controller.view().edit_panel().unwrap().lat, "1.00000000");
    }

    #[test]
    fn test_delete_last_remaining_clears_panel() {
        let mut controller = controller_with(&[(0.0, 0.0)]);
        assert!(controller.delete_point(None));
        assert!(controller.state().is_empty());
        assert_eq!(controller.state().selection(), None);
        assert!(controller.view().edit_panel().unwrap().is_cleared());
        assert!(!controller.delete_point(None));
    }

    #[test]
    fn test_place_point_respects_mode() {
        let mut controller = controller_with(&[(0.0, 0.0), (2.0, 2.0)]);
        controller.select(0);
        assert_eq!(controller.place_point(point(1.0, 1.0)), Some(1));
        assert_eq!(controller.points()[1], point(1.0, 1.0));

        controller.set_mode(Mode::Editing);
        assert_eq!(controller.place_point(point(9.0, 9.0)), None);
        assert_eq!(controller.points().len(), 3);
    }

    #[test]
    fn test_drag_only_in_editing() {
        let mut controller = controller_with(&[(0.0, 0.0)]);
        assert!(!controller.drag_point(0, point(5.0, 5.0)));

        controller.set_mode(Mode::Editing);
        assert!(controller.drag_point(0, point(5.0, 5.0)));
        assert_eq!(controller.points()[0], point(5.0, 5.0));
        assert_eq!(controller.view().map().unwrap().center_on, None);
    }

    #[test]
    fn test_invalid_edit_reports_and_keeps_state() {
        let mut controller = controller_with(&[(0.0, 0.0)]);
        let before = controller.state().clone();

        let err = controller.update_selected_coordinates("abc", "1").unwrap_err();
        assert!(matches!(err, EditError::InvalidCoordinate { field: "lat", .. }));
        assert_eq!(controller.state(), &before);

        let notice = controller.view().last_notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Please enter valid latitude and longitude.");
    }

    #[test]
    fn test_update_without_selection_is_noop() {
        let mut controller = WaypointController::new(FrameRecorder::new());
        assert_eq!(controller.update_selected_coordinates("1", "2"), Ok(false));
        assert!(controller.view().notices().is_empty());
    }

    #[test]
    fn test_clear_all_resets_mode_and_selection() {
        let mut controller = controller_with(&[(0.0, 0.0), (1.0, 1.0)]);
        controller.set_mode(Mode::Editing);
        controller.clear_all();

        assert!(controller.state().is_empty());
        assert_eq!(controller.state().mode(), Mode::Adding);
        assert_eq!(controller.state().selection(), None);
        assert!(controller.view().edit_panel().unwrap().is_cleared());
    }

    #[test]
    fn test_empty_upload_is_blocked() {
        let mut controller = WaypointController::new(FrameRecorder::new());
        let err = controller.prepare_upload(&UploadTarget::default()).unwrap_err();
        assert_eq!(err, EditError::EmptyMission);
        assert_eq!(
            controller.view().last_notice().unwrap().message,
            "No points to upload."
        );
    }

    #[test]
    fn test_select_next_previous() {
        let mut controller = controller_with(&[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(controller.state().selection(), Some(1));
        assert!(!controller.select_next());
        assert!(controller.select_previous());
        assert_eq!(controller.state().selection(), Some(0));
        assert!(!controller.select_previous());
    }

    #[test]
    fn test_export_snapshot_reimports_to_same_points() {
        let source = controller_with(&[
            (53.0190701, 20.8802902),
            (-33.8688, 151.2093),
            (0.0, -0.5),
        ]);

        let snapshot = source.export_snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].lat, "53.01907010");
        assert_eq!(snapshot[2].lng, "-0.50000000");

        let coords: Vec<Coord> = snapshot
            .iter()
            .map(|p| Coord::parse(&p.lat, &p.lng).unwrap())
            .collect();
        let mut target = controller_with(&[(1.0, 1.0)]);
        assert_eq!(target.import_snapshot(&coords).unwrap(), 3);

        assert_eq!(target.points(), source.points());
        assert_eq!(target.export_snapshot(), snapshot);
        assert_eq!(target.state().selection(), Some(2));
    }
}
