use waymark_types::{Coord, Mode, ModeEvent};

use crate::selection::{self, Selection};

/// The single source of truth: ordered waypoints, selection and mode.
///
/// Only the controller mutates it. Every structural change re-targets the
/// selection through the rules in [`crate::selection`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissionState {
    points: Vec<Coord>,
    selection: Selection,
    mode: Mode,
}

impl MissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_point(&self) -> Option<Coord> {
        self.selection.and_then(|index| self.points.get(index).copied())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub(crate) fn apply_mode(&mut self, event: ModeEvent) -> bool {
        let next = self.mode.transition(event);
        let changed = next != self.mode;
        self.mode = next;
        changed
    }

    /// Insert after `after` (or append) and select the new point
    pub(crate) fn insert(&mut self, coord: Coord, after: Option<usize>) -> usize {
        let index = selection::insertion_index(after, self.points.len());
        self.points.insert(index, coord);
        self.selection = Some(index);
        index
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<Coord> {
        if index >= self.points.len() {
            return None;
        }
        let removed = self.points.remove(index);
        self.selection = selection::after_remove(self.selection, index, self.points.len());
        Some(removed)
    }

    pub(crate) fn relocate(&mut self, from: usize, to: usize) -> bool {
        let len = self.points.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let point = self.points.remove(from);
        self.points.insert(to, point);
        self.selection = selection::after_move(self.selection, from, to);
        true
    }

    pub(crate) fn set_coord(&mut self, index: usize, coord: Coord) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = coord;
                true
            }
            None => false,
        }
    }

    pub(crate) fn select(&mut self, index: usize) -> bool {
        if index >= self.points.len() {
            return false;
        }
        self.selection = Some(index);
        true
    }

    pub(crate) fn clear_points(&mut self) {
        self.points.clear();
        self.selection = None;
    }

    /// Empty list, no selection, startup mode
    pub(crate) fn reset(&mut self) {
        self.clear_points();
        self.apply_mode(ModeEvent::Reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(v: f64) -> Coord {
        Coord::new(v, v).unwrap()
    }

    #[test]
    fn test_insert_after_and_append() {
        let mut state = MissionState::new();
        state.insert(point(0.0), None);
        state.insert(point(2.0), None);
        let index = state.insert(point(1.0), Some(0));

        assert_eq!(index, 1);
        assert_eq!(state.points(), &[point(0.0), point(1.0), point(2.0)]);
        assert_eq!(state.selection(), Some(1));

        let index = state.insert(point(3.0), Some(99));
        assert_eq!(index, 3);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut state = MissionState::new();
        state.insert(point(0.0), None);
        assert_eq!(state.remove(5), None);
        assert_eq!(state.len(), 1);
        assert_eq!(state.selection(), Some(0));
    }

    #[test]
    fn test_relocate_rejects_degenerate_moves() {
        let mut state = MissionState::new();
        state.insert(point(0.0), None);
        state.insert(point(1.0), None);
        assert!(!state.relocate(0, 0));
        assert!(!state.relocate(0, 2));
        assert!(!state.relocate(3, 0));
        assert!(state.relocate(1, 0));
        assert_eq!(state.points(), &[point(1.0), point(0.0)]);
        assert_eq!(state.selection(), Some(0));
    }

    #[test]
    fn test_reset_restores_startup_state() {
        let mut state = MissionState::new();
        state.insert(point(0.0), None);
        state.apply_mode(ModeEvent::StartEditing);
        state.reset();
        assert_eq!(state, MissionState::new());
    }
}
