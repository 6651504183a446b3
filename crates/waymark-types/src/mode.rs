use serde::{Deserialize, Serialize};
use std::fmt;

/// Exclusive interaction mode of the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Map clicks create points; markers are fixed and the map pans
    #[default]
    Adding,
    /// Markers can be dragged; map clicks are ignored and the map is pinned
    Editing,
}

/// Inputs that drive the mode state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEvent {
    StartAdding,
    StartEditing,
    Toggle,
    /// Clear-all puts the editor back into its startup mode
    Reset,
}

/// What the map surface allows in a given mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interaction {
    pub markers_draggable: bool,
    pub map_panning: bool,
    pub clicks_place_points: bool,
}

impl Mode {
    /// The single transition function for mode changes
    pub fn transition(self, event: ModeEvent) -> Mode {
        match (self, event) {
            (_, ModeEvent::StartAdding) | (_, ModeEvent::Reset) => Mode::Adding,
            (_, ModeEvent::StartEditing) => Mode::Editing,
            (Mode::Adding, ModeEvent::Toggle) => Mode::Editing,
            (Mode::Editing, ModeEvent::Toggle) => Mode::Adding,
        }
    }

    pub fn interaction(self) -> Interaction {
        match self {
            Mode::Adding => Interaction {
                markers_draggable: false,
                map_panning: true,
                clicks_place_points: true,
            },
            Mode::Editing => Interaction {
                markers_draggable: true,
                map_panning: false,
                clicks_place_points: false,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Adding => "Add",
            Mode::Editing => "Edit",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Adding => write!(f, "adding"),
            Mode::Editing => write!(f, "editing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        assert_eq!(Mode::Adding.transition(ModeEvent::StartEditing), Mode::Editing);
        assert_eq!(Mode::Editing.transition(ModeEvent::StartAdding), Mode::Adding);
        assert_eq!(Mode::Adding.transition(ModeEvent::Toggle), Mode::Editing);
        assert_eq!(Mode::Editing.transition(ModeEvent::Toggle), Mode::Adding);
        assert_eq!(Mode::Editing.transition(ModeEvent::Reset), Mode::Adding);
        assert_eq!(Mode::Editing.transition(ModeEvent::StartEditing), Mode::Editing);
    }

    #[test]
    fn test_interaction_is_exclusive() {
        let adding = Mode::Adding.interaction();
        assert!(adding.clicks_place_points && adding.map_panning);
        assert!(!adding.markers_draggable);

        let editing = Mode::Editing.interaction();
        assert!(editing.markers_draggable);
        assert!(!editing.clicks_place_points && !editing.map_panning);
    }
}
