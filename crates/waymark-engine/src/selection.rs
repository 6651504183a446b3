//! Selection re-targeting rules.
//!
//! Selection is an index into the mission list or `None`. Every structural
//! change to the list goes through one of these functions so that the
//! selection keeps pointing at the same logical waypoint.

/// Index of the selected waypoint, if any
pub type Selection = Option<usize>;

/// Direction of an adjacent reorder (table up/down buttons)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

impl Step {
    pub fn from_offset(offset: i32) -> Option<Step> {
        match offset {
            -1 => Some(Step::Up),
            1 => Some(Step::Down),
            _ => None,
        }
    }
}

/// Slot a new point lands in: right after `after` when that is a valid
/// index, otherwise the end of the list
pub fn insertion_index(after: Option<usize>, len: usize) -> usize {
    match after {
        Some(index) if index < len => index + 1,
        _ => len,
    }
}

/// Selection after removing `removed`, with `remaining` points left.
///
/// A removed selection moves to the point that followed it, or to the new
/// last point when the removed one was last.
pub fn after_remove(selection: Selection, removed: usize, remaining: usize) -> Selection {
    let s = selection?;
    if s == removed {
        if remaining == 0 {
            None
        } else {
            Some(removed.min(remaining - 1))
        }
    } else if s > removed {
        Some(s - 1)
    } else {
        Some(s)
    }
}

/// Selection after a splice move of `from` to `to` (remove, then insert)
pub fn after_move(selection: Selection, from: usize, to: usize) -> Selection {
    let s = selection?;
    let moved = if s == from {
        to
    } else if from < s && s <= to {
        s - 1
    } else if to <= s && s < from {
        s + 1
    } else {
        s
    };
    Some(moved)
}

/// Target of an adjacent step, or `None` when it would leave the list
pub fn step_target(index: usize, step: Step, len: usize) -> Option<usize> {
    let target = match step {
        Step::Up => index.checked_sub(1)?,
        Step::Down => index + 1,
    };
    (target < len).then_some(target)
}
