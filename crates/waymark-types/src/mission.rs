use serde::{Deserialize, Serialize};
use std::fmt;

/// Mission commands the receiving service emits for an uploaded mission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionCommand {
    Takeoff,
    Waypoint,
    ReturnToLaunch,
}

impl MissionCommand {
    /// MAVLink `MAV_CMD` identifier
    pub fn id(self) -> u16 {
        match self {
            MissionCommand::Waypoint => 16,
            MissionCommand::ReturnToLaunch => 20,
            MissionCommand::Takeoff => 22,
        }
    }
}

impl fmt::Display for MissionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissionCommand::Takeoff => write!(f, "TAKEOFF"),
            MissionCommand::Waypoint => write!(f, "WAYPOINT"),
            MissionCommand::ReturnToLaunch => write!(f, "RETURN_TO_LAUNCH"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionFrame {
    Mission,
    GlobalRelativeAltInt,
}

impl fmt::Display for MissionFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissionFrame::Mission => write!(f, "MISSION"),
            MissionFrame::GlobalRelativeAltInt => write!(f, "GLOBAL_RELATIVE_ALT"),
        }
    }
}

/// One `MISSION_ITEM_INT`; `x`/`y` are degrees scaled by 1e7
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionItem {
    pub seq: u16,
    pub command: MissionCommand,
    pub command_id: u16,
    pub frame: MissionFrame,
    pub current: bool,
    pub autocontinue: bool,
    pub param1: f32,
    pub param2: f32,
    pub param3: f32,
    pub param4: f32,
    pub x: i32,
    pub y: i32,
    pub z: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionPlan {
    pub height: f32,
    pub items: Vec<MissionItem>,
}

impl MissionPlan {
    pub fn waypoint_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.command == MissionCommand::Waypoint)
            .count()
    }
}
