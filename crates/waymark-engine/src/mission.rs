//! Mission plan preview: the item sequence the receiving service builds
//! from an upload (takeoff, one waypoint per point, return to launch).

use waymark_types::{Coord, MissionCommand, MissionFrame, MissionItem, MissionPlan};

use crate::error::{EditError, Result};

pub fn parse_height(input: &str) -> Result<f32> {
    let height: f32 = input
        .trim()
        .parse()
        .map_err(|_| EditError::InvalidHeight(input.to_string()))?;
    if !height.is_finite() || height < 0.0 {
        return Err(EditError::InvalidHeight(input.to_string()));
    }
    Ok(height)
}

pub fn build_mission_plan(points: &[Coord], height: &str) -> Result<MissionPlan> {
    if points.is_empty() {
        return Err(EditError::EmptyMission);
    }
    let height = parse_height(height)?;

    let mut items = Vec::with_capacity(points.len() + 2);
    items.push(item(MissionCommand::Takeoff, MissionFrame::GlobalRelativeAltInt, 0, 0, height));
    for coord in points {
        items.push(item(
            MissionCommand::Waypoint,
            MissionFrame::GlobalRelativeAltInt,
            scale("latitude", coord.lat)?,
            scale("longitude", coord.lng)?,
            height,
        ));
    }
    items.push(item(MissionCommand::ReturnToLaunch, MissionFrame::Mission, 0, 0, 0.0));

    for (seq, item) in items.iter_mut().enumerate() {
        item.seq = u16::try_from(seq).map_err(|_| {
            EditError::MissionOutOfRange(format!("{} items exceed the mission item limit", points.len() + 2))
        })?;
    }

    Ok(MissionPlan { height, items })
}

/// Degrees as 1e7-scaled integers; values that do not fit an i32 are refused
fn scale(field: &str, degrees: f64) -> Result<i32> {
    let scaled = (degrees * 1e7).round();
    if scaled < f64::from(i32::MIN) || scaled > f64::from(i32::MAX) {
        return Err(EditError::MissionOutOfRange(format!(
            "{} {} cannot be encoded",
            field, degrees
        )));
    }
    Ok(scaled as i32)
}

fn item(command: MissionCommand, frame: MissionFrame, x: i32, y: i32, z: f32) -> MissionItem {
    MissionItem {
        seq: 0,
        command,
        command_id: command.id(),
        frame,
        current: false,
        autocontinue: true,
        param1: 0.0,
        param2: 0.0,
        param3: 0.0,
        param4: 0.0,
        x,
        y,
        z,
    }
}
