//! Custom assertions for waymark command output.

use anyhow::{Context, Result};
use predicates::prelude::*;
use serde_json::Value;

/// Assert that `show --format json` output lists the expected number of waypoints.
pub fn assert_waypoint_count(json: &Value, expected: usize) -> Result<()> {
    let waypoints = json["content"]["waypoints"]
        .as_array()
        .context("Expected 'content.waypoints' array in JSON")?;

    if waypoints.len() != expected {
        anyhow::bail!("Expected {} waypoints, got {}", expected, waypoints.len());
    }

    Ok(())
}

/// Assert the command sequence of `plan --format json` output, by command name.
pub fn assert_plan_commands(json: &Value, expected: &[&str]) -> Result<()> {
    let items = json["content"]["items"]
        .as_array()
        .context("Expected 'content.items' array in JSON")?;

    let commands: Vec<&str> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item["command"]
                .as_str()
                .with_context(|| format!("Item {} missing command", i))
        })
        .collect::<Result<_>>()?;

    if commands != expected {
        anyhow::bail!("Expected commands {:?}, got {:?}", expected, commands);
    }

    Ok(())
}

/// Assert that `text` contains `needle`, printing the whole text otherwise.
pub fn assert_contains(text: &str, needle: &str) -> Result<()> {
    if !predicate::str::contains(needle).eval(text) {
        anyhow::bail!("Expected output to contain {:?}, got:\n{}", needle, text);
    }
    Ok(())
}
