use serde_json::Value;
use waymark_types::{Coord, RawPoint, SnapshotPoint};

use crate::error::{EditError, Result};

/// Default file name for exported missions
pub const EXPORT_FILE_NAME: &str = "points.json";

pub fn export_points(points: &[Coord]) -> Vec<SnapshotPoint> {
    points.iter().map(SnapshotPoint::from).collect()
}

/// Pretty-printed export document
pub fn to_json(points: &[Coord]) -> Result<String> {
    serde_json::to_string_pretty(&export_points(points))
        .map_err(|e| EditError::InvalidSnapshot(e.to_string()))
}

/// Parse and validate a whole import document.
///
/// Either every entry is a usable coordinate pair and the full list is
/// returned, or nothing is: a single bad entry rejects the file.
pub fn parse_snapshot(text: &str) -> Result<Vec<Coord>> {
    let document: Value =
        serde_json::from_str(text).map_err(|e| EditError::InvalidSnapshot(e.to_string()))?;
    parse_snapshot_value(document)
}

pub fn parse_snapshot_value(document: Value) -> Result<Vec<Coord>> {
    let Value::Array(entries) = document else {
        return Err(EditError::InvalidSnapshot(format!(
            "expected an array of points, found {}",
            kind_of(&document)
        )));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(position, entry)| {
            let raw: RawPoint = serde_json::from_value(entry)
                .map_err(|e| EditError::InvalidSnapshot(format!("entry {}: {}", position, e)))?;
            raw.to_coord()
                .map_err(|e| EditError::InvalidSnapshot(format!("entry {}: {}", position, e)))
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
