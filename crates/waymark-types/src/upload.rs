use serde::{Deserialize, Serialize};

use crate::Coord;

/// Connection parameters entered alongside the mission.
///
/// The fields stay as entered text; the receiving service interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadTarget {
    pub ip: String,
    pub port: String,
    pub height: String,
}

impl Default for UploadTarget {
    fn default() -> Self {
        Self {
            ip: "127.0.0.1".to_string(),
            port: "14550".to_string(),
            height: "60".to_string(),
        }
    }
}

/// Waypoint as sent over the wire: raw degrees, not rounded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UploadPoint {
    pub lat: f64,
    pub lng: f64,
}

impl From<&Coord> for UploadPoint {
    fn from(coord: &Coord) -> Self {
        Self {
            lat: coord.lat,
            lng: coord.lng,
        }
    }
}

/// Body of `POST /upload`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRequest {
    pub data: Vec<UploadPoint>,
    pub ip: String,
    pub port: String,
    pub height: String,
}

impl UploadRequest {
    pub fn new(points: &[Coord], target: &UploadTarget) -> Self {
        Self {
            data: points.iter().map(UploadPoint::from).collect(),
            ip: target.ip.clone(),
            port: target.port.clone(),
            height: target.height.clone(),
        }
    }
}
