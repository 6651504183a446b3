use serde::{Deserialize, Serialize};

use crate::{Coord, Error, Result, parse_component};

/// One exported waypoint; components are fixed-precision strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotPoint {
    pub lat: String,
    pub lng: String,
}

impl From<&Coord> for SnapshotPoint {
    fn from(coord: &Coord) -> Self {
        Self {
            lat: coord.lat_text(),
            lng: coord.lng_text(),
        }
    }
}

/// A coordinate component as found in an imported file: a JSON number or
/// a numeric string (exports write strings, hand-written files often don't)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawComponent {
    Number(f64),
    Text(String),
}

impl RawComponent {
    fn resolve(&self, field: &'static str) -> Result<f64> {
        match self {
            RawComponent::Number(value) if value.is_finite() => Ok(*value),
            RawComponent::Number(value) => Err(Error::NonFinite {
                field,
                value: *value,
            }),
            RawComponent::Text(text) => parse_component(field, text),
        }
    }
}

/// One imported waypoint before validation; unknown fields are ignored
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPoint {
    pub lat: RawComponent,
    pub lng: RawComponent,
}

impl RawPoint {
    pub fn to_coord(&self) -> Result<Coord> {
        let lat = self.lat.resolve("lat")?;
        let lng = self.lng.resolve("lng")?;
        Coord::new(lat, lng)
    }
}
