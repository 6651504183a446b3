use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Decimal places used whenever a coordinate is shown or exported
pub const PRECISION: usize = 8;

/// A geographic coordinate pair in decimal degrees.
///
/// Both components are guaranteed finite when built through [`Coord::new`].
/// Points carry no identity beyond their slot in the mission list, so two
/// equal `Coord`s are still distinct waypoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lng: f64,
}

impl Coord {
    /// Build a coordinate, rejecting NaN and infinities
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() {
            return Err(Error::NonFinite {
                field: "lat",
                value: lat,
            });
        }
        if !lng.is_finite() {
            return Err(Error::NonFinite {
                field: "lng",
                value: lng,
            });
        }
        Ok(Self { lat, lng })
    }

    /// Parse both components from user-entered text
    pub fn parse(lat: &str, lng: &str) -> Result<Self> {
        let lat = parse_component("lat", lat)?;
        let lng = parse_component("lng", lng)?;
        Ok(Self { lat, lng })
    }

    pub fn lat_text(&self) -> String {
        format_component(self.lat)
    }

    pub fn lng_text(&self) -> String {
        format_component(self.lng)
    }

    /// Offset by the given deltas in degrees
    pub fn offset(&self, dlat: f64, dlng: f64) -> Self {
        Self {
            lat: self.lat + dlat,
            lng: self.lng + dlng,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat_text(), self.lng_text())
    }
}

/// Format one coordinate component with fixed precision
pub fn format_component(value: f64) -> String {
    format!("{:.*}", PRECISION, value)
}

/// Parse one coordinate component, accepting surrounding whitespace only
pub fn parse_component(field: &'static str, input: &str) -> Result<f64> {
    let value: f64 = input.trim().parse().map_err(|_| Error::NotANumber {
        field,
        input: input.to_string(),
    })?;
    if !value.is_finite() {
        return Err(Error::NonFinite { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(Coord::new(f64::NAN, 0.0).is_err());
        assert!(Coord::new(0.0, f64::INFINITY).is_err());
        assert!(Coord::new(53.0, 20.0).is_ok());
    }

    #[test]
    fn test_format_uses_eight_decimals() {
        let coord = Coord::new(53.01907012, 20.88029023).unwrap();
        assert_eq!(coord.lat_text(), "53.01907012");
        assert_eq!(coord.lng_text(), "20.88029023");
        assert_eq!(format_component(1.0), "1.00000000");
    }

    #[test]
    fn test_parse_trims_and_validates() {
        let coord = Coord::parse(" 53.5 ", "20.25").unwrap();
        assert_eq!(coord, Coord { lat: 53.5, lng: 20.25 });

        assert!(matches!(
            Coord::parse("abc", "1"),
            Err(Error::NotANumber { field: "lat", .. })
        ));
        assert!(matches!(
            Coord::parse("1", "NaN"),
            Err(Error::NonFinite { field: "lng", .. })
        ));
        assert!(Coord::parse("", "1").is_err());
    }
}
