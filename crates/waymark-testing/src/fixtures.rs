//! Snapshot documents in the shape the editor exports.

/// Two points as exported at 8 decimal places
pub const TWO_POINTS: &str = r#"[
  { "lat": "53.01907010", "lng": "20.88029020" },
  { "lat": "53.02500000", "lng": "20.89000000" }
]"#;

/// Three points, mixing string and numeric components as imports allow
pub const THREE_POINTS_MIXED: &str = r#"[
  { "lat": "53.01907010", "lng": "20.88029020" },
  { "lat": 53.03, "lng": 20.9 },
  { "lat": "53.04000000", "lng": 20.91 }
]"#;

pub const EMPTY: &str = "[]";

/// Parses as JSON but is not a list of points
pub const NOT_A_LIST: &str = r#"{ "lat": "53.0", "lng": "20.0" }"#;

/// Second entry has a non-numeric latitude
pub const BAD_COMPONENT: &str = r#"[
  { "lat": "53.01907010", "lng": "20.88029020" },
  { "lat": "north", "lng": "20.89000000" }
]"#;

pub const NOT_JSON: &str = "lat,lng\n53.0,20.0\n";
