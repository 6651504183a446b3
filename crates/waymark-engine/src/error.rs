use std::fmt;

/// Result type for waymark-engine operations
pub type Result<T> = std::result::Result<T, EditError>;

/// Validation failures reported to the user.
///
/// Each aborts only the operation that raised it; mission state is left
/// exactly as it was before the call.
#[derive(Debug, Clone, PartialEq)]
pub enum EditError {
    /// Edit panel input that is not a finite number
    InvalidCoordinate { field: &'static str, input: String },

    /// Imported file is not an array of coordinate pairs
    InvalidSnapshot(String),

    /// Upload attempted with no waypoints
    EmptyMission,

    /// Operating height is not a non-negative number
    InvalidHeight(String),

    /// A coordinate or the item count does not fit the mission encoding
    MissionOutOfRange(String),
}

impl EditError {
    /// Message shown to the user, independent of the technical cause
    pub fn user_message(&self) -> &'static str {
        match self {
            EditError::InvalidCoordinate { .. } => "Please enter valid latitude and longitude.",
            EditError::InvalidSnapshot(_) => "Invalid file format. Please upload a valid JSON file.",
            EditError::EmptyMission => "No points to upload.",
            EditError::InvalidHeight(_) => "Please enter a valid operating height.",
            EditError::MissionOutOfRange(_) => {
                "Mission cannot be built: a waypoint is outside the encodable range."
            }
        }
    }
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::InvalidCoordinate { field, input } => {
                write!(f, "Invalid {}: {:?}", field, input)
            }
            EditError::InvalidSnapshot(reason) => write!(f, "Invalid file format: {}", reason),
            EditError::EmptyMission => write!(f, "No points to upload"),
            EditError::InvalidHeight(input) => write!(f, "Invalid height: {:?}", input),
            EditError::MissionOutOfRange(reason) => write!(f, "Mission out of range: {}", reason),
        }
    }
}

impl std::error::Error for EditError {}

impl From<waymark_types::Error> for EditError {
    fn from(err: waymark_types::Error) -> Self {
        match err {
            waymark_types::Error::NonFinite { field, value } => EditError::InvalidCoordinate {
                field,
                input: value.to_string(),
            },
            waymark_types::Error::NotANumber { field, input } => {
                EditError::InvalidCoordinate { field, input }
            }
        }
    }
}
