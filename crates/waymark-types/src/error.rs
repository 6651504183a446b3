use std::fmt;

/// Result type for waymark-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A coordinate component was NaN or infinite
    NonFinite { field: &'static str, value: f64 },

    /// A textual coordinate component did not parse as a number
    NotANumber { field: &'static str, input: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NonFinite { field, value } => {
                write!(f, "{} must be a finite number (got {})", field, value)
            }
            Error::NotANumber { field, input } => {
                write!(f, "{} is not a number: {:?}", field, input)
            }
        }
    }
}

impl std::error::Error for Error {}
