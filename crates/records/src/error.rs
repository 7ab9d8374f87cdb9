//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io;

/// The result type that uses [RecordError] as the error type.
pub type Result<T> = std::result::Result<T, RecordError>;

/// The error type for loading query records.
#[derive(Debug)]
pub enum RecordError {
    /// A [`std::io::Error`] encountered while reading the records.
    Io(io::Error),

    /// A [`serde_json::Error`] encountered while deserializing the records.
    Json(serde_json::Error),

    /// The records were loaded without a time window and none was supplied.
    MissingTimeRange,
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let record_error = "record error:";

        match self {
            RecordError::Io(error) => write!(f, "{record_error} I/O error: {error}"),
            RecordError::Json(error) => {
                write!(f, "{record_error} JSON deserialization error: {error}")
            }
            RecordError::MissingTimeRange => {
                write!(f, "{record_error} no time range was given for the query records")
            }
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RecordError::Io(error) => Some(error),
            RecordError::Json(error) => Some(error),
            RecordError::MissingTimeRange => None,
        }
    }
}

impl From<io::Error> for RecordError {
    fn from(error: io::Error) -> Self {
        RecordError::Io(error)
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(error: serde_json::Error) -> Self {
        RecordError::Json(error)
    }
}
