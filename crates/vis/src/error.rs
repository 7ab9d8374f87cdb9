//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;

/// The result type that uses [VisError] as the error type.
pub type Result<T> = std::result::Result<T, VisError>;

/// The error type for shaping query records into chart series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisError {
    /// The view configuration lacks a setting the x-axis mode depends on.
    Configuration(String),
}

impl Error for VisError {}

impl Display for VisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vis_error = "vis error:";

        match self {
            VisError::Configuration(message) => {
                write!(f, "{vis_error} configuration error: {message}")
            }
        }
    }
}
