use std::fmt::Display;
use std::io;

use plotprep_records::error::RecordError;
use plotprep_vis::error::VisError;

#[derive(Debug)]
pub(crate) enum CliError {
    Records(RecordError),
    Vis(VisError),
    Io(io::Error),
    Json(serde_json::Error),
}

impl From<RecordError> for CliError {
    fn from(error: RecordError) -> Self {
        CliError::Records(error)
    }
}

impl From<VisError> for CliError {
    fn from(error: VisError) -> Self {
        CliError::Vis(error)
    }
}

impl From<io::Error> for CliError {
    fn from(error: io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::Json(error)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Records(error) => write!(f, "{cli_error} {error}"),
            CliError::Vis(error) => write!(f, "{cli_error} {error}"),
            CliError::Io(error) => write!(f, "{cli_error} I/O error: {error}"),
            CliError::Json(error) => write!(f, "{cli_error} JSON error: {error}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Records(error) => Some(error),
            CliError::Vis(error) => Some(error),
            CliError::Io(error) => Some(error),
            CliError::Json(error) => Some(error),
        }
    }
}
