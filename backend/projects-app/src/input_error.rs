use projects_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures of the console input reader.
///
/// `Validation` displays as the bare message so it can be shown to the user
/// verbatim; the location is kept for the log.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("{message}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Console I/O failed: {source} {location}")]
    Io {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Input closed.")]
    Closed,
}

impl InputError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for InputError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for InputError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation { message, location } => Self::Validation { message, location },
        }
    }
}

pub type Result<T> = std::result::Result<T, InputError>;
