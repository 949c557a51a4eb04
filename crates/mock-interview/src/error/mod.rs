use interview_core::InterviewError;

use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the mock-interview binary.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum AppError {
    /// Session error from interview-core.
    #[error("Interview error: {source} {location}")]
    Interview {
        /// The underlying session error.
        #[source]
        source: InterviewError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Requested practice module does not exist.
    #[error("Unknown interview module: {module_id}, run with --list to see the modules {location}")]
    UnknownModule {
        /// The id that was requested.
        module_id: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to send message through async channel.
    #[error("Channel send failed: {message} {location}")]
    ChannelSendFailed {
        /// Human-readable error message.
        message: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Configuration loading or saving error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// IO error from the terminal or filesystem.
    #[error("IO error: {source} {location}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

// Manual From<InterviewError> with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<InterviewError> for AppError {
    #[track_caller]
    fn from(source: InterviewError) -> Self {
        AppError::Interview {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for AppError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        AppError::IoError {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
