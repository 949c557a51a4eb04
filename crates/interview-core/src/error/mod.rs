use error_location::ErrorLocation;
use thiserror::Error;

/// Interview session errors with source location tracking.
#[derive(Error, Debug)]
pub enum InterviewError {
    /// A session needs at least one question.
    #[error("Question set is empty {location}")]
    EmptyQuestionSet {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The session cannot start while the microphone is off.
    #[error("Cannot start session with audio disabled {location}")]
    AudioDisabled {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Start was requested for a session that is already running or finished.
    #[error("Session already started (phase: {phase}) {location}")]
    AlreadyStarted {
        /// Phase the session was in when start was requested.
        phase: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`InterviewError`].
pub type Result<T> = std::result::Result<T, InterviewError>;
