use std::fmt;

/// Lifecycle phase of an interview session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Waiting for the candidate to press start.
    #[default]
    NotStarted,
    /// Questions are being asked and the countdown is running.
    InProgress,
    /// Every question has been answered. Terminal.
    Completed,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionPhase::NotStarted => "not-started",
            SessionPhase::InProgress => "in-progress",
            SessionPhase::Completed => "completed",
        };
        f.write_str(name)
    }
}
