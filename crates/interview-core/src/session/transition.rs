use crate::session::SessionOutcome;

/// Result of feeding a tick or an advance into a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The countdown moved, still on the same question.
    Counted {
        /// Seconds left after this tick.
        time_remaining: u32,
    },
    /// The answer was recorded and the next question is active.
    NextQuestion {
        /// Index of the now-current question.
        question_index: usize,
        /// Time limit of the new question.
        time_remaining: u32,
    },
    /// The last answer was recorded. Emitted exactly once per session.
    Completed(SessionOutcome),
    /// The event did not apply: wrong phase or stale question index.
    Ignored,
}
