use crate::{question::Question, session::SessionPhase};

/// Read-only view of a session, published to whatever renders it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    /// Current phase.
    pub phase: SessionPhase,
    /// Index of the current question.
    pub question_index: usize,
    /// Total number of questions.
    pub question_count: usize,
    /// The current question, if any.
    pub question: Option<Question>,
    /// Seconds left on the current question.
    pub time_remaining: u32,
    /// Recording toggle.
    pub recording: bool,
    /// Camera toggle.
    pub video_enabled: bool,
    /// Microphone toggle.
    pub audio_enabled: bool,
    /// Answers recorded so far.
    pub answered: usize,
    /// Characters in the current draft.
    pub draft_chars: usize,
}

impl SessionSnapshot {
    /// Whether the current question is the last one.
    pub fn is_last_question(&self) -> bool {
        self.question_index + 1 >= self.question_count
    }

    /// Progress through the question list, counting the current question.
    pub fn progress_percent(&self) -> f32 {
        if self.question_count == 0 {
            return 0.0;
        }
        (self.question_index + 1) as f32 / self.question_count as f32 * 100.0
    }
}

/// Format seconds as `m:ss`.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
