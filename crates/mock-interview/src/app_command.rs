use interview_core::{ResultReport, SessionOutcome};
use uuid::Uuid;

/// Commands delivered to the application loop.
///
/// Ticks, advances and draft edits carry the question index they were issued
/// for; any whose index is no longer current is dropped.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Begin the interview.
    Start,
    /// One countdown period elapsed.
    Tick {
        /// Question the countdown was armed for.
        question_index: usize,
    },
    /// Record the answer and move on.
    Advance {
        /// Question the candidate was looking at.
        question_index: usize,
    },
    /// Append a line to the draft answer.
    AppendDraft {
        /// Question the line was typed for.
        question_index: usize,
        /// The typed line.
        text: String,
    },
    /// Discard the draft answer.
    ClearDraft {
        /// Question the candidate was looking at.
        question_index: usize,
    },
    /// Flip the camera toggle.
    ToggleVideo,
    /// Flip the microphone toggle.
    ToggleAudio,
    /// Flip the recording toggle.
    ToggleRecording,
    /// Mount the results stage. `outcome` is `None` when the results are
    /// opened without a finished session.
    ShowResults {
        /// Session the results belong to.
        session_id: Uuid,
        /// Handoff payload.
        outcome: Option<SessionOutcome>,
    },
    /// The analysis finished.
    ReportReady {
        /// Session the report belongs to.
        session_id: Uuid,
        /// The rendered-ready report.
        report: Box<ResultReport>,
    },
    /// Run the same module again.
    Restart,
    /// Request application shutdown.
    Shutdown,
}

impl AppCommand {
    /// Map one line of terminal input to a command.
    ///
    /// `shown_index` is the last question rendered to the candidate when the
    /// line was entered. Blank lines map to nothing; any non-command text is
    /// answer text.
    pub fn parse(line: &str, shown_index: usize) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let command = match trimmed {
            "/start" => AppCommand::Start,
            "/next" => AppCommand::Advance {
                question_index: shown_index,
            },
            "/video" => AppCommand::ToggleVideo,
            "/audio" => AppCommand::ToggleAudio,
            "/record" => AppCommand::ToggleRecording,
            "/clear" => AppCommand::ClearDraft {
                question_index: shown_index,
            },
            "/retry" => AppCommand::Restart,
            "/quit" => AppCommand::Shutdown,
            _ => AppCommand::AppendDraft {
                question_index: shown_index,
                text: line.trim_end().to_string(),
            },
        };

        Some(command)
    }
}
