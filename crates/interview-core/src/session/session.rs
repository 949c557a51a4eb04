use crate::{
    CoreResult, InterviewError,
    question::Question,
    session::{SessionOutcome, SessionPhase, SessionSnapshot, Transition},
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, trace, warn};

/// Interview session state machine.
///
/// Owns an ordered, non-empty question list, the per-question countdown,
/// device toggles, the recorded answers and the current draft. It performs no
/// timing itself: the driver feeds it ticks and advances, each tagged with the
/// question index they were issued for. An event tagged with any other index
/// is stale and ignored, so a timer expiry and a manual "next" for the same
/// question register only once.
///
/// # Invariants
///
/// - `current_index < questions.len()` at all times.
/// - `time_remaining <= current question's limit`.
/// - While in progress, `answers.len() == current_index`. Once completed,
///   `answers.len() == questions.len()`.
#[derive(Debug, Clone)]
pub struct InterviewSession {
    questions: Vec<Question>,
    phase: SessionPhase,
    current_index: usize,
    time_remaining: u32,
    recording: bool,
    video_enabled: bool,
    audio_enabled: bool,
    answers: Vec<String>,
    draft: String,
}

impl InterviewSession {
    /// Create a session over `questions` with camera and microphone enabled.
    ///
    /// # Errors
    ///
    /// Returns [`InterviewError::EmptyQuestionSet`] if `questions` is empty.
    #[track_caller]
    pub fn new(questions: Vec<Question>) -> CoreResult<Self> {
        let Some(first) = questions.first() else {
            return Err(InterviewError::EmptyQuestionSet {
                location: ErrorLocation::from(Location::caller()),
            });
        };
        let time_remaining = first.time_limit_secs;

        Ok(Self {
            answers: Vec::with_capacity(questions.len()),
            questions,
            phase: SessionPhase::NotStarted,
            current_index: 0,
            time_remaining,
            recording: false,
            video_enabled: true,
            audio_enabled: true,
            draft: String::new(),
        })
    }

    /// Override the initial device toggles.
    pub fn with_devices(mut self, video_enabled: bool, audio_enabled: bool) -> Self {
        self.video_enabled = video_enabled;
        self.audio_enabled = audio_enabled;
        self
    }

    /// Start the session and arm the first question's countdown.
    ///
    /// Returns the first question's time limit.
    ///
    /// # Errors
    ///
    /// - [`InterviewError::AudioDisabled`] if the microphone is off.
    /// - [`InterviewError::AlreadyStarted`] if the session is not in
    ///   [`SessionPhase::NotStarted`].
    ///
    /// The session is left untouched on error.
    #[track_caller]
    #[instrument(level = "debug", skip(self))]
    pub fn start(&mut self) -> CoreResult<u32> {
        if self.phase != SessionPhase::NotStarted {
            return Err(InterviewError::AlreadyStarted {
                phase: self.phase.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !self.audio_enabled {
            return Err(InterviewError::AudioDisabled {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.time_remaining = self.limit_at(self.current_index);
        self.phase = SessionPhase::InProgress;

        info!(
            question_count = self.questions.len(),
            time_remaining = self.time_remaining,
            "Session started"
        );

        Ok(self.time_remaining)
    }

    /// Feed one countdown tick for `question_index`.
    ///
    /// The tick that brings the countdown to zero performs the advance.
    pub fn tick(&mut self, question_index: usize) -> Transition {
        if !self.accepts(question_index) {
            trace!(question_index, current = self.current_index, "Tick ignored");
            return Transition::Ignored;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);

        if self.time_remaining == 0 {
            debug!(question_index, "Time is up");
            return self.advance_current();
        }

        trace!(time_remaining = self.time_remaining, "Tick");
        Transition::Counted {
            time_remaining: self.time_remaining,
        }
    }

    /// Record the draft for `question_index` and move on.
    ///
    /// Ignored unless the session is in progress and `question_index` is the
    /// current question.
    #[instrument(level = "debug", skip(self))]
    pub fn advance(&mut self, question_index: usize) -> Transition {
        if !self.accepts(question_index) {
            debug!(
                question_index,
                current = self.current_index,
                phase = %self.phase,
                "Stale advance ignored"
            );
            return Transition::Ignored;
        }

        self.advance_current()
    }

    fn advance_current(&mut self) -> Transition {
        let answer = std::mem::take(&mut self.draft);
        self.answers.push(answer);

        let next = self.current_index + 1;
        if next < self.questions.len() {
            self.current_index = next;
            self.time_remaining = self.limit_at(next);

            info!(
                question_index = next,
                time_remaining = self.time_remaining,
                "Next question"
            );

            Transition::NextQuestion {
                question_index: next,
                time_remaining: self.time_remaining,
            }
        } else {
            self.phase = SessionPhase::Completed;
            self.recording = false;

            info!(answers = self.answers.len(), "Session completed");

            Transition::Completed(SessionOutcome {
                answers: self.answers.clone(),
                questions: self.questions.clone(),
            })
        }
    }

    fn accepts(&self, question_index: usize) -> bool {
        self.phase == SessionPhase::InProgress && question_index == self.current_index
    }

    fn limit_at(&self, index: usize) -> u32 {
        self.questions
            .get(index)
            .map(|q| q.time_limit_secs)
            .unwrap_or_default()
    }

    /// Replace the draft answer. Ignored outside [`SessionPhase::InProgress`].
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.phase == SessionPhase::InProgress {
            self.draft = text.into();
        } else {
            warn!(phase = %self.phase, "Draft edit ignored");
        }
    }

    /// Append a line to the draft answer. Ignored outside [`SessionPhase::InProgress`].
    pub fn append_draft(&mut self, line: &str) {
        if self.phase != SessionPhase::InProgress {
            warn!(phase = %self.phase, "Draft edit ignored");
            return;
        }
        if !self.draft.is_empty() {
            self.draft.push('\n');
        }
        self.draft.push_str(line);
    }

    /// Toggle the camera. Returns the new value.
    pub fn toggle_video(&mut self) -> bool {
        self.video_enabled = !self.video_enabled;
        self.video_enabled
    }

    /// Toggle the microphone. Returns the new value.
    pub fn toggle_audio(&mut self) -> bool {
        self.audio_enabled = !self.audio_enabled;
        self.audio_enabled
    }

    /// Toggle recording. Returns the new value.
    pub fn toggle_recording(&mut self) -> bool {
        self.recording = !self.recording;
        self.recording
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Index of the current question.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The current question.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// All questions in order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Seconds left on the current question.
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Answers recorded so far.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Uncommitted answer text for the current question.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Recording toggle.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Camera toggle.
    pub fn video_enabled(&self) -> bool {
        self.video_enabled
    }

    /// Microphone toggle.
    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    /// Whether the current question is the last one.
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    /// Capture a read-only view for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            question_index: self.current_index,
            question_count: self.questions.len(),
            question: self.current_question().cloned(),
            time_remaining: self.time_remaining,
            recording: self.recording,
            video_enabled: self.video_enabled,
            audio_enabled: self.audio_enabled,
            answered: self.answers.len(),
            draft_chars: self.draft.chars().count(),
        }
    }
}
