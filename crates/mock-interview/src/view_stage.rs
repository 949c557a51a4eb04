/// Screen the candidate is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStage {
    /// Device check and instructions before the first question.
    Briefing,
    /// Answering questions.
    Interviewing,
    /// Last answer recorded, waiting for the handoff delay.
    Submitting,
    /// Results stage mounted, analysis pending.
    Analysing,
    /// Report on screen.
    Results,
}
