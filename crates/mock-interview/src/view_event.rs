use interview_core::{
    CategoryFilter, InterviewModule, ModuleCatalog, ResultReport, SessionSnapshot,
};

/// Render requests sent from the application loop to the presenter.
///
/// The presenter owns stdout, so everything the candidate sees flows
/// through this enum.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// Module list with the progress summary.
    Catalog {
        /// Every practice module.
        catalog: ModuleCatalog,
        /// Which modules to list.
        filter: CategoryFilter,
    },
    /// Start screen for a module.
    Briefing {
        /// The module being practised.
        module: InterviewModule,
        /// Current session state (question count, device toggles).
        snapshot: SessionSnapshot,
    },
    /// Question screen, shown on start and on every question change.
    Question(SessionSnapshot),
    /// Countdown reminder.
    Clock {
        /// Seconds left on the current question.
        time_remaining: u32,
    },
    /// Short toast-style message.
    Notice {
        /// Headline.
        title: String,
        /// Detail line.
        body: String,
    },
    /// Results stage waiting on analysis.
    Analysing,
    /// Final report.
    Report(Box<ResultReport>),
}

impl ViewEvent {
    pub(crate) fn notice(title: impl Into<String>, body: impl Into<String>) -> Self {
        ViewEvent::Notice {
            title: title.into(),
            body: body.into(),
        }
    }
}
