mod outcome;
mod phase;
#[allow(clippy::module_inception)]
mod session;
mod snapshot;
mod transition;

pub use {
    outcome::SessionOutcome,
    phase::SessionPhase,
    session::InterviewSession,
    snapshot::{SessionSnapshot, format_clock},
    transition::Transition,
};
