//! Interview Core Library
//!
//! Mock-interview session engine: question bank, practice module catalog,
//! the session state machine and the result report model. Pure and
//! synchronous; timing is driven by the caller.
//!
//! # Example
//!
//! ```
//! use interview_core::{CoreResult, InterviewSession, QuestionBank, SessionPhase, Transition};
//!
//! fn main() -> CoreResult<()> {
//!     let bank = QuestionBank::builtin();
//!     let mut session = InterviewSession::new(bank.questions_for("1").to_vec())?;
//!
//!     session.start()?;
//!     session.append_draft("I studied computer science.");
//!
//!     while session.phase() == SessionPhase::InProgress {
//!         if let Transition::Completed(outcome) = session.advance(session.current_index()) {
//!             assert_eq!(outcome.answers.len(), outcome.questions.len());
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod analysis;
mod catalog;
mod error;
mod question;
mod session;

pub use {
    analysis::{
        AnalysisResult, AnsweredQuestion, DetailedScores, InterviewAnalyzer, PlaceholderAnalyzer,
        ReportSource, ResultReport, ScoreGrade, mock_result,
    },
    catalog::{
        BadgeTone, CategoryFilter, Difficulty, Icon, InterviewModule, ModuleCatalog,
        ModuleCategory,
    },
    error::InterviewError,
    error::Result as CoreResult,
    question::{Question, QuestionBank, QuestionCategory},
    session::{
        InterviewSession, SessionOutcome, SessionPhase, SessionSnapshot, Transition, format_clock,
    },
};

#[cfg(test)]
mod tests;
