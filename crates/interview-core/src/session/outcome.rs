use crate::question::Question;

use serde::{Deserialize, Serialize};

/// Payload handed from a completed session to the results stage.
///
/// Passed by value; nothing about the session outlives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// One answer per question, in question order. Unanswered questions are empty strings.
    pub answers: Vec<String>,
    /// The questions that were asked.
    pub questions: Vec<Question>,
}

impl SessionOutcome {
    /// Pair each question with the answer given for it.
    pub fn answered_questions(&self) -> impl Iterator<Item = (&Question, &str)> {
        self.questions
            .iter()
            .zip(self.answers.iter().map(String::as_str))
    }

    /// Number of questions that received a non-blank answer.
    pub fn non_empty_answers(&self) -> usize {
        self.answers.iter().filter(|a| !a.trim().is_empty()).count()
    }
}
