use crate::{
    CoreResult, InterviewError,
    question::{Question, QuestionCategory},
};

use std::{collections::BTreeMap, panic::Location};

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Read-only lookup table from interview module id to its ordered questions.
///
/// Modules without a dedicated entry fall back to the default list, so every
/// module id resolves to a usable question set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    default: Vec<Question>,
    #[serde(default)]
    modules: BTreeMap<String, Vec<Question>>,
}

impl QuestionBank {
    /// Create a bank with the given default question list.
    ///
    /// # Errors
    ///
    /// Returns [`InterviewError::EmptyQuestionSet`] if `default` is empty.
    #[track_caller]
    pub fn new(default: Vec<Question>) -> CoreResult<Self> {
        if default.is_empty() {
            return Err(InterviewError::EmptyQuestionSet {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            default,
            modules: BTreeMap::new(),
        })
    }

    /// Register a dedicated question list for a module.
    ///
    /// # Errors
    ///
    /// Returns [`InterviewError::EmptyQuestionSet`] if `questions` is empty.
    #[track_caller]
    pub fn with_module(
        mut self,
        module_id: impl Into<String>,
        questions: Vec<Question>,
    ) -> CoreResult<Self> {
        if questions.is_empty() {
            return Err(InterviewError::EmptyQuestionSet {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.modules.insert(module_id.into(), questions);
        Ok(self)
    }

    /// Check the invariants of a bank that did not go through [`QuestionBank::new`],
    /// e.g. one deserialized from a file.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        let any_empty = self.default.is_empty() || self.modules.values().any(Vec::is_empty);
        if any_empty {
            return Err(InterviewError::EmptyQuestionSet {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    /// Questions for `module_id`, or the default list.
    pub fn questions_for(&self, module_id: &str) -> &[Question] {
        match self.modules.get(module_id) {
            Some(questions) => questions,
            None => {
                debug!(module_id, "No dedicated questions, using default set");
                &self.default
            }
        }
    }

    /// The four general-purpose questions every practice module starts with.
    pub fn builtin() -> Self {
        Self {
            default: builtin_questions(),
            modules: BTreeMap::new(),
        }
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_questions() -> Vec<Question> {
    vec![
        Question::new(
            1,
            "Please introduce yourself and explain why you want this position.",
            QuestionCategory::SelfIntroduction,
            120,
        )
        .with_hints([
            "Include your educational background",
            "Mention relevant experience",
            "Show enthusiasm for the role",
        ]),
        Question::new(
            2,
            "Describe a challenge you faced in a team and how you resolved it.",
            QuestionCategory::Teamwork,
            180,
        )
        .with_hints([
            "Use the STAR method",
            "Be specific about your own role",
            "Emphasise the final result",
        ]),
        Question::new(
            3,
            "In React, what are useState and useEffect mainly used for? Give an example.",
            QuestionCategory::Technical,
            240,
        )
        .with_hints([
            "Explain the concept of hooks",
            "Provide a concrete code example",
            "Describe best practices",
        ]),
        Question::new(
            4,
            "If you had to learn a new technology within 6 months, how would you plan it?",
            QuestionCategory::LearningAbility,
            150,
        )
        .with_hints([
            "Set milestone goals",
            "Mention hands-on practice",
            "Explain how you would measure progress",
        ]),
    ]
}
