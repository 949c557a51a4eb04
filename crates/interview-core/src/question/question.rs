use std::fmt;

use serde::{Deserialize, Serialize};

/// Topic a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionCategory {
    /// Introduce yourself and your motivation.
    SelfIntroduction,
    /// Working with others, resolving team conflict.
    Teamwork,
    /// Technical knowledge questions.
    Technical,
    /// How the candidate picks up new skills.
    LearningAbility,
}

impl QuestionCategory {
    /// Badge label shown next to the question.
    pub fn label(self) -> &'static str {
        match self {
            QuestionCategory::SelfIntroduction => "Self Introduction",
            QuestionCategory::Teamwork => "Teamwork",
            QuestionCategory::Technical => "Technical",
            QuestionCategory::LearningAbility => "Learning Ability",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single interview question. Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable question id.
    pub id: u32,
    /// Question text shown to the candidate.
    pub prompt: String,
    /// Topic badge.
    pub category: QuestionCategory,
    /// Seconds allowed for the answer.
    pub time_limit_secs: u32,
    /// Optional answering hints.
    #[serde(default)]
    pub hints: Vec<String>,
}

impl Question {
    /// Build a question without hints.
    pub fn new(
        id: u32,
        prompt: impl Into<String>,
        category: QuestionCategory,
        time_limit_secs: u32,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            category,
            time_limit_secs,
            hints: Vec::new(),
        }
    }

    /// Attach answering hints.
    pub fn with_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hints = hints.into_iter().map(Into::into).collect();
        self
    }
}
