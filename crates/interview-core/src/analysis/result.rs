use crate::catalog::{BadgeTone, ModuleCategory};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grade band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreGrade {
    /// 80 and above.
    Excellent,
    /// 60 to 79.
    Good,
    /// Below 60.
    NeedsImprovement,
}

impl ScoreGrade {
    /// Band a score.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreGrade::Excellent,
            60..=79 => ScoreGrade::Good,
            _ => ScoreGrade::NeedsImprovement,
        }
    }

    /// Badge label.
    pub fn label(self) -> &'static str {
        match self {
            ScoreGrade::Excellent => "Excellent",
            ScoreGrade::Good => "Good",
            ScoreGrade::NeedsImprovement => "Needs Improvement",
        }
    }

    /// Badge colour.
    pub fn tone(self) -> BadgeTone {
        match self {
            ScoreGrade::Excellent => BadgeTone::Green,
            ScoreGrade::Good => BadgeTone::Yellow,
            ScoreGrade::NeedsImprovement => BadgeTone::Red,
        }
    }
}

impl fmt::Display for ScoreGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-dimension scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedScores {
    /// Quality of answer content.
    pub content: u8,
    /// Clarity of expression.
    pub communication: u8,
    /// Perceived confidence.
    pub confidence: u8,
    /// Technical depth.
    pub technical: u8,
}

impl DetailedScores {
    /// Labelled scores in display order.
    pub fn labelled(&self) -> [(&'static str, u8); 4] {
        [
            ("Content", self.content),
            ("Communication", self.communication),
            ("Confidence", self.confidence),
            ("Technical", self.technical),
        ]
    }
}

/// Feedback shown on the results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall score, 0-100.
    pub overall_score: u8,
    /// Interview kind the feedback is phrased for.
    pub category: ModuleCategory,
    /// What went well.
    pub strengths: Vec<String>,
    /// What to work on.
    pub improvements: Vec<String>,
    /// Per-dimension breakdown.
    pub detailed_scores: DetailedScores,
    /// Practice suggestions.
    pub recommendations: Vec<String>,
    /// Suggested follow-up actions, in order.
    pub next_steps: Vec<String>,
}

impl AnalysisResult {
    /// Grade band of the overall score.
    pub fn grade(&self) -> ScoreGrade {
        ScoreGrade::from_score(self.overall_score)
    }
}
