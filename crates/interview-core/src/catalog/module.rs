use std::fmt;

use serde::{Deserialize, Serialize};

/// Difficulty level of a practice module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    /// Entry level.
    Beginner,
    /// Mid level.
    Intermediate,
    /// Senior level.
    Advanced,
}

/// Colour family used when rendering a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    /// Positive / easy.
    Green,
    /// Moderate.
    Yellow,
    /// Medium.
    Orange,
    /// Hard / needs attention.
    Red,
}

impl Difficulty {
    /// Badge label.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// Badge colour.
    pub fn tone(self) -> BadgeTone {
        match self {
            Difficulty::Beginner => BadgeTone::Green,
            Difficulty::Intermediate => BadgeTone::Orange,
            Difficulty::Advanced => BadgeTone::Red,
        }
    }
}

/// Icon shown next to a module category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Technical content.
    Brain,
    /// People-focused content.
    Users,
    /// Analysis content.
    Award,
    /// Spoken presentation content.
    Video,
}

/// Kind of interview a practice module simulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleCategory {
    /// Technical interview.
    Technical,
    /// Behavioral interview.
    Behavioral,
    /// Case study.
    CaseStudy,
    /// Presentation.
    Presentation,
}

impl ModuleCategory {
    /// All categories in display order.
    pub const ALL: [ModuleCategory; 4] = [
        ModuleCategory::Technical,
        ModuleCategory::Behavioral,
        ModuleCategory::CaseStudy,
        ModuleCategory::Presentation,
    ];

    /// Filter button label.
    pub fn label(self) -> &'static str {
        match self {
            ModuleCategory::Technical => "Technical Interview",
            ModuleCategory::Behavioral => "Behavioral Interview",
            ModuleCategory::CaseStudy => "Case Study",
            ModuleCategory::Presentation => "Presentation",
        }
    }

    /// Icon for this category.
    pub fn icon(self) -> Icon {
        match self {
            ModuleCategory::Technical => Icon::Brain,
            ModuleCategory::Behavioral => Icon::Users,
            ModuleCategory::CaseStudy => Icon::Award,
            ModuleCategory::Presentation => Icon::Video,
        }
    }
}

impl fmt::Display for ModuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A practice module the candidate can start a session for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewModule {
    /// Module id, used to pick the question set.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Expected duration in minutes.
    pub duration_minutes: u32,
    /// Difficulty badge.
    pub difficulty: Difficulty,
    /// Interview kind.
    pub category: ModuleCategory,
    /// Whether the candidate has finished this module before.
    pub completed: bool,
    /// Score of the last completed attempt (0-100).
    pub score: Option<u8>,
}
