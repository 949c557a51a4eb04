use crate::{
    analysis::{AnalysisResult, DetailedScores},
    catalog::ModuleCategory,
    session::SessionOutcome,
};

use tracing::{debug, instrument};

/// Turns a finished session into feedback.
pub trait InterviewAnalyzer: Send + Sync {
    /// Analyse `outcome`. `None` means the results stage was reached without
    /// a session payload.
    fn analyze(&self, outcome: Option<&SessionOutcome>) -> AnalysisResult;
}

/// Analyzer that always returns the same canned feedback.
///
/// Stands in until a real scoring backend exists; the delay that makes it
/// look like work is applied by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAnalyzer;

impl InterviewAnalyzer for PlaceholderAnalyzer {
    #[instrument(skip_all)]
    fn analyze(&self, outcome: Option<&SessionOutcome>) -> AnalysisResult {
        debug!(
            has_outcome = outcome.is_some(),
            "Returning placeholder analysis"
        );
        mock_result()
    }
}

/// The canned result shown when no real analysis is available.
pub fn mock_result() -> AnalysisResult {
    let owned = |items: [&str; 4]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };

    AnalysisResult {
        overall_score: 78,
        category: ModuleCategory::Behavioral,
        strengths: owned([
            "Clear answer structure using the STAR method",
            "Natural tone that shows good communication skills",
            "Concrete examples that show real problem solving",
            "Good time management with complete and concise answers",
        ]),
        improvements: owned([
            "Emphasise quantified results and concrete numbers",
            "Highlight your personal contribution when describing teamwork",
            "Add more technical detail to your explanations",
            "Show more examples of initiative and leadership",
        ]),
        detailed_scores: DetailedScores {
            content: 82,
            communication: 85,
            confidence: 72,
            technical: 75,
        },
        recommendations: owned([
            "Practise answering more in-depth technical questions",
            "Prepare more examples with quantified outcomes",
            "Learn more about industry trends and the company background",
            "Improve non-verbal communication such as eye contact and gestures",
        ]),
        next_steps: owned([
            "Complete the technical interview module to improve technical expression",
            "Take a case study exercise to strengthen analytical thinking",
            "Watch interview technique videos to learn best practices",
            "Run a mock interview with a mentor or friend",
        ]),
    }
}
