use crate::{
    analysis::{AnalysisResult, InterviewAnalyzer},
    question::Question,
    session::SessionOutcome,
};

use tracing::{info, warn};

/// Where the data behind a report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSource {
    /// A completed session handed its outcome over.
    Session,
    /// No payload arrived; the canned result is shown instead.
    Fallback,
}

/// A question together with the answer given for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredQuestion {
    /// The question asked.
    pub question: Question,
    /// The recorded answer, possibly empty.
    pub answer: String,
}

/// Everything the results page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultReport {
    /// Where the report came from.
    pub source: ReportSource,
    /// Analyzer feedback.
    pub analysis: AnalysisResult,
    /// Question/answer pairs; empty for [`ReportSource::Fallback`].
    pub transcript: Vec<AnsweredQuestion>,
}

impl ResultReport {
    /// Build a report from an optional handoff payload.
    ///
    /// A missing payload is not an error: the analyzer is asked for its
    /// default result and the transcript stays empty.
    pub fn build<A>(analyzer: &A, outcome: Option<SessionOutcome>) -> Self
    where
        A: InterviewAnalyzer + ?Sized,
    {
        let analysis = analyzer.analyze(outcome.as_ref());

        match outcome {
            Some(outcome) => {
                let transcript: Vec<AnsweredQuestion> = outcome
                    .answered_questions()
                    .map(|(question, answer)| AnsweredQuestion {
                        question: question.clone(),
                        answer: answer.to_string(),
                    })
                    .collect();

                info!(
                    questions = outcome.questions.len(),
                    answered = outcome.non_empty_answers(),
                    overall_score = analysis.overall_score,
                    "Result report built"
                );

                Self {
                    source: ReportSource::Session,
                    analysis,
                    transcript,
                }
            }
            None => {
                warn!("No session payload, showing fallback result");
                Self {
                    source: ReportSource::Fallback,
                    analysis,
                    transcript: Vec::new(),
                }
            }
        }
    }
}
