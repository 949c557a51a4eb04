use crate::{
    AnalysisResult, BadgeTone, InterviewAnalyzer, PlaceholderAnalyzer, QuestionBank,
    ReportSource, ResultReport, ScoreGrade, SessionOutcome, mock_result,
};

fn outcome() -> SessionOutcome {
    let questions = QuestionBank::builtin().questions_for("1").to_vec();
    SessionOutcome {
        answers: vec![
            "I am a CS graduate.".to_string(),
            String::new(),
            "useState holds state.".to_string(),
            "  ".to_string(),
        ],
        questions,
    }
}

/// WHAT: Score bands split at 80 and 60
/// WHY: Badges colour scores by band
#[test]
fn given_scores_when_grading_then_banded_at_80_and_60() {
    assert_eq!(ScoreGrade::from_score(100), ScoreGrade::Excellent);
    assert_eq!(ScoreGrade::from_score(80), ScoreGrade::Excellent);
    assert_eq!(ScoreGrade::from_score(79), ScoreGrade::Good);
    assert_eq!(ScoreGrade::from_score(60), ScoreGrade::Good);
    assert_eq!(ScoreGrade::from_score(59), ScoreGrade::NeedsImprovement);
    assert_eq!(ScoreGrade::from_score(0), ScoreGrade::NeedsImprovement);
    assert_eq!(ScoreGrade::Good.tone(), BadgeTone::Yellow);
}

/// WHAT: Placeholder analyzer returns the canned result regardless of input
/// WHY: No scoring backend exists yet
#[test]
fn given_placeholder_analyzer_when_analyzing_then_canned_result() {
    // Given: The placeholder analyzer
    let analyzer = PlaceholderAnalyzer;

    // When: Analysing with and without a payload
    let with = analyzer.analyze(Some(&outcome()));
    let without = analyzer.analyze(None);

    // Then: Same canned result, graded Good
    assert_eq!(with, without);
    assert_eq!(with.overall_score, 78);
    assert_eq!(with.grade(), ScoreGrade::Good);
    assert_eq!(
        with.detailed_scores.labelled().map(|(_, s)| s),
        [82, 85, 72, 75]
    );
    assert_eq!(with.strengths.len(), 4);
    assert_eq!(with.next_steps.len(), 4);
}

/// WHAT: A session payload yields a paired transcript
/// WHY: The results page shows each answer under its question
#[test]
fn given_outcome_when_building_report_then_session_source_with_transcript() {
    // Given: A completed session outcome
    let outcome = outcome();
    assert_eq!(outcome.non_empty_answers(), 2);

    // When: Building the report
    let report = ResultReport::build(&PlaceholderAnalyzer, Some(outcome));

    // Then: Every question is paired with its answer
    assert_eq!(report.source, ReportSource::Session);
    assert_eq!(report.transcript.len(), 4);
    assert_eq!(report.transcript[0].question.id, 1);
    assert_eq!(report.transcript[0].answer, "I am a CS graduate.");
    assert_eq!(report.transcript[1].answer, "");
}

/// WHAT: Missing payload falls back to the mock result
/// WHY: Direct navigation to results must not fail
#[test]
fn given_no_outcome_when_building_report_then_fallback_with_mock_result() {
    // Given/When: Building without a payload
    let report = ResultReport::build(&PlaceholderAnalyzer, None);

    // Then: Fallback source, canned analysis, empty transcript
    assert_eq!(report.source, ReportSource::Fallback);
    assert_eq!(report.analysis, mock_result());
    assert!(report.transcript.is_empty());
}

/// WHAT: Reports accept any analyzer behind a trait object
/// WHY: The analyzer is injected, not hard-wired
#[test]
fn given_custom_analyzer_when_building_report_then_its_result_is_used() {
    // Given: An analyzer that scores by answered count
    struct CountingAnalyzer;
    impl InterviewAnalyzer for CountingAnalyzer {
        fn analyze(&self, outcome: Option<&SessionOutcome>) -> AnalysisResult {
            let mut result = mock_result();
            result.overall_score = outcome.map_or(0, |o| (o.non_empty_answers() * 25) as u8);
            result
        }
    }
    let analyzer: Box<dyn InterviewAnalyzer> = Box::new(CountingAnalyzer);

    // When: Building with a two-answer outcome
    let report = ResultReport::build(analyzer.as_ref(), Some(outcome()));

    // Then: The custom score is used
    assert_eq!(report.analysis.overall_score, 50);
    assert_eq!(report.analysis.grade(), ScoreGrade::NeedsImprovement);
}
