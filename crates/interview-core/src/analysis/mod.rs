mod analyzer;
mod report;
mod result;

pub use {
    analyzer::{InterviewAnalyzer, PlaceholderAnalyzer, mock_result},
    report::{AnsweredQuestion, ReportSource, ResultReport},
    result::{AnalysisResult, DetailedScores, ScoreGrade},
};
