//! Terminal rendering.
//!
//! Turns [`ViewEvent`]s into text and writes them to the terminal. Rendering
//! is a pure function so it can be tested without a terminal.
//!
//! Once a question screen is on the terminal its index is published, so input
//! can be attributed to the question the candidate actually saw.

use crate::{AppResult, ViewEvent};

use std::fmt::Write as _;

use interview_core::{
    AnalysisResult, BadgeTone, CategoryFilter, Icon, InterviewModule, ModuleCatalog, ReportSource,
    ResultReport, SessionSnapshot, format_clock,
};
use tokio::{
    io::{AsyncWrite, AsyncWriteExt},
    sync::{mpsc, watch},
};
use tracing::{debug, instrument};

const BRIEFING_TIPS: [&str; 4] = [
    "Stay relaxed and express your ideas naturally",
    "Support your answers with concrete examples",
    "Watch the clock so every answer is complete",
    "Your delivery and content will be analysed",
];

/// Writes rendered view events to a terminal.
pub struct Presenter<W> {
    out: W,
    shown_tx: watch::Sender<usize>,
}

impl<W> Presenter<W>
where
    W: AsyncWrite + Unpin,
{
    /// Create a presenter writing to `out` and publishing the index of the
    /// question on screen to `shown_tx`.
    pub fn new(out: W, shown_tx: watch::Sender<usize>) -> Self {
        Self { out, shown_tx }
    }

    /// Render events until the sending side closes.
    #[instrument(skip_all)]
    pub async fn run(mut self, mut view_rx: mpsc::Receiver<ViewEvent>) -> AppResult<()> {
        while let Some(event) = view_rx.recv().await {
            let text = render(&event);
            self.out.write_all(text.as_bytes()).await?;
            self.out.flush().await?;

            match &event {
                ViewEvent::Question(snapshot) | ViewEvent::Briefing { snapshot, .. } => {
                    self.shown_tx.send_replace(snapshot.question_index);
                }
                _ => {}
            }
        }

        debug!("View channel closed, presenter stopping");
        Ok(())
    }
}

/// Render one event as terminal text, newline-terminated.
pub fn render(event: &ViewEvent) -> String {
    match event {
        ViewEvent::Catalog { catalog, filter } => render_catalog(catalog, *filter),
        ViewEvent::Briefing { module, snapshot } => render_briefing(module, snapshot),
        ViewEvent::Question(snapshot) => render_question(snapshot),
        ViewEvent::Clock { time_remaining } => {
            format!("[{} left]\n", format_clock(*time_remaining))
        }
        ViewEvent::Notice { title, body } => format!("** {} ** {}\n", title, body),
        ViewEvent::Analysing => {
            "Analysing your answers, communication and overall performance...\n".to_string()
        }
        ViewEvent::Report(report) => render_report(report),
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn badge(label: &str, tone: BadgeTone) -> String {
    let colour = match tone {
        BadgeTone::Green => "32",
        BadgeTone::Yellow => "33",
        BadgeTone::Orange => "38;5;208",
        BadgeTone::Red => "31",
    };
    format!("\x1b[{}m[{}]\x1b[0m", colour, label)
}

fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Brain => "🧠",
        Icon::Users => "👥",
        Icon::Award => "🏆",
        Icon::Video => "🎥",
    }
}

fn module_line(module: &InterviewModule) -> String {
    format!(
        "{} {} {} {} min",
        glyph(module.category.icon()),
        module.category,
        badge(module.difficulty.label(), module.difficulty.tone()),
        module.duration_minutes
    )
}

fn render_catalog(catalog: &ModuleCatalog, filter: CategoryFilter) -> String {
    let mut out = String::new();
    let heading = match filter {
        CategoryFilter::All => "All modules",
        CategoryFilter::Only(category) => category.label(),
    };
    let _ = writeln!(out, "=== Practice modules: {} ===", heading);

    let average = match catalog.average_score() {
        Some(score) => format!("{}/100", score),
        None => "no scores yet".to_string(),
    };
    let _ = writeln!(
        out,
        "Completed {} of {} ({:.0}%)   Average score: {}",
        catalog.completed_count(),
        catalog.modules().len(),
        catalog.completion_percent(),
        average
    );

    let mut listed = 0;
    for module in catalog.filter(filter) {
        listed += 1;
        let _ = writeln!(out, "[{}] {}", module.id, module.title);
        let _ = writeln!(out, "    {}", module_line(module));
        let _ = writeln!(out, "    {}", module.description);
        if let Some(score) = module.score.filter(|_| module.completed) {
            let _ = writeln!(out, "    Completed, score {}/100", score);
        }
    }

    if listed == 0 {
        let _ = writeln!(out, "No modules in this category.");
    } else {
        let _ = writeln!(out, "Run `mock-interview <ID>` to practise a module.");
    }
    out
}

fn render_briefing(module: &InterviewModule, snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", module.title);
    let _ = writeln!(out, "{}", module_line(module));
    let _ = writeln!(
        out,
        "You will answer {} questions, each with its own time limit.",
        snapshot.question_count
    );
    let _ = writeln!(
        out,
        "Camera: {}   Microphone: {}",
        on_off(snapshot.video_enabled),
        on_off(snapshot.audio_enabled)
    );
    for tip in BRIEFING_TIPS {
        let _ = writeln!(out, "  - {}", tip);
    }
    if snapshot.audio_enabled {
        let _ = writeln!(out, "Type /start to begin.");
    } else {
        let _ = writeln!(out, "Turn the microphone on (/audio) to begin.");
    }
    out
}

fn render_question(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "--- Question {}/{} ({:.0}%) [{}] ---",
        snapshot.question_index + 1,
        snapshot.question_count,
        snapshot.progress_percent(),
        format_clock(snapshot.time_remaining)
    );

    if let Some(question) = &snapshot.question {
        let _ = writeln!(out, "[{}] {}", question.category, question.prompt);
        if !question.hints.is_empty() {
            let _ = writeln!(out, "Hints:");
            for hint in &question.hints {
                let _ = writeln!(out, "  - {}", hint);
            }
        }
    }

    let action = if snapshot.is_last_question() {
        "finish the interview"
    } else {
        "go to the next question"
    };
    let _ = writeln!(
        out,
        "Camera: {}  Recording: {}  |  Type your answer, /next to {}.",
        on_off(snapshot.video_enabled),
        on_off(snapshot.recording),
        action
    );
    out
}

fn render_list(out: &mut String, heading: &str, items: &[String]) {
    let _ = writeln!(out, "{}:", heading);
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
}

fn render_analysis(out: &mut String, analysis: &AnalysisResult) {
    let grade = analysis.grade();
    let _ = writeln!(
        out,
        "Overall score: {}/100 {} - {}",
        analysis.overall_score,
        badge(grade.label(), grade.tone()),
        analysis.category
    );
    for (label, score) in analysis.detailed_scores.labelled() {
        let _ = writeln!(out, "  {:<14} {:>3}", label, score);
    }
    render_list(out, "Strengths", &analysis.strengths);
    render_list(out, "To improve", &analysis.improvements);
    render_list(out, "Recommendations", &analysis.recommendations);

    let _ = writeln!(out, "Next steps:");
    for (i, step) in analysis.next_steps.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, step);
    }
}

fn render_report(report: &ResultReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Interview Results ===");

    render_analysis(&mut out, &report.analysis);

    match report.source {
        ReportSource::Session => {
            let _ = writeln!(out, "Your answers:");
            for entry in &report.transcript {
                let answer = if entry.answer.trim().is_empty() {
                    "(no answer)"
                } else {
                    entry.answer.as_str()
                };
                let _ = writeln!(out, "  Q{}: {}", entry.question.id, entry.question.prompt);
                let _ = writeln!(out, "      {}", answer);
            }
        }
        ReportSource::Fallback => {
            let _ = writeln!(out, "(sample results, no interview answers were received)");
        }
    }

    let _ = writeln!(out, "Type /retry to practise again or /quit to exit.");
    out
}
