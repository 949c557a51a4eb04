use crate::{
    AppCommand, AppResult, CountdownTimer, DelayedTask, ViewEvent, ViewStage,
    config::{Config, DeviceConfig, SessionConfig},
};

use std::{ops::ControlFlow, sync::Arc};

use interview_core::{
    InterviewAnalyzer, InterviewModule, InterviewSession, Question, ResultReport, SessionOutcome,
    SessionSnapshot, Transition,
};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, trace, warn};
use uuid::Uuid;

/// Channel ends the application loop owns.
pub struct AppChannels {
    pub(crate) command_tx: mpsc::Sender<AppCommand>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) view_tx: mpsc::Sender<ViewEvent>,
    pub(crate) snapshot_tx: watch::Sender<SessionSnapshot>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

/// Main application state.
///
/// Sole owner of the interview session. Every mutation happens here, in
/// response to one [`AppCommand`] at a time, so ticks, clicks and handoffs
/// never interleave.
pub struct App {
    module: InterviewModule,
    questions: Vec<Question>,
    timing: SessionConfig,
    devices: DeviceConfig,
    analyzer: Arc<dyn InterviewAnalyzer>,
    session: InterviewSession,
    session_id: Uuid,
    stage: ViewStage,
    countdown: CountdownTimer,
    handoff: Option<DelayedTask>,
    analysis: Option<DelayedTask>,
    command_tx: mpsc::Sender<AppCommand>,
    command_rx: mpsc::Receiver<AppCommand>,
    view_tx: mpsc::Sender<ViewEvent>,
    snapshot_tx: watch::Sender<SessionSnapshot>,
    shutdown_tx: watch::Sender<bool>,
}

impl App {
    /// Build the application for one practice module.
    ///
    /// # Errors
    ///
    /// Returns an error if `questions` is empty.
    #[track_caller]
    pub fn new(
        config: &Config,
        module: &InterviewModule,
        questions: Vec<Question>,
        analyzer: Arc<dyn InterviewAnalyzer>,
        channels: AppChannels,
    ) -> AppResult<Self> {
        let session = InterviewSession::new(questions.clone())?
            .with_devices(config.devices.video_enabled, config.devices.audio_enabled);
        let countdown =
            CountdownTimer::new(config.session.tick_interval(), channels.command_tx.clone());

        channels.snapshot_tx.send_replace(session.snapshot());

        Ok(Self {
            module: module.clone(),
            questions,
            timing: config.session.clone(),
            devices: config.devices.clone(),
            analyzer,
            session,
            session_id: Uuid::new_v4(),
            stage: ViewStage::Briefing,
            countdown,
            handoff: None,
            analysis: None,
            command_tx: channels.command_tx,
            command_rx: channels.command_rx,
            view_tx: channels.view_tx,
            snapshot_tx: channels.snapshot_tx,
            shutdown_tx: channels.shutdown_tx,
        })
    }

    /// Id of the current session, for log correlation and result routing.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Run the main application event loop.
    #[instrument(skip(self), fields(module = %self.module.title))]
    pub async fn run(mut self) -> AppResult<()> {
        info!(session_id = %self.session_id, "Mock interview starting");

        self.show_briefing().await;

        while let Some(command) = self.command_rx.recv().await {
            if self.handle_command(command).await.is_break() {
                break;
            }
        }

        self.teardown();

        let _ = self.shutdown_tx.send(true);
        info!("Mock interview shut down");

        Ok(())
    }

    async fn handle_command(&mut self, command: AppCommand) -> ControlFlow<()> {
        match command {
            AppCommand::Start => self.start().await,
            AppCommand::Tick { question_index } => {
                let transition = self.session.tick(question_index);
                self.apply(transition).await;
            }
            AppCommand::Advance { question_index } => {
                let transition = self.session.advance(question_index);
                self.apply(transition).await;
            }
            AppCommand::AppendDraft {
                question_index,
                text,
            } => self.edit_draft(question_index, Some(text)).await,
            AppCommand::ClearDraft { question_index } => {
                self.edit_draft(question_index, None).await
            }
            AppCommand::ToggleVideo
            | AppCommand::ToggleAudio
            | AppCommand::ToggleRecording => self.toggle(command).await,
            AppCommand::ShowResults {
                session_id,
                outcome,
            } => self.show_results(session_id, outcome).await,
            AppCommand::ReportReady { session_id, report } => {
                self.report_ready(session_id, report).await
            }
            AppCommand::Restart => self.restart().await,
            AppCommand::Shutdown => {
                info!("Shutdown requested");
                return ControlFlow::Break(());
            }
        }

        ControlFlow::Continue(())
    }

    #[instrument(skip(self), fields(session_id = %self.session_id))]
    async fn start(&mut self) {
        if self.stage != ViewStage::Briefing {
            debug!(stage = ?self.stage, "Start ignored");
            return;
        }

        match self.session.start() {
            Ok(time_remaining) => {
                self.stage = ViewStage::Interviewing;
                self.countdown.arm(self.session.current_index());
                self.publish();

                info!(time_remaining, "Interview started");

                self.show(ViewEvent::notice(
                    "Interview started",
                    "Answer the first question. Relax and show your best!",
                ))
                .await;
                self.show(ViewEvent::Question(self.session.snapshot()))
                    .await;
            }
            Err(e) => {
                warn!(error = ?e, "Start rejected");
                self.show(ViewEvent::notice(
                    "Microphone is off",
                    "Turn the microphone on (/audio) before starting.",
                ))
                .await;
            }
        }
    }

    async fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Counted { time_remaining } => {
                self.publish();
                if announce_clock(time_remaining) {
                    self.show(ViewEvent::Clock { time_remaining }).await;
                }
            }
            Transition::NextQuestion {
                question_index,
                time_remaining,
            } => {
                self.countdown.arm(question_index);
                self.publish();

                info!(
                    session_id = %self.session_id,
                    question_index,
                    time_remaining,
                    "Moved to next question"
                );

                self.show(ViewEvent::notice(
                    "Next question",
                    format!("Question {}, keep it up!", question_index + 1),
                ))
                .await;
                self.show(ViewEvent::Question(self.session.snapshot()))
                    .await;
            }
            Transition::Completed(outcome) => {
                self.countdown.cancel();
                self.stage = ViewStage::Submitting;
                self.publish();

                info!(
                    session_id = %self.session_id,
                    answers = outcome.answers.len(),
                    "Interview completed"
                );

                self.show(ViewEvent::notice(
                    "Interview complete!",
                    "Analysing your performance, please wait...",
                ))
                .await;
                self.schedule_handoff(outcome);
            }
            Transition::Ignored => {
                trace!(session_id = %self.session_id, "Event ignored by session");
            }
        }
    }

    fn schedule_handoff(&mut self, outcome: SessionOutcome) {
        let command_tx = self.command_tx.clone();
        let session_id = self.session_id;

        self.handoff = Some(DelayedTask::schedule(
            "handoff",
            self.timing.handoff_delay(),
            async move {
                let command = AppCommand::ShowResults {
                    session_id,
                    outcome: Some(outcome),
                };
                if command_tx.send(command).await.is_err() {
                    debug!(session_id = %session_id, "App gone before handoff");
                }
            },
        ));
    }

    /// Mount the results stage. Any running interview is unmounted.
    #[instrument(skip(self, outcome), fields(has_outcome = outcome.is_some()))]
    async fn show_results(&mut self, session_id: Uuid, outcome: Option<SessionOutcome>) {
        if session_id != self.session_id {
            debug!(%session_id, current = %self.session_id, "Stale handoff ignored");
            return;
        }

        self.countdown.cancel();
        self.handoff = None;
        self.stage = ViewStage::Analysing;
        self.show(ViewEvent::Analysing).await;

        let analyzer = Arc::clone(&self.analyzer);
        let command_tx = self.command_tx.clone();

        self.analysis = Some(DelayedTask::schedule(
            "analysis",
            self.timing.analysis_delay(),
            async move {
                let report = ResultReport::build(analyzer.as_ref(), outcome);
                let command = AppCommand::ReportReady {
                    session_id,
                    report: Box::new(report),
                };
                if command_tx.send(command).await.is_err() {
                    debug!(session_id = %session_id, "App gone before analysis finished");
                }
            },
        ));
    }

    async fn report_ready(&mut self, session_id: Uuid, report: Box<ResultReport>) {
        if session_id != self.session_id || self.stage != ViewStage::Analysing {
            debug!(%session_id, stage = ?self.stage, "Stale report ignored");
            return;
        }

        self.analysis = None;
        self.stage = ViewStage::Results;

        info!(
            session_id = %session_id,
            overall_score = report.analysis.overall_score,
            source = ?report.source,
            "Report ready"
        );

        self.show(ViewEvent::Report(report)).await;
    }

    async fn edit_draft(&mut self, question_index: usize, text: Option<String>) {
        if self.stage != ViewStage::Interviewing {
            if self.stage == ViewStage::Briefing {
                self.show(ViewEvent::notice("Not started", "Type /start to begin."))
                    .await;
            }
            debug!(stage = ?self.stage, "Draft edit ignored");
            return;
        }

        if question_index != self.session.current_index() {
            debug!(
                question_index,
                current = self.session.current_index(),
                "Stale draft edit ignored"
            );
            return;
        }

        match text {
            Some(text) => self.session.append_draft(&text),
            None => self.session.set_draft(String::new()),
        }
        self.publish();
    }

    async fn toggle(&mut self, command: AppCommand) {
        if !matches!(self.stage, ViewStage::Briefing | ViewStage::Interviewing) {
            debug!(stage = ?self.stage, "Device toggle ignored");
            return;
        }

        let notice = match command {
            AppCommand::ToggleVideo => {
                let on = self.session.toggle_video();
                ViewEvent::notice("Camera", if on { "on" } else { "off" })
            }
            AppCommand::ToggleAudio => {
                let on = self.session.toggle_audio();
                ViewEvent::notice("Microphone", if on { "on" } else { "off" })
            }
            AppCommand::ToggleRecording => {
                if self.session.toggle_recording() {
                    ViewEvent::notice("Recording started", "Your spoken delivery is being analysed")
                } else {
                    ViewEvent::notice("Recording stopped", "")
                }
            }
            _ => return,
        };

        self.publish();
        debug!(
            video = self.session.video_enabled(),
            audio = self.session.audio_enabled(),
            recording = self.session.is_recording(),
            "Devices toggled"
        );
        self.show(notice).await;
    }

    #[instrument(skip(self), fields(previous = %self.session_id))]
    async fn restart(&mut self) {
        if self.stage == ViewStage::Briefing {
            debug!("Restart ignored, session not started");
            return;
        }

        self.teardown();

        let session = match InterviewSession::new(self.questions.clone()) {
            Ok(session) => session,
            Err(e) => {
                warn!(error = ?e, "Restart failed");
                return;
            }
        };

        self.session =
            session.with_devices(self.devices.video_enabled, self.devices.audio_enabled);
        self.session_id = Uuid::new_v4();
        self.stage = ViewStage::Briefing;
        self.publish();

        info!(session_id = %self.session_id, "Session restarted");

        self.show_briefing().await;
    }

    async fn show_briefing(&self) {
        self.show(ViewEvent::Briefing {
            module: self.module.clone(),
            snapshot: self.session.snapshot(),
        })
        .await;
    }

    /// Cancel every pending timer and delayed task.
    fn teardown(&mut self) {
        self.countdown.cancel();
        if let Some(handoff) = self.handoff.take() {
            handoff.cancel();
        }
        if let Some(analysis) = self.analysis.take() {
            analysis.cancel();
        }
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(self.session.snapshot());
    }

    async fn show(&self, event: ViewEvent) {
        if let Err(e) = self.view_tx.send(event).await {
            warn!(error = ?e, "Presenter gone, dropping view event");
        }
    }
}

/// Clock reminders every half minute and for the final seconds.
pub(crate) fn announce_clock(time_remaining: u32) -> bool {
    time_remaining % 30 == 0 || time_remaining <= 5
}
