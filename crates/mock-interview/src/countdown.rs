//! Per-question countdown.
//!
//! A single tokio task emits `AppCommand::Tick` once per period for the
//! question it was armed for. Re-arming or cancelling aborts the previous
//! task, so at most one countdown is live at any time.

use crate::AppCommand;

use std::time::Duration;

use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};
use tracing::{debug, instrument};

/// Owner of the live countdown task, if any.
pub struct CountdownTimer {
    period: Duration,
    command_tx: mpsc::Sender<AppCommand>,
    handle: Option<JoinHandle<()>>,
    armed_for: Option<usize>,
}

impl CountdownTimer {
    /// Create an idle timer that will tick every `period`.
    pub fn new(period: Duration, command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self {
            period,
            command_tx,
            handle: None,
            armed_for: None,
        }
    }

    /// Start counting for `question_index`, cancelling any previous countdown.
    ///
    /// The first tick fires one full period after arming.
    #[instrument(skip(self))]
    pub fn arm(&mut self, question_index: usize) {
        self.cancel();

        let period = self.period;
        let command_tx = self.command_tx.clone();

        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if command_tx
                    .send(AppCommand::Tick { question_index })
                    .await
                    .is_err()
                {
                    debug!("Command channel closed, countdown stopping");
                    break;
                }
            }
        }));
        self.armed_for = Some(question_index);

        debug!(question_index, "Countdown armed");
    }

    /// Stop the countdown. No tick is sent after this returns, though ticks
    /// already queued in the channel may still be delivered.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!(question_index = ?self.armed_for, "Countdown cancelled");
        }
        self.armed_for = None;
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
