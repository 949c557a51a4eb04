//! Line-oriented terminal input.
//!
//! Reads lines, turns them into [`AppCommand`]s and forwards them to the
//! application loop. Commands are tagged with the last question the presenter
//! rendered, not the session's live index: a line typed while the countdown
//! moves on still belongs to the question the candidate was reading.

use crate::{AppCommand, AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::{mpsc, watch},
};
use tracing::{debug, info, instrument};

/// Forwards terminal input to the application loop.
pub struct InputHandler {
    command_tx: mpsc::Sender<AppCommand>,
    shown_rx: watch::Receiver<usize>,
}

impl InputHandler {
    /// Create a handler sending to `command_tx`, tagging commands with the
    /// question index published on `shown_rx`.
    pub fn new(command_tx: mpsc::Sender<AppCommand>, shown_rx: watch::Receiver<usize>) -> Self {
        Self {
            command_tx,
            shown_rx,
        }
    }

    /// Run the input loop until shutdown or end of input.
    ///
    /// End of input is treated as `/quit`.
    #[instrument(skip_all)]
    pub async fn run<R>(&self, reader: R, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Input handler shutting down");
                    break;
                }
                line = lines.next_line() => {
                    match line? {
                        Some(line) => {
                            if self.handle_line(&line).await? {
                                break;
                            }
                        }
                        None => {
                            debug!("End of input");
                            self.send(AppCommand::Shutdown).await?;
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Forward one line. Returns `true` when the line asked to quit.
    async fn handle_line(&self, line: &str) -> AppResult<bool> {
        let shown_index = *self.shown_rx.borrow();

        let Some(command) = AppCommand::parse(line, shown_index) else {
            return Ok(false);
        };

        let quit = matches!(command, AppCommand::Shutdown);
        self.send(command).await?;
        Ok(quit)
    }

    async fn send(&self, command: AppCommand) -> AppResult<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to forward input: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
