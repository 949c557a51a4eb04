//! Mock-Interview: timed practice interviews in the terminal.

mod app;
mod app_command;
mod cli;
mod config;
mod countdown;
mod delayed_task;
mod error;
mod input_handler;
mod presenter;
#[cfg(test)]
mod tests;
mod view_event;
mod view_stage;

pub(crate) use {
    app::{App, AppChannels},
    app_command::AppCommand,
    cli::Cli,
    countdown::CountdownTimer,
    delayed_task::DelayedTask,
    error::{AppError, Result as AppResult},
    input_handler::InputHandler,
    presenter::Presenter,
    view_event::ViewEvent,
    view_stage::ViewStage,
};

use crate::config::Config;

use std::{panic::Location, sync::Arc, time::Duration};

use clap::Parser;
use error_location::ErrorLocation;
use interview_core::{CategoryFilter, ModuleCatalog, PlaceholderAnalyzer, SessionSnapshot};
use tokio::{
    io::BufReader,
    sync::{mpsc, watch},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application entry point.
fn main() {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    let result = rt.block_on(run(config, cli));

    // Stdin is read on a blocking thread that cannot be interrupted;
    // don't wait on it.
    rt.shutdown_timeout(Duration::from_secs(1));

    if let Err(e) = result {
        error!(error = ?e, "Mock interview failed");
        std::process::exit(1);
    }
}

async fn run(config: Config, cli: Cli) -> AppResult<()> {
    let catalog = ModuleCatalog::builtin();

    if let Some(category) = cli.list {
        return list_modules(catalog, category.into()).await;
    }

    let module = catalog
        .find(&cli.module_id)
        .ok_or_else(|| AppError::UnknownModule {
            module_id: cli.module_id.clone(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let bank = config.question_bank()?;
    let questions = bank.questions_for(&module.id).to_vec();

    let (command_tx, command_rx) = mpsc::channel(32);
    let (view_tx, view_rx) = mpsc::channel(32);
    let (snapshot_tx, snapshot_rx) = watch::channel(SessionSnapshot::default());
    let (shown_tx, shown_rx) = watch::channel(0);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let input_handler = InputHandler::new(command_tx.clone(), shown_rx);

    let app = App::new(
        &config,
        module,
        questions,
        Arc::new(PlaceholderAnalyzer),
        AppChannels {
            command_tx: command_tx.clone(),
            command_rx,
            view_tx,
            snapshot_tx,
            shutdown_tx,
        },
    )?;

    if cli.results {
        info!("Opening results without a session");
        command_tx
            .send(AppCommand::ShowResults {
                session_id: app.session_id(),
                outcome: None,
            })
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send ShowResults: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }
    drop(command_tx);

    let presenter = tokio::spawn(Presenter::new(tokio::io::stdout(), shown_tx).run(view_rx));
    let stdin = BufReader::new(tokio::io::stdin());

    let (input_result, app_result) = tokio::join!(input_handler.run(stdin, shutdown_rx), app.run());

    if let Err(e) = input_result {
        error!(error = ?e, "Input handler error");
    }

    join_presenter(presenter).await;

    let last = snapshot_rx.borrow();
    info!(
        module = %module.id,
        phase = %last.phase,
        answered = last.answered,
        question_count = last.question_count,
        "Session ended"
    );

    app_result
}

/// Print the module list and exit without starting a session.
async fn list_modules(catalog: ModuleCatalog, filter: CategoryFilter) -> AppResult<()> {
    let (view_tx, view_rx) = mpsc::channel(1);
    let (shown_tx, _shown_rx) = watch::channel(0);
    let presenter = tokio::spawn(Presenter::new(tokio::io::stdout(), shown_tx).run(view_rx));

    view_tx
        .send(ViewEvent::Catalog { catalog, filter })
        .await
        .map_err(|e| AppError::ChannelSendFailed {
            message: format!("Failed to send module list: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;
    drop(view_tx);

    join_presenter(presenter).await;
    Ok(())
}

async fn join_presenter(presenter: tokio::task::JoinHandle<AppResult<()>>) {
    match presenter.await {
        Ok(Err(e)) => error!(error = ?e, "Presenter error"),
        Err(e) => error!(error = ?e, "Presenter task panicked"),
        Ok(Ok(())) => {}
    }
}
