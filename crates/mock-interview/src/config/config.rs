//! Settings file for the interview binary.
//!
//! A single `config.toml` in the platform config directory. Missing sections
//! fall back to their defaults; a missing file is written out on first run.

use crate::{
    AppError, AppResult,
    config::{DeviceConfig, LoggingConfig, QuestionConfig, SessionConfig},
};

use std::{
    fs,
    io::{self, Write},
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use interview_core::QuestionBank;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings for one run of the interview binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Countdown and handoff timing.
    #[serde(default)]
    pub session: SessionConfig,
    /// Initial device toggles.
    #[serde(default)]
    pub devices: DeviceConfig,
    /// Question bank source.
    #[serde(default)]
    pub questions: QuestionConfig,
    /// Log filter.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Read settings from the platform config path, writing defaults on first run.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path).map_err(|e| AppError::ConfigError {
                reason: format!("Cannot read {:?}: {}", config_path, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let config = Self::parse(&contents)?;

            info!(config_path = ?config_path, "Settings loaded");

            Ok(config)
        } else {
            info!(config_path = ?config_path, "First run, writing default settings");
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Parse and validate configuration text.
    #[track_caller]
    pub fn parse(contents: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Invalid settings file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Reject settings the session loop cannot run with.
    #[track_caller]
    pub fn validate(&self) -> AppResult<()> {
        if self.session.tick_interval_ms == 0 {
            return Err(AppError::ConfigError {
                reason: "session.tick_interval_ms must be greater than zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(path) = &self.questions.bank_path {
            if !path.exists() {
                return Err(AppError::ConfigError {
                    reason: format!("Question bank not found at: {:?}", path),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(())
    }

    /// Resolve the question bank: the configured file, or the built-in questions.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn question_bank(&self) -> AppResult<QuestionBank> {
        let Some(path) = &self.questions.bank_path else {
            debug!("Using built-in question bank");
            return Ok(QuestionBank::builtin());
        };

        let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read question bank {:?}: {}", path, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let bank: QuestionBank = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse question bank {:?}: {}", path, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        bank.validate()?;

        info!(bank_path = ?path, "Question bank loaded");

        Ok(bank)
    }

    /// Write the configuration to its platform config path.
    ///
    /// The file is replaced through a sibling `.toml.tmp` so a crash never
    /// leaves a half-written config behind.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_path()?;

        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Cannot encode settings as TOML: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        replace_file(&config_path, contents.as_bytes()).map_err(|e| AppError::ConfigError {
            reason: format!("Cannot write {:?}: {}", config_path, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Settings written");

        Ok(())
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let Some(dirs) = ProjectDirs::from("com", "mock-interview", "Mock-Interview") else {
            return Err(AppError::ConfigError {
                reason: "No home directory to keep settings in".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let dir = dirs.config_dir();
        if !dir.is_dir() {
            fs::create_dir_all(dir)?;
            debug!(dir = ?dir, "Settings directory created");
        }

        Ok(dir.join(CONFIG_FILE_NAME))
    }
}

fn replace_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let staging = path.with_extension("toml.tmp");

    let mut file = fs::File::create(&staging)?;
    file.write_all(bytes)?;
    file.sync_all()?;

    fs::rename(&staging, path)
}
