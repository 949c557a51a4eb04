#[allow(clippy::module_inception)]
mod config;
mod device_config;
mod logging_config;
mod question_config;
mod session_config;

pub(crate) use {
    config::Config, device_config::DeviceConfig, logging_config::LoggingConfig,
    question_config::QuestionConfig, session_config::SessionConfig,
};

pub(crate) const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
pub(crate) const DEFAULT_HANDOFF_DELAY_MS: u64 = 2000;
pub(crate) const DEFAULT_ANALYSIS_DELAY_MS: u64 = 3000;
pub(crate) const DEFAULT_LOG_FILTER: &str = "mock_interview=info,interview_core=info";

pub(crate) fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

pub(crate) fn default_handoff_delay_ms() -> u64 {
    DEFAULT_HANDOFF_DELAY_MS
}

pub(crate) fn default_analysis_delay_ms() -> u64 {
    DEFAULT_ANALYSIS_DELAY_MS
}

pub(crate) fn default_enabled() -> bool {
    true
}

pub(crate) fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}
