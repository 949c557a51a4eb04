use crate::config::{
    default_analysis_delay_ms, default_handoff_delay_ms, default_tick_interval_ms,
};

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Session timing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Countdown tick period in milliseconds. One tick removes one second.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Delay between completing the last question and showing results.
    #[serde(default = "default_handoff_delay_ms")]
    pub handoff_delay_ms: u64,

    /// Simulated analysis time on the results stage.
    #[serde(default = "default_analysis_delay_ms")]
    pub analysis_delay_ms: u64,
}

impl SessionConfig {
    pub(crate) fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub(crate) fn handoff_delay(&self) -> Duration {
        Duration::from_millis(self.handoff_delay_ms)
    }

    pub(crate) fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            handoff_delay_ms: default_handoff_delay_ms(),
            analysis_delay_ms: default_analysis_delay_ms(),
        }
    }
}
