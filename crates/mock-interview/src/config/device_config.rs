use crate::config::default_enabled;

use serde::{Deserialize, Serialize};

/// Initial camera and microphone toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Camera on when a session opens.
    #[serde(default = "default_enabled")]
    pub video_enabled: bool,

    /// Microphone on when a session opens. Required to start.
    #[serde(default = "default_enabled")]
    pub audio_enabled: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            video_enabled: true,
            audio_enabled: true,
        }
    }
}
