use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Question bank source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionConfig {
    /// TOML question bank to use instead of the built-in questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_path: Option<PathBuf>,
}
