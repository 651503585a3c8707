//! UI configuration, loaded from a JSON file.
//!
//! Every field has a default, so an empty object is a valid config.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use humanize_ai::WritingVariety;
use humanize_core::HistoryConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub history: HistoryConfig,

    /// Quiet period before a burst of keystrokes is committed as one undo
    /// step. Zero commits every edit.
    #[serde(default)]
    pub coalesce_ms: u64,

    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,

    #[serde(default)]
    pub default_variety: WritingVariety,

    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            coalesce_ms: 0,
            copy_feedback_ms: default_copy_feedback_ms(),
            default_variety: WritingVariety::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl UiConfig {
    pub fn coalesce(&self) -> Duration {
        Duration::from_millis(self.coalesce_ms)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: UiConfig = serde_json::from_str(json).context("parse ui config json")?;
        config.history.validate().context("invalid history config")?;
        Ok(config)
    }
}

/// Load and validate a config file.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<UiConfig> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let config = UiConfig::from_json(&data)
        .with_context(|| format!("load config file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Loaded ui config");
    Ok(config)
}
