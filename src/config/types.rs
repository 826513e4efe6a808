// Configuration type definitions

use serde::Deserialize;

use crate::batch::{MAX_BATCH_COUNT, MIN_BATCH_COUNT};

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Quote API configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
        }
    }
}

/// Batch copy configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    /// Count pre-filled in the batch prompt
    #[serde(default = "default_batch_count")]
    pub default_count: u32,
}

fn default_batch_count() -> u32 {
    10
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            default_count: default_batch_count(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

impl Config {
    /// Trim the API base URL and clamp the batch default into the accepted range
    pub fn normalized(mut self) -> Self {
        self.api.base_url = self.api.base_url.trim().trim_end_matches('/').to_string();
        if self.api.base_url.is_empty() {
            self.api.base_url = default_base_url();
        }
        self.batch.default_count = self
            .batch
            .default_count
            .clamp(MIN_BATCH_COUNT as u32, MAX_BATCH_COUNT as u32);
        self
    }
}
