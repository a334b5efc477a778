//! Configuration types for the Stellarium goto tool

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub stellarium: StellariumConfig,
    #[serde(default)]
    pub header: HeaderConfig,
}

/// Stellarium remote control endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StellariumConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Pause after sending the view command
    #[serde(default = "default_settle_delay")]
    pub settle_delay_ms: u64,
}

/// FITS header reading limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderConfig {
    #[serde(default = "default_max_blocks")]
    pub max_blocks: usize,
}

fn default_url() -> String {
    "http://localhost:8090/api/main/view".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_settle_delay() -> u64 {
    2000
}

fn default_max_blocks() -> usize {
    rp_fits_header::DEFAULT_MAX_BLOCKS
}

impl Default for StellariumConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_seconds: default_timeout(),
            settle_delay_ms: default_settle_delay(),
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            max_blocks: default_max_blocks(),
        }
    }
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::GotoError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    if config.stellarium.url.trim().is_empty() {
        return Err(crate::GotoError::Config(
            "stellarium.url must not be empty".to_string(),
        ));
    }
    Ok(config)
}
