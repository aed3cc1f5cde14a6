// Configuration for the scanner bridge

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// MAC address or advertised name of the R6 reader to target.
    /// Absent means the built-in PDA engine.
    #[serde(default)]
    pub device: Option<String>,
    #[serde(default = "default_scan_timeout_ms")]
    pub scan_timeout_ms: u64,
}

impl ScannerConfig {
    pub fn scan_timeout(&self) -> Duration {
        Duration::from_millis(self.scan_timeout_ms)
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            device: None,
            scan_timeout_ms: default_scan_timeout_ms(),
        }
    }
}

// Matches the native side's default scan window.
fn default_scan_timeout_ms() -> u64 {
    5000
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load_config(path: impl AsRef<Path>) -> Result<ScannerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ScannerConfig = serde_json::from_str(&content)?;
    Ok(config)
}
