//! Portal configuration loaded via OrthoConfig.
//!
//! Values come from `GRIEVANCE_*` environment variables or a configuration
//! file; command-line parsing is left to the CLI adapter.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::{DEFAULT_STORE_KEY, StoreKey, StoreKeyError};

const DEFAULT_DATA_DIR: &str = ".grievance";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Parse error for [`LogFormat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLogFormatError {
    /// Rejected input.
    pub input: String,
}

impl fmt::Display for ParseLogFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "log format must be `text` or `json`: {}", self.input)
    }
}

impl std::error::Error for ParseLogFormatError {}

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ParseLogFormatError {
                input: value.to_owned(),
            }),
        }
    }
}

/// Configuration values for the portal binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GRIEVANCE")]
pub struct PortalSettings {
    /// Directory holding the complaint record.
    pub data_dir: Option<String>,
    /// Key naming the complaint record.
    pub store_key: Option<String>,
    /// Pause before a confirmation is shown, in milliseconds.
    #[ortho_config(default = 0)]
    pub transition_delay_ms: u64,
    /// Log line format, `text` or `json`.
    pub log_format: Option<String>,
}

impl PortalSettings {
    /// Return the configured data directory, falling back to the default.
    pub fn data_dir(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR))
    }

    /// Return the configured store key, falling back to the default.
    pub fn store_key(&self) -> Result<StoreKey, StoreKeyError> {
        StoreKey::new(self.store_key.as_deref().unwrap_or(DEFAULT_STORE_KEY))
    }

    /// Return the configured log format, falling back to text.
    pub fn log_format(&self) -> Result<LogFormat, ParseLogFormatError> {
        self.log_format
            .as_deref()
            .map_or(Ok(LogFormat::default()), str::parse)
    }

    /// Pause applied after a mutation before its confirmation is shown.
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }
}
