//! Mental Dojo configuration
//!
//! Configuration lives in `<config_dir>/dojo/config.toml` unless a path is
//! given explicitly or through `$DOJO_CONFIG`. Every field has a default, so
//! an empty or partial file is valid.

use crate::error::DojoError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "DOJO_CONFIG";

const APP_DIR: &str = "dojo";
const CONFIG_FILE: &str = "config.toml";

/// Presentation timers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Input lockout after a wrong answer (ms, valid: 0-10000)
    #[serde(default = "default_error_delay_ms")]
    pub error_delay_ms: u64,

    /// Success/error background flash (ms, valid: 0-5000)
    #[serde(default = "default_flash_ms")]
    pub flash_ms: u64,
}

fn default_error_delay_ms() -> u64 {
    1500
}

fn default_flash_ms() -> u64 {
    400
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            error_delay_ms: default_error_delay_ms(),
            flash_ms: default_flash_ms(),
        }
    }
}

impl TimingConfig {
    pub fn effective_error_delay(&self) -> Duration {
        Duration::from_millis(self.error_delay_ms.clamp(0, 10_000))
    }

    pub fn effective_flash(&self) -> Duration {
        Duration::from_millis(self.flash_ms.clamp(0, 5_000))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Submit as soon as the typed answer is as long as the expected one
    #[serde(default = "default_auto_submit")]
    pub auto_submit: bool,
}

fn default_auto_submit() -> bool {
    true
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            auto_submit: default_auto_submit(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fixed RNG seed; entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// tracing filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file used while the TUI owns the terminal
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Complete Mental Dojo configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DojoConfig {
    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl DojoConfig {
    /// Load a specific file. Missing or malformed files are errors.
    pub fn load_from(path: &Path) -> Result<Self, DojoError> {
        let content = fs::read_to_string(path).map_err(|source| DojoError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| DojoError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve config: explicit path, then `$DOJO_CONFIG`, then the default
    /// location. Only the default location may be absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, DojoError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }

        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn to_toml(&self) -> Result<String, DojoError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Default config file location
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
