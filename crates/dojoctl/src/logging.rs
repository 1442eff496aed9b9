//! Log setup for dojoctl
//!
//! While the TUI owns the terminal, tracing output goes to a file found by
//! this chain:
//! 1. $DOJOCTL_LOG_FILE (explicit override)
//! 2. `log.file` from the config
//! 3. $XDG_STATE_HOME/dojo/dojoctl.log
//! 4. ~/.local/state/dojo/dojoctl.log
//!
//! Plain subcommands log to stderr instead.

use dojo_common::config::LogConfig;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_ENV: &str = "DOJOCTL_LOG_FILE";

/// Where log lines should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

/// Pick the log file from the fallback chain
pub fn resolve_log_path(
    override_path: Option<OsString>,
    configured: Option<&Path>,
    xdg_state_home: Option<OsString>,
    home: Option<OsString>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(PathBuf::from(path));
    }
    if let Some(path) = configured {
        return Some(path.to_path_buf());
    }
    if let Some(state) = xdg_state_home {
        return Some(PathBuf::from(state).join("dojo").join("dojoctl.log"));
    }
    home.map(|home| PathBuf::from(home).join(".local/state/dojo/dojoctl.log"))
}

fn discover_log_path(config: &LogConfig) -> Option<PathBuf> {
    resolve_log_path(
        std::env::var_os(LOG_FILE_ENV),
        config.file.as_deref(),
        std::env::var_os("XDG_STATE_HOME"),
        std::env::var_os("HOME"),
    )
}

fn build_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber. Returns the log file in use, if any.
///
/// When no file can be opened for `LogTarget::File`, logging stays off so
/// nothing is written over the TUI.
pub fn init(config: &LogConfig, target: LogTarget) -> Option<PathBuf> {
    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(build_filter(config))
                .with_writer(std::io::stderr)
                .try_init();
            None
        }
        LogTarget::File => {
            let path = discover_log_path(config)?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).ok()?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .ok()?;

            tracing_subscriber::fmt()
                .with_env_filter(build_filter(config))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .ok()?;
            Some(path)
        }
    }
}
