//! Logging and tracing setup for the CLI.
//!
//! Human-facing results go to stdout; diagnostics go to a JSONL log file via
//! `tracing-appender` so they never interleave with command output. The log
//! location is resolved from environment variables, then configuration, then
//! the platform data directory.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Where log output should be written.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Explicit log file path (takes precedence over `log_dir`).
    pub log_path: Option<PathBuf>,
    /// Directory for dated log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve log destination from the environment, with a config-file
    /// fallback for the directory.
    ///
    /// Precedence: `HILLTOP_LOG_PATH` > `HILLTOP_LOG_DIR` > config `log_dir`
    /// > platform data-local directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("HILLTOP_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("HILLTOP_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(default_log_dir);

        Self { log_path, log_dir }
    }
}

/// Default log directory under the platform data-local dir.
fn default_log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "hilltop")
        .map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Build the log filter from CLI verbosity flags and the configured level.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` forces `error`, each `-v`
/// steps the level up from the config default.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if quiet {
        "error"
    } else {
        match (config_level, verbose) {
            (level, 0) => level,
            ("error" | "warn" | "info", 1) => "debug",
            _ => "trace",
        }
    };

    EnvFilter::new(level)
}

/// Initialize the global tracing subscriber with a non-blocking file writer.
///
/// Returns the appender guard; hold it for the lifetime of the process so
/// buffered log lines are flushed on exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<WorkerGuard> {
    let (writer, guard) = match (&config.log_path, &config.log_dir) {
        (Some(path), _) => {
            let parent = path.parent().unwrap_or_else(|| std::path::Path::new("."));
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log directory {}", parent.display()))?;
            let file_name = path
                .file_name()
                .map_or_else(|| "hilltop.log".into(), ToOwned::to_owned);
            tracing_appender::non_blocking(tracing_appender::rolling::never(parent, file_name))
        }
        (None, Some(dir)) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, "hilltop.log"))
        }
        (None, None) => tracing_appender::non_blocking(std::io::sink()),
    };

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set global tracing subscriber: {e}"))?;

    Ok(guard)
}
