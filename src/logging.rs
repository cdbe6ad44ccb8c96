//! Logging configuration using the tracing ecosystem.
//!
//! Logs always go to a file, since the terminal is owned by the screen.
//! Files rotate daily and the level comes from `RUST_LOG`, a CLI override,
//! or [`DEFAULT_LOG_FILTER`], in that order.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default log filter if neither `RUST_LOG` nor an override is set.
pub const DEFAULT_LOG_FILTER: &str = "interests=info,warn";

/// Log file name prefix; the appender adds the date suffix.
const LOG_FILE_PREFIX: &str = "interests.log";

/// Options for [`init`].
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Directory for log files; the platform data directory when unset.
    pub directory: Option<PathBuf>,
    /// Filter directive used when `RUST_LOG` is not set.
    pub filter: Option<String>,
}

/// Initialize the logging system.
///
/// Logs are stored in the platform-specific local data directory unless
/// `options.directory` is set:
/// - Linux: `~/.local/share/interests/logs/`
/// - macOS: `~/Library/Application Support/interests/logs/`
/// - Windows: `C:\Users\<User>\AppData\Local\interests\logs\`
///
/// The returned guard flushes buffered records on drop and must be held
/// until shutdown.
///
/// # Errors
///
/// Returns an error if the log directory cannot be determined or created,
/// or a global subscriber is already set.
pub fn init(options: &LogOptions) -> anyhow::Result<WorkerGuard> {
    let log_dir = match &options.directory {
        Some(dir) => dir.clone(),
        None => get_log_directory()?,
    };
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(build_filter(options.filter.as_deref()));

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Interests starting up");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(guard)
}

/// Build the env filter, preferring `RUST_LOG` over the override.
fn build_filter(override_filter: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(override_filter.unwrap_or(DEFAULT_LOG_FILTER))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    })
}

/// Get the default log directory path.
fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(log_directory_under(&base_dir))
}

fn log_directory_under(base_dir: &Path) -> PathBuf {
    base_dir.join("interests").join("logs")
}

/// Get the path where logs are stored by default.
pub fn log_directory() -> Option<PathBuf> {
    get_log_directory().ok()
}

/// Log application shutdown.
pub fn shutdown() {
    tracing::info!("Interests shutting down");
}
