//! Tracing subscriber initialization.
//!
//! Logs go to a file, never to the terminal: the viewer owns the alternate
//! screen, and any stray write would corrupt the layout. Users can watch
//! the log with `tail -f` in a second terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors initializing the log file subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Could not create the log directory.
    #[error("failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The log path has no filename component.
    #[error("invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// A tracing subscriber is already installed.
    #[error("tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Default log file location, under the user state directory when the
/// platform has one.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("oav")
        .join("oav.log")
}

/// Initialize the tracing subscriber writing to `log_path`.
///
/// Creates the parent directory if needed. Respects `RUST_LOG`, defaulting
/// to the `info` level.
///
/// # Errors
///
/// Fails when the directory cannot be created, the path has no filename,
/// or a subscriber is already set (tests initialize at most once).
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| LoggingError::DirectoryCreation {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;
    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
