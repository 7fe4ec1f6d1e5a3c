//! Error types for the oav application.
//!
//! A small hierarchical taxonomy built on `thiserror`. Load and input
//! failures are fatal and happen before the viewer state exists; once the
//! browser is running, the only errors left are terminal I/O errors.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Everything that can end the process abnormally converts into this type
/// via `From`, so `main` can propagate with `?` and report once.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the document from file or stdin. Fatal at startup.
    #[error("failed to read input: {0}")]
    Input(#[from] InputError),

    /// The input bytes are not a parseable document. Fatal at startup;
    /// the viewer never sees a malformed document.
    #[error("failed to load document: {0}")]
    Load(#[from] LoadError),

    /// Could not initialize the log file. Fatal at startup, before the
    /// terminal is switched to the alternate screen.
    #[error("failed to initialize logging: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal error from the crossterm/ratatui layer.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors reading the document bytes from a file or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The document path given on the command line does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// The path that failed to open.
        path: PathBuf,
    },

    /// Neither a file argument nor piped stdin was provided.
    #[error("no input: provide a document path or pipe one to stdin")]
    NoInput,

    /// Any other I/O failure while reading.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors turning document bytes into the document model.
///
/// Loading attempts JSON first and falls back to YAML; both parser messages
/// are preserved so the user can see which one was close.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The bytes parse as neither JSON nor YAML into a document.
    #[error("not a recognizable OpenAPI document (json: {json_error}; yaml: {yaml_error})")]
    Unrecognized {
        /// Message from the JSON parse attempt.
        json_error: String,
        /// Message from the YAML parse attempt.
        yaml_error: String,
    },
}
