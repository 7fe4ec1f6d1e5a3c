//! Document input sources.
//!
//! The viewer reads its document exactly once, from a file path argument or
//! from piped stdin. Sum type enforces exactly one source.

use crate::model::InputError;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

/// Where the document bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read-once file input.
    File(PathBuf),
    /// Piped stdin input.
    Stdin,
}

/// Pick the input source for this invocation.
///
/// A file path wins when given; otherwise stdin is used if it is a pipe.
///
/// # Errors
///
/// [`InputError::FileNotFound`] when the given path does not exist, and
/// [`InputError::NoInput`] when no path is given and stdin is a terminal.
pub fn detect(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => {
            if path.exists() {
                Ok(InputSource::File(path))
            } else {
                Err(InputError::FileNotFound { path })
            }
        }
        None => {
            if io::stdin().is_terminal() {
                Err(InputError::NoInput)
            } else {
                Ok(InputSource::Stdin)
            }
        }
    }
}

impl InputSource {
    /// Read the entire document.
    ///
    /// # Errors
    ///
    /// [`InputError::Io`] for any underlying read failure.
    pub fn read(&self) -> Result<Vec<u8>, InputError> {
        match self {
            InputSource::File(path) => Ok(fs::read(path)?),
            InputSource::Stdin => {
                let mut bytes = Vec::new();
                io::stdin().read_to_end(&mut bytes)?;
                Ok(bytes)
            }
        }
    }

    /// Short label for log lines.
    pub fn describe(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }
}
