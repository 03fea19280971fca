use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for launcher operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// The launcher could not determine where its own executable lives.
    #[error("Cannot locate the launcher entry point: {reason}")]
    EntryPointUnresolved { reason: String },

    /// Process creation for the target executable failed.
    ///
    /// The path prefix is the only context added; the OS error is carried
    /// untranslated as `source` and rendered as-is after it.
    #[error("Failed to start '{}': {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub fn entry_point_unresolved<S: Into<String>>(reason: S) -> Self {
        AppError::EntryPointUnresolved { reason: reason.into() }
    }

    /// Provide an `io::ErrorKind` view of the failure.
    ///
    /// Spawn failures report the kind raised by the OS unchanged.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::EntryPointUnresolved { .. } => io::ErrorKind::NotFound,
            AppError::Spawn { source, .. } => source.kind(),
        }
    }
}
