use std::path::PathBuf;
use thiserror::Error;

/// Error taxonomy for scaffolding operations.
///
/// Every filesystem failure an operation can hit maps to one of these
/// variants, so callers can aggregate outcomes without string matching.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The file targeted by a rewrite does not exist.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// The directory to rename does not exist.
    #[error("source directory does not exist: {0}")]
    SourceNotFound(PathBuf),

    /// The rename destination is already occupied.
    #[error("destination already exists: {0}")]
    DestinationExists(PathBuf),

    /// Any other read/write failure: permissions, encoding, disk errors,
    /// cross-device rename restrictions.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// Wrap an `io::Error` with a human-readable context message.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Stable machine-readable name for this error kind, used when
    /// serializing step reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FileNotFound(_) => "file_not_found",
            Self::SourceNotFound(_) => "source_not_found",
            Self::DestinationExists(_) => "destination_exists",
            Self::Io { .. } => "io_error",
        }
    }
}
