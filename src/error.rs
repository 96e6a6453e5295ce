//! Error type shared by the I/O boundary and the pipeline.
//!
//! The cleaning logic itself never fails: malformed table lines are dropped
//! and missing associations fall back to "not excluded" / "no trim". Only
//! reading and writing files can produce a [`CleanError`].
use std::path::PathBuf;

/// Failure while loading inputs or writing outputs.
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    /// A file could not be opened, created or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tab-delimited table could not be decoded.
    #[error("cannot read table {}: {source}", path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The sequence file is not in `>`-header format or is truncated.
    #[error("cannot parse sequence file {}: {message}", path.display())]
    Sequence { path: PathBuf, message: String },
}

impl CleanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CleanError::Io { path: path.into(), source }
    }

    /// `true` when the error comes from decoding input rather than the filesystem.
    pub fn is_parse(&self) -> bool {
        matches!(self, CleanError::Table { .. } | CleanError::Sequence { .. })
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CleanError>;
