//! Error types shared across the crate
//!
//! The calculator and the sequence parser are total and never fail; errors only
//! come from I/O boundaries and from resolving user supplied PTM names.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = ProtwtError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ProtwtError {
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read or write CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown post-translational modification {name:?}, expected one of: {expected}")]
    UnknownPtm { name: String, expected: String },

    #[error("Please provide a sequence or upload a file.")]
    EmptyInput,
}

impl ProtwtError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();

        Self::Io { path, source }
    }
}
