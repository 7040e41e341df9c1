use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RowLifeError>;

#[derive(Debug, Error)]
pub enum RowLifeError {
    #[error("failed to open file: \"{}\": {source}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected character on line {line}, column {column}: \"{found}\"")]
    InvalidCharacter {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("line {line} is {len} characters long, limit is {max}")]
    LineTooLong { line: usize, len: usize, max: usize },

    #[error("memory allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

impl RowLifeError {
    #[must_use]
    pub fn resource_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ResourceUnavailable {
            path: path.into(),
            source,
        }
    }
}
