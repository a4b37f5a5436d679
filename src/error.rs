// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::graph::rank::RankMap;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// `partial` holds the ranks after the last sweep, for inspection only.
    #[error("Iteration did not converge after {iterations} sweeps (last max delta {delta:e})")]
    ConvergenceFailure {
        iterations: usize,
        delta: f64,
        partial: RankMap,
    },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, RankError>;

impl RankError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        RankError::InvalidArgument(msg.into())
    }
}

// Gracefully convert WalkDir errors, keeping the offending path when known.
impl From<walkdir::Error> for RankError {
    fn from(e: walkdir::Error) -> Self {
        let path = e
            .path()
            .map_or_else(|| PathBuf::from("<unknown>"), std::path::Path::to_path_buf);
        let source = e
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "directory loop"));
        RankError::Io { source, path }
    }
}
