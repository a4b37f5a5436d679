// src/exit.rs
//! Standardized process exit codes for `linkrank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::RankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LinkRankExit {
    /// Ranking completed and was printed.
    Success = 0,
    /// Generic error (IO, serialization).
    Error = 1,
    /// Bad parameters, bad config file, or an empty corpus.
    InvalidInput = 2,
    /// The iterator hit its sweep cap.
    ConvergenceFailure = 3,
}

impl LinkRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed run.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<RankError>() {
            Some(RankError::InvalidArgument(_) | RankError::Config(_)) => Self::InvalidInput,
            Some(RankError::ConvergenceFailure { .. }) => Self::ConvergenceFailure,
            _ => Self::Error,
        }
    }
}

impl Termination for LinkRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
