use std::path::PathBuf;

use thiserror::Error;
use tickgrid::TickgridError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Tickgrid(#[from] TickgridError),

    #[error("no period directories found under {}", .0.display())]
    NothingToProcess(PathBuf),

    #[error("strict mode failed: warnings={warning_count}, failures={failure_count}")]
    StrictModeViolation {
        warning_count: usize,
        failure_count: usize,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Tickgrid(TickgridError::InvalidArg(_)) => 2,
            Self::NothingToProcess(_) => 3,
            Self::StrictModeViolation { .. } => 5,
            Self::Tickgrid(_) | Self::Serialization(_) => 10,
        }
    }
}
