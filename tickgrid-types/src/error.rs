use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a single raw record could not be turned into a parsed observation.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// The record has no timestamp cell.
    #[error("missing timestamp")]
    MissingTimestamp,

    /// The record has no price cell (or the cell was not numeric).
    #[error("missing price")]
    MissingPrice,

    /// The price parsed but is NaN or infinite.
    #[error("price is not finite")]
    NonFinitePrice,

    /// The significant prefix of the timestamp text is not a time of day.
    #[error("invalid timestamp '{text}'")]
    InvalidTimestamp {
        /// The significant prefix that failed to parse.
        text: String,
    },
}

/// Which part of a run an error invalidates.
///
/// Errors are recovered at the scope they name and never propagate further:
/// a record error drops one record, an instrument error drops one series, a
/// group error drops one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ErrorScope {
    /// A single raw record.
    Record,
    /// One instrument's series within a period.
    Instrument,
    /// One period group.
    Group,
    /// The whole run (configuration, filesystem).
    Run,
}

/// Unified error type for the tickgrid workspace.
///
/// Variants are grouped by the scope they invalidate; see [`TickgridError::scope`].
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TickgridError {
    /// A raw record was rejected while parsing.
    #[error("record {row} rejected: {reason}")]
    Record {
        /// 0-based position of the record in its input sequence.
        row: usize,
        /// Why the record was rejected.
        reason: ParseError,
    },

    /// An instrument produced zero valid records.
    #[error("no valid records for instrument {instrument}")]
    EmptyInput {
        /// Instrument that had nothing to resample.
        instrument: String,
    },

    /// An instrument has valid records, but none of them fall inside the window.
    #[error("no observations of instrument {instrument} inside the window")]
    NoObservationsInWindow {
        /// Instrument whose records all lie outside the window.
        instrument: String,
    },

    /// No instrument in the group yielded a single valid timestamp.
    #[error("no valid timestamps across {instruments} instrument(s)")]
    EmptyWindow {
        /// Number of instruments that were scanned.
        instruments: usize,
    },

    /// A group-level failure tagged with the period it belongs to.
    #[error("period {period} failed: {source}")]
    Period {
        /// Period name.
        period: String,
        /// Underlying failure.
        source: Box<TickgridError>,
    },

    /// Issues with input data that are not tied to a single record.
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument or configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Filesystem failure while reading inputs or writing outputs.
    #[error("io error at {path}: {msg}")]
    Io {
        /// Path involved in the failing operation.
        path: String,
        /// Human-readable error message.
        msg: String,
    },
}

impl TickgridError {
    /// Helper: build an `EmptyInput` error for an instrument.
    pub fn empty_input(instrument: impl Into<String>) -> Self {
        Self::EmptyInput {
            instrument: instrument.into(),
        }
    }

    /// Helper: build a `NoObservationsInWindow` error for an instrument.
    pub fn no_observations(instrument: impl Into<String>) -> Self {
        Self::NoObservationsInWindow {
            instrument: instrument.into(),
        }
    }

    /// Helper: tag an error with the period it occurred in.
    pub fn in_period(period: impl Into<String>, source: Self) -> Self {
        Self::Period {
            period: period.into(),
            source: Box::new(source),
        }
    }

    /// Helper: build an `Io` error from a path and any displayable cause.
    pub fn io(path: impl AsRef<std::path::Path>, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            msg: err.to_string(),
        }
    }

    /// The scope this error invalidates.
    #[must_use]
    pub fn scope(&self) -> ErrorScope {
        match self {
            Self::Record { .. } => ErrorScope::Record,
            Self::EmptyInput { .. } | Self::NoObservationsInWindow { .. } => ErrorScope::Instrument,
            Self::EmptyWindow { .. } | Self::Period { .. } => ErrorScope::Group,
            Self::Data(_) | Self::InvalidArg(_) | Self::Io { .. } => ErrorScope::Run,
        }
    }

    /// Strip any `Period` tags and return the innermost error.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Period { source, .. } => source.root(),
            other => other,
        }
    }
}

