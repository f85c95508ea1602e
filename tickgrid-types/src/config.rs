//! Configuration types shared by the resampling core and the orchestrator.

use std::fmt;

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::TickgridError;

const MICROS_PER_SECOND: i64 = 1_000_000;

/// Number of leading characters of a raw timestamp that carry meaning
/// (`HH:MM:SS.ffffff`).
pub const DEFAULT_TIMESTAMP_WIDTH: usize = 15;

/// Grid spacing, in whole microseconds. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Step(i64);

impl Step {
    /// Five seconds, the grid spacing used when none is configured.
    pub const DEFAULT: Self = Self(5 * MICROS_PER_SECOND);

    /// Build a step from whole seconds.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `secs` is not positive or overflows.
    pub fn from_secs(secs: i64) -> Result<Self, TickgridError> {
        secs.checked_mul(MICROS_PER_SECOND)
            .ok_or_else(|| TickgridError::InvalidArg(format!("step of {secs}s overflows")))
            .and_then(Self::from_micros)
    }

    /// Build a step from microseconds.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `micros` is not positive.
    pub fn from_micros(micros: i64) -> Result<Self, TickgridError> {
        if micros <= 0 {
            return Err(TickgridError::InvalidArg(format!(
                "step must be positive, got {micros}us"
            )));
        }
        Ok(Self(micros))
    }

    /// Build a step from a `TimeDelta`; sub-microsecond remainders are rejected.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the delta is not positive or not a whole number
    /// of microseconds.
    pub fn from_delta(delta: TimeDelta) -> Result<Self, TickgridError> {
        let micros = delta
            .num_microseconds()
            .ok_or_else(|| TickgridError::InvalidArg("step out of range".into()))?;
        if delta.subsec_nanos() % 1_000 != 0 {
            return Err(TickgridError::InvalidArg(
                "step must be a whole number of microseconds".into(),
            ));
        }
        Self::from_micros(micros)
    }

    /// Spacing in microseconds.
    #[must_use]
    pub const fn as_micros(self) -> i64 {
        self.0
    }

    /// Spacing as a `TimeDelta`.
    #[must_use]
    pub const fn as_delta(self) -> TimeDelta {
        TimeDelta::microseconds(self.0)
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Step {
    type Error = TickgridError;

    fn try_from(micros: i64) -> Result<Self, Self::Error> {
        Self::from_micros(micros)
    }
}

impl From<Step> for i64 {
    fn from(step: Step) -> Self {
        step.0
    }
}

/// Frequency label in the `5S` / `1T` / `250L` style used in output file names.
impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let us = self.0;
        if us % (60 * MICROS_PER_SECOND) == 0 {
            write!(f, "{}T", us / (60 * MICROS_PER_SECOND))
        } else if us % MICROS_PER_SECOND == 0 {
            write!(f, "{}S", us / MICROS_PER_SECOND)
        } else if us % 1_000 == 0 {
            write!(f, "{}L", us / 1_000)
        } else {
            write!(f, "{us}U")
        }
    }
}

/// Run-level parameters for parsing and gridding one batch.
///
/// All timestamps of a run are anchored on `run_date`; a run never spans more
/// than one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Calendar date combined with every time-of-day in the input.
    pub run_date: NaiveDate,
    /// Grid spacing.
    pub step: Step,
    /// Number of leading timestamp characters that are parsed.
    pub timestamp_width: usize,
}

impl GridConfig {
    /// Configuration for `run_date` with the default step and timestamp width.
    #[must_use]
    pub const fn new(run_date: NaiveDate) -> Self {
        Self {
            run_date,
            step: Step::DEFAULT,
            timestamp_width: DEFAULT_TIMESTAMP_WIDTH,
        }
    }

    /// Replace the grid step.
    #[must_use]
    pub const fn with_step(mut self, step: Step) -> Self {
        self.step = step;
        self
    }

    /// Check invariants that serde or struct literals could have bypassed.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the timestamp width is zero.
    pub fn validate(&self) -> Result<(), TickgridError> {
        if self.timestamp_width == 0 {
            return Err(TickgridError::InvalidArg(
                "timestamp width must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
