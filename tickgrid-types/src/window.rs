//! Grid windows and the evenly spaced grids they span.

use std::iter::FusedIterator;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::config::Step;
use crate::error::TickgridError;

/// Inclusive `[start, end]` range shared by every instrument of a period.
///
/// Fields are private: once computed, a window is read-only so that all
/// instruments of a group are resampled against the same grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct TimeWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

// Unchecked wire form; deserialization goes through `TimeWindow::new`.
#[derive(Deserialize)]
struct RawWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TryFrom<RawWindow> for TimeWindow {
    type Error = TickgridError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl TimeWindow {
    /// Build a window.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `start > end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, TickgridError> {
        if start > end {
            return Err(TickgridError::InvalidArg(format!(
                "window start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Inclusive upper bound.
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// `end - start`.
    #[must_use]
    pub fn span(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whether `ts` lies in `[start, end]`.
    #[must_use]
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start <= ts && ts <= self.end
    }

    /// Number of grid points, `(end - start) / step + 1`.
    ///
    /// A span that is not a whole number of steps is truncated; callers that
    /// need an exact cover check [`TimeWindow::is_multiple_of`] first.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the span does not fit in microseconds or the
    /// point count does not fit in `usize`.
    pub fn grid_len(&self, step: Step) -> Result<usize, TickgridError> {
        self.span()
            .num_microseconds()
            .and_then(|us| usize::try_from(us / step.as_micros()).ok())
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| {
                TickgridError::InvalidArg(format!(
                    "window {} .. {} has no representable grid at {step}",
                    self.start, self.end
                ))
            })
    }

    /// Whether the span is a whole number of steps.
    #[must_use]
    pub fn is_multiple_of(&self, step: Step) -> bool {
        self.span()
            .num_microseconds()
            .is_some_and(|us| us % step.as_micros() == 0)
    }

    /// Iterate the grid points from `start` to `end` inclusive.
    ///
    /// Yields nothing if [`TimeWindow::grid_len`] fails.
    #[must_use]
    pub fn grid(&self, step: Step) -> Grid {
        Grid {
            next: self.start,
            step: step.as_delta(),
            remaining: self.grid_len(step).unwrap_or(0),
        }
    }
}

/// Iterator over grid points; see [`TimeWindow::grid`].
#[derive(Debug, Clone)]
pub struct Grid {
    next: NaiveDateTime,
    step: TimeDelta,
    remaining: usize,
}

impl Iterator for Grid {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let cur = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next = cur + self.step;
        }
        Some(cur)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Grid {}
impl FusedIterator for Grid {}
