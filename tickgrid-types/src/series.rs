//! Resampled output series.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::Step;
use crate::records::InstrumentId;
use crate::window::TimeWindow;

/// One grid point and its filled value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    /// Grid timestamp (bucket start).
    pub ts: NaiveDateTime,
    /// Last observed price in the bucket, or the filled value.
    pub value: f64,
}

/// Counters collected while resampling one instrument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResampleStats {
    /// Raw records handed to the resampler.
    pub input_records: usize,
    /// Records that parsed successfully.
    pub parsed_records: usize,
    /// Records dropped by the parser.
    pub rejected_records: usize,
    /// Parsed records outside the window.
    pub out_of_window: usize,
    /// Grid points with at least one observation.
    pub observed_buckets: usize,
    /// Grid points filled from an earlier bucket.
    pub forward_filled: usize,
    /// Leading grid points filled from a later bucket.
    pub back_filled: usize,
}

/// Gap-free series on the grid of `window` at `step` spacing.
///
/// `points` has exactly one entry per grid point, in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResampledSeries {
    /// Instrument this series belongs to.
    pub instrument: InstrumentId,
    /// Window the grid covers.
    pub window: TimeWindow,
    /// Grid spacing.
    pub step: Step,
    /// One value per grid point.
    pub points: Vec<GridPoint>,
    /// Counters collected while resampling.
    pub stats: ResampleStats,
}

impl ResampledSeries {
    /// Number of grid points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points. Never true for a resampler output.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Grid timestamps in order.
    pub fn timestamps(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.points.iter().map(|p| p.ts)
    }

    /// Values in grid order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }
}
