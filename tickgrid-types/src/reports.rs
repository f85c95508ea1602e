//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, TickgridError};
use crate::records::InstrumentId;
use crate::series::ResampledSeries;
use crate::window::TimeWindow;

/// A raw record the parser dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordReject {
    /// 0-based position in the instrument's input.
    pub row: usize,
    /// Why it was dropped.
    pub reason: ParseError,
}

impl From<RecordReject> for TickgridError {
    fn from(r: RecordReject) -> Self {
        Self::Record {
            row: r.row,
            reason: r.reason,
        }
    }
}

/// Outcome of resampling one instrument.
///
/// `series` is `None` when the instrument was skipped; the reason is in
/// `warnings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentReport {
    /// Instrument the report refers to.
    pub instrument: InstrumentId,
    /// Resampled series, if one was produced.
    pub series: Option<ResampledSeries>,
    /// Records dropped while parsing.
    pub rejects: Vec<RecordReject>,
    /// Instrument-scoped failures.
    pub warnings: Vec<TickgridError>,
}

/// Outcome of processing one period group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    /// Period name.
    pub period: String,
    /// Window shared by every instrument of the period.
    pub window: TimeWindow,
    /// One entry per instrument, in instrument order.
    pub instruments: Vec<InstrumentReport>,
}

impl PeriodReport {
    /// Series that were produced, in instrument order.
    pub fn series(&self) -> impl Iterator<Item = &ResampledSeries> + '_ {
        self.instruments.iter().filter_map(|r| r.series.as_ref())
    }

    /// Instruments that were skipped.
    pub fn skipped(&self) -> impl Iterator<Item = &InstrumentReport> + '_ {
        self.instruments.iter().filter(|r| r.series.is_none())
    }

    /// Whether any record, instrument, or warning was dropped.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.instruments
            .iter()
            .any(|r| !r.warnings.is_empty() || !r.rejects.is_empty())
    }
}

/// Outcome of a multi-period batch.
///
/// Periods that failed as a whole are listed in `failures`, each tagged with
/// its period name; they never affect the periods in `periods`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchReport {
    /// Reports of periods that produced a window, in input order.
    pub periods: Vec<PeriodReport>,
    /// Group-level failures.
    pub failures: Vec<TickgridError>,
}

impl BatchReport {
    /// Whether anything at any scope was dropped.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.failures.is_empty() || self.periods.iter().any(PeriodReport::has_warnings)
    }
}
