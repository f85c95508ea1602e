//! Tickgrid aligns irregular per-instrument tick data onto a shared, fixed-step
//! time grid.
//!
//! Overview
//! - Instruments are processed in period groups. Every instrument of a group is
//!   resampled against one global window derived from all of the group's valid
//!   timestamps, so the resulting series line up row for row.
//! - Each grid point takes the last price observed in its half-open bucket
//!   `[g, g + step)`. Empty buckets are forward-filled, then any leading gap is
//!   back-filled; values are always copied, never interpolated.
//! - Failures stay at the scope they belong to: a bad record drops the record,
//!   an empty instrument drops its series, an empty group drops the period.
//!
//! Examples
//! Processing a single period:
//! ```
//! use chrono::NaiveDate;
//! use tickgrid::{PeriodGroup, RawRecord, Tickgrid};
//!
//! let tg = Tickgrid::builder()
//!     .run_date(NaiveDate::from_ymd_opt(2025, 1, 25).unwrap())
//!     .step_secs(5)
//!     .build()?;
//! let group = PeriodGroup::new("Period1")
//!     .with_instrument("A", vec![RawRecord::new("09:30:01", 10.0)])
//!     .with_instrument("B", vec![RawRecord::new("09:30:12", 20.0)]);
//! let report = tg.process_period(&group)?;
//! assert_eq!(report.series().count(), 2);
//! assert!(report.series().all(|s| s.len() == 4));
//! # Ok::<(), tickgrid::TickgridError>(())
//! ```
//!
//! Running several periods concurrently:
//! ```rust,ignore
//! let report = tg
//!     .batch()
//!     .periods(&groups)?
//!     .run()
//!     .await?;
//! for failure in &report.failures {
//!     eprintln!("{failure}");
//! }
//! ```
#![warn(missing_docs)]

mod batch;
pub(crate) mod core;
mod period;

pub use batch::BatchBuilder;
pub use core::{Tickgrid, TickgridBuilder};

pub use tickgrid_core::{
    BatchReport, DEFAULT_TIMESTAMP_WIDTH, ErrorScope, GridConfig, GridPoint, InstrumentId,
    InstrumentReport, ParseError, PeriodGroup, PeriodReport, RawRecord, RecordReject,
    ResampleStats, ResampledSeries, Step, TickgridError, TimeWindow,
};
