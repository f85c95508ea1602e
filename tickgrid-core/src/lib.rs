//! tickgrid-core
//!
//! Aligns irregular per-instrument tick data onto a shared, evenly spaced grid.
//!
//! - `timeseries::parse`: turn raw timestamp/price records into dated observations.
//! - `timeseries::align`: floor/ceil timestamps onto grid boundaries.
//! - `timeseries::window`: derive one global window for a group of instruments.
//! - `timeseries::resample`: bucket one instrument onto the grid and fill gaps.
//! - `timeseries::fill`: the forward/backward fill passes.
//!
//! Everything here is synchronous and free of I/O; callers load records and
//! persist the resulting series.
#![warn(missing_docs)]

/// Time-series utilities for parsing, windowing, and resampling.
pub mod timeseries;

pub use tickgrid_types::*;

pub use timeseries::align::{ceil_to_step, floor_to_step, is_aligned};
pub use timeseries::fill::{back_fill, forward_fill};
pub use timeseries::parse::{ParsedBatch, parse_record, parse_records, parse_timestamp};
pub use timeseries::resample::{resample, resample_parsed};
pub use timeseries::window::{compute_global_window, window_from_parsed};
