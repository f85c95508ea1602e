//! tickgrid-csv
//!
//! Filesystem side of tickgrid: finds the period directories of a dataset,
//! reads each instrument's trade file into raw records, and writes resampled
//! series back out as `timestamp,close` tables. Nothing here parses
//! timestamps; malformed cells are passed through as absent values and left to
//! the core parser.
#![warn(missing_docs)]

mod discover;
mod layout;
mod reader;
mod writer;

pub use discover::{PeriodSource, discover_periods};
pub use layout::{DEFAULT_INSTRUMENTS, DatasetLayout, InstrumentSelection};
pub use reader::{LoadedPeriod, load_period, read_trade_file};
pub use writer::{series_file_name, write_period, write_series};
