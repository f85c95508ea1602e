//! Records, grid windows, configuration, and the error taxonomy shared across
//! the tickgrid workspace.
#![warn(missing_docs)]

mod config;
mod error;
mod records;
mod reports;
mod series;
mod window;

pub use config::{DEFAULT_TIMESTAMP_WIDTH, GridConfig, Step};
pub use error::{ErrorScope, ParseError, TickgridError};
pub use records::{InstrumentId, ParsedRecord, PeriodGroup, RawRecord};
pub use reports::{BatchReport, InstrumentReport, PeriodReport, RecordReject};
pub use series::{GridPoint, ResampleStats, ResampledSeries};
pub use window::{Grid, TimeWindow};
