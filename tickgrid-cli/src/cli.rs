//! Command-line arguments.
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--date` | required | Run date every timestamp is anchored on |
//! | `--input` | `trainingdata` | Dataset base directory |
//! | `--output` | `processed_data` | Output base directory |
//! | `--step-secs` | `5` | Grid spacing in seconds |
//! | `--timestamp-width` | `15` | Significant timestamp characters |
//! | `--instruments` | `A,B,C,D,E` | Instruments to load per period |
//! | `--scan-instruments` | `false` | Load every instrument folder instead |
//! | `--flat` | `false` | Period files are not nested one level deeper |
//! | `--format` | `text` | Summary format (text, json) |
//! | `--strict` | `false` | Treat warnings as errors |

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use tickgrid::{DEFAULT_TIMESTAMP_WIDTH, InstrumentId, Tickgrid, TickgridError};
use tickgrid_csv::{DatasetLayout, InstrumentSelection};

/// Align per-instrument tick data onto a shared fixed-step time grid.
///
/// Every period directory under the input base is processed on its own: all
/// of its instruments are resampled against one window and written to
/// `<output>/<period>/resampled_<step>_data__<instrument>.csv`.
#[derive(Debug, Parser)]
#[command(name = "tickgrid", author, version, about)]
pub struct Cli {
    /// Run date (YYYY-MM-DD) every time-of-day timestamp is anchored on.
    #[arg(long)]
    pub date: NaiveDate,

    /// Directory holding one folder per period.
    #[arg(long, default_value = "trainingdata")]
    pub input: PathBuf,

    /// Directory the resampled series are written to.
    #[arg(long, default_value = "processed_data")]
    pub output: PathBuf,

    /// Grid spacing in seconds.
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    pub step_secs: i64,

    /// Number of leading timestamp characters that are parsed.
    #[arg(long, default_value_t = DEFAULT_TIMESTAMP_WIDTH)]
    pub timestamp_width: usize,

    /// Instruments to load in every period.
    #[arg(long, value_delimiter = ',', conflicts_with = "scan_instruments")]
    pub instruments: Vec<String>,

    /// Load every instrument folder found in a period.
    #[arg(long)]
    pub scan_instruments: bool,

    /// Period files sit directly under `<input>/<period>/`.
    #[arg(long)]
    pub flat: bool,

    /// Summary format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit non-zero if anything was skipped.
    #[arg(long)]
    pub strict: bool,
}

/// How the run summary is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per period and instrument.
    Text,
    /// The full run summary as JSON.
    Json,
}

impl Cli {
    /// Dataset layout described by the arguments.
    pub fn layout(&self) -> DatasetLayout {
        let instruments = if self.scan_instruments {
            InstrumentSelection::Scan
        } else if self.instruments.is_empty() {
            InstrumentSelection::default()
        } else {
            InstrumentSelection::Fixed(
                self.instruments
                    .iter()
                    .map(|s| InstrumentId::new(s.trim()))
                    .collect(),
            )
        };
        DatasetLayout {
            nested: !self.flat,
            instruments,
            ..DatasetLayout::new(&self.input)
        }
    }

    /// Orchestrator configured by the arguments.
    pub fn tickgrid(&self) -> Result<Tickgrid, TickgridError> {
        Tickgrid::builder()
            .run_date(self.date)
            .step_secs(self.step_secs)
            .timestamp_width(self.timestamp_width)
            .build()
    }
}
