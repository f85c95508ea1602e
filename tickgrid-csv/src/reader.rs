use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tickgrid_types::{PeriodGroup, RawRecord, TickgridError};

use crate::discover::PeriodSource;

const TIMESTAMP_COLUMN: &str = "timestamp";
const PRICE_COLUMN: &str = "price";

/// A period read from disk, plus the files that could not be used.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPeriod {
    /// Records of every instrument that could be read.
    pub group: PeriodGroup,
    /// One entry per missing or unreadable instrument file.
    pub warnings: Vec<TickgridError>,
}

fn column(headers: &StringRecord, name: &str, path: &Path) -> Result<usize, TickgridError> {
    headers.iter().position(|h| h == name).ok_or_else(|| {
        TickgridError::Data(format!("{} has no '{name}' column", path.display()))
    })
}

fn cell(row: &StringRecord, idx: usize) -> Option<&str> {
    row.get(idx).filter(|s| !s.is_empty())
}

/// Read one instrument's trade file.
///
/// The file must have a header row naming at least a `timestamp` and a
/// `price` column; other columns are ignored. Each data row becomes one
/// record, in file order:
/// - empty cells become absent values;
/// - a price that is not a number becomes an absent price;
/// - a row that cannot be decoded at all becomes a record with no cells.
///
/// A completely empty file yields no records.
///
/// # Errors
/// - `Io` if the file cannot be opened or its header cannot be read.
/// - `Data` if a required column is missing.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tickgrid_csv::read_trade_file",
        skip_all,
        fields(path = %path.as_ref().display()),
    )
)]
pub fn read_trade_file(path: impl AsRef<Path>) -> Result<Vec<RawRecord>, TickgridError> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| TickgridError::io(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| TickgridError::io(path, e))?
        .clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    let ts_idx = column(&headers, TIMESTAMP_COLUMN, path)?;
    let px_idx = column(&headers, PRICE_COLUMN, path)?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let rec = match result {
            Ok(r) => r,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(row, error = %e, "undecodable row");
                #[cfg(not(feature = "tracing"))]
                let _ = (row, e);
                records.push(RawRecord::from_parts(None, None));
                continue;
            }
        };
        let timestamp = cell(&rec, ts_idx).map(str::to_string);
        let price = cell(&rec, px_idx).and_then(|s| match s.parse::<f64>() {
            Ok(v) => Some(v),
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(row, value = s, "price is not a number");
                None
            }
        });
        records.push(RawRecord::from_parts(timestamp, price));
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(records = records.len(), "read trade file");
    Ok(records)
}

/// Read every instrument file of a period.
///
/// Missing or unreadable files are recorded in `warnings` and skipped; the
/// period is still returned with whatever could be read.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tickgrid_csv::load_period",
        skip_all,
        fields(period = %source.name),
    )
)]
pub fn load_period(source: &PeriodSource) -> LoadedPeriod {
    let mut group = PeriodGroup::new(source.name.clone());
    let mut warnings: Vec<TickgridError> = source
        .missing
        .values()
        .map(|path| TickgridError::io(path, "file not found"))
        .collect();

    for (id, path) in &source.files {
        match read_trade_file(path) {
            Ok(records) => {
                group.instruments.insert(id.clone(), records);
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(instrument = %id, error = %e, "skipping unreadable file");
                warnings.push(e);
            }
        }
    }
    LoadedPeriod { group, warnings }
}
