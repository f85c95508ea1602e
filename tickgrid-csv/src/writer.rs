use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tickgrid_types::{PeriodReport, ResampledSeries, TickgridError};

const OUTPUT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

#[derive(Serialize)]
struct OutputRow {
    timestamp: String,
    close: f64,
}

/// File name a series is written under, e.g. `resampled_5S_data__A.csv`.
#[must_use]
pub fn series_file_name(series: &ResampledSeries) -> String {
    format!("resampled_{}_data__{}.csv", series.step, series.instrument)
}

/// Write one series as a `timestamp,close` table into `dir`.
///
/// The directory must already exist. Returns the path written.
///
/// # Errors
/// Returns `Io` if the file cannot be created or written.
pub fn write_series(
    series: &ResampledSeries,
    dir: impl AsRef<Path>,
) -> Result<PathBuf, TickgridError> {
    let path = dir.as_ref().join(series_file_name(series));
    let mut wtr = csv::Writer::from_path(&path).map_err(|e| TickgridError::io(&path, e))?;
    for p in &series.points {
        wtr.serialize(OutputRow {
            timestamp: p.ts.format(OUTPUT_TIME_FORMAT).to_string(),
            close: p.value,
        })
        .map_err(|e| TickgridError::io(&path, e))?;
    }
    wtr.flush().map_err(|e| TickgridError::io(&path, e))?;
    Ok(path)
}

/// Write every produced series of `report` into `<out_base>/<period>/`.
///
/// Skipped instruments produce no file. Returns the paths written, in
/// instrument order.
///
/// # Errors
/// Returns `Io` if the period directory or any file cannot be written.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tickgrid_csv::write_period",
        skip_all,
        fields(period = %report.period),
    )
)]
pub fn write_period(
    report: &PeriodReport,
    out_base: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, TickgridError> {
    let dir = out_base.as_ref().join(&report.period);
    fs::create_dir_all(&dir).map_err(|e| TickgridError::io(&dir, e))?;
    let written = report
        .series()
        .map(|s| write_series(s, &dir))
        .collect::<Result<Vec<_>, _>>()?;
    #[cfg(feature = "tracing")]
    tracing::info!(files = written.len(), dir = %dir.display(), "wrote period");
    Ok(written)
}
