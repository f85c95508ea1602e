use std::path::PathBuf;

use serde::Serialize;
use tickgrid::{BatchReport, TickgridError};
use tickgrid_csv::{discover_periods, load_period, write_period};

use crate::cli::Cli;
use crate::error::CliError;

/// Everything a run produced, as printed by `--format json`.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Per-period resampling outcome.
    pub batch: BatchReport,
    /// Missing or unreadable input files.
    pub load_warnings: Vec<TickgridError>,
    /// Files written, in period then instrument order.
    pub written: Vec<PathBuf>,
    /// Periods whose output could not be written, tagged with the period.
    pub write_failures: Vec<TickgridError>,
}

impl RunSummary {
    pub fn warning_count(&self) -> usize {
        let per_period: usize = self
            .batch
            .periods
            .iter()
            .flat_map(|p| &p.instruments)
            .map(|r| r.warnings.len() + r.rejects.len())
            .sum();
        per_period + self.load_warnings.len()
    }

    /// Periods that failed to resample or to be written.
    pub fn failure_count(&self) -> usize {
        self.batch.failures.len() + self.write_failures.len()
    }
}

pub async fn run(cli: &Cli) -> Result<RunSummary, CliError> {
    let tg = cli.tickgrid()?;
    let layout = cli.layout();

    let sources = discover_periods(&layout)?;
    if sources.is_empty() {
        return Err(CliError::NothingToProcess(layout.base));
    }

    let mut load_warnings = Vec::new();
    let mut groups = Vec::with_capacity(sources.len());
    for source in &sources {
        let loaded = load_period(source);
        load_warnings.extend(loaded.warnings);
        groups.push(loaded.group);
    }

    let batch = tg.batch().periods(&groups)?.run().await?;

    let mut written = Vec::new();
    let mut write_failures = Vec::new();
    for report in &batch.periods {
        match write_period(report, &cli.output) {
            Ok(paths) => written.extend(paths),
            Err(e) => {
                tracing::warn!(period = %report.period, error = %e, "could not write period");
                write_failures.push(TickgridError::in_period(report.period.clone(), e));
            }
        }
    }
    tracing::info!(
        periods = batch.periods.len(),
        failed = batch.failures.len(),
        unwritten = write_failures.len(),
        files = written.len(),
        "run complete"
    );

    Ok(RunSummary {
        batch,
        load_warnings,
        written,
        write_failures,
    })
}
