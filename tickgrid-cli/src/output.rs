use tickgrid::{InstrumentReport, PeriodReport};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::run::RunSummary;

pub fn render(summary: &RunSummary, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = serde_json::to_string_pretty(summary)?;
            println!("{payload}");
        }
        OutputFormat::Text => render_text(summary),
    }
    Ok(())
}

fn instrument_line(r: &InstrumentReport) -> String {
    match &r.series {
        Some(s) => format!(
            "  {:<6} records={} rejected={} points={} first={} last={}",
            r.instrument,
            s.stats.input_records,
            s.stats.rejected_records,
            s.len(),
            s.points.first().map_or(f64::NAN, |p| p.value),
            s.points.last().map_or(f64::NAN, |p| p.value),
        ),
        None => {
            let reason = r
                .warnings
                .first()
                .map_or_else(|| "skipped".to_string(), ToString::to_string);
            format!("  {:<6} skipped: {reason}", r.instrument)
        }
    }
}

fn period_header(p: &PeriodReport) -> String {
    format!(
        "{}: {} to {} ({} of {} instruments)",
        p.period,
        p.window.start(),
        p.window.end(),
        p.series().count(),
        p.instruments.len()
    )
}

fn render_text(summary: &RunSummary) {
    for w in &summary.load_warnings {
        println!("warning: {w}");
    }
    for p in &summary.batch.periods {
        println!("{}", period_header(p));
        for r in &p.instruments {
            println!("{}", instrument_line(r));
        }
    }
    for f in summary.batch.failures.iter().chain(&summary.write_failures) {
        println!("failed: {f}");
    }
    println!(
        "{} period(s) processed, {} failed, {} file(s) written",
        summary.batch.periods.len(),
        summary.failure_count(),
        summary.written.len()
    );
}
