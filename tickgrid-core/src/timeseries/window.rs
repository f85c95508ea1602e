use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use tickgrid_types::{GridConfig, InstrumentId, RawRecord, Step, TickgridError, TimeWindow};

use super::align::{ceil_to_step, floor_to_step};
use super::parse::{ParsedBatch, parse_records};

/// Snap `[lo, hi]` outward onto grid boundaries.
fn snapped(lo: NaiveDateTime, hi: NaiveDateTime, step: Step) -> Result<TimeWindow, TickgridError> {
    let start = floor_to_step(lo, step)
        .ok_or_else(|| TickgridError::Data(format!("cannot floor {lo} to {step}")))?;
    let end = ceil_to_step(hi, step)
        .ok_or_else(|| TickgridError::Data(format!("cannot ceil {hi} to {step}")))?;
    TimeWindow::new(start, end)
}

/// Derive the window from batches that were already parsed.
///
/// Batches without a single valid record are ignored; they do not block the
/// window as long as another batch has one.
///
/// # Errors
/// Returns `TickgridError::EmptyWindow` if no batch has a valid record.
pub fn window_from_parsed<'a, I>(batches: I, step: Step) -> Result<TimeWindow, TickgridError>
where
    I: IntoIterator<Item = &'a ParsedBatch>,
{
    let mut scanned = 0usize;
    let mut bounds: Option<(NaiveDateTime, NaiveDateTime)> = None;
    for batch in batches {
        scanned += 1;
        if let Some((lo, hi)) = batch.bounds() {
            bounds = Some(match bounds {
                Some((cur_lo, cur_hi)) => (cur_lo.min(lo), cur_hi.max(hi)),
                None => (lo, hi),
            });
        }
    }
    let (lo, hi) = bounds.ok_or(TickgridError::EmptyWindow {
        instruments: scanned,
    })?;
    snapped(lo, hi, step)
}

/// Compute the global window shared by every instrument of a group.
///
/// Each instrument is parsed with the shared record parser; the earliest and
/// latest valid timestamps across all instruments are then floored and ceiled
/// to the grid step. Timestamps already on a boundary are kept as-is.
///
/// ```
/// use std::collections::BTreeMap;
/// use chrono::NaiveDate;
/// use tickgrid_core::{compute_global_window, GridConfig, InstrumentId, RawRecord};
///
/// let cfg = GridConfig::new(NaiveDate::from_ymd_opt(2025, 1, 25).unwrap());
/// let mut group = BTreeMap::new();
/// group.insert(InstrumentId::new("A"), vec![RawRecord::new("09:30:01.5", 10.0)]);
/// group.insert(InstrumentId::new("B"), vec![RawRecord::new("09:30:12", 20.0)]);
/// let w = compute_global_window(&group, &cfg).unwrap();
/// assert_eq!(w.start().time().to_string(), "09:30:00");
/// assert_eq!(w.end().time().to_string(), "09:30:15");
/// ```
///
/// # Errors
/// Returns `TickgridError::EmptyWindow` if no instrument yields a valid
/// timestamp.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tickgrid_core::compute_global_window",
        skip_all,
        fields(instruments = records.len(), step = %cfg.step),
    )
)]
pub fn compute_global_window(
    records: &BTreeMap<InstrumentId, Vec<RawRecord>>,
    cfg: &GridConfig,
) -> Result<TimeWindow, TickgridError> {
    let batches: Vec<ParsedBatch> = records
        .iter()
        .map(|(id, raw)| {
            #[cfg(feature = "tracing")]
            let _span = tracing::debug_span!("instrument", instrument = %id).entered();
            let batch = parse_records(raw, cfg);
            #[cfg(feature = "tracing")]
            if batch.records.is_empty() {
                tracing::warn!("instrument contributes no valid timestamps");
            }
            #[cfg(not(feature = "tracing"))]
            let _ = id;
            batch
        })
        .collect();
    window_from_parsed(&batches, cfg.step)
}
