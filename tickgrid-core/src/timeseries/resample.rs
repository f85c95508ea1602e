use tickgrid_types::{
    GridConfig, GridPoint, InstrumentId, ParsedRecord, RawRecord, ResampleStats, ResampledSeries,
    Step, TickgridError, TimeWindow,
};

use super::fill::{back_fill, forward_fill};
use super::parse::parse_records;

/// Place each record into its half-open bucket `[g, g + step)`.
///
/// Records must already be sorted; a later record in the same bucket replaces
/// an earlier one. Returns the buckets and the number of out-of-window records.
fn bucket_last(
    records: &[ParsedRecord],
    window: &TimeWindow,
    step: Step,
) -> Result<(Vec<Option<f64>>, usize), TickgridError> {
    let len = window.grid_len(step)?;
    let mut buckets = Vec::new();
    buckets.try_reserve_exact(len).map_err(|e| {
        TickgridError::InvalidArg(format!("cannot allocate {len} grid points: {e}"))
    })?;
    buckets.resize(len, None);
    let mut outside = 0usize;
    for r in records {
        if !window.contains(r.ts) {
            outside += 1;
            continue;
        }
        // Offset is non-negative here, so integer division floors.
        let idx = (r.ts - window.start())
            .num_microseconds()
            .and_then(|us| usize::try_from(us / step.as_micros()).ok());
        match idx.and_then(|i| buckets.get_mut(i)) {
            Some(slot) => *slot = Some(r.price),
            None => outside += 1,
        }
    }
    Ok((buckets, outside))
}

/// Resample already-parsed observations of one instrument onto the grid of
/// `window`.
///
/// - Records are sorted by timestamp with a stable sort, so equal timestamps
///   keep their input order.
/// - Each grid point `g` takes the price of the last record in `[g, g + step)`.
/// - Records outside `[window.start, window.end]` are counted and ignored.
/// - Empty buckets are forward-filled, then any leading gap is back-filled.
///
/// ```
/// use chrono::NaiveDate;
/// use tickgrid_core::{resample_parsed, InstrumentId, ParsedRecord, Step, TimeWindow};
///
/// let day = NaiveDate::from_ymd_opt(2025, 1, 25).unwrap();
/// let t = |s| day.and_hms_opt(9, 30, s).unwrap();
/// let w = TimeWindow::new(t(0), t(25)).unwrap();
/// let recs = vec![
///     ParsedRecord { ts: t(20), price: 2.0 },
///     ParsedRecord { ts: t(0), price: 1.0 },
/// ];
/// let s = resample_parsed(&InstrumentId::new("A"), recs, &w, Step::DEFAULT).unwrap();
/// assert_eq!(s.values().collect::<Vec<_>>(), vec![1.0, 1.0, 1.0, 1.0, 2.0, 2.0]);
/// ```
///
/// # Errors
/// - `EmptyInput` if `records` is empty.
/// - `NoObservationsInWindow` if every record lies outside the window.
/// - `InvalidArg` if the window span is not a whole number of steps, or has
///   more grid points than can be allocated.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tickgrid_core::resample_parsed",
        skip_all,
        fields(instrument = %instrument, records = records.len()),
    )
)]
pub fn resample_parsed(
    instrument: &InstrumentId,
    mut records: Vec<ParsedRecord>,
    window: &TimeWindow,
    step: Step,
) -> Result<ResampledSeries, TickgridError> {
    if records.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("no valid records; skipping instrument");
        return Err(TickgridError::empty_input(instrument.as_str()));
    }
    if !window.is_multiple_of(step) {
        return Err(TickgridError::InvalidArg(format!(
            "window {} .. {} is not a whole number of {step} steps",
            window.start(),
            window.end()
        )));
    }

    records.sort_by_key(|r| r.ts);
    let (mut buckets, out_of_window) = bucket_last(&records, window, step)?;

    let observed_buckets = buckets.iter().filter(|b| b.is_some()).count();
    if observed_buckets == 0 {
        #[cfg(feature = "tracing")]
        tracing::warn!(out_of_window, "no records inside the window; skipping instrument");
        return Err(TickgridError::no_observations(instrument.as_str()));
    }
    #[cfg(feature = "tracing")]
    if out_of_window > 0 {
        tracing::debug!(out_of_window, "ignored records outside the window");
    }

    let forward_filled = forward_fill(&mut buckets);
    let back_filled = back_fill(&mut buckets);

    let points: Vec<GridPoint> = window
        .grid(step)
        .zip(buckets)
        .filter_map(|(ts, value)| value.map(|value| GridPoint { ts, value }))
        .collect();

    Ok(ResampledSeries {
        instrument: instrument.clone(),
        window: *window,
        step,
        points,
        stats: ResampleStats {
            input_records: records.len(),
            parsed_records: records.len(),
            rejected_records: 0,
            out_of_window,
            observed_buckets,
            forward_filled,
            back_filled,
        },
    })
}

/// Parse and resample one instrument's raw records onto the grid of `window`.
///
/// Parsing is identical to the one used for the window itself. Unparsable
/// records are dropped and counted in `stats.rejected_records`.
///
/// # Errors
/// - `EmptyInput` if no record parses; no series is produced.
/// - Anything [`resample_parsed`] returns.
pub fn resample(
    instrument: &InstrumentId,
    records: &[RawRecord],
    window: &TimeWindow,
    cfg: &GridConfig,
) -> Result<ResampledSeries, TickgridError> {
    let batch = parse_records(records, cfg);
    let rejected = batch.rejects.len();
    let mut series = resample_parsed(instrument, batch.records, window, cfg.step)?;
    series.stats.input_records = records.len();
    series.stats.rejected_records = rejected;
    Ok(series)
}
