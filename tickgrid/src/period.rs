use tickgrid_core::{
    InstrumentReport, ParsedBatch, PeriodGroup, PeriodReport, TickgridError, parse_records,
    resample_parsed, window_from_parsed,
};

use crate::Tickgrid;

impl Tickgrid {
    /// Align every instrument of one period group onto a shared grid.
    ///
    /// Behavior:
    /// - Each instrument is parsed once; the same parse feeds both the window
    ///   and the resampler.
    /// - The window is computed once for the whole group and never changes
    ///   while its instruments are resampled.
    /// - An instrument that cannot produce a series is kept in the report with
    ///   `series: None` and the reason in its `warnings`; the other
    ///   instruments are unaffected.
    ///
    /// # Errors
    /// Returns `EmptyWindow` if no instrument of the group yields a valid
    /// timestamp. No other failure aborts the group.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickgrid::process_period",
            skip_all,
            fields(period = %group.name, instruments = group.instruments.len()),
        )
    )]
    pub fn process_period(&self, group: &PeriodGroup) -> Result<PeriodReport, TickgridError> {
        let parsed: Vec<ParsedBatch> = group
            .instruments
            .values()
            .map(|raw| parse_records(raw, &self.cfg))
            .collect();
        let window = window_from_parsed(&parsed, self.cfg.step)?;
        #[cfg(feature = "tracing")]
        tracing::info!(start = %window.start(), end = %window.end(), "global window");

        let instruments = group
            .instruments
            .iter()
            .zip(parsed)
            .map(|((id, raw), batch)| {
                let rejected = batch.rejects.len();
                let (series, warnings) =
                    match resample_parsed(id, batch.records, &window, self.cfg.step) {
                        Ok(mut s) => {
                            s.stats.input_records = raw.len();
                            s.stats.rejected_records = rejected;
                            (Some(s), Vec::new())
                        }
                        Err(e) => (None, vec![e]),
                    };
                InstrumentReport {
                    instrument: id.clone(),
                    series,
                    rejects: batch.rejects,
                    warnings,
                }
            })
            .collect::<Vec<_>>();

        #[cfg(feature = "tracing")]
        {
            let produced = instruments.iter().filter(|r| r.series.is_some()).count();
            tracing::info!(
                produced,
                skipped = instruments.len() - produced,
                "period resampled"
            );
        }

        Ok(PeriodReport {
            period: group.name.clone(),
            window,
            instruments,
        })
    }
}
