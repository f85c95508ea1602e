use std::collections::HashSet;

use tickgrid_core::{BatchReport, PeriodGroup, PeriodReport, TickgridError};

use crate::Tickgrid;

/// Builder to process several period groups concurrently.
pub struct BatchBuilder<'a> {
    pub(crate) tickgrid: &'a Tickgrid,
    pub(crate) periods: Vec<PeriodGroup>,
}

impl<'a> BatchBuilder<'a> {
    /// Create a new builder bound to a `Tickgrid` instance, with no periods.
    #[must_use]
    pub const fn new(tickgrid: &'a Tickgrid) -> Self {
        Self {
            tickgrid,
            periods: Vec::new(),
        }
    }

    /// Replace the period list.
    ///
    /// Trade-offs: Replaces any previously added periods; use `add_period`
    /// if you need to append.
    ///
    /// # Errors
    /// Returns an error if two groups share a name.
    pub fn periods(mut self, groups: &[PeriodGroup]) -> Result<Self, TickgridError> {
        let mut seen = HashSet::new();
        for g in groups {
            if !seen.insert(g.name.as_str()) {
                return Err(TickgridError::InvalidArg(format!(
                    "duplicate period '{}' in periods list",
                    g.name
                )));
            }
        }
        self.periods = groups.to_vec();
        Ok(self)
    }

    /// Add a single period group.
    ///
    /// # Errors
    /// Returns an error if a period with the same name was already added.
    pub fn add_period(mut self, group: PeriodGroup) -> Result<Self, TickgridError> {
        if self.periods.iter().any(|p| p.name == group.name) {
            return Err(TickgridError::InvalidArg(format!(
                "duplicate period '{}' already exists in periods list",
                group.name
            )));
        }
        self.periods.push(group);
        Ok(self)
    }

    /// Process every period and aggregate the outcomes.
    ///
    /// Behavior:
    /// - Each period runs on a blocking worker; periods share no state.
    /// - Reports keep the order the periods were given in.
    /// - A period that fails as a whole is recorded in `failures`, tagged with
    ///   its name, and does not abort the batch.
    ///
    /// # Errors
    /// Returns an error only if no periods are specified.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickgrid::batch::run",
            skip_all,
            fields(periods = self.periods.len()),
        )
    )]
    pub async fn run(self) -> Result<BatchReport, TickgridError> {
        if self.periods.is_empty() {
            return Err(TickgridError::InvalidArg("no periods specified for batch".into()));
        }

        let tasks = self.periods.into_iter().map(|group| {
            let tg = self.tickgrid.clone();
            async move {
                let name = group.name.clone();
                let joined = tokio::task::spawn_blocking(move || tg.process_period(&group)).await;
                let outcome = match joined {
                    Ok(res) => res,
                    Err(e) => Err(TickgridError::Data(format!("worker failed: {e}"))),
                };
                (name, outcome)
            }
        });
        let joined: Vec<(String, Result<PeriodReport, TickgridError>)> =
            futures::future::join_all(tasks).await;

        let mut report = BatchReport::default();
        for (name, outcome) in joined {
            match outcome {
                Ok(p) => report.periods.push(p),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(period = %name, error = %e, "period skipped");
                    report.failures.push(TickgridError::in_period(name, e));
                }
            }
        }
        Ok(report)
    }
}

impl Tickgrid {
    /// Begin building a multi-period batch.
    ///
    /// Typical usage: chain `periods`/`add_period` then call `run()`.
    #[must_use]
    pub const fn batch(&'_ self) -> BatchBuilder<'_> {
        BatchBuilder::new(self)
    }
}
