use chrono::NaiveDate;
use tickgrid_core::{
    GridConfig, PeriodGroup, Step, TickgridError, TimeWindow, compute_global_window,
};

/// Orchestrator that turns period groups into aligned series.
#[derive(Debug, Clone)]
pub struct Tickgrid {
    pub(crate) cfg: GridConfig,
}

/// Builder for constructing a `Tickgrid` orchestrator.
#[derive(Debug, Clone, Default)]
pub struct TickgridBuilder {
    run_date: Option<NaiveDate>,
    step: Option<Step>,
    step_secs: Option<i64>,
    timestamp_width: Option<usize>,
}

impl TickgridBuilder {
    /// Create a new builder.
    ///
    /// Behavior:
    /// - The run date has no default and must be set via [`Self::run_date`].
    /// - The step defaults to 5 seconds and the timestamp width to 15 characters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calendar date every time-of-day timestamp is anchored on.
    #[must_use]
    pub const fn run_date(mut self, date: NaiveDate) -> Self {
        self.run_date = Some(date);
        self
    }

    /// Grid spacing. Overrides any earlier [`Self::step_secs`].
    #[must_use]
    pub const fn step(mut self, step: Step) -> Self {
        self.step = Some(step);
        self.step_secs = None;
        self
    }

    /// Grid spacing in whole seconds.
    ///
    /// Validation is deferred to [`Self::build`]; overrides any earlier
    /// [`Self::step`].
    #[must_use]
    pub const fn step_secs(mut self, secs: i64) -> Self {
        self.step_secs = Some(secs);
        self.step = None;
        self
    }

    /// Number of leading characters of a timestamp that are significant.
    #[must_use]
    pub const fn timestamp_width(mut self, width: usize) -> Self {
        self.timestamp_width = Some(width);
        self
    }

    /// Build the `Tickgrid` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no run date was set, the step is not positive,
    /// or the timestamp width is zero.
    pub fn build(self) -> Result<Tickgrid, TickgridError> {
        let run_date = self.run_date.ok_or_else(|| {
            TickgridError::InvalidArg("no run date set; call run_date(...)".to_string())
        })?;
        let step = match (self.step, self.step_secs) {
            (_, Some(secs)) => Step::from_secs(secs)?,
            (Some(step), None) => step,
            (None, None) => Step::DEFAULT,
        };
        let mut cfg = GridConfig::new(run_date).with_step(step);
        if let Some(width) = self.timestamp_width {
            cfg.timestamp_width = width;
        }
        cfg.validate()?;
        Ok(Tickgrid { cfg })
    }
}

impl Tickgrid {
    /// Start building a new `Tickgrid` instance.
    ///
    /// ```
    /// use chrono::NaiveDate;
    ///
    /// let tg = tickgrid::Tickgrid::builder()
    ///     .run_date(NaiveDate::from_ymd_opt(2025, 1, 25).unwrap())
    ///     .step_secs(5)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(tg.config().step.to_string(), "5S");
    /// ```
    #[must_use]
    pub fn builder() -> TickgridBuilder {
        TickgridBuilder::new()
    }

    /// Wrap an already validated configuration.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `cfg` does not validate.
    pub fn from_config(cfg: GridConfig) -> Result<Self, TickgridError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// Active grid configuration.
    #[must_use]
    pub const fn config(&self) -> &GridConfig {
        &self.cfg
    }

    /// Compute the window shared by every instrument of `group`.
    ///
    /// # Errors
    /// Returns `EmptyWindow` if no instrument yields a valid timestamp.
    pub fn window(&self, group: &PeriodGroup) -> Result<TimeWindow, TickgridError> {
        compute_global_window(&group.instruments, &self.cfg)
    }
}
