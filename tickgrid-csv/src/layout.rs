use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tickgrid_types::InstrumentId;

/// Instruments processed when none are configured.
pub const DEFAULT_INSTRUMENTS: [&str; 5] = ["A", "B", "C", "D", "E"];

/// Which instruments to look for inside a period directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstrumentSelection {
    /// A fixed list; absent files are reported as missing.
    Fixed(Vec<InstrumentId>),
    /// Every subdirectory of the period directory, sorted by name.
    Scan,
}

impl Default for InstrumentSelection {
    fn default() -> Self {
        Self::Fixed(DEFAULT_INSTRUMENTS.iter().copied().map(InstrumentId::from).collect())
    }
}

/// Where input files live on disk.
///
/// With the defaults, instrument `A` of `Period1` is read from
/// `trainingdata/Period1/Period1/A/trade_data__A.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetLayout {
    /// Directory holding one entry per period.
    pub base: PathBuf,
    /// Name prefix that marks an entry of `base` as a period.
    pub period_prefix: String,
    /// Whether each period's files sit one level deeper, in a directory of the same name.
    pub nested: bool,
    /// Instruments to load per period.
    pub instruments: InstrumentSelection,
}

impl Default for DatasetLayout {
    fn default() -> Self {
        Self {
            base: PathBuf::from("trainingdata"),
            period_prefix: "Period".to_string(),
            nested: true,
            instruments: InstrumentSelection::default(),
        }
    }
}

impl DatasetLayout {
    /// Default layout rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            ..Self::default()
        }
    }

    /// Directory holding the instrument folders of the period entry `name`.
    #[must_use]
    pub fn period_dir(&self, name: &str) -> PathBuf {
        let top = self.base.join(name);
        if self.nested { top.join(name) } else { top }
    }

    /// Input file of `instrument` inside `period_dir`.
    #[must_use]
    pub fn trade_file(period_dir: &Path, instrument: &InstrumentId) -> PathBuf {
        period_dir
            .join(instrument.as_str())
            .join(format!("trade_data__{instrument}.csv"))
    }
}
