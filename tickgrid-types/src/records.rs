//! Input observations and the groups they are processed in.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Name of one instrument within a period (e.g. `A`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentId(String);

impl InstrumentId {
    /// Wrap an instrument name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the inner name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InstrumentId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for InstrumentId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// One raw observation as read from an instrument file.
///
/// Either cell may be absent; the parser rejects such records rather than the
/// loader. Records are immutable once read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    timestamp: Option<String>,
    price: Option<f64>,
}

impl RawRecord {
    /// A complete record.
    pub fn new(timestamp: impl Into<String>, price: f64) -> Self {
        Self {
            timestamp: Some(timestamp.into()),
            price: Some(price),
        }
    }

    /// A record with possibly missing cells.
    #[must_use]
    pub const fn from_parts(timestamp: Option<String>, price: Option<f64>) -> Self {
        Self { timestamp, price }
    }

    /// Raw timestamp text, untruncated.
    #[must_use]
    pub fn timestamp_text(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    /// Raw price.
    #[must_use]
    pub const fn price(&self) -> Option<f64> {
        self.price
    }
}

/// An observation anchored on the run date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecord {
    /// Absolute timestamp (run date + parsed time of day).
    pub ts: NaiveDateTime,
    /// Observed price.
    pub price: f64,
}

/// A named batch of instruments that share one time window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodGroup {
    /// Period name (e.g. `Period1`).
    pub name: String,
    /// Raw records per instrument, ordered by instrument id.
    pub instruments: BTreeMap<InstrumentId, Vec<RawRecord>>,
}

impl PeriodGroup {
    /// An empty period.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instruments: BTreeMap::new(),
        }
    }

    /// Add (or replace) one instrument's records.
    #[must_use]
    pub fn with_instrument(mut self, id: impl Into<InstrumentId>, records: Vec<RawRecord>) -> Self {
        self.instruments.insert(id.into(), records);
        self
    }

    /// Total number of raw records across all instruments.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.instruments.values().map(Vec::len).sum()
    }
}
