// ---------- Lightweight fixtures and helpers for tests ----------

use chrono::{NaiveDate, NaiveDateTime};
use tickgrid::{PeriodGroup, RawRecord, Tickgrid};

/// Run date used across tests.
pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 25).unwrap()
}

/// `HH:MM:SS` on the run date, for readable assertions.
pub fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    day().and_hms_opt(h, m, s).unwrap()
}

/// Orchestrator with the default 5s step.
pub fn tg() -> Tickgrid {
    Tickgrid::builder().run_date(day()).build().unwrap()
}

/// Records from `(timestamp text, price)` pairs.
pub fn recs(rows: &[(&str, f64)]) -> Vec<RawRecord> {
    rows.iter().map(|(t, p)| RawRecord::new(*t, *p)).collect()
}

/// Three instruments, one of them empty.
pub fn sample_group(name: &str) -> PeriodGroup {
    PeriodGroup::new(name)
        .with_instrument("A", recs(&[("09:30:01", 10.0), ("09:30:04", 11.0)]))
        .with_instrument("B", recs(&[("09:30:12.250000", 20.0)]))
        .with_instrument("C", vec![])
}

/// A group in which nothing parses.
pub fn dead_group(name: &str) -> PeriodGroup {
    PeriodGroup::new(name)
        .with_instrument("A", recs(&[("garbage", 1.0)]))
        .with_instrument("B", vec![RawRecord::from_parts(None, Some(2.0))])
}
