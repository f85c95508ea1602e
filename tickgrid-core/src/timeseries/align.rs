use chrono::{DateTime, NaiveDateTime};
use tickgrid_types::Step;

// Grid boundaries are multiples of the step counted from the Unix epoch.
fn epoch_micros(ts: NaiveDateTime) -> i64 {
    ts.and_utc().timestamp_micros()
}

fn has_sub_micros(ts: NaiveDateTime) -> bool {
    ts.and_utc().timestamp_subsec_nanos() % 1_000 != 0
}

fn from_epoch_micros(us: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_micros(us).map(|dt| dt.naive_utc())
}

/// Whether `ts` sits exactly on a grid boundary.
#[must_use]
pub fn is_aligned(ts: NaiveDateTime, step: Step) -> bool {
    !has_sub_micros(ts) && epoch_micros(ts).rem_euclid(step.as_micros()) == 0
}

/// Latest grid boundary at or before `ts`. Identity on a boundary.
///
/// Returns `None` only if the boundary is outside the representable range.
#[must_use]
pub fn floor_to_step(ts: NaiveDateTime, step: Step) -> Option<NaiveDateTime> {
    let us = epoch_micros(ts);
    from_epoch_micros(us - us.rem_euclid(step.as_micros()))
}

/// Earliest grid boundary at or after `ts`. Identity on a boundary.
///
/// Returns `None` only if the boundary is outside the representable range.
#[must_use]
pub fn ceil_to_step(ts: NaiveDateTime, step: Step) -> Option<NaiveDateTime> {
    if is_aligned(ts, step) {
        return Some(ts);
    }
    let us = epoch_micros(ts);
    let floor = us - us.rem_euclid(step.as_micros());
    from_epoch_micros(floor.checked_add(step.as_micros())?)
}
