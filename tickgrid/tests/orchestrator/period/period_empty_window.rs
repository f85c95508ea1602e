use crate::helpers::{dead_group, tg};
use tickgrid::{ErrorScope, PeriodGroup, TickgridError};

#[test]
fn group_without_valid_timestamps_fails_as_a_whole() {
    let err = tg().process_period(&dead_group("Period3")).unwrap_err();
    assert_eq!(err, TickgridError::EmptyWindow { instruments: 2 });
    assert_eq!(err.scope(), ErrorScope::Group);
}

#[test]
fn group_without_instruments_fails_as_a_whole() {
    let err = tg().process_period(&PeriodGroup::new("Empty")).unwrap_err();
    assert_eq!(err, TickgridError::EmptyWindow { instruments: 0 });
}
