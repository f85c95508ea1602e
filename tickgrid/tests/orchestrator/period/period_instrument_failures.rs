use crate::helpers::{recs, sample_group, tg};
use tickgrid::{ErrorScope, ParseError, PeriodGroup, TickgridError};

#[test]
fn empty_instrument_is_skipped_with_a_warning() {
    let report = tg().process_period(&sample_group("Period1")).unwrap();

    assert_eq!(report.instruments.len(), 3);
    assert_eq!(report.series().count(), 2);

    let skipped: Vec<_> = report.skipped().collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].instrument.as_str(), "C");
    assert_eq!(skipped[0].warnings, vec![TickgridError::empty_input("C")]);
    assert_eq!(skipped[0].warnings[0].scope(), ErrorScope::Instrument);
    assert!(report.has_warnings());
}

#[test]
fn instrument_with_only_bad_rows_keeps_its_rejects() {
    let g = PeriodGroup::new("P")
        .with_instrument("A", recs(&[("09:30:00", 1.0)]))
        .with_instrument("B", recs(&[("25:99:00", 2.0)]));
    let report = tg().process_period(&g).unwrap();

    let b = &report.instruments[1];
    assert!(b.series.is_none());
    assert_eq!(b.warnings, vec![TickgridError::empty_input("B")]);
    assert!(matches!(
        b.rejects[0].reason,
        ParseError::InvalidTimestamp { .. }
    ));
}

#[test]
fn clean_group_has_no_warnings() {
    let g = PeriodGroup::new("P")
        .with_instrument("A", recs(&[("09:30:00", 1.0), ("09:30:05", 2.0)]))
        .with_instrument("B", recs(&[("09:30:03", 3.0)]));
    let report = tg().process_period(&g).unwrap();
    assert!(!report.has_warnings());
    assert_eq!(report.skipped().count(), 0);
}
