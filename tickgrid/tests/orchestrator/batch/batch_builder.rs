use crate::helpers::{sample_group, tg};
use tickgrid::TickgridError;

#[test]
fn duplicate_names_are_rejected_in_periods() {
    let tg = tg();
    let res = tg
        .batch()
        .periods(&[sample_group("Period1"), sample_group("Period1")]);
    assert!(matches!(res, Err(TickgridError::InvalidArg(_))));
}

#[test]
fn duplicate_names_are_rejected_in_add_period() {
    let tg = tg();
    let res = tg
        .batch()
        .add_period(sample_group("Period1"))
        .and_then(|b| b.add_period(sample_group("Period1")));
    assert!(matches!(res, Err(TickgridError::InvalidArg(_))));
}

#[tokio::test]
async fn add_period_appends_in_order() {
    let tg = tg();
    let report = tg
        .batch()
        .add_period(sample_group("Period2"))
        .unwrap()
        .add_period(sample_group("Period1"))
        .unwrap()
        .run()
        .await
        .unwrap();
    let names: Vec<_> = report.periods.iter().map(|p| p.period.as_str()).collect();
    assert_eq!(names, vec!["Period2", "Period1"]);
}
