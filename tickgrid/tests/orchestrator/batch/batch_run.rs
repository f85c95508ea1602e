use crate::helpers::{dead_group, sample_group, tg};
use tickgrid::{ErrorScope, TickgridError};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn failing_period_does_not_affect_the_others() {
    let tg = tg();
    let groups = [
        sample_group("Period1"),
        dead_group("Period2"),
        sample_group("Period3"),
    ];
    let report = tg.batch().periods(&groups).unwrap().run().await.unwrap();

    let names: Vec<_> = report.periods.iter().map(|p| p.period.as_str()).collect();
    assert_eq!(names, vec!["Period1", "Period3"]);
    assert_eq!(report.failures.len(), 1);

    let failure = &report.failures[0];
    assert_eq!(failure.scope(), ErrorScope::Group);
    assert!(matches!(failure, TickgridError::Period { period, .. } if period == "Period2"));
    assert_eq!(failure.root(), &TickgridError::EmptyWindow { instruments: 2 });
    assert!(report.has_warnings());
}

#[tokio::test]
async fn batch_matches_sequential_processing() {
    let tg = tg();
    let groups = [sample_group("Period1"), sample_group("Period2")];
    let report = tg.batch().periods(&groups).unwrap().run().await.unwrap();

    for (got, group) in report.periods.iter().zip(&groups) {
        assert_eq!(got, &tg.process_period(group).unwrap());
    }
}

#[tokio::test]
async fn empty_batch_is_rejected() {
    let err = tg().batch().run().await.unwrap_err();
    assert!(matches!(err, TickgridError::InvalidArg(_)));
}
