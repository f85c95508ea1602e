use crate::helpers::{at, recs, sample_group, tg};
use tickgrid::{PeriodGroup, TimeWindow};

#[test]
fn every_series_shares_the_group_window() {
    let report = tg().process_period(&sample_group("Period1")).unwrap();

    assert_eq!(report.period, "Period1");
    assert_eq!(report.window, TimeWindow::new(at(9, 30, 0), at(9, 30, 15)).unwrap());

    let grid: Vec<_> = report.window.grid(tg().config().step).collect();
    for s in report.series() {
        assert_eq!(s.timestamps().collect::<Vec<_>>(), grid, "instrument {}", s.instrument);
        assert_eq!(s.window, report.window);
    }
}

#[test]
fn values_follow_last_in_bucket_then_fill() {
    let report = tg().process_period(&sample_group("Period1")).unwrap();
    let by_name = |n: &str| {
        report
            .series()
            .find(|s| s.instrument.as_str() == n)
            .unwrap()
            .values()
            .collect::<Vec<_>>()
    };
    assert_eq!(by_name("A"), vec![11.0, 11.0, 11.0, 11.0]);
    assert_eq!(by_name("B"), vec![20.0, 20.0, 20.0, 20.0]);
}

#[test]
fn report_matches_window_computed_alone() {
    let g = sample_group("Period1");
    let tg = tg();
    assert_eq!(tg.window(&g).unwrap(), tg.process_period(&g).unwrap().window);
}

#[test]
fn stats_reflect_the_whole_input() {
    let g = PeriodGroup::new("P")
        .with_instrument("A", recs(&[("09:30:02", 1.0), ("junk", 2.0), ("09:30:07", f64::NAN)]));
    let report = tg().process_period(&g).unwrap();
    let a = &report.instruments[0];
    let s = a.series.as_ref().unwrap();
    assert_eq!(s.stats.input_records, 3);
    assert_eq!(s.stats.parsed_records, 1);
    assert_eq!(s.stats.rejected_records, 2);
    assert_eq!(a.rejects.len(), 2);
    assert_eq!(a.rejects[0].row, 1);
    assert_eq!(a.rejects[1].row, 2);
    // The NaN record carries no price, so the window ends at the 09:30:02 bucket.
    assert_eq!(report.window.end(), at(9, 30, 5));
}
