use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use proptest::prelude::*;
use tickgrid_core::{
    GridConfig, InstrumentId, RawRecord, Step, compute_global_window, is_aligned, parse_timestamp,
    resample,
};

const OPEN_SECS: i64 = 9 * 3600;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 25).unwrap()
}

fn text_at(offset_us: i64) -> String {
    let total = OPEN_SECS * 1_000_000 + offset_us;
    let secs = total / 1_000_000;
    let us = total % 1_000_000;
    format!(
        "{:02}:{:02}:{:02}.{:06}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60,
        us
    )
}

fn ts_of(raw: &RawRecord) -> NaiveDateTime {
    parse_timestamp(raw.timestamp_text().unwrap(), day(), 15).unwrap()
}

// Offsets within the first hour after the open, cents as prices.
fn arb_record() -> impl Strategy<Value = RawRecord> {
    (0i64..3_600_000_000i64, 1i64..1_000_000i64)
        .prop_map(|(off, cents)| RawRecord::new(text_at(off), cents as f64 / 100.0))
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop::sample::select(vec![1i64, 5, 15, 60]).prop_map(|s| Step::from_secs(s).unwrap())
}

fn group_of(recs: Vec<Vec<RawRecord>>) -> BTreeMap<InstrumentId, Vec<RawRecord>> {
    recs.into_iter()
        .enumerate()
        .map(|(i, r)| (InstrumentId::new(format!("I{i}")), r))
        .collect()
}

proptest! {
    #[test]
    fn window_covers_all_and_is_aligned(
        recs in proptest::collection::vec(proptest::collection::vec(arb_record(), 0..50), 1..6),
        step in arb_step(),
    ) {
        let cfg = GridConfig::new(day()).with_step(step);
        let all: Vec<NaiveDateTime> = recs.iter().flatten().map(ts_of).collect();
        let group = group_of(recs);
        let res = compute_global_window(&group, &cfg);

        if all.is_empty() {
            prop_assert!(res.is_err());
        } else {
            let w = res.unwrap();
            let lo = *all.iter().min().unwrap();
            let hi = *all.iter().max().unwrap();
            prop_assert!(w.start() <= lo);
            prop_assert!(w.end() >= hi);
            prop_assert!(is_aligned(w.start(), step));
            prop_assert!(is_aligned(w.end(), step));
            // snapped to the nearest boundary, never further
            prop_assert!(lo - w.start() < step.as_delta());
            prop_assert!(w.end() - hi < step.as_delta());
        }
    }

    #[test]
    fn output_matches_grid_exactly(
        recs in proptest::collection::vec(arb_record(), 1..200),
        step in arb_step(),
    ) {
        let cfg = GridConfig::new(day()).with_step(step);
        let group = group_of(vec![recs.clone()]);
        let w = compute_global_window(&group, &cfg).unwrap();
        let s = resample(&InstrumentId::new("I0"), &recs, &w, &cfg).unwrap();

        let span_us = (w.end() - w.start()).num_microseconds().unwrap();
        let expected_len = usize::try_from(span_us / step.as_micros()).unwrap() + 1;
        prop_assert_eq!(s.len(), expected_len);
        prop_assert_eq!(s.points.first().map(|p| p.ts), Some(w.start()));
        prop_assert_eq!(s.points.last().map(|p| p.ts), Some(w.end()));
        for pair in s.points.windows(2) {
            prop_assert_eq!(pair[1].ts - pair[0].ts, step.as_delta());
        }
        prop_assert_eq!(s.timestamps().collect::<Vec<_>>(), w.grid(step).collect::<Vec<_>>());
    }

    #[test]
    fn resample_is_idempotent(
        recs in proptest::collection::vec(arb_record(), 1..200),
        step in arb_step(),
    ) {
        let cfg = GridConfig::new(day()).with_step(step);
        let group = group_of(vec![recs.clone()]);
        let w = compute_global_window(&group, &cfg).unwrap();
        let id = InstrumentId::new("I0");
        let once = resample(&id, &recs, &w, &cfg).unwrap();
        let twice = resample(&id, &recs, &w, &cfg).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn observed_buckets_hold_last_value_and_gaps_copy_literals(
        recs in proptest::collection::vec(arb_record(), 1..200),
        step in arb_step(),
    ) {
        let cfg = GridConfig::new(day()).with_step(step);
        let group = group_of(vec![recs.clone()]);
        let w = compute_global_window(&group, &cfg).unwrap();
        let s = resample(&InstrumentId::new("I0"), &recs, &w, &cfg).unwrap();

        // Slow model: stable-sorted records grouped per bucket, last one wins.
        let mut sorted: Vec<(NaiveDateTime, f64)> =
            recs.iter().map(|r| (ts_of(r), r.price().unwrap())).collect();
        sorted.sort_by_key(|(ts, _)| *ts);
        let mut last_in: BTreeMap<NaiveDateTime, f64> = BTreeMap::new();
        for (ts, px) in &sorted {
            let off = (*ts - w.start()).num_microseconds().unwrap();
            let g = w.start() + TimeDelta::microseconds(off - off % step.as_micros());
            last_in.insert(g, *px);
        }
        let first_value = *last_in.values().next().unwrap();

        let mut carried: Option<f64> = None;
        for p in &s.points {
            match last_in.get(&p.ts) {
                Some(v) => {
                    prop_assert_eq!(p.value, *v);
                    carried = Some(*v);
                }
                None => prop_assert_eq!(p.value, carried.unwrap_or(first_value)),
            }
        }
        prop_assert_eq!(s.stats.observed_buckets, last_in.len());
    }

    #[test]
    fn input_order_is_irrelevant_for_distinct_timestamps(
        recs in proptest::collection::vec(arb_record(), 1..100),
        step in arb_step(),
    ) {
        let mut seen = std::collections::HashSet::new();
        let distinct: Vec<RawRecord> = recs
            .into_iter()
            .filter(|r| seen.insert(r.timestamp_text().unwrap().to_string()))
            .collect();
        let mut reversed = distinct.clone();
        reversed.reverse();

        let cfg = GridConfig::new(day()).with_step(step);
        let w = compute_global_window(&group_of(vec![distinct.clone()]), &cfg).unwrap();
        let id = InstrumentId::new("I0");
        let a = resample(&id, &distinct, &w, &cfg).unwrap();
        let b = resample(&id, &reversed, &w, &cfg).unwrap();
        prop_assert_eq!(a.points, b.points);
    }
}
