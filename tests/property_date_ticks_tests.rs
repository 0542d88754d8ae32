use chrono::{Datelike, NaiveDate, TimeDelta};
use linechart::core::{DatePeriod, MAX_SPECIAL_CASE_TICKS, detect_date_ticks, nice_date_ticks};
use proptest::prelude::*;

fn start_monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2001, 1, 1).expect("valid date")
}

proptest! {
    #[test]
    fn weekly_ticks_are_bounded_spaced_and_end_on_max(
        week_offsets in proptest::collection::btree_set(0i64..2_000, 2..200),
    ) {
        let values: Vec<_> = week_offsets
            .iter()
            .map(|weeks| {
                (start_monday() + TimeDelta::weeks(*weeks))
                    .and_hms_opt(0, 0, 0)
                    .expect("midnight")
                    .and_utc()
            })
            .collect();
        let max_date = values.iter().map(|v| v.date_naive()).max().expect("non-empty");

        let ticks = detect_date_ticks(&values, MAX_SPECIAL_CASE_TICKS).expect("weekly special case");
        prop_assert!(matches!(ticks.period, DatePeriod::Week | DatePeriod::Month | DatePeriod::Year));
        prop_assert!(ticks.ticks.len() <= MAX_SPECIAL_CASE_TICKS);
        prop_assert_eq!(ticks.ticks.last().copied(), Some(max_date));

        if ticks.period == DatePeriod::Week {
            let steps: Vec<i64> = ticks
                .ticks
                .windows(2)
                .map(|pair| (pair[1] - pair[0]).num_days())
                .collect();
            for step in &steps {
                prop_assert!(*step > 0 && step % 7 == 0);
                prop_assert_eq!(*step, steps[0]);
            }
        }
    }

    #[test]
    fn monthly_ticks_step_by_whole_months(
        n_periods in 0i64..600,
        max_ticks in 2usize..16,
    ) {
        let max_date = NaiveDate::from_ymd_opt(2050, 6, 1).expect("valid date");
        let ticks = nice_date_ticks(max_date, n_periods, DatePeriod::Month, max_ticks)
            .expect("ticks");

        prop_assert!(!ticks.is_empty());
        prop_assert!(ticks.len() <= max_ticks);
        prop_assert_eq!(ticks.last().copied(), Some(max_date));
        let month_index = |d: &NaiveDate| i64::from(d.year()) * 12 + i64::from(d.month0());
        let first_step = ticks
            .windows(2)
            .next()
            .map(|pair| month_index(&pair[1]) - month_index(&pair[0]));
        for pair in ticks.windows(2) {
            prop_assert_eq!(pair[1].day(), 1);
            prop_assert_eq!(Some(month_index(&pair[1]) - month_index(&pair[0])), first_step);
        }
        // The first tick never lands after the data's minimum.
        let min_index = month_index(&max_date) - n_periods;
        prop_assert!(month_index(&ticks[0]) <= min_index);
    }
}
