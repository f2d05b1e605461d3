//! Reimbursable trip day counting.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Counts the reimbursable days of a trip.
///
/// The start and end instants are combined from their date and time
/// parts, but only the calendar dates decide the count: the result is
/// `max(1, end date - start date + 1)` in whole days. A trip that starts
/// and ends on the same calendar day counts as one day regardless of
/// hours; crossing midnight by even a few minutes counts the extra day.
/// An end before the start clamps to one day.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use trip_expense_engine::calculation::calculate_trip_days;
///
/// let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let time = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// assert_eq!(calculate_trip_days(date(10), time(9, 0), date(10), time(18, 0)), 1);
/// assert_eq!(calculate_trip_days(date(10), time(9, 0), date(11), time(18, 0)), 2);
/// assert_eq!(calculate_trip_days(date(10), time(23, 59), date(11), time(0, 1)), 2);
/// ```
pub fn calculate_trip_days(
    start_date: NaiveDate,
    start_time: NaiveTime,
    end_date: NaiveDate,
    end_time: NaiveTime,
) -> u32 {
    let start = NaiveDateTime::new(start_date, start_time);
    let end = NaiveDateTime::new(end_date, end_time);

    let day_diff = end
        .date()
        .signed_duration_since(start.date())
        .num_days();

    day_diff.saturating_add(1).max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_same_day_trip_is_one_day() {
        let days = calculate_trip_days(
            date(2024, 1, 10),
            time(9, 0),
            date(2024, 1, 10),
            time(18, 0),
        );
        assert_eq!(days, 1);
    }

    #[test]
    fn test_next_day_trip_is_two_days() {
        let days = calculate_trip_days(
            date(2024, 1, 10),
            time(9, 0),
            date(2024, 1, 11),
            time(18, 0),
        );
        assert_eq!(days, 2);
    }

    #[test]
    fn test_crossing_midnight_by_minutes_counts_full_day() {
        let days = calculate_trip_days(
            date(2024, 1, 10),
            time(23, 59),
            date(2024, 1, 11),
            time(0, 1),
        );
        assert_eq!(days, 2);
    }

    #[test]
    fn test_week_long_trip() {
        let days = calculate_trip_days(
            date(2024, 1, 10),
            time(9, 0),
            date(2024, 1, 16),
            time(18, 0),
        );
        assert_eq!(days, 7);
    }

    #[test]
    fn test_trip_across_month_boundary() {
        let days = calculate_trip_days(
            date(2024, 1, 31),
            time(9, 0),
            date(2024, 2, 2),
            time(18, 0),
        );
        assert_eq!(days, 3);
    }

    #[test]
    fn test_end_before_start_clamps_to_one_day() {
        let days = calculate_trip_days(
            date(2024, 1, 11),
            time(9, 0),
            date(2024, 1, 10),
            time(18, 0),
        );
        assert_eq!(days, 1);
    }

    #[test]
    fn test_same_day_late_start_early_end_is_one_day() {
        let days = calculate_trip_days(
            date(2024, 1, 10),
            time(18, 0),
            date(2024, 1, 10),
            time(9, 0),
        );
        assert_eq!(days, 1);
    }

    proptest! {
        #[test]
        fn trip_days_is_at_least_one(
            year in 2020i32..2030,
            month in 1u32..=12,
            day in 1u32..=28,
            offset_days in -40i64..40,
            start_hour in 0u32..24,
            end_hour in 0u32..24,
        ) {
            let start_date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let end_date = start_date + chrono::Duration::days(offset_days);
            let days = calculate_trip_days(
                start_date,
                NaiveTime::from_hms_opt(start_hour, 0, 0).unwrap(),
                end_date,
                NaiveTime::from_hms_opt(end_hour, 0, 0).unwrap(),
            );

            prop_assert!(days >= 1);
            if offset_days >= 0 {
                prop_assert_eq!(i64::from(days), offset_days + 1);
            }
        }
    }
}
