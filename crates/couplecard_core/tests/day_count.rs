use chrono::{Duration, Local, TimeZone};
use couplecard_core::{
    days_together, display_days, next_midnight_epoch_ms, DAYS_PLACEHOLDER,
};

fn local_time_ms(days_ago: i64, hour: u32) -> i64 {
    let date = Local::now().date_naive() - Duration::days(days_ago);
    let wall_clock = date
        .and_hms_opt(hour, 0, 0)
        .expect("wall clock time should be valid");
    Local
        .from_local_datetime(&wall_clock)
        .earliest()
        .expect("local wall clock should map to an instant")
        .timestamp_millis()
}

#[test]
fn start_at_todays_midnight_counts_one() {
    let midnight = local_time_ms(0, 0);
    assert_eq!(days_together(midnight, midnight), Some(1));
    assert_eq!(display_days(Some(midnight), midnight, None), "1");
}

#[test]
fn count_is_inclusive_of_the_start_day() {
    let start = local_time_ms(3, 12);
    let now = local_time_ms(0, 12);
    assert_eq!(days_together(start, now), Some(4));
}

#[test]
fn time_of_day_does_not_change_the_count() {
    // Late evening start, early morning now: still a whole-day difference
    // because both sides truncate to local midnight.
    let start = local_time_ms(1, 18);
    let now = local_time_ms(0, 9);
    assert_eq!(days_together(start, now), Some(2));
}

#[test]
fn future_start_counts_down_to_zero() {
    let tomorrow = local_time_ms(-1, 12);
    let now = local_time_ms(0, 12);
    assert_eq!(days_together(tomorrow, now), Some(0));
}

#[test]
fn unset_start_uses_fallback_then_placeholder() {
    let now = local_time_ms(0, 12);
    assert_eq!(display_days(None, now, Some("365")), "365");
    assert_eq!(display_days(None, now, None), DAYS_PLACEHOLDER);
    assert_eq!(display_days(Some(0), now, None), DAYS_PLACEHOLDER);
}

#[test]
fn out_of_range_start_degrades_to_fallback() {
    let now = local_time_ms(0, 12);
    assert_eq!(display_days(Some(i64::MAX), now, Some("9")), "9");
}

#[test]
fn next_midnight_lands_on_tomorrows_date() {
    let now = local_time_ms(0, 12);
    let refresh = next_midnight_epoch_ms(now).expect("noon today should have a next midnight");
    assert!(refresh > now);

    let refresh_date = Local
        .timestamp_millis_opt(refresh)
        .single()
        .expect("refresh instant should be representable")
        .date_naive();
    let tomorrow = Local::now().date_naive() + Duration::days(1);
    assert_eq!(refresh_date, tomorrow);
}
