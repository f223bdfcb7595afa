//! Day-count calculator.
//!
//! # Responsibility
//! - Compute the inclusive "days together" count anchored at local midnight.
//! - Compute the next local-midnight instant used as the widget refresh time.
//!
//! # Invariants
//! - Both instants are truncated to their local calendar date before
//!   differencing, so the count changes exactly at midnight.
//! - The count is inclusive: a start date equal to today yields 1.
//! - Failures never surface; `display_days` degrades to the stored fallback
//!   or the em-dash placeholder.

use chrono::{Local, TimeZone, Timelike};

/// Placeholder shown when no day count is available.
pub const DAYS_PLACEHOLDER: &str = "\u{2014}";

/// Current instant in epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    Local::now().timestamp_millis()
}

/// Inclusive day count between two instants, anchored at local midnight.
///
/// Returns `None` when either timestamp falls outside the representable
/// range. A future start date yields zero or a negative count, matching the
/// raw arithmetic the host app displays.
pub fn days_together(start_epoch_ms: i64, now_epoch_ms: i64) -> Option<i64> {
    let start_date = Local.timestamp_millis_opt(start_epoch_ms).single()?.date_naive();
    let now_date = Local.timestamp_millis_opt(now_epoch_ms).single()?.date_naive();
    Some(now_date.signed_duration_since(start_date).num_days() + 1)
}

/// Day count for display, with the degrade-only fallback chain.
///
/// An absent or non-positive start date, or an out-of-range timestamp, falls
/// back to the host-stored `days` string when non-empty, else the em-dash
/// placeholder.
pub fn display_days(start_epoch_ms: Option<i64>, now_epoch_ms: i64, fallback: Option<&str>) -> String {
    if let Some(start) = start_epoch_ms {
        if start > 0 {
            if let Some(days) = days_together(start, now_epoch_ms) {
                return days.to_string();
            }
        }
    }
    stored_or_placeholder(fallback)
}

/// Epoch millis of the next local midnight after `now_epoch_ms`.
///
/// Returns `None` only for out-of-range input. On spring-forward days where
/// the wall clock skips midnight, the earliest valid instant of the day
/// stands in.
pub fn next_midnight_epoch_ms(now_epoch_ms: i64) -> Option<i64> {
    let now = Local.timestamp_millis_opt(now_epoch_ms).single()?;
    let midnight = now.date_naive().succ_opt()?.and_hms_opt(0, 0, 0)?;
    let instant = Local
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            let next_hour = midnight.with_hour(1)?;
            Local.from_local_datetime(&next_hour).earliest()
        })?;
    Some(instant.timestamp_millis())
}

fn stored_or_placeholder(fallback: Option<&str>) -> String {
    match fallback.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DAYS_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{display_days, stored_or_placeholder, DAYS_PLACEHOLDER};

    #[test]
    fn absent_start_uses_stored_fallback() {
        assert_eq!(display_days(None, 1_700_000_000_000, Some("42")), "42");
    }

    #[test]
    fn zero_start_is_treated_as_unset() {
        assert_eq!(
            display_days(Some(0), 1_700_000_000_000, None),
            DAYS_PLACEHOLDER
        );
    }

    #[test]
    fn negative_start_is_treated_as_unset() {
        assert_eq!(
            display_days(Some(-5), 1_700_000_000_000, Some("7")),
            "7"
        );
    }

    #[test]
    fn blank_fallback_collapses_to_placeholder() {
        assert_eq!(stored_or_placeholder(Some("   ")), DAYS_PLACEHOLDER);
        assert_eq!(stored_or_placeholder(None), DAYS_PLACEHOLDER);
        assert_eq!(stored_or_placeholder(Some(" 12 ")), "12");
    }
}
