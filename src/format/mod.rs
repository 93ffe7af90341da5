//! Display formatting for feed items.
//!
//! All functions here are pure; [`format_elapsed_time`] reads the wall clock
//! and delegates to [`format_elapsed_time_at`].

use chrono::Utc;

const MILLIS_PER_MINUTE: i64 = 60 * 1000;

/// Format a playback length as `MM:SS`, or `H:MM:SS` from one hour up.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds / 60) % 60;
    let seconds = total_seconds % 60;

    if hours == 0 {
        format!("{:02}:{:02}", minutes, seconds)
    } else {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Describe how long ago `past_epoch_millis` was, relative to now.
pub fn format_elapsed_time(past_epoch_millis: i64) -> String {
    format_elapsed_time_at(past_epoch_millis, Utc::now().timestamp_millis())
}

/// Describe how long before `now_epoch_millis` the instant `past_epoch_millis` was.
///
/// Months are 30 days and years 12 months. Only the coarsest non-zero unit
/// is reported; anything under a minute, or in the future, is "few seconds ago".
pub fn format_elapsed_time_at(past_epoch_millis: i64, now_epoch_millis: i64) -> String {
    let diff = now_epoch_millis.saturating_sub(past_epoch_millis);
    let minutes = diff.div_euclid(MILLIS_PER_MINUTE);
    let hours = minutes.div_euclid(60);
    let days = hours.div_euclid(24);
    let months = days.div_euclid(30);
    let years = months.div_euclid(12);

    let (count, unit) = if years > 0 {
        (years, "year")
    } else if months > 0 {
        (months, "month")
    } else if days > 0 {
        (days, "day")
    } else if hours > 0 {
        (hours, "hour")
    } else if minutes > 0 {
        (minutes, "minute")
    } else {
        return "few seconds ago".to_string();
    };

    if count == 1 {
        format!("{} {} before", count, unit)
    } else {
        format!("{} {}s before", count, unit)
    }
}

/// Abbreviate a count with `K`/`M` suffixes, truncating.
pub fn format_compact_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{}M", n / 1_000_000)
    } else if n >= 1000 {
        format!("{}K", n / 1000)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;
    const MINUTE: i64 = 60 * 1000;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    #[test]
    fn test_duration_under_an_hour() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(59), "00:59");
        assert_eq!(format_duration(65), "01:05");
        assert_eq!(format_duration(3599), "59:59");
    }

    #[test]
    fn test_duration_with_hours() {
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(3661), "1:01:01");
        assert_eq!(format_duration(36_000 + 59), "10:00:59");
    }

    #[test]
    fn test_compact_count() {
        assert_eq!(format_compact_count(0), "0");
        assert_eq!(format_compact_count(999), "999");
        assert_eq!(format_compact_count(1000), "1K");
        assert_eq!(format_compact_count(1500), "1K");
        assert_eq!(format_compact_count(999_999), "999K");
        assert_eq!(format_compact_count(2_500_000), "2M");
    }

    #[test]
    fn test_elapsed_under_a_minute() {
        assert_eq!(format_elapsed_time_at(NOW - 45_000, NOW), "few seconds ago");
        assert_eq!(format_elapsed_time_at(NOW, NOW), "few seconds ago");
    }

    #[test]
    fn test_elapsed_in_the_future() {
        assert_eq!(format_elapsed_time_at(NOW + 5 * DAY, NOW), "few seconds ago");
    }

    #[test]
    fn test_elapsed_singular_and_plural() {
        assert_eq!(format_elapsed_time_at(NOW - 90_000, NOW), "1 minute before");
        assert_eq!(format_elapsed_time_at(NOW - 5 * MINUTE, NOW), "5 minutes before");
        assert_eq!(format_elapsed_time_at(NOW - 7_200_000, NOW), "2 hours before");
        assert_eq!(format_elapsed_time_at(NOW - DAY, NOW), "1 day before");
    }

    #[test]
    fn test_elapsed_uses_thirty_day_months() {
        assert_eq!(format_elapsed_time_at(NOW - 29 * DAY, NOW), "29 days before");
        assert_eq!(format_elapsed_time_at(NOW - 30 * DAY, NOW), "1 month before");
        assert_eq!(format_elapsed_time_at(NOW - 359 * DAY, NOW), "11 months before");
        assert_eq!(format_elapsed_time_at(NOW - 360 * DAY, NOW), "1 year before");
        assert_eq!(format_elapsed_time_at(NOW - 800 * DAY, NOW), "2 years before");
    }

    #[test]
    fn test_elapsed_against_wall_clock() {
        let past = Utc::now().timestamp_millis() - 2 * HOUR - MINUTE;
        assert_eq!(format_elapsed_time(past), "2 hours before");
    }
}
