// Date utility functions

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime};

pub fn is_same_day(date1: DateTime<Local>, date2: DateTime<Local>) -> bool {
    date1.date_naive() == date2.date_naive()
}

/// Monday of the ISO week containing the given date.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(offset)
}

/// Combine a calendar date with a slot's hour/minute. Seconds and
/// sub-second components are always zero.
pub fn at_slot(day: NaiveDate, slot: NaiveTime) -> Option<DateTime<Local>> {
    use chrono::Timelike;
    let time = NaiveTime::from_hms_opt(slot.hour(), slot.minute(), 0)?;
    day.and_time(time).and_local_timezone(Local).single()
}

/// Truncate a string to at most `max` characters on a character boundary.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Timelike, Weekday};

    #[test]
    fn test_week_start_mid_week() {
        // Wednesday, Dec 4, 2024
        let date = NaiveDate::from_ymd_opt(2024, 12, 4).unwrap();
        let start = week_start(date);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 12, 2).unwrap());
        assert_eq!(start.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_week_start_on_monday_is_identity() {
        let monday = NaiveDate::from_ymd_opt(2024, 12, 2).unwrap();
        assert_eq!(week_start(monday), monday);
    }

    #[test]
    fn test_week_start_on_sunday() {
        let sunday = NaiveDate::from_ymd_opt(2024, 12, 8).unwrap();
        assert_eq!(week_start(sunday), NaiveDate::from_ymd_opt(2024, 12, 2).unwrap());
    }

    #[test]
    fn test_at_slot_zeroes_seconds() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let slot = NaiveTime::from_hms_opt(14, 30, 45).unwrap();
        let combined = at_slot(day, slot).unwrap();

        assert_eq!(combined.date_naive(), day);
        assert_eq!(combined.hour(), 14);
        assert_eq!(combined.minute(), 30);
        assert_eq!(combined.second(), 0);
        assert_eq!(combined.nanosecond(), 0);
    }

    #[test]
    fn test_truncate_chars_short_string_untouched() {
        assert_eq!(truncate_chars("hello", 50), "hello");
    }

    #[test]
    fn test_truncate_chars_multibyte_safe() {
        let text = "héllo wörld";
        assert_eq!(truncate_chars(text, 4), "héll");
    }
}
