//! Display formatting for timestamps and salutations.

use chrono::{DateTime, NaiveDate, Utc};

/// Placeholder shown while an entry's server timestamp is still pending.
const PENDING: &str = "Recently";

/// Formats an entry timestamp relative to `now`.
///
/// Under a minute reads "Just now", then minutes, hours, and days, and
/// anything a week or older falls back to a short month/day string.
pub fn format_relative(at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(at) = at else {
        return PENDING.to_string();
    };

    let elapsed = now.signed_duration_since(at);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    if hours < 24 {
        return format!("{hours}h ago");
    }
    if days < 7 {
        return format!("{days}d ago");
    }

    at.format("%b %-d").to_string()
}

/// Capitalizes the first character, e.g. "happy" -> "Happy".
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Greeting line by local hour, optionally addressed to a first name.
pub fn greeting(hour: u32, first_name: Option<&str>) -> String {
    let part = if hour < 12 {
        "Morning"
    } else if hour < 18 {
        "Afternoon"
    } else {
        "Evening"
    };

    match first_name {
        Some(name) => format!("Good {part}, {name}!"),
        None => format!("Good {part}!"),
    }
}

/// Long-form date line, e.g. "Friday, August 7, 2026".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_missing_timestamp_is_pending() {
        assert_eq!(format_relative(None, fixed_now()), "Recently");
    }

    #[test]
    fn test_just_now_under_a_minute() {
        let now = fixed_now();
        assert_eq!(format_relative(Some(now - Duration::seconds(30)), now), "Just now");
    }

    #[test]
    fn test_minutes() {
        let now = fixed_now();
        assert_eq!(format_relative(Some(now - Duration::minutes(5)), now), "5m ago");
    }

    #[test]
    fn test_hours() {
        let now = fixed_now();
        assert_eq!(format_relative(Some(now - Duration::hours(3)), now), "3h ago");
    }

    #[test]
    fn test_days() {
        let now = fixed_now();
        assert_eq!(format_relative(Some(now - Duration::days(2)), now), "2d ago");
    }

    #[test]
    fn test_week_or_older_is_month_day() {
        let now = fixed_now();
        assert_eq!(format_relative(Some(now - Duration::days(10)), now), "Jul 28");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("happy"), "Happy");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
    }

    #[test]
    fn test_greeting_parts() {
        assert_eq!(greeting(8, Some("Anu")), "Good Morning, Anu!");
        assert_eq!(greeting(13, None), "Good Afternoon!");
        assert_eq!(greeting(21, Some("Anu")), "Good Evening, Anu!");
    }

    #[test]
    fn test_long_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(long_date(date), "Friday, August 7, 2026");
    }
}
