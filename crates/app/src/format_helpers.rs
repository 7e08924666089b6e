//! Display formatting for the UI layer.
//!
//! Functions accept ISO-8601 timestamps (e.g. "2026-08-01T21:35:00Z") and
//! degrade to a raw or empty string on malformed input.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO timestamp as "Aug 1, 2026" (date-only).
///
/// Falls back to the first 10 characters if parsing fails.
pub fn format_date_human(date_str: &str) -> String {
    let (Some(year), Some(month), Some(day), Some(prefix)) = (
        date_str.get(..4),
        date_str.get(5..7),
        date_str.get(8..10),
        date_str.get(..10),
    ) else {
        return date_str.to_string();
    };

    if let Some(m) = parse_month(month) {
        let day_num: u32 = day.parse().unwrap_or(0);
        format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year)
    } else {
        prefix.to_string()
    }
}

/// Format the time portion of an ISO timestamp as "9:35 PM" (12-hour).
///
/// Returns an empty string when the time portion is missing or malformed.
pub fn format_time_human(date_str: &str) -> String {
    // Need at least "YYYY-MM-DDTHH:MM" (16 chars)
    let (Some(hour_str), Some(min_str)) = (date_str.get(11..13), date_str.get(14..16)) else {
        return String::new();
    };

    let hour: u32 = match hour_str.parse() {
        Ok(h) if h < 24 => h,
        _ => return String::new(),
    };
    if min_str.parse::<u32>().map(|m| m < 60) != Ok(true) {
        return String::new();
    }

    let (display_hour, ampm) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };

    format!("{}:{} {}", display_hour, min_str, ampm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_date() {
        assert_eq!(format_date_human("2026-08-01T21:35:00Z"), "Aug 1, 2026");
        assert_eq!(format_date_human("2025-12-31"), "Dec 31, 2025");
    }

    #[test]
    fn date_falls_back_on_garbage() {
        assert_eq!(format_date_human("oops"), "oops");
        assert_eq!(format_date_human("2026-99-01T00:00:00Z"), "2026-99-01");
    }

    #[test]
    fn formats_time_twelve_hour() {
        assert_eq!(format_time_human("2026-08-01T21:35:00Z"), "9:35 PM");
        assert_eq!(format_time_human("2026-08-01T00:05:00Z"), "12:05 AM");
        assert_eq!(format_time_human("2026-08-01T12:00:00Z"), "12:00 PM");
        assert_eq!(format_time_human("2026-08-01T09:10:00Z"), "9:10 AM");
    }

    #[test]
    fn time_is_blank_when_missing() {
        assert_eq!(format_time_human("2026-08-01"), "");
        assert_eq!(format_time_human("2026-08-01Txx:yy:00Z"), "");
    }
}
