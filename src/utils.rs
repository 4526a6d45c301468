//! Wall-clock reads plus the text formats used by the form's date inputs.

use jiff::Zoned;
use jiff::civil::{Date, DateTime};

/// Machine format of the appointment time, as stored in the form.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
/// Machine format of the date of birth.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Human format of the walk-in clock, e.g. `Oct 18, 2026, 9:05 AM`.
pub const CLOCK_DISPLAY_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";

// ── Clock reads ────────────────────────────────────────────────────────────────

/// Current local wall-clock time.
pub fn now_local() -> DateTime {
    Zoned::now().datetime()
}

// ── Formatting ─────────────────────────────────────────────────────────────────

/// `2026-10-18T09:05` — minute precision, like a `datetime-local` input.
pub fn format_datetime_value(dt: DateTime) -> String {
    dt.strftime(DATETIME_FORMAT).to_string()
}

pub fn format_clock_display(dt: DateTime) -> String {
    dt.strftime(CLOCK_DISPLAY_FORMAT).to_string()
}

pub fn format_date(date: Date) -> String {
    date.strftime(DATE_FORMAT).to_string()
}

// ── Parsing ────────────────────────────────────────────────────────────────────

/// Parse a `YYYY-MM-DD` date. Surrounding whitespace is ignored.
pub fn parse_date(s: &str) -> Option<Date> {
    Date::strptime(DATE_FORMAT, s.trim()).ok()
}

/// Parse a `YYYY-MM-DDTHH:MM` date-time. Surrounding whitespace is ignored.
pub fn parse_datetime(s: &str) -> Option<DateTime> {
    DateTime::strptime(DATETIME_FORMAT, s.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn datetime_value_has_minute_precision() {
        let dt = date(2026, 10, 18).at(9, 5, 42, 0);
        assert_eq!(format_datetime_value(dt), "2026-10-18T09:05");
        assert_eq!(parse_datetime("2026-10-18T09:05"), Some(date(2026, 10, 18).at(9, 5, 0, 0)));
    }

    #[test]
    fn clock_display_is_human_readable() {
        assert_eq!(
            format_clock_display(date(2026, 10, 18).at(9, 5, 0, 0)),
            "Oct 18, 2026, 9:05 AM"
        );
        assert_eq!(
            format_clock_display(date(2026, 1, 3).at(21, 30, 0, 0)),
            "Jan 3, 2026, 9:30 PM"
        );
    }

    #[test]
    fn malformed_input_does_not_parse() {
        assert_eq!(parse_date("1990-04-02"), Some(date(1990, 4, 2)));
        assert_eq!(parse_date(" 1990-04-02 "), Some(date(1990, 4, 2)));
        assert_eq!(parse_date("1990-02-30"), None);
        assert_eq!(parse_date("02/04/1990"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_datetime("2026-10-18"), None);
        assert_eq!(parse_datetime("tomorrow"), None);
    }

    #[test]
    fn date_formatting_round_trips_through_parse() {
        let d = date(2008, 12, 31);
        assert_eq!(format_date(d), "2008-12-31");
        assert_eq!(parse_date(&format_date(d)), Some(d));
    }
}
