//! Calendar date parsing for record timestamps and date controls.

use chrono::NaiveDate;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Parse the calendar date of a record timestamp.
///
/// Accepts `YYYY-MM-DD` and `M/D/YYYY`, optionally followed by a time part
/// separated by `T` or whitespace. The time part is ignored.
pub fn parse_record_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let date_part = trimmed
        .split(|ch: char| ch == 'T' || ch.is_whitespace())
        .next()
        .unwrap_or(trimmed);
    parse_date(date_part)
}

/// Parse the value of a date control (`YYYY-MM-DD`, or `M/D/YYYY`).
pub fn parse_control_date(value: &str) -> Option<NaiveDate> {
    parse_date(value.trim())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_record_date("2010-01-01"), Some(date(2010, 1, 1)));
        let with_time = parse_record_date("2010-01-01T21:30:00");
        assert_eq!(with_time, Some(date(2010, 1, 1)));
    }

    #[test]
    fn parses_us_dates() {
        assert_eq!(parse_record_date("1/13/2010"), Some(date(2010, 1, 13)));
        let with_time = parse_record_date("01/02/2010 23:45");
        assert_eq!(with_time, Some(date(2010, 1, 2)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_record_date(""), None);
        assert_eq!(parse_record_date("yesterday"), None);
        assert_eq!(parse_record_date("2010-13-01"), None);
        assert_eq!(parse_control_date("  "), None);
    }

    #[test]
    fn control_dates_use_input_format() {
        assert_eq!(parse_control_date("2010-01-13"), Some(date(2010, 1, 13)));
    }
}
