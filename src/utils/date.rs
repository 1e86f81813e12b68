use chrono::{NaiveDate, NaiveDateTime};

use crate::consts::{DOTTED_DATE_FORMAT, MONTH_KEY_FORMAT};

/// Parse a text date of exactly `DD.MM.YYYY`.
///
/// chrono alone accepts single-digit fields and other padding, so the shape is
/// checked byte by byte first.
pub(crate) fn parse_dotted_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    if bytes.len() != 10 {
        return None;
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        2 | 5 => *b == b'.',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(text, DOTTED_DATE_FORMAT).ok()
}

/// Parse the ISO 8601 text calamine reports for OpenDocument date cells
pub(crate) fn parse_iso_datetime(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Month key used to name report sheets: "03.2024"
pub(crate) fn month_key(date: NaiveDate) -> String {
    date.format(MONTH_KEY_FORMAT).to_string()
}
