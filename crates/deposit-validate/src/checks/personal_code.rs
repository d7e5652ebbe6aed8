//! Personal identifier rule: `DDMMYY-NNNNN` with a real birth date.

use chrono::NaiveDate;

pub fn check(personal_code: &str) -> Option<String> {
    let trimmed = personal_code.trim();
    if trimmed.is_empty() {
        return Some("Enter your personal code.".to_string());
    }
    let Some((day, month, year)) = parse_date_digits(trimmed) else {
        return Some("Use the format DDMMYY-XXXXX (e.g. 010101-12345).".to_string());
    };
    if !is_calendar_date(day, month, year) {
        return Some("The birth date in the personal code is not valid.".to_string());
    }
    None
}

/// Accepts six digits, an optional hyphen, and five digits; returns the
/// decoded (day, month, two-digit year) triple.
fn parse_date_digits(code: &str) -> Option<(u32, u32, u32)> {
    let bytes = code.as_bytes();
    let serial_start = match bytes.len() {
        11 => 6,
        12 if bytes[6] == b'-' => 7,
        _ => return None,
    };
    if !bytes[..6].iter().all(u8::is_ascii_digit)
        || !bytes[serial_start..].iter().all(u8::is_ascii_digit)
    {
        return None;
    }
    let digit = |i: usize| u32::from(bytes[i] - b'0');
    let day = digit(0) * 10 + digit(1);
    let month = digit(2) * 10 + digit(3);
    let year = digit(4) * 10 + digit(5);
    Some((day, month, year))
}

/// Two-digit years are resolved into the 1900 window; only day-in-month
/// validity matters here, not the century.
fn is_calendar_date(day: u32, month: u32, year: u32) -> bool {
    NaiveDate::from_ymd_opt(1900 + year as i32, month, day).is_some()
}
