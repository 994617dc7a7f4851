//! Data parsing helpers.
//!
//! Office configuration stores dates as ISO strings (`YYYY-MM-DD`, sometimes
//! as a full timestamp) and business hours as `HH:MM`.  These functions only
//! split and range-check the text; calendar validity (e.g. Feb 30) is checked
//! by the date type that consumes the result.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// A trailing time component (`2024-12-25T00:00:00Z`) is accepted and
/// discarded.  Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let s = match s.split_once('T') {
        Some((date, _)) => date,
        None => s,
    };
    let mut parts = s.split('-');
    let (y, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return None;
    }
    if ![y, m, d].iter().all(|f| all_digits(f)) {
        return None;
    }
    let year: u16 = y.parse().ok()?;
    let month: u8 = m.parse().ok()?;
    let day: u8 = d.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

/// `str::parse` accepts a leading sign; configuration fields must not.
fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a wall-clock time in `HH:MM` format.
///
/// Returns `(hour, minute)` with `hour` in 0–23 and `minute` in 0–59.
pub fn parse_hhmm(s: &str) -> Option<(u8, u8)> {
    let (h, m) = s.trim().split_once(':')?;
    if h.is_empty() || h.len() > 2 || m.len() != 2 || !all_digits(h) || !all_digits(m) {
        return None;
    }
    let hour: u8 = h.parse().ok()?;
    let minute: u8 = m.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2023-06-15"), Some((2023, 6, 15)));
        assert_eq!(parse_iso_date(" 2024-12-25 "), Some((2024, 12, 25)));
        assert_eq!(parse_iso_date("2024-12-25T00:00:00.000Z"), Some((2024, 12, 25)));
        assert_eq!(parse_iso_date("bad"), None);
        assert_eq!(parse_iso_date("2024-13-01"), None);
        assert_eq!(parse_iso_date("2024-1-01"), None);
        assert_eq!(parse_iso_date("2024-01-01-01"), None);
        assert_eq!(parse_iso_date("2024-+1-05"), None);
        assert_eq!(parse_iso_date("+024-01-05"), None);
        assert_eq!(parse_iso_date("2024-01- 5"), None);
    }

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("09:00"), Some((9, 0)));
        assert_eq!(parse_hhmm("9:30"), Some((9, 30)));
        assert_eq!(parse_hhmm("23:59"), Some((23, 59)));
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("12:60"), None);
        assert_eq!(parse_hhmm("1200"), None);
        assert_eq!(parse_hhmm(":30"), None);
        assert_eq!(parse_hhmm("+9:30"), None);
        assert_eq!(parse_hhmm("09:+5"), None);
    }

    proptest! {
        #[test]
        fn formatted_times_parse_back(h in 0u8..24, m in 0u8..60) {
            let s = format!("{h:02}:{m:02}");
            prop_assert_eq!(parse_hhmm(&s), Some((h, m)));
        }
    }
}
