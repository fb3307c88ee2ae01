//! Date normalization to the Brazilian `DD/MM/YYYY` form.

use chrono::NaiveDate;

const OUTPUT_FORMAT: &str = "%d/%m/%Y";

/// Normalizes a date to `DD/MM/YYYY`.
///
/// Accepts ISO `YYYY-MM-DD`, optionally followed by a time part after `T`
/// or a space, and `D/M/YYYY` with one- or two-digit day and month.
/// Surrounding whitespace is ignored when parsing. Other shapes, and
/// impossible calendar dates, return the input unchanged.
pub fn normalize_date(raw: &str) -> String {
    let trimmed = raw.trim();
    parse_iso_date(trimmed)
        .or_else(|| parse_day_first(trimmed))
        .map(|date| date.format(OUTPUT_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() < 10 {
        return None;
    }
    let shape_ok = bytes[..10].iter().enumerate().all(|(idx, byte)| match idx {
        4 | 7 => *byte == b'-',
        _ => byte.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }
    match bytes.get(10) {
        None | Some(b'T' | b' ') => {}
        Some(_) => return None,
    }
    NaiveDate::parse_from_str(&value[..10], "%Y-%m-%d").ok()
}

fn parse_day_first(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('/');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let short = |part: &str| (1..=2).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit());
    if !short(day) || !short(month) || year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_dates() {
        assert_eq!(normalize_date("1990-03-12"), "12/03/1990");
        assert_eq!(normalize_date(" 1990-03-12T08:30:00 "), "12/03/1990");
        assert_eq!(normalize_date("1990-03-12 08:30"), "12/03/1990");
        assert_eq!(normalize_date("1990-03-12X"), "1990-03-12X");
        assert_eq!(normalize_date("1990-3-12"), "1990-3-12");
    }

    #[test]
    fn test_day_first_dates() {
        assert_eq!(normalize_date("1/2/1985"), "01/02/1985");
        assert_eq!(normalize_date("12/03/1990"), "12/03/1990");
        assert_eq!(normalize_date("12/03/90"), "12/03/90");
        assert_eq!(normalize_date("12/03/1990 10:00"), "12/03/1990 10:00");
        assert_eq!(normalize_date("1/2/3/1985"), "1/2/3/1985");
    }

    #[test]
    fn test_impossible_dates_pass_through() {
        assert_eq!(normalize_date("1990-02-30"), "1990-02-30");
        assert_eq!(normalize_date("31/04/2001"), "31/04/2001");
        assert_eq!(normalize_date("29/02/2001"), "29/02/2001");
        assert_eq!(normalize_date("29/2/2000"), "29/02/2000");
    }

    #[test]
    fn test_other_values_unchanged() {
        assert_eq!(normalize_date("  março de 1990 "), "  março de 1990 ");
        assert_eq!(normalize_date(" 1990-02-30"), " 1990-02-30");
        assert_eq!(normalize_date(""), "");
    }
}
