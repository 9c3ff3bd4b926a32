//! Display formatting shared by the notice, favorite and notification records.
//!
//! Timestamps arrive from the remote API in several shapes (RFC 3339 with an
//! offset, naive ISO date-times with or without fractional seconds, bare
//! dates). Anything that cannot be parsed is shown verbatim.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Text shown in place of any absent value.
pub const PLACEHOLDER: &str = "—";

const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Parses a raw API timestamp into wall-clock time.
///
/// Offsets are kept as written (the local wall time of the issuing system)
/// rather than converted, so a notice published at `10:00-03:00` still reads
/// `10:00`.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local());
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Formats a raw timestamp for display, falling back to the raw text.
pub fn format_timestamp(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => PLACEHOLDER.to_string(),
        Some(raw) => match parse_timestamp(raw) {
            Some(parsed) => parsed.format(DISPLAY_FORMAT).to_string(),
            None => raw.to_string(),
        },
    }
}

/// Formats a currency amount in Brazilian reais (`R$ 1.234,56`).
pub fn format_brl(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let integer = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("R$ {sign}{grouped},{fraction:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_timestamp_shapes() {
        let expected = NaiveDate::from_ymd_opt(2024, 2, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();

        assert_eq!(parse_timestamp("2024-02-01T00:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-02-01 00:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-02-01T00:00:00.000"), Some(expected));
        assert_eq!(parse_timestamp("2024-02-01T00:00:00-03:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-02-01"), Some(expected));
        assert_eq!(parse_timestamp("ontem"), None);
        assert_eq!(parse_timestamp("  "), None);
    }

    #[test]
    fn formats_timestamps_or_keeps_raw_text() {
        assert_eq!(
            format_timestamp(Some("2024-03-05T14:30:00")),
            "05/03/2024 14:30:00"
        );
        assert_eq!(format_timestamp(Some("sem data")), "sem data");
        assert_eq!(format_timestamp(Some("")), PLACEHOLDER);
        assert_eq!(format_timestamp(None), PLACEHOLDER);
    }

    #[test]
    fn formats_brazilian_currency() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(999.5), "R$ 999,50");
        assert_eq!(format_brl(1234.56), "R$ 1.234,56");
        assert_eq!(format_brl(89_200_000.0), "R$ 89.200.000,00");
        assert_eq!(format_brl(-1500.0), "R$ -1.500,00");
    }
}
