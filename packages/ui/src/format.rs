//! pt-BR display formatting for numbers, money and dates.
//!
//! The backend sends raw numbers and ISO-8601 strings; pages render them the
//! way a Brazilian locale would (`1.234,5`, `R$ 12,90`, `10/03/2025`).

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const PLACEHOLDER: &str = "-";

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let rest = n / 1000;
        if rest == 0 {
            groups.push(format!("{}", n % 1000));
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n = rest;
    }
    groups.reverse();
    groups.join(".")
}

/// Split `value` into a rounded integer part and a fraction of `digits`
/// decimal places.
fn split(value: f64, digits: u32) -> (bool, u64, u64) {
    let scale = 10u64.pow(digits);
    let scaled = (value.abs() * scale as f64).round() as u64;
    (value < 0.0 && scaled > 0, scaled / scale, scaled % scale)
}

pub fn format_count(value: u64) -> String {
    group_thousands(value)
}

/// Up to three decimals, trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    let (negative, int, frac) = split(value, 3);
    let sign = if negative { "-" } else { "" };
    let frac = format!("{frac:03}");
    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        format!("{sign}{}", group_thousands(int))
    } else {
        format!("{sign}{},{frac}", group_thousands(int))
    }
}

pub fn format_optional_number(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// `R$ 1.234,56`
pub fn format_currency(value: f64) -> String {
    let (negative, int, cents) = split(value, 2);
    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {},{cents:02}", group_thousands(int))
}

/// `R$ 1.235`, for headline figures.
pub fn format_currency_whole(value: f64) -> String {
    let (negative, int, _) = split(value, 0);
    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {}", group_thousands(int))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// `2025-03-10` or any ISO timestamp becomes `10/03/2025`. Unparseable input
/// is shown as-is.
pub fn format_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn format_optional_date(raw: Option<&str>) -> String {
    match raw {
        Some(raw) if !raw.is_empty() => format_date(raw),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Axis label for the expiry timeline: `10/03`.
pub fn format_day_month(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%d/%m").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `10/03/2025 14:05`
pub fn format_datetime(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return PLACEHOLDER.to_string();
    };
    match parse_datetime(raw) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => format_date(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.000");
        assert_eq!(format_count(1_234_567), "1.234.567");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(1234.5), "1.234,5");
        assert_eq!(format_number(0.1234), "0,123");
        assert_eq!(format_number(-2500.25), "-2.500,25");
        assert_eq!(format_optional_number(None), "-");
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(12.9), "R$ 12,90");
        assert_eq!(format_currency(1234.567), "R$ 1.234,57");
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency_whole(1530.5), "R$ 1.531");
        assert_eq!(format_currency_whole(1_000_000.0), "R$ 1.000.000");
    }

    #[test]
    fn test_dates() {
        assert_eq!(format_date("2025-03-10"), "10/03/2025");
        assert_eq!(format_date("2025-03-10T00:00:00"), "10/03/2025");
        assert_eq!(format_date("sem data"), "sem data");
        assert_eq!(format_optional_date(None), "-");
        assert_eq!(format_optional_date(Some("")), "-");
        assert_eq!(format_day_month("2025-12-01"), "01/12");
    }

    #[test]
    fn test_datetimes() {
        assert_eq!(
            format_datetime(Some("2025-03-10T14:05:09.123456")),
            "10/03/2025 14:05"
        );
        assert_eq!(
            format_datetime(Some("2025-03-10T14:05:09-03:00")),
            "10/03/2025 14:05"
        );
        assert_eq!(format_datetime(Some("2025-03-10 08:00:00")), "10/03/2025 08:00");
        assert_eq!(format_datetime(None), "-");
    }
}
