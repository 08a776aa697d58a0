// Display formatting for dates and counters
use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::locale::Locale;

const PT_BR_MONTHS: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

const EN_US_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse an API timestamp: full RFC 3339, or a bare `YYYY-MM-DD` read as midnight UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Short date with 2-digit day, abbreviated month and full year, in UTC.
///
/// Returns an empty string for anything that doesn't parse.
pub fn format_date(timestamp: &str, locale: Locale) -> String {
    let Some(dt) = parse_timestamp(timestamp) else {
        return String::new();
    };

    let month = dt.month0() as usize;
    match locale {
        Locale::PtBr => format!("{:02} de {} de {}", dt.day(), PT_BR_MONTHS[month], dt.year()),
        Locale::EnUs => format!("{} {:02}, {}", EN_US_MONTHS[month], dt.day(), dt.year()),
    }
}

/// Compact notation with at most one fractional digit: `1,5 mil`, `1.5K`, `2 mi`, `2M`.
///
/// Rounds half up on exact integer tenths. A value that rounds to 1000 of a
/// unit moves to the next unit, so `999_950` reads `1 mi`.
pub fn format_compact_number(n: u64, locale: Locale) -> String {
    const UNITS: [u64; 4] = [1_000, 1_000_000, 1_000_000_000, 1_000_000_000_000];

    if n < UNITS[0] {
        return n.to_string();
    }

    let mut idx = UNITS.iter().rposition(|&unit| n >= unit).unwrap_or(0);
    let mut tenths = round_tenths(n, UNITS[idx]);
    if tenths >= 10_000 && idx + 1 < UNITS.len() {
        idx += 1;
        tenths = round_tenths(n, UNITS[idx]);
    }

    let Ok(tenths) = u64::try_from(tenths) else {
        return n.to_string();
    };

    let whole = tenths / 10;
    let frac = tenths % 10;
    let number = if frac == 0 {
        whole.to_string()
    } else {
        format!("{}{}{}", whole, locale.decimal_separator(), frac)
    };

    match locale {
        Locale::PtBr => format!("{} {}", number, ["mil", "mi", "bi", "tri"][idx]),
        Locale::EnUs => format!("{}{}", number, ["K", "M", "B", "T"][idx]),
    }
}

fn round_tenths(n: u64, unit: u64) -> u128 {
    let unit = unit as u128;
    (n as u128 * 10 + unit / 2) / unit
}
