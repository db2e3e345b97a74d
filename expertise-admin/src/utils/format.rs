//! Display formatting
//!
//! fr-FR conventions: narrow no-break space as thousands separator, decimal
//! comma, `dd/MM/yyyy` dates. Amounts are XOF, which has no minor unit.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use shared::util::parse_amount;

/// Narrow no-break space (U+202F), fr-FR group separator
const GROUP_SEPARATOR: char = '\u{202f}';
/// No-break space (U+00A0)
const NBSP: char = '\u{a0}';

/// Placeholder for missing values
pub const EMPTY: &str = "-";

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// Format a decimal with fr-FR grouping and a fixed number of decimals
pub fn format_decimal(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (text, String::new()),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(&int_part));
    if decimals > 0 {
        let mut frac = frac_part;
        while frac.len() < decimals as usize {
            frac.push('0');
        }
        out.push(',');
        out.push_str(&frac);
    }
    out
}

/// `"1500000"` → `"1 500 000 F CFA"`; unparseable input is returned as-is
pub fn format_xof(raw: &str) -> String {
    match parse_amount(raw) {
        Some(value) => format!("{}{}F{}CFA", format_decimal(value, 0), NBSP, NBSP),
        None if raw.trim().is_empty() => EMPTY.to_string(),
        None => raw.to_string(),
    }
}

pub fn format_xof_opt(raw: Option<&str>) -> String {
    raw.map(format_xof).unwrap_or_else(|| EMPTY.to_string())
}

/// `"35.5"` → `"35,50 %"`
pub fn format_percent(raw: Option<&str>) -> String {
    match raw.and_then(parse_amount) {
        Some(value) => format!("{}{}%", format_decimal(value, 2), NBSP),
        None => EMPTY.to_string(),
    }
}

/// `125000` → `"125 000 km"`
pub fn format_mileage(km: Option<i64>) -> String {
    match km {
        Some(km) => format!("{}{}km", format_decimal(Decimal::from(km), 0), NBSP),
        None => EMPTY.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Any API timestamp or date → `dd/MM/yyyy`
pub fn format_date(raw: Option<&str>) -> String {
    match raw {
        None => EMPTY.to_string(),
        Some(raw) => parse_timestamp(raw)
            .map(|dt| dt.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// Any API timestamp → `dd/MM/yyyy HH:mm`
pub fn format_datetime(raw: Option<&str>) -> String {
    match raw {
        None => EMPTY.to_string(),
        Some(raw) => parse_timestamp(raw)
            .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

pub fn or_empty(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => EMPTY.to_string(),
    }
}
