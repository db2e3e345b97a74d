//! Parsing helpers for loosely typed API fields

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Parse a monetary amount transmitted as a string.
///
/// Accepts `"1500000"`, `"1500000.00"`, `" 1 500 000 "` and a decimal comma
/// (`"12,5"`). Returns `None` for empty or non-numeric input.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{202f}' && *c != '\u{a0}')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Deserialize an optional amount that the backend may send either as a
/// string or as a JSON number. Always stored as a string.
pub fn amount_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Same as [`amount_opt`] for required amounts; `null` becomes `"0"`.
pub fn amount<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(amount_opt(deserializer)?.unwrap_or_else(|| "0".to_string()))
}
