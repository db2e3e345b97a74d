//! Form input validation helpers
//!
//! Each helper reads a raw text input, records a French message into
//! [`FormErrors`] on failure and returns the parsed value on success, so a
//! form can validate every field in one pass.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::Reference;
use shared::util::parse_amount;
use validator::ValidateEmail;

use crate::ui::FormErrors;

// ── Text length limits ──────────────────────────────────────────────

/// Codes: bank code, brand code, status code...
pub const MAX_CODE_LEN: usize = 50;

/// Names and labels
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Phone numbers, plates, policy numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

pub const REQUIRED: &str = "Ce champ est obligatoire";

fn too_long(max_len: usize) -> String {
    format!("{max_len} caractères maximum")
}

// ── Text ────────────────────────────────────────────────────────────

/// Non-empty after trimming and within `max_len`
pub fn required_text(errors: &mut FormErrors, field: &str, value: &str, max_len: usize) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    if value.chars().count() > max_len {
        errors.add(field, too_long(max_len));
        return None;
    }
    Some(value.to_string())
}

/// Blank input means "no value"
pub fn optional_text(errors: &mut FormErrors, field: &str, value: &str, max_len: usize) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if value.chars().count() > max_len {
        errors.add(field, too_long(max_len));
        return None;
    }
    Some(value.to_string())
}

pub fn optional_email(errors: &mut FormErrors, field: &str, value: &str) -> Option<String> {
    let email = optional_text(errors, field, value, MAX_EMAIL_LEN)?;
    if !email.validate_email() {
        errors.add(field, "Adresse e-mail invalide");
        return None;
    }
    Some(email)
}

// ── Numbers ─────────────────────────────────────────────────────────

/// Foreign key selected by the user (strictly positive)
pub fn required_id(errors: &mut FormErrors, field: &str, value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    optional_id(errors, field, value)
}

pub fn optional_id(errors: &mut FormErrors, field: &str, value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, "Sélection invalide");
            None
        }
    }
}

/// Non-negative integer (days, months, kilometres)
pub fn optional_count(errors: &mut FormErrors, field: &str, value: &str) -> Option<i64> {
    let value: String = value.chars().filter(|c| !c.is_whitespace() && *c != '\u{202f}' && *c != '\u{a0}').collect();
    if value.is_empty() {
        return None;
    }
    match value.parse::<i64>() {
        Ok(n) if n >= 0 => Some(n),
        _ => {
            errors.add(field, "Nombre entier positif attendu");
            None
        }
    }
}

pub fn required_count(errors: &mut FormErrors, field: &str, value: &str) -> Option<i64> {
    if value.trim().is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    optional_count(errors, field, value)
}

/// Same as [`required_count`], bounded to `i32`
pub fn required_small_count(errors: &mut FormErrors, field: &str, value: &str) -> Option<i32> {
    let n = required_count(errors, field, value)?;
    match i32::try_from(n) {
        Ok(n) => Some(n),
        Err(_) => {
            errors.add(field, "Valeur trop grande");
            None
        }
    }
}

/// Non-negative amount, normalized to the plain decimal string sent to the API
pub fn optional_amount(errors: &mut FormErrors, field: &str, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return None;
    }
    match parse_amount(value) {
        Some(amount) if amount >= Decimal::ZERO => Some(amount.normalize().to_string()),
        Some(_) => {
            errors.add(field, "Le montant doit être positif");
            None
        }
        None => {
            errors.add(field, "Montant invalide");
            None
        }
    }
}

pub fn required_amount(errors: &mut FormErrors, field: &str, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    optional_amount(errors, field, value)
}

// ── Dates ───────────────────────────────────────────────────────────

/// Accepts `YYYY-MM-DD` and `dd/MM/yyyy`
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d/%m/%Y"))
        .ok()
}

pub fn optional_date(errors: &mut FormErrors, field: &str, value: &str) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        return None;
    }
    let date = parse_date(value);
    if date.is_none() {
        errors.add(field, "Date invalide (jj/mm/aaaa)");
    }
    date
}

pub fn required_date(errors: &mut FormErrors, field: &str, value: &str) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    optional_date(errors, field, value)
}

/// `Some(new)` when it differs from the stored value
pub fn changed<T: PartialEq>(new: T, old: T) -> Option<T> {
    if new == old { None } else { Some(new) }
}

/// Optional text diff; clearing a value sends an empty string
pub fn changed_text(new: Option<String>, old: Option<&str>) -> Option<String> {
    let old = old.map(str::trim).filter(|s| !s.is_empty());
    match (new, old) {
        (Some(n), Some(o)) if n == o => None,
        (Some(n), _) => Some(n),
        (None, Some(_)) => Some(String::new()),
        (None, None) => None,
    }
}

/// Amount diff compared numerically (`"1500"` equals `"1500.00"`)
pub fn changed_amount(new: Option<String>, old: Option<&str>) -> Option<String> {
    let new_value = new.as_deref().and_then(parse_amount);
    let old_value = old.and_then(parse_amount);
    if new_value == old_value { None } else { new }
}

/// Foreign key diff against the embedded reference
pub fn changed_id(new: Option<i64>, old: Option<&Reference>) -> Option<i64> {
    match new {
        Some(id) if old.map(|r| r.id) != Some(id) => Some(id),
        _ => None,
    }
}

/// Date diff against an API timestamp
pub fn changed_date(new: Option<NaiveDate>, old: Option<&str>) -> Option<NaiveDate> {
    match new {
        Some(date) if old.and_then(date_part) != Some(date) => Some(date),
        _ => None,
    }
}

/// Calendar date of an API timestamp (`2024-03-05T09:12:00Z` → 2024-03-05)
pub fn date_part(raw: &str) -> Option<NaiveDate> {
    raw.trim().get(..10).and_then(parse_date)
}

/// Form input value for an API timestamp
pub fn date_input(raw: Option<&str>) -> String {
    raw.and_then(date_part)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
