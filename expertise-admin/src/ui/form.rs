//! Form state
//!
//! A form holds the raw text of every input. It turns into a typed Create
//! payload, or into an Update payload carrying only the fields that differ
//! from the entity being edited.

use std::collections::BTreeMap;
use std::fmt;

use expertise_client::{ClientError, Resource};

/// Field → first error message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<String, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Record an error; the first message per field wins
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Server-side validation messages (422)
    pub fn merge_client(&mut self, error: &ClientError) {
        if let Some(errors) = error.field_errors() {
            for (field, messages) in errors {
                if let Some(first) = messages.first() {
                    self.add(field, first.clone());
                }
            }
        }
    }

    /// `Ok(value)` when nothing was recorded
    pub fn finish<T>(self, value: impl FnOnce() -> Option<T>) -> Result<T, FormErrors> {
        if !self.is_empty() {
            return Err(self);
        }
        value().ok_or(self)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.fields.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for FormErrors {}

/// Input descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
}

impl FormField {
    pub const fn required(key: &'static str, label: &'static str) -> Self {
        Self { key, label, required: true }
    }

    pub const fn optional(key: &'static str, label: &'static str) -> Self {
        Self { key, label, required: false }
    }
}

/// Typed form state for resource `R`
pub trait ResourceForm<R: Resource>: Default + Clone + fmt::Debug + Send + Sync + 'static {
    /// Inputs in display order
    fn fields() -> &'static [FormField];

    /// Pre-fill from an existing entity
    fn from_entity(entity: &R::Entity) -> Self;

    fn value(&self, key: &str) -> Option<&str>;

    fn value_mut(&mut self, key: &str) -> Option<&mut String>;

    fn to_create(&self) -> Result<R::Create, FormErrors>;

    /// Only fields that differ from `original`
    fn to_update(&self, original: &R::Entity) -> Result<R::Update, FormErrors>;

    fn set_field(&mut self, key: &str, value: impl Into<String>) -> Result<(), FormErrors> {
        match self.value_mut(key) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(FormErrors::single(key, "Champ inconnu")),
        }
    }

    fn validate(&self) -> Result<(), FormErrors> {
        self.to_create().map(|_| ())
    }
}

/// `value` / `value_mut` over plain `String` fields
macro_rules! form_accessors {
    ($($field:ident),+ $(,)?) => {
        fn value(&self, key: &str) -> Option<&str> {
            $(
                if key == stringify!($field) {
                    return Some(self.$field.as_str());
                }
            )+
            None
        }

        fn value_mut(&mut self, key: &str) -> Option<&mut String> {
            $(
                if key == stringify!($field) {
                    return Some(&mut self.$field);
                }
            )+
            None
        }
    };
}

pub(crate) use form_accessors;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_wins() {
        let mut errors = FormErrors::new();
        errors.add("code", "Ce champ est obligatoire");
        errors.add("code", "autre");
        errors.add("name", "Ce champ est obligatoire");
        assert_eq!(errors.get("code"), Some("Ce champ est obligatoire"));
        assert_eq!(errors.to_string(), "code: Ce champ est obligatoire; name: Ce champ est obligatoire");
    }

    #[test]
    fn test_merge_server_errors() {
        let mut fields = BTreeMap::new();
        fields.insert("code".to_string(), vec!["The code has already been taken.".to_string()]);
        let error = ClientError::Validation {
            message: "The given data was invalid.".to_string(),
            errors: fields,
        };

        let mut errors = FormErrors::new();
        errors.merge_client(&error);
        assert_eq!(errors.get("code"), Some("The code has already been taken."));
    }

    #[test]
    fn test_finish() {
        assert_eq!(FormErrors::new().finish(|| Some(3)), Ok(3));
        let errors = FormErrors::single("x", "bad");
        assert!(errors.finish(|| Some(3)).is_err());
    }
}
