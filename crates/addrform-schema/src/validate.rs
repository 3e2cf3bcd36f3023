//! # Validator
//!
//! Checks an [`AddressValue`] against a [`FieldSchema`]. Each visible entry
//! yields at most one message, so errors line up with the form.
//!
//! Postal-code patterns come from upstream data and are not trusted to
//! compile. A pattern that fails to compile accepts every value and logs a
//! warning.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use addrform_core::{AddressField, AddressValue};

use crate::builder::{FieldSchema, FieldSchemaEntry};

/// Outcome of validating one address value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// One message per failing field, in schema order.
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate every visible entry of `schema` against `value`.
pub fn validate_address(value: &AddressValue, schema: &FieldSchema) -> ValidationResult {
    let errors = schema
        .visible()
        .filter_map(|entry| validate_entry(entry, value.get(entry.key)))
        .collect();
    ValidationResult::from_errors(errors)
}

/// Validate one entry. Returns the error message, if any.
pub fn validate_entry(entry: &FieldSchemaEntry, raw: Option<&str>) -> Option<String> {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return entry.required.then(|| format!("{} is required", entry.label));
    }
    if entry.key != AddressField::PostalCode {
        return None;
    }
    match entry.pattern.as_deref() {
        Some(pattern) if !validate_postal_code(value, Some(pattern)) => {
            Some(format!("Invalid {} format", entry.label.to_lowercase()))
        }
        _ => None,
    }
}

/// Whether `value` fully matches a postal-code pattern, ignoring case.
///
/// An empty or absent pattern accepts anything. An empty value never
/// matches a non-empty pattern.
pub fn validate_postal_code(value: &str, pattern: Option<&str>) -> bool {
    let Some(pattern) = pattern.filter(|p| !p.is_empty()) else {
        return true;
    };
    if value.is_empty() {
        return false;
    }
    match RegexBuilder::new(&format!("^(?:{pattern})$"))
        .case_insensitive(true)
        .build()
    {
        Ok(regex) => regex.is_match(value),
        Err(e) => {
            tracing::warn!(pattern, error = %e, "malformed postal code pattern; accepting value");
            true
        }
    }
}
