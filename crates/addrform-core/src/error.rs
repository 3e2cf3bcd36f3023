//! # Error Types
//!
//! Errors raised while constructing core values. Builder and validator
//! operations never fail; only parsing of caller-supplied identifiers does.

use thiserror::Error;

/// Top-level error type for addrform core types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddrFormError {
    /// The input is not a two-letter ISO 3166-1 alpha-2 code.
    #[error("invalid country code {input:?}: {reason}")]
    InvalidCountryCode {
        /// The rejected input, as supplied.
        input: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A format-string letter outside the known field set.
    #[error("unknown field identifier: {0:?}")]
    UnknownFieldId(char),

    /// An address value key outside the known field set.
    #[error("unknown address field: {0:?}")]
    UnknownAddressField(String),
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, AddrFormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_country_code_display() {
        let err = AddrFormError::InvalidCountryCode {
            input: "USA".to_string(),
            reason: "expected exactly two letters",
        };
        let msg = format!("{err}");
        assert!(msg.contains("USA"));
        assert!(msg.contains("two letters"));
    }

    #[test]
    fn unknown_field_display() {
        assert!(format!("{}", AddrFormError::UnknownFieldId('Q')).contains('Q'));
        assert!(format!("{}", AddrFormError::UnknownAddressField("zip".into())).contains("zip"));
    }
}
