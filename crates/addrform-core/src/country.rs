//! # Country Codes
//!
//! `CountryCode` is the key of the metadata store. Input is accepted
//! case-insensitively with surrounding whitespace; the stored form is always
//! two uppercase ASCII letters.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AddrFormError;

/// An ISO 3166-1 alpha-2 country code, normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Code of the generic record used when a country has no metadata.
    pub const GENERIC: &'static str = "ZZ";

    /// Parse a country code, normalizing case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`AddrFormError::InvalidCountryCode`] unless the trimmed input
    /// is exactly two ASCII letters.
    pub fn parse(input: &str) -> Result<Self, AddrFormError> {
        let trimmed = input.trim();
        if trimmed.len() != 2 {
            return Err(AddrFormError::InvalidCountryCode {
                input: input.to_string(),
                reason: "expected exactly two letters",
            });
        }
        if !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(AddrFormError::InvalidCountryCode {
                input: input.to_string(),
                reason: "expected ASCII letters only",
            });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// The generic fallback code (`ZZ`).
    pub fn generic() -> Self {
        Self(Self::GENERIC.to_string())
    }

    /// Whether this is the generic fallback code.
    pub fn is_generic(&self) -> bool {
        self.0 == Self::GENERIC
    }

    /// Access the uppercase code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = AddrFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = AddrFormError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl PartialEq<str> for CountryCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CountryCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
