//! # Address Field Vocabularies
//!
//! Two closed sets:
//!
//! | Letter | [`FieldId`] | [`AddressField`] key(s) |
//! |--------|-------------|-------------------------|
//! | `N` | Name | `name` |
//! | `O` | Organization | `organization` |
//! | `A` | StreetAddress | `addressLine1`, `addressLine2`, `addressLine3` |
//! | `D` | DependentLocality | `dependentLocality` |
//! | `C` | Locality | `city` |
//! | `S` | AdminArea | `administrativeArea` |
//! | `Z` | PostalCode | `postalCode` |
//! | `X` | SortingCode | `sortingCode` |
//!
//! Letters come from per-country format and required-field strings; keys
//! address the structured [`AddressValue`](crate::AddressValue).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AddrFormError;

/// A field letter as it appears in format and required-field strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    /// Recipient name (`N`).
    Name,
    /// Organization or company (`O`).
    Organization,
    /// Street address lines (`A`).
    StreetAddress,
    /// Sub-city locality: neighborhood, district, suburb (`D`).
    DependentLocality,
    /// City or post town (`C`).
    Locality,
    /// State, province, prefecture and similar (`S`).
    AdminArea,
    /// Postal code (`Z`).
    PostalCode,
    /// Supplementary routing code, e.g. CEDEX (`X`).
    SortingCode,
}

impl FieldId {
    /// All field identifiers in letter-table order.
    pub fn all() -> &'static [FieldId] {
        &[
            Self::Name,
            Self::Organization,
            Self::StreetAddress,
            Self::DependentLocality,
            Self::Locality,
            Self::AdminArea,
            Self::PostalCode,
            Self::SortingCode,
        ]
    }

    /// Map a format-string letter to its identifier.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Self::Name),
            'O' => Some(Self::Organization),
            'A' => Some(Self::StreetAddress),
            'D' => Some(Self::DependentLocality),
            'C' => Some(Self::Locality),
            'S' => Some(Self::AdminArea),
            'Z' => Some(Self::PostalCode),
            'X' => Some(Self::SortingCode),
            _ => None,
        }
    }

    /// The format-string letter for this identifier.
    pub fn letter(self) -> char {
        match self {
            Self::Name => 'N',
            Self::Organization => 'O',
            Self::StreetAddress => 'A',
            Self::DependentLocality => 'D',
            Self::Locality => 'C',
            Self::AdminArea => 'S',
            Self::PostalCode => 'Z',
            Self::SortingCode => 'X',
        }
    }

    /// Whether this identifier's letter appears in a letter string such as
    /// `"ACSZ"`. Letters are case-sensitive, matching upstream data.
    pub fn is_listed_in(self, letters: &str) -> bool {
        letters.contains(self.letter())
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "%{}", self.letter())
    }
}

impl TryFrom<char> for FieldId {
    type Error = AddrFormError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Self::from_letter(letter).ok_or(AddrFormError::UnknownFieldId(letter))
    }
}

/// A key of the structured address value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    Name,
    Organization,
    AddressLine1,
    AddressLine2,
    AddressLine3,
    DependentLocality,
    City,
    AdministrativeArea,
    PostalCode,
    SortingCode,
}

impl AddressField {
    /// All address keys in value-declaration order.
    pub fn all() -> &'static [AddressField] {
        &[
            Self::Name,
            Self::Organization,
            Self::AddressLine1,
            Self::AddressLine2,
            Self::AddressLine3,
            Self::DependentLocality,
            Self::City,
            Self::AdministrativeArea,
            Self::PostalCode,
            Self::SortingCode,
        ]
    }

    /// The camelCase key, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Organization => "organization",
            Self::AddressLine1 => "addressLine1",
            Self::AddressLine2 => "addressLine2",
            Self::AddressLine3 => "addressLine3",
            Self::DependentLocality => "dependentLocality",
            Self::City => "city",
            Self::AdministrativeArea => "administrativeArea",
            Self::PostalCode => "postalCode",
            Self::SortingCode => "sortingCode",
        }
    }

    /// The format-string identifier this key is derived from.
    pub fn source(self) -> FieldId {
        match self {
            Self::Name => FieldId::Name,
            Self::Organization => FieldId::Organization,
            Self::AddressLine1 | Self::AddressLine2 | Self::AddressLine3 => {
                FieldId::StreetAddress
            }
            Self::DependentLocality => FieldId::DependentLocality,
            Self::City => FieldId::Locality,
            Self::AdministrativeArea => FieldId::AdminArea,
            Self::PostalCode => FieldId::PostalCode,
            Self::SortingCode => FieldId::SortingCode,
        }
    }
}

impl std::fmt::Display for AddressField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressField {
    type Err = AddrFormError;

    /// Parse a camelCase key as produced by [`AddressField::as_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| AddrFormError::UnknownAddressField(s.to_string()))
    }
}
