//! # Address Value
//!
//! The structured address the presentation layer owns and edits. The core
//! only reads it. Every component is optional because values are partial
//! while a form is being filled in.

use serde::{Deserialize, Serialize};

use crate::country::CountryCode;
use crate::field::AddressField;

/// A (possibly partial) postal address.
///
/// Serialized with camelCase keys (`addressLine1`, `postalCode`, ...).
/// A missing `countryCode` deserializes as the generic `ZZ` code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressValue {
    #[serde(default = "CountryCode::generic")]
    pub country_code: CountryCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent_locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrative_area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorting_code: Option<String>,
}

impl AddressValue {
    /// An empty address for the given country.
    pub fn new(country_code: CountryCode) -> Self {
        Self {
            country_code,
            name: None,
            organization: None,
            address_line1: None,
            address_line2: None,
            address_line3: None,
            dependent_locality: None,
            city: None,
            administrative_area: None,
            postal_code: None,
            sorting_code: None,
        }
    }

    /// Read one component.
    pub fn get(&self, field: AddressField) -> Option<&str> {
        let slot = match field {
            AddressField::Name => &self.name,
            AddressField::Organization => &self.organization,
            AddressField::AddressLine1 => &self.address_line1,
            AddressField::AddressLine2 => &self.address_line2,
            AddressField::AddressLine3 => &self.address_line3,
            AddressField::DependentLocality => &self.dependent_locality,
            AddressField::City => &self.city,
            AddressField::AdministrativeArea => &self.administrative_area,
            AddressField::PostalCode => &self.postal_code,
            AddressField::SortingCode => &self.sorting_code,
        };
        slot.as_deref()
    }

    /// Read one component, treating whitespace-only input as absent.
    pub fn get_trimmed(&self, field: AddressField) -> Option<&str> {
        self.get(field).map(str::trim).filter(|s| !s.is_empty())
    }

    /// Replace one component. `None` clears it.
    pub fn set(&mut self, field: AddressField, value: Option<String>) {
        let slot = match field {
            AddressField::Name => &mut self.name,
            AddressField::Organization => &mut self.organization,
            AddressField::AddressLine1 => &mut self.address_line1,
            AddressField::AddressLine2 => &mut self.address_line2,
            AddressField::AddressLine3 => &mut self.address_line3,
            AddressField::DependentLocality => &mut self.dependent_locality,
            AddressField::City => &mut self.city,
            AddressField::AdministrativeArea => &mut self.administrative_area,
            AddressField::PostalCode => &mut self.postal_code,
            AddressField::SortingCode => &mut self.sorting_code,
        };
        *slot = value;
    }

    /// Builder-style setter, mostly for tests and fixtures.
    pub fn with(mut self, field: AddressField, value: impl Into<String>) -> Self {
        self.set(field, Some(value.into()));
        self
    }
}
