//! # Field-Config Builder
//!
//! Turns a country's metadata into an ordered, render-ready [`FieldSchema`].
//!
//! ## Expansion Rules
//!
//! Field identifiers are taken from the format string in order of first
//! appearance ([`format::field_order`]). Each identifier expands to one or
//! more entries:
//!
//! - `A` → `addressLine1`, `addressLine2`, plus `addressLine3` for the
//!   countries in [`THREE_LINE_COUNTRIES`]. Only line 1 can be required.
//! - `N`/`O` → only when [`DisplayOptions`] asks for them.
//! - every other letter → exactly one entry.
//!
//! If the format string omits `A` or `C`, the missing identifiers are
//! appended (`A` first), so every schema has an address line and a city.
//!
//! A schema is a pure function of its inputs. It is never patched in place;
//! when the country or options change, build a new one.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use addrform_core::{AddressField, CountryCode, FieldId};
use addrform_metadata::{CountryMetadata, MetadataStore};

use crate::format;
use crate::labels;

/// Countries whose addresses routinely need a third street line.
pub const THREE_LINE_COUNTRIES: &[&str] = &["JP", "CN", "TW", "KR", "VN", "ID", "TH", "PH", "MY", "SG"];

/// Caller-controlled presentation switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayOptions {
    /// Include the recipient name field.
    pub show_name: bool,
    /// Include the organization field.
    pub show_organization: bool,
    /// Render street address as one multi-line input instead of separate lines.
    pub multiline_street: bool,
    /// Fields kept in the schema but not rendered or validated.
    pub hidden: BTreeSet<AddressField>,
}

impl DisplayOptions {
    /// Options with name and organization both shown.
    pub fn with_contact() -> Self {
        Self {
            show_name: true,
            show_organization: true,
            ..Self::default()
        }
    }
}

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Select,
    MultiLine,
}

/// Relative display width of a field within a form row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldWidth {
    Full,
    Half,
    Quarter,
}

impl FieldWidth {
    /// Width in quarter-row units.
    pub fn quarters(self) -> u8 {
        match self {
            Self::Full => 4,
            Self::Half => 2,
            Self::Quarter => 1,
        }
    }

    fn for_field(field: AddressField) -> Self {
        match field {
            AddressField::Name
            | AddressField::Organization
            | AddressField::AddressLine1
            | AddressField::AddressLine2
            | AddressField::AddressLine3 => Self::Full,
            AddressField::City | AddressField::DependentLocality => Self::Half,
            AddressField::AdministrativeArea
            | AddressField::PostalCode
            | AddressField::SortingCode => Self::Quarter,
        }
    }
}

/// One selectable subdivision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdivisionOption {
    /// Value stored in the address when selected.
    pub value: String,
    /// Human-readable text shown to the user.
    pub label: String,
}

/// Render-ready description of one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchemaEntry {
    /// Target key in the address value.
    pub key: AddressField,
    pub label: String,
    pub required: bool,
    pub visible: bool,
    pub input: InputKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SubdivisionOption>,
    /// Postal code pattern, unanchored as stored upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub width: FieldWidth,
    /// Input for this field is conventionally written in uppercase.
    pub uppercase: bool,
}

/// Ordered field schema for one country and option set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    pub country: CountryCode,
    pub fields: Vec<FieldSchemaEntry>,
}

impl FieldSchema {
    /// Entries in display order.
    pub fn entries(&self) -> &[FieldSchemaEntry] {
        &self.fields
    }

    /// Entries that are rendered and validated.
    pub fn visible(&self) -> impl Iterator<Item = &FieldSchemaEntry> + '_ {
        self.fields.iter().filter(|entry| entry.visible)
    }

    /// The entry for a given key, if present.
    pub fn get(&self, key: AddressField) -> Option<&FieldSchemaEntry> {
        self.fields.iter().find(|entry| entry.key == key)
    }

    /// Whether the schema has an entry for `key`.
    pub fn contains(&self, key: AddressField) -> bool {
        self.get(key).is_some()
    }

    /// Target keys in display order.
    pub fn keys(&self) -> Vec<AddressField> {
        self.fields.iter().map(|entry| entry.key).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Build the field schema for a country from its metadata.
pub fn build_field_config(
    country: &CountryCode,
    metadata: &CountryMetadata,
    options: &DisplayOptions,
) -> FieldSchema {
    let format = format::format_or_default(metadata.format());
    let mut order = format::field_order(format);
    for id in [FieldId::StreetAddress, FieldId::Locality] {
        if !order.contains(&id) {
            tracing::debug!(%country, field = %id, "format string omits field; appending");
            order.push(id);
        }
    }

    let required = metadata.required_letters();
    let uppercase = metadata.uppercase_letters();
    let mut fields = Vec::new();

    for id in order {
        for key in expand(id, country, options) {
            let mut entry = FieldSchemaEntry {
                key,
                label: labels::label_for(key, country, metadata).to_string(),
                required: id.is_listed_in(required),
                visible: !options.hidden.contains(&key),
                input: InputKind::Text,
                options: Vec::new(),
                pattern: None,
                placeholder: None,
                width: FieldWidth::for_field(key),
                uppercase: id.is_listed_in(uppercase),
            };
            match key {
                AddressField::AddressLine2 | AddressField::AddressLine3 => entry.required = false,
                AddressField::AddressLine1 if options.multiline_street => {
                    entry.input = InputKind::MultiLine;
                    entry.label = labels::STREET_ADDRESS_LABEL.to_string();
                }
                AddressField::AdministrativeArea => {
                    entry.options = subdivision_options(metadata);
                    if !entry.options.is_empty() {
                        entry.input = InputKind::Select;
                    }
                }
                AddressField::PostalCode => {
                    entry.pattern = metadata.postal_pattern().map(str::to_string);
                    entry.placeholder = metadata.postal_examples().first().map(|ex| ex.to_string());
                }
                _ => {}
            }
            fields.push(entry);
        }
    }

    FieldSchema {
        country: country.clone(),
        fields,
    }
}

/// Build the field schema for a country code using a metadata store.
///
/// Malformed or unknown codes yield the generic schema, tagged with `ZZ`
/// when the code itself could not be parsed.
pub fn field_config_for(store: &MetadataStore, code: &str, options: &DisplayOptions) -> FieldSchema {
    let country = CountryCode::parse(code).unwrap_or_else(|_| CountryCode::generic());
    build_field_config(&country, store.get(&country), options)
}

/// Target keys an identifier expands to, in display order.
fn expand(id: FieldId, country: &CountryCode, options: &DisplayOptions) -> Vec<AddressField> {
    match id {
        FieldId::Name if options.show_name => vec![AddressField::Name],
        FieldId::Organization if options.show_organization => vec![AddressField::Organization],
        FieldId::Name | FieldId::Organization => Vec::new(),
        FieldId::StreetAddress if options.multiline_street => vec![AddressField::AddressLine1],
        FieldId::StreetAddress if needs_third_line(country) => vec![
            AddressField::AddressLine1,
            AddressField::AddressLine2,
            AddressField::AddressLine3,
        ],
        FieldId::StreetAddress => vec![AddressField::AddressLine1, AddressField::AddressLine2],
        FieldId::DependentLocality => vec![AddressField::DependentLocality],
        FieldId::Locality => vec![AddressField::City],
        FieldId::AdminArea => vec![AddressField::AdministrativeArea],
        FieldId::PostalCode => vec![AddressField::PostalCode],
        FieldId::SortingCode => vec![AddressField::SortingCode],
    }
}

/// Whether a country's schema carries `addressLine3`.
pub fn needs_third_line(country: &CountryCode) -> bool {
    THREE_LINE_COUNTRIES.contains(&country.as_str())
}

/// Subdivision choices for the administrative-area select.
///
/// Non-Latin countries (those with `sub_lnames`) show and store the Latin
/// name, or the raw key where no Latin name exists. Latin-script countries
/// show `sub_names` and store the key.
pub fn subdivision_options(metadata: &CountryMetadata) -> Vec<SubdivisionOption> {
    let keys = metadata.subdivision_keys();
    let latin = metadata.has_latin_subdivision_names();
    let names = if latin {
        metadata.subdivision_latin_names()
    } else {
        metadata.subdivision_names()
    };

    keys.into_iter()
        .enumerate()
        .filter(|(_, key)| !key.is_empty())
        .map(|(i, key)| {
            let name = names.get(i).copied().filter(|n| !n.is_empty());
            let label = name.unwrap_or(key);
            let value = if latin { label } else { key };
            SubdivisionOption {
                value: value.to_string(),
                label: label.to_string(),
            }
        })
        .collect()
}
