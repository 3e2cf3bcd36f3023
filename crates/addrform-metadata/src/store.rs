//! # Metadata Store
//!
//! Immutable country → metadata map. The embedded dataset is parsed on first
//! use and shared for the life of the process.
//!
//! ## Unknown Codes
//!
//! [`MetadataStore::country_data`] never fails: unknown or malformed codes
//! resolve to the generic `ZZ` record, whose schema is address lines plus
//! city. Callers that must distinguish an unknown code use
//! [`MetadataStore::try_country_data`].

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use addrform_core::CountryCode;

use crate::error::{MetadataError, MetadataResult};
use crate::parser;
use crate::record::CountryMetadata;

const EMBEDDED_DATASET: &str = include_str!("../data/countries.json");

static EMBEDDED: OnceLock<MetadataStore> = OnceLock::new();

/// Per-country postal metadata, keyed by country code.
#[derive(Debug, Clone)]
pub struct MetadataStore {
    countries: BTreeMap<CountryCode, CountryMetadata>,
    generic: CountryMetadata,
}

impl MetadataStore {
    /// Build a store from raw dataset entries.
    ///
    /// The `ZZ` entry, if present, becomes the generic fallback record;
    /// otherwise [`CountryMetadata::generic_default`] is used.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::InvalidCountryCode`] if a key is not a
    /// two-letter code.
    pub fn from_entries(entries: BTreeMap<String, CountryMetadata>) -> MetadataResult<Self> {
        let mut countries = BTreeMap::new();
        let mut generic = None;

        for (raw_code, record) in entries {
            let code = CountryCode::parse(&raw_code)?;
            if !record.extra.is_empty() {
                tracing::debug!(
                    country = %code,
                    keys = ?record.extra.keys().collect::<Vec<_>>(),
                    "country metadata carries unrecognized keys"
                );
            }
            if code.is_generic() {
                generic = Some(record);
            } else {
                countries.insert(code, record);
            }
        }

        Ok(Self {
            countries,
            generic: generic.unwrap_or_else(CountryMetadata::generic_default),
        })
    }

    /// Parse a JSON dataset.
    pub fn from_json_str(json: &str) -> MetadataResult<Self> {
        Self::from_entries(serde_json::from_str(json)?)
    }

    /// Parse a YAML dataset.
    pub fn from_yaml_str(yaml: &str) -> MetadataResult<Self> {
        Self::from_entries(serde_yaml::from_str(yaml)?)
    }

    /// Load a dataset file (JSON, or YAML by `.yaml`/`.yml` extension).
    pub fn load(path: &Path) -> MetadataResult<Self> {
        let entries: BTreeMap<String, CountryMetadata> = parser::load_typed(path)?;
        let store = Self::from_entries(entries)?;
        tracing::info!(
            path = %path.display(),
            countries = store.len(),
            "loaded postal metadata"
        );
        Ok(store)
    }

    /// A store holding only the generic record.
    pub fn generic_only() -> Self {
        Self {
            countries: BTreeMap::new(),
            generic: CountryMetadata::generic_default(),
        }
    }

    /// The process-wide store built from the embedded dataset.
    pub fn embedded() -> &'static MetadataStore {
        EMBEDDED.get_or_init(|| match Self::from_json_str(EMBEDDED_DATASET) {
            Ok(store) => store,
            Err(e) => {
                tracing::error!(error = %e, "embedded postal metadata is unreadable; using generic record only");
                Self::generic_only()
            }
        })
    }

    /// Look up a country by code, falling back to the generic record.
    pub fn country_data(&self, code: &str) -> &CountryMetadata {
        match self.try_country_data(code) {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!(code, reason = %e, "falling back to generic postal metadata");
                &self.generic
            }
        }
    }

    /// Look up a country by code without fallback.
    ///
    /// `ZZ` itself resolves to the generic record.
    ///
    /// # Errors
    ///
    /// [`MetadataError::InvalidCountryCode`] for malformed input,
    /// [`MetadataError::UnknownCountry`] for a well-formed code with no record.
    pub fn try_country_data(&self, code: &str) -> MetadataResult<&CountryMetadata> {
        let code = CountryCode::parse(code)?;
        if code.is_generic() {
            return Ok(&self.generic);
        }
        self.countries
            .get(&code)
            .ok_or_else(|| MetadataError::UnknownCountry {
                code: code.to_string(),
            })
    }

    /// Look up by an already-parsed code, falling back to the generic record.
    pub fn get(&self, code: &CountryCode) -> &CountryMetadata {
        self.countries.get(code).unwrap_or(&self.generic)
    }

    /// Whether a record exists for this code (the generic record excluded).
    pub fn contains(&self, code: &CountryCode) -> bool {
        self.countries.contains_key(code)
    }

    /// Known country codes in ascending order, excluding `ZZ`.
    pub fn country_codes(&self) -> impl Iterator<Item = &CountryCode> + '_ {
        self.countries.keys()
    }

    /// Known countries with their records, in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (&CountryCode, &CountryMetadata)> + '_ {
        self.countries.iter()
    }

    /// The generic fallback record.
    pub fn generic(&self) -> &CountryMetadata {
        &self.generic
    }

    /// Number of known countries, excluding `ZZ`.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the store has no country records.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Allow-list countries that need a third address line, all of which
    /// must be present in the embedded dataset.
    const THREE_LINE_COUNTRIES: &[&str] =
        &["JP", "CN", "TW", "KR", "VN", "ID", "TH", "PH", "MY", "SG"];

    #[test]
    fn embedded_dataset_parses() {
        let store = MetadataStore::from_json_str(EMBEDDED_DATASET).unwrap();
        assert!(store.len() >= 40, "only {} countries", store.len());
        assert_eq!(store.generic().required_letters(), "AC");
    }

    #[test]
    fn embedded_store_has_core_countries() {
        let store = MetadataStore::embedded();
        for code in ["US", "CA", "GB", "DE", "FR", "HK", "IE", "IN", "IR"]
            .iter()
            .chain(THREE_LINE_COUNTRIES)
        {
            assert!(store.try_country_data(code).is_ok(), "missing {code}");
        }
    }

    #[test]
    fn country_codes_sorted_without_generic() {
        let codes: Vec<&str> = MetadataStore::embedded()
            .country_codes()
            .map(CountryCode::as_str)
            .collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
        assert!(!codes.contains(&"ZZ"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let store = MetadataStore::embedded();
        let upper = store.country_data("US");
        let lower = store.country_data("us");
        assert_eq!(upper, lower);
        assert_eq!(upper.key.as_deref(), Some("US"));
    }

    #[test]
    fn unknown_code_falls_back_to_generic() {
        let store = MetadataStore::embedded();
        assert_eq!(store.country_data("QQ"), store.generic());
        assert_eq!(store.country_data("not a code"), store.generic());
        assert_eq!(store.country_data("ZZ"), store.generic());
    }

    #[test]
    fn strict_lookup_reports_unknown_and_malformed() {
        let store = MetadataStore::embedded();
        assert!(matches!(
            store.try_country_data("QQ"),
            Err(MetadataError::UnknownCountry { .. })
        ));
        assert!(matches!(
            store.try_country_data("USA"),
            Err(MetadataError::InvalidCountryCode(_))
        ));
    }

    #[test]
    fn dataset_without_generic_uses_default() {
        let store = MetadataStore::from_json_str(r#"{"DE":{"fmt":"%A%n%Z %C"}}"#).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.generic(), &CountryMetadata::generic_default());
    }

    #[test]
    fn invalid_dataset_key_is_rejected() {
        let err = MetadataStore::from_json_str(r#"{"DEU":{"fmt":"%A"}}"#).unwrap_err();
        assert!(matches!(err, MetadataError::InvalidCountryCode(_)));
    }

    #[test]
    fn load_yaml_dataset_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "ZZ:\n  fmt: \"%A%n%C\"\n  require: A\nxx:\n  fmt: \"%A%n%Z %C\"\n  zip: \"\\\\d{{3}}\"\n"
        )
        .unwrap();
        let store = MetadataStore::load(file.path()).unwrap();
        let code = CountryCode::parse("XX").unwrap();
        assert!(store.contains(&code));
        assert_eq!(store.get(&code).postal_pattern(), Some("\\d{3}"));
        assert_eq!(store.generic().required_letters(), "A");
    }

    #[test]
    fn generic_only_store() {
        let store = MetadataStore::generic_only();
        assert!(store.is_empty());
        assert_eq!(store.country_data("US"), store.generic());
    }
}
