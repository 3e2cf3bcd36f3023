//! # Country Metadata Record
//!
//! One precisely-typed record per country. Field names follow the upstream
//! postal-metadata vocabulary so datasets load without translation.
//!
//! ## Leniency
//!
//! Upstream data is trusted but not always clean. A known key holding a
//! non-string value decodes as absent (logged at warn level) instead of
//! failing the whole dataset. Unknown keys are kept in
//! [`CountryMetadata::extra`] rather than silently dropped.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Separator used by every `sub_*` list.
pub const SUBDIVISION_DELIMITER: char = '~';

/// Separator used by the `zipex` example list.
const EXAMPLE_DELIMITER: char = ',';

/// Postal formatting metadata for a single country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryMetadata {
    /// Upstream record path, e.g. `data/US`.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Country code as stored upstream.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Display name of the country (upstream uses uppercase).
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Format string in the local script, e.g. `%N%n%O%n%A%n%C, %S %Z`.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub fmt: Option<String>,
    /// Latin-script format string, for countries whose `fmt` is local-script ordered.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub lfmt: Option<String>,
    /// Letters of the required fields, e.g. `ACSZ`.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub require: Option<String>,
    /// Letters of the fields that are written in uppercase.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub upper: Option<String>,
    /// Postal code pattern (unanchored).
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// Comma-separated example postal codes.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub zipex: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub posturl: Option<String>,
    /// Literal prefix printed before the postal code, e.g. `CH-`.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub postprefix: Option<String>,
    /// `~`-separated subdivision keys.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sub_keys: Option<String>,
    /// `~`-separated subdivision names, aligned with `sub_keys`.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sub_names: Option<String>,
    /// `~`-separated Latin-script subdivision names, aligned with `sub_keys`.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sub_lnames: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sub_isoids: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sub_zips: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sub_zipexs: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sub_mores: Option<String>,
    /// Regional term for the administrative area (`state`, `province`, ...).
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub state_name_type: Option<String>,
    /// Regional term for the postal code (`zip`, `postal`, `pin`, `eircode`).
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub zip_name_type: Option<String>,
    /// Regional term for the dependent locality.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sublocality_name_type: Option<String>,
    /// Regional term for the city.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub locality_name_type: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub languages: Option<String>,
    /// Keys outside the known vocabulary.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl CountryMetadata {
    /// The record used when a dataset carries no `ZZ` entry of its own.
    pub fn generic_default() -> Self {
        Self {
            id: Some("data/ZZ".to_string()),
            fmt: Some("%N%n%O%n%A%n%C".to_string()),
            require: Some("AC".to_string()),
            upper: Some("C".to_string()),
            zip_name_type: Some("postal".to_string()),
            state_name_type: Some("province".to_string()),
            locality_name_type: Some("city".to_string()),
            ..Self::default()
        }
    }

    /// The local-script format string, if present and non-empty.
    pub fn format(&self) -> Option<&str> {
        non_empty(&self.fmt)
    }

    /// The Latin-script format string, if present and non-empty.
    pub fn latin_format(&self) -> Option<&str> {
        non_empty(&self.lfmt)
    }

    /// Required field letters; empty when the record has none.
    pub fn required_letters(&self) -> &str {
        self.require.as_deref().unwrap_or_default()
    }

    /// Uppercase field letters; empty when the record has none.
    pub fn uppercase_letters(&self) -> &str {
        self.upper.as_deref().unwrap_or_default()
    }

    /// The postal code pattern, if present and non-empty.
    pub fn postal_pattern(&self) -> Option<&str> {
        non_empty(&self.zip)
    }

    /// Example postal codes in upstream order.
    pub fn postal_examples(&self) -> Vec<&str> {
        non_empty(&self.zipex)
            .map(|raw| {
                raw.split(EXAMPLE_DELIMITER)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Subdivision keys. Empty when the country has no subdivision list.
    pub fn subdivision_keys(&self) -> Vec<&str> {
        split_list(&self.sub_keys)
    }

    /// Subdivision names, position-aligned with [`Self::subdivision_keys`].
    pub fn subdivision_names(&self) -> Vec<&str> {
        split_list(&self.sub_names)
    }

    /// Latin-script subdivision names, position-aligned with the keys.
    pub fn subdivision_latin_names(&self) -> Vec<&str> {
        split_list(&self.sub_lnames)
    }

    /// Whether the subdivision list is in a non-Latin script with a
    /// Latin transliteration available.
    pub fn has_latin_subdivision_names(&self) -> bool {
        non_empty(&self.sub_lnames).is_some()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Split a `~` list, keeping empty positions so lists stay aligned.
fn split_list(field: &Option<String>) -> Vec<&str> {
    non_empty(field)
        .map(|raw| raw.split(SUBDIVISION_DELIMITER).collect())
        .unwrap_or_default()
}

/// Decode a string field, treating any non-string value as absent.
fn lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Lenient>::deserialize(deserializer)? {
        Some(Lenient::Text(text)) => Some(text),
        Some(Lenient::Other(_)) => {
            tracing::warn!("non-string value in country metadata; treating field as absent");
            None
        }
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_keys() {
        let record: CountryMetadata = serde_json::from_str(
            r#"{"fmt":"%N%n%A%n%C %Z","require":"ACZ","zip":"\\d{4}","zipex":"1010, 3741"}"#,
        )
        .unwrap();
        assert_eq!(record.format(), Some("%N%n%A%n%C %Z"));
        assert_eq!(record.required_letters(), "ACZ");
        assert_eq!(record.postal_pattern(), Some("\\d{4}"));
        assert_eq!(record.postal_examples(), vec!["1010", "3741"]);
        assert!(record.extra.is_empty());
    }

    #[test]
    fn unknown_keys_go_to_overflow() {
        let record: CountryMetadata =
            serde_json::from_str(r#"{"fmt":"%A%n%C","width_overrides":"%S:S"}"#).unwrap();
        assert_eq!(
            record.extra.get("width_overrides"),
            Some(&serde_json::json!("%S:S"))
        );
    }

    #[test]
    fn malformed_fields_decode_as_absent() {
        let record: CountryMetadata =
            serde_json::from_str(r#"{"fmt":42,"require":["A"],"zip":null,"upper":"C"}"#).unwrap();
        assert_eq!(record.format(), None);
        assert_eq!(record.required_letters(), "");
        assert_eq!(record.postal_pattern(), None);
        assert_eq!(record.uppercase_letters(), "C");
    }

    #[test]
    fn empty_strings_are_absent() {
        let record: CountryMetadata =
            serde_json::from_str(r#"{"fmt":"","zip":"","sub_keys":""}"#).unwrap();
        assert_eq!(record.format(), None);
        assert_eq!(record.postal_pattern(), None);
        assert!(record.subdivision_keys().is_empty());
    }

    #[test]
    fn subdivision_lists_keep_alignment() {
        let record = CountryMetadata {
            sub_keys: Some("A~B~C".to_string()),
            sub_names: Some("Alpha~~Gamma".to_string()),
            ..CountryMetadata::default()
        };
        assert_eq!(record.subdivision_keys(), vec!["A", "B", "C"]);
        assert_eq!(record.subdivision_names(), vec!["Alpha", "", "Gamma"]);
        assert!(!record.has_latin_subdivision_names());
    }

    #[test]
    fn yaml_records_decode_the_same_way() {
        let record: CountryMetadata =
            serde_yaml::from_str("fmt: \"%A%n%Z %C\"\nrequire: ACZ\nzip: 12\n").unwrap();
        assert_eq!(record.format(), Some("%A%n%Z %C"));
        assert_eq!(record.postal_pattern(), None);
    }

    #[test]
    fn generic_default_requires_address_and_city() {
        let generic = CountryMetadata::generic_default();
        assert_eq!(generic.required_letters(), "AC");
        assert!(generic.format().is_some());
        assert_eq!(generic.postal_pattern(), None);
    }
}
