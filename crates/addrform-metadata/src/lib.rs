//! # addrform-metadata: The Metadata Store
//!
//! Static, per-country postal formatting metadata keyed by ISO 3166-1
//! alpha-2 code:
//!
//! - **Record** ([`record`]): [`CountryMetadata`], one typed field per known
//!   upstream key, with an explicit overflow map for anything else.
//!
//! - **Store** ([`store`]): [`MetadataStore`], an immutable map built once.
//!   Lookups of unknown codes fall back to the generic `ZZ` record.
//!
//! - **Parser** ([`parser`]): JSON/YAML dataset loading with path context
//!   in every error.
//!
//! ## Data Format
//!
//! The embedded dataset (`data/countries.json`) is a single JSON object
//! mapping country codes to records in the upstream key vocabulary
//! (`fmt`, `require`, `zip`, `sub_keys`, ...). Alternate datasets loaded
//! with [`MetadataStore::load`] use the same shape, in JSON or YAML.

pub mod error;
pub mod parser;
pub mod record;
pub mod store;

pub use error::{MetadataError, MetadataResult};
pub use record::{CountryMetadata, SUBDIVISION_DELIMITER};
pub use store::MetadataStore;

/// Look up a country in the embedded store, falling back to the generic
/// record for unknown or malformed codes.
pub fn country_data(code: &str) -> &'static CountryMetadata {
    MetadataStore::embedded().country_data(code)
}

/// Look up a country in the embedded store without fallback.
pub fn try_country_data(code: &str) -> MetadataResult<&'static CountryMetadata> {
    MetadataStore::embedded().try_country_data(code)
}

/// All country codes in the embedded store, in ascending order.
pub fn country_codes() -> Vec<&'static addrform_core::CountryCode> {
    MetadataStore::embedded().country_codes().collect()
}
