//! Per-run state handed to every subcommand handler.

use anyhow::{Context as _, Result};

use addrform_core::CountryCode;
use addrform_metadata::{CountryMetadata, MetadataStore};

use crate::config::Config;

/// Resolved configuration plus the metadata store in use.
#[derive(Debug)]
pub struct Session<'a> {
    pub store: &'a MetadataStore,
    pub config: Config,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a MetadataStore, config: Config) -> Self {
        Self { store, config }
    }

    /// Resolve a country code to its record.
    ///
    /// In strict mode malformed and unknown codes are errors. Otherwise
    /// malformed codes become `ZZ` and unknown codes use the generic record.
    pub fn country(&self, code: &str) -> Result<(CountryCode, &'a CountryMetadata)> {
        if self.config.strict {
            let country = CountryCode::parse(code)
                .with_context(|| format!("invalid country code '{code}'"))?;
            let metadata = self
                .store
                .try_country_data(country.as_str())
                .with_context(|| format!("no postal metadata for '{country}'"))?;
            return Ok((country, metadata));
        }
        let country = match CountryCode::parse(code) {
            Ok(country) => country,
            Err(e) => {
                tracing::warn!(code, error = %e, "using generic address format");
                CountryCode::generic()
            }
        };
        if !country.is_generic() && !self.store.contains(&country) {
            tracing::info!(%country, "no postal metadata; using generic address format");
        }
        let metadata = self.store.get(&country);
        Ok((country, metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(strict: bool) -> Session<'static> {
        Session::new(
            MetadataStore::embedded(),
            Config {
                strict,
                ..Config::default()
            },
        )
    }

    #[test]
    fn lenient_lookup_falls_back() {
        let session = session(false);
        let (country, metadata) = session.country("QQ").unwrap();
        assert_eq!(country.as_str(), "QQ");
        assert_eq!(metadata, session.store.generic());

        let (country, _) = session.country("not-a-code").unwrap();
        assert!(country.is_generic());
    }

    #[test]
    fn strict_lookup_rejects_unknown_and_malformed() {
        let session = session(true);
        assert!(session.country("QQ").is_err());
        assert!(session.country("USA").is_err());
        let (country, metadata) = session.country("ca").unwrap();
        assert_eq!(country.as_str(), "CA");
        assert_eq!(metadata.key.as_deref(), Some("CA"));
    }
}
