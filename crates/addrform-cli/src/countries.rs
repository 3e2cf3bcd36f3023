//! # `addrform countries`
//!
//! Lists the country codes the loaded dataset knows, with display names.
//! The generic `ZZ` record is not listed.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::context::Session;

/// Arguments for `addrform countries`.
#[derive(Args, Debug)]
pub struct CountriesArgs {
    /// Print a JSON array instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct CountryRow<'a> {
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

fn rows<'a>(session: &Session<'a>) -> Vec<CountryRow<'a>> {
    session
        .store
        .iter()
        .map(|(code, metadata)| CountryRow {
            code: code.as_str(),
            name: metadata.name.as_deref(),
        })
        .collect()
}

/// Execute `addrform countries`.
pub fn run_countries(args: &CountriesArgs, session: &Session<'_>) -> Result<u8> {
    let rows = rows(session);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(0);
    }
    for row in &rows {
        println!("  {:<4} {}", row.code, row.name.unwrap_or("-"));
    }
    println!();
    println!("Total: {} countries", rows.len());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use addrform_metadata::MetadataStore;

    #[test]
    fn rows_cover_store_in_order() {
        let session = Session::new(MetadataStore::embedded(), Config::default());
        let rows = rows(&session);
        assert_eq!(rows.len(), session.store.len());
        assert!(rows.windows(2).all(|w| w[0].code < w[1].code));
        assert!(rows.iter().all(|r| r.code != "ZZ"));
    }

    #[test]
    fn row_serializes_without_missing_name() {
        let row = CountryRow { code: "XX", name: None };
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"code":"XX"}"#);
    }
}
