//! # `addrform format`
//!
//! Prints an address file as postal label lines in the country's layout.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use addrform_schema::{format_address_lines_in, Script};

use crate::context::Session;
use crate::validate::load_address;

/// Arguments for `addrform format`.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// ISO 3166-1 alpha-2 country code (case-insensitive).
    pub country: String,

    /// Address file (JSON, or YAML by extension).
    pub file: PathBuf,

    /// Use the Latin-script layout where the country has one.
    #[arg(long)]
    pub latin: bool,
}

/// Render the file the command names.
pub fn format_file(args: &FormatArgs, session: &Session<'_>) -> Result<Vec<String>> {
    let (country, metadata) = session.country(&args.country)?;
    let value = load_address(&args.file, &country)?;
    let script = if args.latin { Script::Latin } else { Script::Local };
    Ok(format_address_lines_in(&value, metadata, script))
}

/// Execute `addrform format`.
pub fn run_format(args: &FormatArgs, session: &Session<'_>) -> Result<u8> {
    let lines = format_file(args, session)?;
    if lines.is_empty() {
        tracing::warn!(file = %args.file.display(), "address has no printable fields");
    }
    for line in lines {
        println!("{line}");
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use addrform_metadata::MetadataStore;

    #[test]
    fn formats_us_address() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("addr.yaml");
        std::fs::write(
            &path,
            "name: Jane Doe\naddressLine1: 1600 Pennsylvania Ave NW\ncity: Washington\nadministrativeArea: DC\npostalCode: \"20500\"\n",
        )
        .unwrap();
        let session = Session::new(MetadataStore::embedded(), Config::default());
        let args = FormatArgs {
            country: "US".to_string(),
            file: path,
            latin: false,
        };
        assert_eq!(
            format_file(&args, &session).unwrap(),
            vec!["Jane Doe", "1600 Pennsylvania Ave NW", "WASHINGTON, DC 20500"]
        );
    }
}
