//! # `addrform validate`
//!
//! Validates an address file (JSON, or YAML by extension) against a
//! country's field schema. Exit code 0 when valid, 1 when not.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use addrform_core::{AddressValue, CountryCode};
use addrform_metadata::parser;
use addrform_schema::{build_field_config, validate_address, ValidationResult};

use crate::config::DisplayFlags;
use crate::context::Session;

/// Arguments for `addrform validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// ISO 3166-1 alpha-2 country code (case-insensitive).
    pub country: String,

    /// Address file with camelCase keys (`addressLine1`, `postalCode`, ...).
    pub file: PathBuf,

    #[command(flatten)]
    pub display: DisplayFlags,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Read an address file and pin it to `country`.
///
/// A `countryCode` in the file that disagrees with `country` is overridden.
pub fn load_address(path: &Path, country: &CountryCode) -> Result<AddressValue> {
    let mut value: AddressValue = parser::load_typed(path)
        .with_context(|| format!("failed to load address: {}", path.display()))?;
    if !value.country_code.is_generic() && value.country_code != *country {
        tracing::warn!(
            file = %value.country_code,
            requested = %country,
            "address file names a different country; using the requested one"
        );
    }
    value.country_code = country.clone();
    Ok(value)
}

/// Validate the file the command names.
pub fn validate_file(args: &ValidateArgs, session: &Session<'_>) -> Result<ValidationResult> {
    let (country, metadata) = session.country(&args.country)?;
    let value = load_address(&args.file, &country)?;
    let schema = build_field_config(&country, metadata, &session.config.display_options(&args.display));
    Ok(validate_address(&value, &schema))
}

/// Execute `addrform validate`.
pub fn run_validate(args: &ValidateArgs, session: &Session<'_>) -> Result<u8> {
    let result = validate_file(args, session)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.valid {
        println!("{}: valid", args.file.display());
    } else {
        println!("{}: invalid", args.file.display());
        for error in &result.errors {
            println!("  - {error}");
        }
    }
    Ok(if result.valid { 0 } else { 1 })
}
