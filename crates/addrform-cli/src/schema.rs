//! # `addrform schema`
//!
//! Prints the field schema for one country as JSON, exactly as a
//! presentation layer would receive it.

use anyhow::Result;
use clap::Args;

use addrform_schema::{build_field_config, FieldSchema};

use crate::config::DisplayFlags;
use crate::context::Session;

/// Arguments for `addrform schema`.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// ISO 3166-1 alpha-2 country code (case-insensitive).
    pub country: String,

    #[command(flatten)]
    pub display: DisplayFlags,

    /// Emit compact single-line JSON.
    #[arg(long)]
    pub compact: bool,
}

/// Build the schema the command would print.
pub fn schema_for(args: &SchemaArgs, session: &Session<'_>) -> Result<FieldSchema> {
    let (country, metadata) = session.country(&args.country)?;
    let options = session.config.display_options(&args.display);
    Ok(build_field_config(&country, metadata, &options))
}

/// Execute `addrform schema`.
pub fn run_schema(args: &SchemaArgs, session: &Session<'_>) -> Result<u8> {
    let schema = schema_for(args, session)?;
    tracing::debug!(country = %schema.country, fields = schema.len(), "built field schema");
    let json = if args.compact {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    println!("{json}");
    Ok(0)
}
