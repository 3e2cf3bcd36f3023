//! # addrform CLI entry point
//!
//! Parses command-line arguments, resolves configuration and the metadata
//! store, then dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use addrform_cli::config::Config;
use addrform_cli::context::Session;
use addrform_cli::countries::{run_countries, CountriesArgs};
use addrform_cli::format::{run_format, FormatArgs};
use addrform_cli::schema::{run_schema, SchemaArgs};
use addrform_cli::validate::{run_validate, ValidateArgs};
use addrform_metadata::MetadataStore;

/// Country-aware address form schemas.
///
/// Builds per-country field schemas from postal metadata, validates address
/// files against them and renders postal label lines.
#[derive(Parser, Debug)]
#[command(name = "addrform", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (default: ./addrform.yaml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Alternate metadata dataset (JSON or YAML) instead of the embedded one.
    #[arg(long, global = true)]
    metadata: Option<PathBuf>,

    /// Fail on unknown country codes instead of using the generic format.
    #[arg(long, global = true)]
    strict: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List country codes with postal metadata.
    Countries(CountriesArgs),

    /// Print the field schema for a country as JSON.
    Schema(SchemaArgs),

    /// Validate an address file against a country's schema.
    Validate(ValidateArgs),

    /// Print an address file as postal label lines.
    Format(FormatArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: u8, json: bool) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Resolve configuration, apply global flags on top of it.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = Config::discover(cli.config.as_deref(), &cwd)?;
    if let Some(metadata) = &cli.metadata {
        config.metadata = Some(metadata.clone());
    }
    config.strict |= cli.strict;
    Ok(config)
}

fn run(cli: Cli) -> Result<u8> {
    let config = resolve_config(&cli)?;

    let loaded;
    let store = match &config.metadata {
        Some(path) => {
            loaded = MetadataStore::load(path)
                .with_context(|| format!("failed to load metadata: {}", path.display()))?;
            &loaded
        }
        None => MetadataStore::embedded(),
    };
    tracing::debug!(countries = store.len(), strict = config.strict, "addrform starting");

    let session = Session::new(store, config);
    match &cli.command {
        Commands::Countries(args) => run_countries(args, &session),
        Commands::Schema(args) => run_schema(args, &session),
        Commands::Validate(args) => run_validate(args, &session),
        Commands::Format(args) => run_format(args, &session),
    }
}
