//! # addrform-cli: Address Form Command-Line Interface
//!
//! Inspection and batch front end over the addrform libraries. It stands in
//! for a presentation layer: it asks for a schema, supplies a value and
//! reports validity.
//!
//! ## Subcommands
//!
//! - `countries`: list known country codes
//! - `schema`: print a country's field schema as JSON
//! - `validate`: check an address file against a country's schema
//! - `format`: print an address file as postal label lines
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handlers; handlers return an exit
//!   code and leave printing errors to `main`.
//! - Handlers delegate to the library crates. No address logic lives here.

pub mod config;
pub mod context;
pub mod countries;
pub mod format;
pub mod schema;
pub mod validate;
