//! # addrform-schema: Field Configuration and Validation
//!
//! Turns per-country postal metadata into a form description and checks
//! address values against it.
//!
//! - **Format strings** ([`format`]): tokenizer for `%N%n%A%n%C %Z`-style
//!   templates, shared by the builder and the renderer.
//!
//! - **Builder** ([`builder`]): [`build_field_config`] produces an ordered
//!   [`FieldSchema`] of labelled, width-tagged entries.
//!
//! - **Labels** ([`labels`]): regional terminology ("ZIP Code", "Prefecture",
//!   "Post Town") derived from metadata name types.
//!
//! - **Validator** ([`validate`]): required-field and postal-pattern checks
//!   producing a [`ValidationResult`].
//!
//! - **Renderer** ([`render`]): postal label lines from an address value.
//!
//! ## Crate Policy
//!
//! - Every function is pure over its inputs. Nothing here caches schemas.
//! - Upstream data is untrusted: missing formats, unknown name types and
//!   malformed patterns degrade to defaults, never to errors.

pub mod builder;
pub mod format;
pub mod labels;
pub mod render;
pub mod validate;

pub use builder::{
    build_field_config, field_config_for, DisplayOptions, FieldSchema, FieldSchemaEntry,
    FieldWidth, InputKind, SubdivisionOption, THREE_LINE_COUNTRIES,
};
pub use render::{format_address_lines, format_address_lines_in, Script};
pub use validate::{validate_address, validate_entry, validate_postal_code, ValidationResult};
