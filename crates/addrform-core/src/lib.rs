//! # addrform-core: Foundational Types for addrform
//!
//! Leaf crate of the workspace. Defines the types every other crate speaks:
//!
//! 1. **`CountryCode` newtype.** Uppercase ISO 3166-1 alpha-2, validated at
//!    construction. No bare strings for country keys.
//!
//! 2. **Closed field vocabularies.** [`FieldId`] is the set of format-string
//!    letters (`N`, `O`, `A`, `D`, `C`, `S`, `Z`, `X`); [`AddressField`] is
//!    the set of keys in an address value. Both are exhaustive enums, so
//!    adding a field forces every consumer to handle it.
//!
//! 3. **Explicit field access.** [`AddressValue::get`] is a `match` over
//!    [`AddressField`], never a stringly-typed property lookup.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `addrform-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod address;
pub mod country;
pub mod error;
pub mod field;

pub use address::AddressValue;
pub use country::CountryCode;
pub use error::{AddrFormError, Result};
pub use field::{AddressField, FieldId};
