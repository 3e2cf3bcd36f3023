//! # Format Strings
//!
//! A format string is a template such as `%N%n%O%n%A%n%C, %S %Z`:
//!
//! - `%` followed by a field letter marks a field ([`FieldId::from_letter`]).
//! - `%n` is a line break.
//! - Everything else is literal text (`, `, `CH-`, `〒`).
//!
//! An escape with an unknown letter is dropped. A trailing lone `%` is kept
//! as literal text.

use addrform_core::FieldId;

/// Template used when a record has no format string.
pub const DEFAULT_FORMAT: &str = "%N%n%O%n%A%n%C %Z";

/// One lexical element of a format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatToken {
    Field(FieldId),
    Newline,
    Literal(String),
}

/// Split a format string into tokens. Adjacent literal characters are
/// merged into a single [`FormatToken::Literal`].
pub fn tokenize(format: &str) -> Vec<FormatToken> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            literal.push(c);
            continue;
        }
        let Some(letter) = chars.next() else {
            literal.push('%');
            break;
        };
        let token = if letter == 'n' {
            Some(FormatToken::Newline)
        } else {
            FieldId::from_letter(letter).map(FormatToken::Field)
        };
        if let Some(token) = token {
            if !literal.is_empty() {
                tokens.push(FormatToken::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(token);
        }
    }
    if !literal.is_empty() {
        tokens.push(FormatToken::Literal(literal));
    }
    tokens
}

/// Distinct field identifiers in order of first appearance.
pub fn field_order(format: &str) -> Vec<FieldId> {
    let mut order = Vec::new();
    for token in tokenize(format) {
        if let FormatToken::Field(id) = token {
            if !order.contains(&id) {
                order.push(id);
            }
        }
    }
    order
}

/// The record's format string, or [`DEFAULT_FORMAT`] when absent.
pub fn format_or_default(format: Option<&str>) -> &str {
    format.filter(|f| !f.is_empty()).unwrap_or(DEFAULT_FORMAT)
}
