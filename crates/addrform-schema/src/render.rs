//! # Postal Lines
//!
//! Renders an [`AddressValue`] into the lines of a postal label, driven by
//! the same format string the builder reads. Useful for previews and for
//! checking a value round-trips through the form.

use addrform_core::{AddressField, AddressValue, FieldId};
use addrform_metadata::CountryMetadata;

use crate::format::{self, FormatToken};

/// Separator characters stripped from both ends of each rendered line.
const LINE_TRIM: &[char] = &[' ', ','];

/// Which of a country's format strings to render with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Script {
    /// The local-script format (`fmt`).
    #[default]
    Local,
    /// The Latin-script format (`lfmt`), falling back to `fmt`.
    Latin,
}

/// Render `value` into postal lines using the local-script format.
pub fn format_address_lines(value: &AddressValue, metadata: &CountryMetadata) -> Vec<String> {
    format_address_lines_in(value, metadata, Script::Local)
}

/// Render `value` into postal lines using the chosen script's format.
pub fn format_address_lines_in(
    value: &AddressValue,
    metadata: &CountryMetadata,
    script: Script,
) -> Vec<String> {
    let raw = match script {
        Script::Local => metadata.format(),
        Script::Latin => metadata.latin_format().or_else(|| metadata.format()),
    };
    let upper = metadata.uppercase_letters();

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut has_field = false;
    let mut flush = |current: &mut String, has_field: &mut bool| {
        if std::mem::take(has_field) {
            lines.extend(current.split('\n').map(clean_line).filter(|l| !l.is_empty()));
        }
        current.clear();
    };

    for token in format::tokenize(format::format_or_default(raw)) {
        match token {
            FormatToken::Newline => flush(&mut current, &mut has_field),
            FormatToken::Literal(text) => current.push_str(&text),
            FormatToken::Field(id) => {
                if let Some(text) = field_text(value, id, id.is_listed_in(upper)) {
                    current.push_str(&text);
                    has_field = true;
                }
            }
        }
    }
    flush(&mut current, &mut has_field);
    lines
}

/// The rendered text for one field identifier, if any part is non-blank.
fn field_text(value: &AddressValue, id: FieldId, uppercase: bool) -> Option<String> {
    let parts: Vec<&str> = AddressField::all()
        .iter()
        .filter(|field| field.source() == id)
        .filter_map(|field| value.get_trimmed(*field))
        .collect();
    if parts.is_empty() {
        return None;
    }
    let text = parts.join("\n");
    Some(if uppercase { text.to_uppercase() } else { text })
}

fn clean_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for c in line.trim_matches(LINE_TRIM).chars() {
        if c == ' ' && out.ends_with(' ') {
            continue;
        }
        out.push(c);
    }
    out
}
