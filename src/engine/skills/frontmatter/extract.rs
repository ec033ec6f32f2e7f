// Skill Frontmatter: Extraction
//
// Splits a skill document into its YAML header and markdown body, then
// decodes the header into an untyped YAML value. Shape problems map to the
// structural parse errors and stop processing.

use serde_yaml::{Mapping, Value};

use crate::atoms::error::{ParseError, ParseErrorKind};

pub(crate) const FRONTMATTER_FIELD: &str = "frontmatter";
pub(crate) const CONTENT_FIELD: &str = "content";

const DELIMITER: &str = "---";
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Header and body of a document, borrowed from the trimmed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    pub header: &'a str,
    pub body: &'a str,
}

/// Split `text` (already trimmed) into header and body.
///
/// The first line must be exactly `---`. The header runs until the next
/// line that is exactly `---`. Everything after that line is the body.
/// A trailing `\r` on a delimiter line is tolerated.
pub fn split_frontmatter(text: &str) -> Option<Frontmatter<'_>> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if !is_delimiter(first) {
        return None;
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if is_delimiter(line) {
            return Some(Frontmatter {
                header: &text[header_start..offset],
                body: &text[offset + line.len()..],
            });
        }
        offset += line.len();
    }
    None
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']) == DELIMITER
}

/// Trim `content` and split it, or report why the shape is wrong.
/// A leading byte-order mark is dropped along with the whitespace.
pub(crate) fn extract(content: &str) -> Result<Frontmatter<'_>, ParseError> {
    let trimmed = content.trim_start_matches(BYTE_ORDER_MARK).trim();
    if trimmed.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::ContentEmpty,
            CONTENT_FIELD,
            "Content is empty",
        ));
    }
    split_frontmatter(trimmed).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::FrontmatterMissing,
            FRONTMATTER_FIELD,
            "Missing frontmatter: the document must start with a '---' line and close the header with another '---' line",
        )
    })
}

/// Decode the header and require a key/value mapping.
pub(crate) fn decode_header(header: &str) -> Result<Mapping, ParseError> {
    let value: Value = serde_yaml::from_str(header).map_err(|e| {
        ParseError::new(
            ParseErrorKind::FrontmatterInvalid,
            FRONTMATTER_FIELD,
            format!("Invalid YAML in frontmatter: {e}"),
        )
    })?;

    match value {
        Value::Mapping(map) => Ok(map),
        other => Err(ParseError::new(
            ParseErrorKind::FrontmatterNotObject,
            FRONTMATTER_FIELD,
            format!("Frontmatter must be a key/value mapping, found {}", describe(&other)),
        )),
    }
}

/// Short type name of a YAML value for messages.
pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
