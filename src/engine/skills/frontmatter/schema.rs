// Skill Frontmatter: Schema
//
// Typed validation over the untyped YAML header. Each recognized key has
// its own validator returning a `Result`, so the parser can run all of them
// and collect every failure. Unrecognized keys are ignored.

use serde_yaml::{Mapping, Value};

use super::extract::describe;
use crate::atoms::error::{ParseError, ParseErrorKind};
use crate::engine::registry::Registry;

pub(crate) const NAME: &str = "name";
pub(crate) const DESCRIPTION: &str = "description";
pub(crate) const VERSION: &str = "version";
pub(crate) const CATEGORY: &str = "category";
pub(crate) const PLATFORMS: &str = "platforms";
pub(crate) const INSTRUCTIONS: &str = "instructions";

/// A present key whose value is YAML null counts as absent.
fn field<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

// ── Required fields ────────────────────────────────────────────────────────

/// `name` / `description`: a non-empty string, returned trimmed.
pub(crate) fn required_string(map: &Mapping, key: &str) -> Result<String, ParseError> {
    match field(map, key) {
        None => Err(ParseError::schema(key, format!("{key} is required"))),
        Some(Value::String(s)) => non_empty(key, s),
        Some(other) => Err(ParseError::schema(
            key,
            format!("{key} must be a string, found {}", describe(other)),
        )),
    }
}

/// `version`: a string or a number, coerced to a non-empty string.
pub(crate) fn version(map: &Mapping) -> Result<String, ParseError> {
    match field(map, VERSION) {
        None => Err(ParseError::schema(VERSION, "version is required")),
        Some(Value::String(s)) => non_empty(VERSION, s),
        Some(Value::Number(n)) => non_empty(VERSION, &n.to_string()),
        Some(other) => Err(ParseError::schema(
            VERSION,
            format!("version must be a string or number, found {}", describe(other)),
        )),
    }
}

fn non_empty(key: &str, s: &str) -> Result<String, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Err(ParseError::schema(key, format!("{key} must not be empty")))
    } else {
        Ok(trimmed.to_string())
    }
}

// ── Optional fields ────────────────────────────────────────────────────────

/// `category`: optional slug, lowercased before the registry check.
pub(crate) fn category(map: &Mapping, registry: &Registry) -> Result<Option<String>, ParseError> {
    let raw = match field(map, CATEGORY) {
        None => return Ok(None),
        Some(Value::String(s)) => s,
        Some(other) => {
            return Err(ParseError::schema(
                CATEGORY,
                format!("category must be a string, found {}", describe(other)),
            ))
        }
    };

    let slug = raw.trim().to_lowercase();
    if registry.is_category(&slug) {
        Ok(Some(slug))
    } else {
        Err(ParseError::new(
            ParseErrorKind::CategoryUnknown,
            CATEGORY,
            format!("Unknown category '{slug}'. Valid categories: {}", registry.category_list()),
        ))
    }
}

/// Canonical form of a platform token: trimmed, uppercased, with every
/// space or hyphen replaced by `_`.
pub fn normalize_platform(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| if c == '-' || c.is_whitespace() { '_' } else { c })
        .collect::<String>()
        .to_uppercase()
}

/// `platforms`: optional list, normalized token by token. Every invalid
/// token gets its own error.
pub(crate) fn platforms(map: &Mapping, registry: &Registry) -> Result<Vec<String>, Vec<ParseError>> {
    let items: Vec<&Value> = match field(map, PLATFORMS) {
        None => return Ok(Vec::new()),
        Some(Value::Sequence(seq)) => seq.iter().collect(),
        Some(single @ Value::String(_)) => vec![single],
        Some(other) => {
            return Err(vec![ParseError::schema(
                PLATFORMS,
                format!("platforms must be a list of strings, found {}", describe(other)),
            )])
        }
    };

    let mut normalized = Vec::with_capacity(items.len());
    let mut errors = Vec::new();
    for (i, item) in items.into_iter().enumerate() {
        let Value::String(raw) = item else {
            errors.push(ParseError::schema(
                PLATFORMS,
                format!("platforms[{i}] must be a string, found {}", describe(item)),
            ));
            continue;
        };
        let token = normalize_platform(raw);
        if registry.is_platform(&token) {
            normalized.push(token);
        } else {
            errors.push(ParseError::new(
                ParseErrorKind::PlatformUnknown,
                PLATFORMS,
                format!("Unknown platform '{token}'. Valid platforms: {}", registry.platform_list()),
            ));
        }
    }

    if errors.is_empty() {
        Ok(normalized)
    } else {
        Err(errors)
    }
}

/// Instructions come from the header `instructions` key when it is a
/// non-empty string, otherwise from the document body.
pub(crate) fn instructions(map: &Mapping, body: &str) -> Result<String, ParseError> {
    let from_header = match field(map, INSTRUCTIONS) {
        Some(Value::String(s)) => s.trim(),
        _ => "",
    };
    let resolved = if from_header.is_empty() { body.trim() } else { from_header };

    if resolved.is_empty() {
        Err(ParseError::new(
            ParseErrorKind::InstructionsEmpty,
            INSTRUCTIONS,
            "Instructions are required: add an 'instructions' field or write them below the frontmatter",
        ))
    } else {
        Ok(resolved.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn required_string_variants() {
        let m = map("name: '  Tidy  '\ndescription: ''\nother: 3\n");
        assert_eq!(required_string(&m, NAME).unwrap(), "Tidy");
        assert!(required_string(&m, DESCRIPTION).unwrap_err().message.contains("must not be empty"));
        assert!(required_string(&m, "missing").unwrap_err().message.contains("is required"));
        assert!(required_string(&m, "other").unwrap_err().message.contains("must be a string"));
    }

    #[test]
    fn null_counts_as_missing() {
        let m = map("name:\n");
        assert!(required_string(&m, NAME).unwrap_err().message.contains("is required"));
    }

    #[test]
    fn version_coerces_numbers() {
        assert_eq!(version(&map("version: 2\n")).unwrap(), "2");
        assert_eq!(version(&map("version: 1.5\n")).unwrap(), "1.5");
        assert_eq!(version(&map("version: 1.0.0\n")).unwrap(), "1.0.0");
        assert!(version(&map("version: true\n")).is_err());
        assert!(version(&map("version: '  '\n")).is_err());
    }

    #[test]
    fn category_is_lowercased() {
        let r = Registry::default();
        assert_eq!(category(&map("category: Build\n"), &r).unwrap(), Some("build".into()));
        assert_eq!(category(&map("other: 1\n"), &r).unwrap(), None);
        let err = category(&map("category: cooking\n"), &r).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::CategoryUnknown);
        assert!(err.message.contains("Valid categories:"));
        assert!(err.message.contains("build"));
    }

    #[test]
    fn normalizes_platform_tokens() {
        assert_eq!(normalize_platform("claude code"), "CLAUDE_CODE");
        assert_eq!(normalize_platform("gemini-cli"), "GEMINI_CLI");
        assert_eq!(normalize_platform("  Cursor "), "CURSOR");
        assert_eq!(normalize_platform("made up"), "MADE_UP");
    }

    #[test]
    fn platforms_reports_each_unknown_token() {
        let r = Registry::default();
        let m = map("platforms: [claude code, foo, bar-baz]\n");
        let errors = platforms(&m, &r).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.kind == ParseErrorKind::PlatformUnknown));
        assert!(errors[0].message.contains("'FOO'"));
        assert!(errors[1].message.contains("'BAR_BAZ'"));
    }

    #[test]
    fn platforms_accepts_single_string_and_absence() {
        let r = Registry::default();
        assert_eq!(platforms(&map("platforms: cursor\n"), &r).unwrap(), vec!["CURSOR"]);
        assert!(platforms(&map("name: x\n"), &r).unwrap().is_empty());
        assert!(platforms(&map("platforms:\n"), &r).unwrap().is_empty());
    }

    #[test]
    fn platforms_rejects_non_strings() {
        let r = Registry::default();
        let errors = platforms(&map("platforms: [cursor, 3]\n"), &r).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ParseErrorKind::SchemaFieldError);
        assert!(errors[0].message.contains("platforms[1]"));
        let errors = platforms(&map("platforms: {a: 1}\n"), &r).unwrap_err();
        assert_eq!(errors[0].kind, ParseErrorKind::SchemaFieldError);
    }

    #[test]
    fn header_instructions_win_over_body() {
        let m = map("instructions: From header\n");
        assert_eq!(instructions(&m, "From body").unwrap(), "From header");
        let m = map("instructions: '   '\n");
        assert_eq!(instructions(&m, "\n From body \n").unwrap(), "From body");
        let m = map("instructions: [not, text]\n");
        assert_eq!(instructions(&m, "From body").unwrap(), "From body");
        assert_eq!(
            instructions(&map("name: x\n"), "  \n").unwrap_err().kind,
            ParseErrorKind::InstructionsEmpty
        );
    }
}
