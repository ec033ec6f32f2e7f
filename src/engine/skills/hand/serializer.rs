// Hand Export: TOML rendering
//
// Hand-rolled so section order, key order, and string layout are fixed.
// Output is always a valid TOML document with five tables and one
// trailing newline. No validation happens here.

use super::types::HandConfig;
use crate::atoms::constants::TOML_MULTILINE_THRESHOLD;

enum TomlValue<'a> {
    Str(&'a str),
    Int(u32),
    Float(f64),
    StrArray(&'a [String]),
}

/// Render `config` as TOML text.
pub fn render_hand_toml(config: &HandConfig) -> String {
    let sections: [(&str, Vec<(&str, TomlValue<'_>)>); 5] = [
        (
            "hand",
            vec![
                ("name", TomlValue::Str(&config.hand.name)),
                ("description", TomlValue::Str(&config.hand.description)),
                ("version", TomlValue::Str(&config.hand.version)),
            ],
        ),
        (
            "instructions",
            vec![
                ("system_prompt", TomlValue::Str(&config.instructions.system_prompt)),
                ("user_template", TomlValue::Str(&config.instructions.user_template)),
            ],
        ),
        (
            "model",
            vec![
                ("provider", TomlValue::Str(&config.model.provider)),
                ("model_id", TomlValue::Str(&config.model.model_id)),
                ("max_tokens", TomlValue::Int(config.model.max_tokens)),
                ("temperature", TomlValue::Float(config.model.temperature)),
            ],
        ),
        (
            "limits",
            vec![
                ("timeout_seconds", TomlValue::Int(config.limits.timeout_seconds)),
                ("max_retries", TomlValue::Int(config.limits.max_retries)),
            ],
        ),
        (
            "metadata",
            vec![
                ("source", TomlValue::Str(&config.metadata.source)),
                ("source_url", TomlValue::Str(&config.metadata.source_url)),
                ("platforms", TomlValue::StrArray(&config.metadata.platforms)),
                ("category", TomlValue::Str(&config.metadata.category)),
            ],
        ),
    ];

    sections
        .iter()
        .map(|(name, entries)| {
            let mut table = format!("[{name}]\n");
            for (key, value) in entries {
                table.push_str(key);
                table.push_str(" = ");
                table.push_str(&render_value(value));
                table.push('\n');
            }
            table
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_value(value: &TomlValue<'_>) -> String {
    match value {
        TomlValue::Str(s) => render_string(s),
        TomlValue::Int(n) => n.to_string(),
        TomlValue::Float(f) => render_float(*f),
        TomlValue::StrArray(items) => {
            let quoted: Vec<String> = items.iter().map(|s| quote(s)).collect();
            format!("[{}]", quoted.join(", "))
        }
    }
}

// ── Strings ────────────────────────────────────────────────────────────────

/// Quoted form for short single-line strings, a multi-line block otherwise.
pub(crate) fn render_string(s: &str) -> String {
    if s.contains('\n') || s.chars().count() > TOML_MULTILINE_THRESHOLD {
        if fits_literal_block(s) {
            format!("'''\n{s}'''")
        } else {
            format!("\"\"\"\n{}\"\"\"", escape_multiline(s))
        }
    } else {
        quote(s)
    }
}

/// A `'''` block cannot escape anything, so it can only hold text without
/// `'''` and without control characters other than tab and newline.
/// Anything else goes to a `"""` block: a backslash before `'''` inside a
/// literal block would not be valid TOML.
fn fits_literal_block(s: &str) -> bool {
    !s.contains("'''") && s.chars().all(|c| c == '\t' || c == '\n' || !c.is_control())
}

/// `"..."` with backslashes escaped first, then quotes, then newlines.
fn quote(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n");
    format!("\"{}\"", escape_controls(&escaped, false))
}

/// Body of a `"""` block. Newlines stay literal.
fn escape_multiline(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    escape_controls(&escaped, true)
}

/// Escape the control characters TOML basic strings may not contain raw.
fn escape_controls(s: &str, keep_newlines: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' if keep_newlines => out.push('\n'),
            '\t' => out.push('\t'),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

// ── Numbers ────────────────────────────────────────────────────────────────

/// TOML float: always has a fraction or exponent so it reads back as float.
fn render_float(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f == f64::INFINITY {
        "inf".to_string()
    } else if f == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{f:?}")
    }
}
