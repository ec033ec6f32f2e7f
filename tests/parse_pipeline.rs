// Integration test: skill document parsing
//
// Structural failures report exactly one error. Content failures are all
// reported together.

use skillforge_core::{parse_skill_md, ParseErrorKind};

use crate::{parsed, TEST_SKILL};

// ── Structural errors ──

#[test]
fn reference_document_parses() {
    let skill = parsed(TEST_SKILL);
    assert_eq!(skill.name, "Test Skill");
    assert_eq!(skill.category.as_deref(), Some("build"));
    assert_eq!(skill.platforms, vec!["CLAUDE_CODE"]);
    assert_eq!(skill.instructions, "These are the instructions.");
    assert_eq!(skill.raw, TEST_SKILL);
}

#[test]
fn missing_opening_delimiter_is_one_frontmatter_error() {
    let inputs = [
        "name: x\n---\nbody",
        "# Title\n---\nname: x\n---\n",
        "Plain prose with no header at all.",
        "-- \nname: x\n---\n",
        "--- name: x\n---\nbody",
    ];
    for input in inputs {
        let result = parse_skill_md(input);
        assert!(!result.success, "{input:?}");
        assert_eq!(result.errors.len(), 1, "{input:?}");
        assert_eq!(result.errors[0].field, "frontmatter", "{input:?}");
        assert_eq!(result.errors[0].kind, ParseErrorKind::FrontmatterMissing);
    }
}

#[test]
fn byte_order_mark_prefixed_document_parses() {
    let doc = "\u{FEFF}---\nname: A\ndescription: B\nversion: 1.0.0\n---\nGo.";
    let skill = parsed(doc);
    assert_eq!(skill.name, "A");
    assert_eq!(skill.instructions, "Go.");
    assert!(skill.raw.starts_with('\u{FEFF}'));

    let result = parse_skill_md("\u{FEFF}");
    assert_eq!(result.errors[0].kind, ParseErrorKind::ContentEmpty);
}

#[test]
fn unclosed_header_is_missing_frontmatter() {
    let result = parse_skill_md("---\nname: x\ndescription: y\n");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ParseErrorKind::FrontmatterMissing);
}

#[test]
fn whitespace_only_is_content_empty() {
    let result = parse_skill_md(" \n\t\n ");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ParseErrorKind::ContentEmpty);
    assert!(result.skill.is_none());
}

#[test]
fn yaml_error_message_is_embedded() {
    let result = parse_skill_md("---\nname: \"unterminated\n---\nbody");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ParseErrorKind::FrontmatterInvalid);
    assert!(result.errors[0].message.len() > "Invalid YAML in frontmatter: ".len());
}

#[test]
fn empty_header_is_not_an_object() {
    let result = parse_skill_md("---\n---\nBody only.");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ParseErrorKind::FrontmatterNotObject);
}

// ── Accumulated content errors ──

#[test]
fn missing_required_fields_reported_together() {
    let result = parse_skill_md("---\ncategory: build\n---\nSome instructions.");
    assert!(!result.success);
    let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
    assert!(fields.len() >= 3);
    for field in ["name", "description", "version"] {
        assert!(fields.contains(&field), "missing error for {field}");
    }
    assert!(result
        .errors
        .iter()
        .all(|e| e.kind == ParseErrorKind::SchemaFieldError));
}

#[test]
fn every_content_error_kind_in_one_pass() {
    let doc = "---\nname: 42\ndescription: ok\nversion: [1]\ncategory: baking\nplatforms:\n  - claude code\n  - fax machine\n  - pager\n---\n   ";
    let result = parse_skill_md(doc);
    let kinds: Vec<ParseErrorKind> = result.errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ParseErrorKind::SchemaFieldError,
            ParseErrorKind::SchemaFieldError,
            ParseErrorKind::CategoryUnknown,
            ParseErrorKind::PlatformUnknown,
            ParseErrorKind::PlatformUnknown,
            ParseErrorKind::InstructionsEmpty,
        ]
    );
    assert!(result.errors.iter().all(|e| !e.kind.is_structural()));
    assert!(result.errors[3].message.contains("FAX_MACHINE"));
    assert!(result.errors[4].message.contains("PAGER"));
}

// ── Normalization ──

#[test]
fn category_and_platforms_are_normalized() {
    let doc = "---\nname: N\ndescription: D\nversion: 1.0.0\ncategory: Build\nplatforms: [\"claude code\", gemini-cli, Cursor]\n---\nGo.";
    let skill = parsed(doc);
    assert_eq!(skill.category.as_deref(), Some("build"));
    assert_eq!(skill.platforms, vec!["CLAUDE_CODE", "GEMINI_CLI", "CURSOR"]);
}

#[test]
fn numeric_version_is_coerced() {
    let skill = parsed("---\nname: N\ndescription: D\nversion: 2.5\n---\nGo.");
    assert_eq!(skill.version, "2.5");
}

#[test]
fn header_instructions_take_precedence() {
    let doc = "---\nname: N\ndescription: D\nversion: 1.0.0\ninstructions: Use the header.\n---\nIgnored body.";
    assert_eq!(parsed(doc).instructions, "Use the header.");
}

#[test]
fn unknown_header_keys_are_ignored() {
    let doc = "---\nname: N\ndescription: D\nversion: 1.0.0\nauthor: someone\ntags: [a, b]\n---\nGo.";
    assert_eq!(parsed(doc).name, "N");
}

#[test]
fn body_may_contain_more_delimiters() {
    let doc = "---\nname: N\ndescription: D\nversion: 1.0.0\n---\nPart one\n---\nPart two";
    assert_eq!(parsed(doc).instructions, "Part one\n---\nPart two");
}

#[test]
fn result_serializes_for_api_responses() {
    let result = parse_skill_md("---\nname: N\n---\nbody");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], false);
    assert!(json.get("skill").is_none());
    assert_eq!(json["errors"][0]["kind"], "schema_field_error");
    assert_eq!(json["errors"][0]["field"], "description");
}
