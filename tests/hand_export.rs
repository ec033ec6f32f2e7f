// Integration test: hand translation and TOML rendering
//
// Rendered documents are read back with the `toml` crate to prove they are
// well-formed and carry the same values.

use skillforge_core::{
    compile_skill, render_hand_toml, sanitize_hand_name, translate_to_hand, HandConfig,
    HandOptions, ParsedSkill, Registry, ScoringConfig,
};

use crate::{parsed, TEST_SKILL};

const SECTIONS: [&str; 5] = ["[hand]", "[instructions]", "[model]", "[limits]", "[metadata]"];

fn assert_section_layout(toml_text: &str) {
    let mut last = 0;
    for header in SECTIONS {
        let at = toml_text.find(&format!("\n{header}\n")).map(|i| i + 1).or_else(|| {
            toml_text.starts_with(&format!("{header}\n")).then_some(0)
        });
        let at = at.unwrap_or_else(|| panic!("{header} missing in:\n{toml_text}"));
        assert!(at >= last, "{header} out of order");
        last = at;
    }
    assert!(toml_text.ends_with('\n'));
    assert!(!toml_text.ends_with("\n\n"));
}

fn skill_with(name: &str, instructions: &str) -> ParsedSkill {
    let mut skill = parsed(TEST_SKILL);
    skill.name = name.to_string();
    skill.instructions = instructions.to_string();
    skill
}

#[test]
fn reference_skill_renders_expected_document() {
    let hand = translate_to_hand(&parsed(TEST_SKILL), &HandOptions::default());
    let text = render_hand_toml(&hand);
    let expected = "\
[hand]
name = \"test-skill\"
description = \"A test skill\"
version = \"1.0.0\"

[instructions]
system_prompt = \"These are the instructions.\"
user_template = \"{{input}}\"

[model]
provider = \"anthropic\"
model_id = \"claude-sonnet-4-20250514\"
max_tokens = 4096
temperature = 0.3

[limits]
timeout_seconds = 120
max_retries = 3

[metadata]
source = \"skillforge\"
source_url = \"\"
platforms = [\"CLAUDE_CODE\"]
category = \"build\"
";
    assert_eq!(text, expected);
}

#[test]
fn display_name_is_sanitized() {
    let hand = translate_to_hand(&skill_with("My Awesome Skill! (v2) @#$", "Go."), &HandOptions::default());
    assert_eq!(hand.hand.name, "my-awesome-skill-v2");
    assert_eq!(sanitize_hand_name(&hand.hand.name), hand.hand.name);
}

#[test]
fn sections_always_in_order_with_one_trailing_newline() {
    let long = "word ".repeat(100);
    for instructions in ["short", "multi\nline\n", long.as_str(), "ends with newline\n\n"] {
        let hand = translate_to_hand(&skill_with("X", instructions), &HandOptions::default());
        assert_section_layout(&render_hand_toml(&hand));
    }
}

#[test]
fn tricky_strings_read_back_unchanged() {
    let instructions = "Input: a path like C:\\temp\\\"quoted\"\n\n## Rules\nNever write '''triple''' quotes.\r\nTabs\tstay.\u{7}";
    let mut skill = skill_with("Tricky \"Name\"", instructions);
    skill.description = "Uses \\ backslashes and \"quotes\"".into();
    skill.platforms = vec!["CLAUDE_CODE".into(), "CURSOR".into()];
    let options = HandOptions {
        source_url: "https://skills.example/x?y=\"z\"".into(),
        temperature: 1.0,
        ..HandOptions::default()
    };
    let hand = translate_to_hand(&skill, &options);
    let text = render_hand_toml(&hand);

    let back: HandConfig = toml::from_str(&text).unwrap_or_else(|e| panic!("{e}\n{text}"));
    assert_eq!(back, hand);
    assert_section_layout(&text);
}

#[test]
fn long_single_line_reads_back_unchanged() {
    let instructions = "x".repeat(5000);
    let hand = translate_to_hand(&skill_with("Long", &instructions), &HandOptions::default());
    let text = render_hand_toml(&hand);
    assert!(text.contains("system_prompt = '''\n"));
    let back: HandConfig = toml::from_str(&text).unwrap();
    assert_eq!(back.instructions.system_prompt, instructions);
}

#[test]
fn numbers_are_unquoted() {
    let options = HandOptions { max_tokens: 1000, timeout_seconds: 30, ..HandOptions::default() };
    let hand = translate_to_hand(&parsed(TEST_SKILL), &options);
    let text = render_hand_toml(&hand);
    assert!(text.contains("\nmax_tokens = 1000\n"));
    assert!(text.contains("\ntimeout_seconds = 30\n"));
    let value: toml::Value = toml::from_str(&text).unwrap();
    assert!(value["model"]["temperature"].is_float());
    assert!(value["limits"]["max_retries"].is_integer());
}

#[test]
fn compile_skill_produces_matching_toml() {
    let doc = "---\nname: Release Notes\ndescription: Drafts release notes from merged PRs\nversion: 1.4.0\ncategory: documentation\nplatforms: [claude code, codex]\n---\n> Input: a list of merged pull requests\n\n## Steps\n1. Group by label.\n2. Generate the notes.";
    let options: HandOptions = serde_json::from_str(r#"{"modelId": "claude-opus-4", "sourceUrl": "https://skills.example/release-notes"}"#).unwrap();
    let compiled = compile_skill(doc, &Registry::default(), &ScoringConfig::default(), &options).unwrap();

    assert_eq!(compiled.hand.instructions.user_template, "a list of merged pull requests");
    assert_eq!(compiled.hand.model.model_id, "claude-opus-4");
    assert_eq!(compiled.hand.metadata.platforms, vec!["CLAUDE_CODE", "CODEX"]);
    let back: HandConfig = toml::from_str(&compiled.hand_toml).unwrap();
    assert_eq!(back, compiled.hand);
}
