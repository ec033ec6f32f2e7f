// Hand Export: Translation
//
// Pure, total mapping from a validated skill to a HandConfig.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use super::options::HandOptions;
use super::types::*;
use crate::atoms::constants::{
    DEFAULT_MAX_RETRIES, HAND_DEFAULT_CATEGORY, HAND_DEFAULT_USER_TEMPLATE, HAND_FALLBACK_NAME,
    HAND_NAME_MAX_CHARS, HAND_SOURCE,
};
use crate::atoms::types::ParsedSkill;

/// Build the hand configuration for `skill`.
pub fn translate_to_hand(skill: &ParsedSkill, options: &HandOptions) -> HandConfig {
    let mut name = sanitize_hand_name(&skill.name);
    if name.is_empty() {
        debug!("[hand-export] Name '{}' sanitized to nothing, using fallback", skill.name);
        name = HAND_FALLBACK_NAME.to_string();
    }

    let user_template = extract_user_template(&skill.instructions)
        .unwrap_or_else(|| HAND_DEFAULT_USER_TEMPLATE.to_string());

    HandConfig {
        hand: HandMeta {
            name,
            description: skill.description.clone(),
            version: skill.version.clone(),
        },
        instructions: HandInstructions {
            system_prompt: skill.instructions.clone(),
            user_template,
        },
        model: HandModel {
            provider: options.model_provider.clone(),
            model_id: options.model_id.clone(),
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        },
        limits: HandLimits {
            timeout_seconds: options.timeout_seconds,
            max_retries: DEFAULT_MAX_RETRIES,
        },
        metadata: HandMetadata {
            source: HAND_SOURCE.to_string(),
            source_url: options.source_url.clone(),
            platforms: skill.platforms.clone(),
            category: skill
                .category
                .clone()
                .unwrap_or_else(|| HAND_DEFAULT_CATEGORY.to_string()),
        },
    }
}

// ── Name sanitization ──────────────────────────────────────────────────────

/// Turn a display name into a hand slug.
///
/// Lowercase, keep only `[a-z0-9]`, whitespace and `-`, turn whitespace
/// runs into `-`, collapse `-` runs, trim `-` from both ends, cut to 64
/// chars. Idempotent: a sanitized name sanitizes to itself.
pub fn sanitize_hand_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else if c == '-' || c.is_whitespace() {
            pending_hyphen = true;
        }
    }

    // Leading separators were never emitted and trailing ones are still
    // pending, so only truncation can leave a hyphen at the end.
    let truncated: String = slug.chars().take(HAND_NAME_MAX_CHARS).collect();
    truncated.trim_end_matches('-').to_string()
}

// ── User template extraction ───────────────────────────────────────────────
// Best-effort heuristic. The first pattern with a non-empty capture wins:
//   1. a line "Input: ...", "User provides: ...", "Expects: ...", "Takes: ..."
//   2. a blockquote line "> Input: ..." or "> User: ..."
// The capture continues on following lines until a blank line, a heading,
// or a line starting with an uppercase letter.

static DECLARATION_PATTERNS: LazyLock<Vec<(Regex, bool)>> = LazyLock::new(|| {
    [
        (r"(?im)^[ \t]*(?:input|user provides|expects|takes)[ \t]*:[ \t]*(.*)$", false),
        (r"(?im)^[ \t]*>[ \t]*(?:input|user)[ \t]*:[ \t]*(.*)$", true),
    ]
    .into_iter()
    .filter_map(|(pattern, quoted)| match Regex::new(pattern) {
        Ok(re) => Some((re, quoted)),
        Err(e) => {
            warn!("[hand-export] Failed to compile template pattern '{}': {}", pattern, e);
            None
        }
    })
    .collect()
});

/// Find the user input description in `instructions`, if any.
pub fn extract_user_template(instructions: &str) -> Option<String> {
    for (re, quoted) in DECLARATION_PATTERNS.iter() {
        for caps in re.captures_iter(instructions) {
            let (Some(whole), Some(first)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let rest = &instructions[whole.end()..];
            let captured = capture_block(first.as_str(), rest, *quoted);
            if !captured.is_empty() {
                return Some(captured);
            }
        }
    }
    None
}

/// Join the first captured line with its continuation lines.
fn capture_block(first: &str, rest: &str, quoted: bool) -> String {
    let mut lines = vec![first.trim()];

    let rest = rest.strip_prefix('\n').unwrap_or(rest);
    for line in rest.lines() {
        let line = if quoted {
            match line.trim_start().strip_prefix('>') {
                Some(inner) => inner,
                None => break,
            }
        } else {
            line
        };
        if ends_capture(line) {
            break;
        }
        lines.push(line.trim());
    }

    lines.join("\n").trim().to_string()
}

fn ends_capture(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.chars().next().is_some_and(char::is_uppercase)
}
