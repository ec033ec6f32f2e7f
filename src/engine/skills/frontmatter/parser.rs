// Skill Frontmatter: Parser
//
// Pure function: document text + registry in, ParseResult out.
// Shape errors stop at the first problem. Field errors are all collected
// so the caller can show a full checklist in one pass.

use log::debug;

use super::extract::{decode_header, extract};
use super::schema;
use crate::atoms::error::ParseError;
use crate::atoms::types::{ParseResult, ParsedSkill};
use crate::engine::registry::Registry;

/// Parse a skill document against `registry`.
pub fn parse_skill(content: &str, registry: &Registry) -> ParseResult {
    let frontmatter = match extract(content) {
        Ok(fm) => fm,
        Err(e) => return rejected(e),
    };
    let header = match decode_header(frontmatter.header) {
        Ok(map) => map,
        Err(e) => return rejected(e),
    };

    let mut errors: Vec<ParseError> = Vec::new();
    let name = collect(schema::required_string(&header, schema::NAME), &mut errors);
    let description = collect(schema::required_string(&header, schema::DESCRIPTION), &mut errors);
    let version = collect(schema::version(&header), &mut errors);
    let category = collect(schema::category(&header, registry), &mut errors);
    let platforms = match schema::platforms(&header, registry) {
        Ok(p) => Some(p),
        Err(mut errs) => {
            errors.append(&mut errs);
            None
        }
    };
    let instructions = collect(schema::instructions(&header, frontmatter.body), &mut errors);

    match (name, description, version, category, platforms, instructions) {
        (Some(name), Some(description), Some(version), Some(category), Some(platforms), Some(instructions))
            if errors.is_empty() =>
        {
            debug!(
                "[skill-parser] Parsed '{}' v{} ({} chars of instructions, {} platforms)",
                name,
                version,
                instructions.chars().count(),
                platforms.len()
            );
            ParseResult::ok(ParsedSkill {
                name,
                description,
                version,
                category,
                platforms,
                instructions,
                raw: content.to_string(),
            })
        }
        _ => {
            debug!("[skill-parser] Rejected document with {} field error(s)", errors.len());
            ParseResult::failed(errors)
        }
    }
}

/// Parse against the built-in registry.
pub fn parse_skill_md(content: &str) -> ParseResult {
    parse_skill(content, &Registry::default())
}

fn collect<T>(result: Result<T, ParseError>, errors: &mut Vec<ParseError>) -> Option<T> {
    result.map_err(|e| errors.push(e)).ok()
}

fn rejected(error: ParseError) -> ParseResult {
    debug!("[skill-parser] Rejected document: {}", error);
    ParseResult::failed(vec![error])
}
