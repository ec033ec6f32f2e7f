// ── SkillForge Atoms: Pure Data Types ─────────────────────────────────────
// Plain struct definitions shared by the parser, scorer, and translator.
// Atoms layer rule: no I/O, no side effects, no imports from engine/.

use serde::{Deserialize, Serialize};

use super::error::ParseError;

/// A skill document that passed validation.
///
/// `category` is a lowercase canonical slug and every entry of `platforms`
/// is a canonical token. `raw` is the input exactly as it was received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSkill {
    pub name: String,
    pub description: String,
    /// Coerced from a YAML string or number.
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub platforms: Vec<String>,
    pub instructions: String,
    pub raw: String,
}

/// Outcome of parsing one skill document.
///
/// `success` is true exactly when `errors` is empty and `skill` is set.
/// Build it with [`ParseResult::ok`] or [`ParseResult::failed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<ParsedSkill>,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    pub fn ok(skill: ParsedSkill) -> Self {
        Self { success: true, skill: Some(skill), errors: Vec::new() }
    }

    /// A failed result. An empty list is a caller bug and is never produced
    /// by the parser.
    pub fn failed(errors: Vec<ParseError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { success: false, skill: None, errors }
    }

    pub fn into_result(self) -> Result<ParsedSkill, Vec<ParseError>> {
        match self.skill {
            Some(skill) if self.errors.is_empty() => Ok(skill),
            _ => Err(self.errors),
        }
    }

    /// Errors attributed to one field, in report order.
    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ParseError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }
}

/// Heuristic quality score of a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Metadata completeness, 0 to the schema cap.
    pub schema: u32,
    /// Instruction structure signals, 0 to the instructions cap.
    pub instructions: u32,
    /// `min(schema + instructions, 100)`.
    pub total: u32,
    /// One entry per awarded check, e.g. `"+15 structured phases or steps"`.
    pub details: Vec<String>,
}
