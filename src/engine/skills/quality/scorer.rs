// Skill Quality: Scorer
//
// Two additive dimensions, each clamped to its cap, total clamped to 100.
// No penalties: a missing signal just means fewer points. Runs inline on
// every publish, so it must stay synchronous and cheap.

use log::debug;

use super::config::ScoringConfig;
use super::signals;
use crate::atoms::constants::QUALITY_TOTAL_CAP;
use crate::atoms::types::{ParsedSkill, ScoreBreakdown};
use crate::engine::registry::Registry;
use crate::engine::skills::semver::validate_semver;

/// Fields the scorer looks at. Values are taken as-is, without validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QualityInput<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub version: &'a str,
    pub category: Option<&'a str>,
    pub instructions: &'a str,
}

impl<'a> From<&'a ParsedSkill> for QualityInput<'a> {
    fn from(skill: &'a ParsedSkill) -> Self {
        Self {
            name: &skill.name,
            description: &skill.description,
            version: &skill.version,
            category: skill.category.as_deref(),
            instructions: &skill.instructions,
        }
    }
}

/// Running tally for one dimension.
struct Tally<'d> {
    points: u32,
    details: &'d mut Vec<String>,
}

impl Tally<'_> {
    fn award(&mut self, condition: bool, points: u32, label: &str) {
        if condition && points > 0 {
            self.points = self.points.saturating_add(points);
            self.details.push(format!("+{points} {label}"));
        }
    }
}

/// Score `input` with explicit registry and weights.
pub fn score_quality(input: &QualityInput<'_>, registry: &Registry, config: &ScoringConfig) -> ScoreBreakdown {
    let mut details = Vec::new();

    let schema = {
        let w = &config.schema;
        let mut tally = Tally { points: 0, details: &mut details };
        let complete = [input.name, input.description, input.instructions, input.version]
            .iter()
            .all(|s| !s.trim().is_empty());
        tally.award(complete, w.required_fields, "required fields present");
        tally.award(
            input.description.chars().count() >= w.description_min_chars,
            w.description,
            "descriptive summary",
        );
        tally.award(validate_semver(input.version), w.semver, "semantic version");
        tally.award(
            input.category.is_some_and(|c| registry.is_category(c)),
            w.category,
            "canonical category",
        );
        tally.points.min(w.cap)
    };

    let instructions = {
        let w = &config.instructions;
        let text = input.instructions;
        let length = text.chars().count();
        let mut tally = Tally { points: 0, details: &mut details };
        tally.award(length >= w.min_chars, w.min_length, "substantial instructions");
        tally.award(length >= w.long_chars, w.long_form, "long-form instructions");
        tally.award(signals::has_structured_phases(text), w.structure, "structured phases or steps");
        tally.award(signals::mentions_io(text), w.io, "input/output described");
        tally.award(signals::mentions_error_handling(text), w.error_handling, "error handling");
        tally.award(signals::has_guardrails(text), w.guardrails, "guardrails");
        tally.award(signals::has_examples(text), w.examples, "examples");
        tally.award(signals::specifies_output_format(text), w.output_format, "output format");
        tally.points.min(w.cap)
    };

    let total = schema.saturating_add(instructions).min(QUALITY_TOTAL_CAP);
    debug!(
        "[skill-quality] '{}' scored {} (schema {}, instructions {}, signals {:?})",
        input.name,
        total,
        schema,
        instructions,
        signals::triggered(input.instructions)
    );

    ScoreBreakdown { schema, instructions, total, details }
}

/// Score a parsed skill with the built-in registry and weights.
pub fn score_skill(skill: &ParsedSkill) -> ScoreBreakdown {
    score_quality(&QualityInput::from(skill), &Registry::default(), &ScoringConfig::default())
}
