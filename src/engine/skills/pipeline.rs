// SkillForge Engine: Publish Pipeline
//
// The single call a publish flow makes: parse, score, translate, render.
// Stateless. Anything that caches or persists the outputs lives outside.

use log::info;
use serde::Serialize;

use super::frontmatter::parse_skill;
use super::hand::{render_hand_toml, translate_to_hand, HandConfig, HandOptions};
use super::quality::{score_quality, QualityInput, ScoringConfig};
use crate::atoms::error::ParseError;
use crate::atoms::types::{ParsedSkill, ScoreBreakdown};
use crate::engine::registry::Registry;

/// Everything derived from one valid skill document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledSkill {
    pub skill: ParsedSkill,
    pub score: ScoreBreakdown,
    pub hand: HandConfig,
    pub hand_toml: String,
}

/// Run the full pipeline on `content`.
///
/// Returns every parse error when the document is rejected. Scoring and
/// export cannot fail once parsing succeeded.
pub fn compile_skill(
    content: &str,
    registry: &Registry,
    scoring: &ScoringConfig,
    options: &HandOptions,
) -> Result<CompiledSkill, Vec<ParseError>> {
    let skill = parse_skill(content, registry).into_result().inspect_err(|errors| {
        info!("[skill-pipeline] Document rejected with {} error(s)", errors.len());
    })?;

    let score = score_quality(&QualityInput::from(&skill), registry, scoring);
    let hand = translate_to_hand(&skill, options);
    let hand_toml = render_hand_toml(&hand);

    info!(
        "[skill-pipeline] Compiled '{}' v{} as hand '{}' (quality {}/100)",
        skill.name, skill.version, hand.hand.name, score.total
    );

    Ok(CompiledSkill { skill, score, hand, hand_toml })
}
