// SkillForge Engine: Skills Module
//
// Module layout:
//   semver     : strict MAJOR.MINOR.PATCH validation, comparison, bumps
//   frontmatter: skill document parser (YAML header + markdown body)
//   quality    : heuristic 0-100 quality score
//   hand       : HandConfig translation and TOML rendering
//   pipeline   : compile_skill: parse → score → translate → render

pub mod frontmatter;
pub mod hand;
pub mod pipeline;
pub mod quality;
pub mod semver;

// ── Re-exports (keep crate::engine::skills::* API flat) ────────────────────

pub use frontmatter::{normalize_platform, parse_skill, parse_skill_md};
pub use hand::{
    extract_user_template, render_hand_toml, sanitize_hand_name, translate_to_hand, HandConfig,
    HandOptions,
};
pub use pipeline::{compile_skill, CompiledSkill};
pub use quality::{score_quality, score_skill, QualityInput, ScoringConfig};
pub use semver::{bump_semver, compare_semver, validate_semver, Semver, SemverBump};
