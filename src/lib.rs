//! Skill document processing for SkillForge.
//!
//! A skill is a markdown document with a YAML frontmatter header:
//!
//! ```text
//! ---
//! name: Test Skill
//! description: A test skill
//! version: 1.0.0
//! category: build
//! platforms:
//!   - CLAUDE_CODE
//! ---
//! These are the instructions.
//! ```
//!
//! The crate parses and validates such documents ([`parse_skill`]), scores
//! them with a structural heuristic ([`score_quality`]), and exports them as
//! a hand configuration for an execution runtime ([`translate_to_hand`],
//! [`render_hand_toml`]). [`compile_skill`] runs all of it in one call.
//!
//! ```
//! use skillforge_core::{compile_skill, HandOptions, Registry, ScoringConfig};
//!
//! let doc = "---\nname: Test Skill\ndescription: A test skill\nversion: 1.0.0\n---\nDo it.";
//! let compiled = compile_skill(doc, &Registry::default(), &ScoringConfig::default(), &HandOptions::default())
//!     .expect("valid skill");
//! assert_eq!(compiled.hand.hand.name, "test-skill");
//! assert!(compiled.hand_toml.starts_with("[hand]\n"));
//! ```

pub mod atoms;
pub mod engine;

pub use atoms::error::{ParseError, ParseErrorKind, SemverError, SkillError, SkillResult};
pub use atoms::types::{ParseResult, ParsedSkill, ScoreBreakdown};
pub use engine::registry::Registry;
pub use engine::skills::{
    bump_semver, compare_semver, compile_skill, extract_user_template, normalize_platform,
    parse_skill, parse_skill_md, render_hand_toml, sanitize_hand_name, score_quality, score_skill,
    translate_to_hand, validate_semver, CompiledSkill, HandConfig, HandOptions, QualityInput,
    ScoringConfig, Semver, SemverBump,
};
