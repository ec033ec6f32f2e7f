// SkillForge Engine: Skill Quality Score
//
// Module layout:
//   signals: named regex predicates over instruction text
//   config : ScoringConfig (weights, thresholds, caps) + TOML loader
//   scorer : score_quality / score_skill

mod config;
mod scorer;
pub mod signals;

pub use config::{InstructionWeights, SchemaWeights, ScoringConfig};
pub use scorer::{score_quality, score_skill, QualityInput};
