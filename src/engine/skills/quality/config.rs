// Skill Quality: Scoring Configuration
//
// Point values, thresholds, and caps. Defaults come from atoms/constants.rs.
// A TOML file may override any subset:
//
//   [schema]
//   description_min_chars = 40
//
//   [instructions]
//   structure = 20

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::atoms::constants::*;
use crate::atoms::error::SkillResult;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub schema: SchemaWeights,
    pub instructions: InstructionWeights,
}

/// Metadata completeness checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaWeights {
    pub cap: u32,
    pub required_fields: u32,
    pub description: u32,
    pub description_min_chars: usize,
    pub semver: u32,
    pub category: u32,
}

impl Default for SchemaWeights {
    fn default() -> Self {
        Self {
            cap: SCHEMA_CAP,
            required_fields: SCHEMA_REQUIRED_FIELDS_POINTS,
            description: SCHEMA_DESCRIPTION_POINTS,
            description_min_chars: SCHEMA_DESCRIPTION_MIN_CHARS,
            semver: SCHEMA_SEMVER_POINTS,
            category: SCHEMA_CATEGORY_POINTS,
        }
    }
}

/// Instruction structure checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstructionWeights {
    pub cap: u32,
    pub min_chars: usize,
    pub min_length: u32,
    /// Second, higher length threshold. Its points stack on `min_length`.
    pub long_chars: usize,
    pub long_form: u32,
    pub structure: u32,
    pub io: u32,
    pub error_handling: u32,
    pub guardrails: u32,
    pub examples: u32,
    pub output_format: u32,
}

impl Default for InstructionWeights {
    fn default() -> Self {
        Self {
            cap: INSTRUCTIONS_CAP,
            min_chars: INSTRUCTIONS_MIN_CHARS,
            min_length: INSTRUCTIONS_MIN_LENGTH_POINTS,
            long_chars: INSTRUCTIONS_LONG_CHARS,
            long_form: INSTRUCTIONS_LONG_FORM_POINTS,
            structure: INSTRUCTIONS_STRUCTURE_POINTS,
            io: INSTRUCTIONS_IO_POINTS,
            error_handling: INSTRUCTIONS_ERROR_HANDLING_POINTS,
            guardrails: INSTRUCTIONS_GUARDRAILS_POINTS,
            examples: INSTRUCTIONS_EXAMPLES_POINTS,
            output_format: INSTRUCTIONS_OUTPUT_FORMAT_POINTS,
        }
    }
}

impl ScoringConfig {
    pub fn from_toml_str(content: &str) -> SkillResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> SkillResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("[skill-quality] Loaded scoring config from {}", path.display());
        Ok(config)
    }
}
