// Hand Export: Type definitions
//
// The configuration document an execution runtime loads for one hand.
// Field order here is the key order of the rendered TOML.

use serde::{Deserialize, Serialize};

/// Root of a hand configuration: five fixed tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandConfig {
    pub hand: HandMeta,
    pub instructions: HandInstructions,
    pub model: HandModel,
    pub limits: HandLimits,
    pub metadata: HandMetadata,
}

/// `[hand]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandMeta {
    /// Sanitized slug, at most 64 chars of `[a-z0-9-]`.
    pub name: String,
    pub description: String,
    pub version: String,
}

/// `[instructions]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandInstructions {
    pub system_prompt: String,
    pub user_template: String,
}

/// `[model]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandModel {
    pub provider: String,
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// `[limits]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandLimits {
    pub timeout_seconds: u32,
    pub max_retries: u32,
}

/// `[metadata]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandMetadata {
    pub source: String,
    pub source_url: String,
    pub platforms: Vec<String>,
    pub category: String,
}
