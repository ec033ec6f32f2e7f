// SkillForge Engine: Hand Export
//
// Translates a parsed skill into the configuration an execution runtime
// loads for a "hand", and renders it as TOML.
//
// Module layout:
//   types     : HandConfig and its five tables
//   options   : HandOptions (model, limits, source URL) with defaults
//   translator: translate_to_hand, sanitize_hand_name, extract_user_template
//   serializer: render_hand_toml

mod options;
mod serializer;
mod translator;
mod types;

pub use options::HandOptions;
pub use serializer::render_hand_toml;
pub use translator::{extract_user_template, sanitize_hand_name, translate_to_hand};
pub use types::{HandConfig, HandInstructions, HandLimits, HandMeta, HandMetadata, HandModel};
