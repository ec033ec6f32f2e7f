// ── SkillForge Atoms: Error Types ─────────────────────────────────────────
// Built with `thiserror`.
//
//   • `SkillError` covers fallible ambient work (loading registries and
//     scoring configs, version arithmetic).
//   • `ParseError` is a value, not a failure of the crate: parsing a skill
//     document accumulates them and hands the whole list back to the caller.
//   • `SemverError` is returned by version comparison on malformed input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Primary error enum ────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SkillError {
    /// Filesystem failure while reading a config or registry file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A registry or scoring config file is not valid TOML for its schema.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// A registry decoded fine but violates the registry shape rules.
    #[error("Invalid registry: {0}")]
    Registry(String),

    #[error("Invalid version: {0}")]
    Version(#[from] SemverError),
}

pub type SkillResult<T> = Result<T, SkillError>;

// Lets app boundaries returning `Result<T, String>` use `?` directly.
impl From<SkillError> for String {
    fn from(e: SkillError) -> Self {
        e.to_string()
    }
}

// ── Semver ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemverError {
    #[error("'{0}' must have exactly three dot-separated segments")]
    SegmentCount(String),

    #[error("segment '{segment}' of '{version}' is not a non-negative integer")]
    NonNumeric { version: String, segment: String },

    /// Valid digits, but too large for a `u64` segment (or to bump).
    #[error("segment '{segment}' of '{version}' is out of range")]
    Overflow { version: String, segment: String },
}

// ── Skill document parse errors ───────────────────────────────────────────

/// Classification of a skill document problem.
///
/// The first four kinds mean the document shape is broken. They are always
/// reported alone. The rest are content problems and are reported together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    ContentEmpty,
    FrontmatterMissing,
    FrontmatterInvalid,
    FrontmatterNotObject,
    SchemaFieldError,
    CategoryUnknown,
    PlatformUnknown,
    InstructionsEmpty,
}

impl ParseErrorKind {
    /// True for the kinds that halt parsing before field validation.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            Self::ContentEmpty
                | Self::FrontmatterMissing
                | Self::FrontmatterInvalid
                | Self::FrontmatterNotObject
        )
    }
}

/// One problem found in a skill document, attributed to a field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub field: String,
    pub message: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind, field: field.into(), message: message.into() }
    }

    /// Shorthand for a `SchemaFieldError`.
    pub fn schema(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::SchemaFieldError, field, message)
    }
}
