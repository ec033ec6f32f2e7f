// ── SkillForge Atoms: Constants ───────────────────────────────────────────
// All named constants for the crate live here: canonical registries,
// scoring weights, hand defaults, and serializer thresholds.
// Registries and scoring weights are only the built-in defaults. Deployments
// can replace them through `Registry::load` / `ScoringConfig::load`.

// ── Canonical registries ──────────────────────────────────────────────────
// Category slugs are lowercase and hyphenated. Platform tokens are
// SCREAMING_SNAKE_CASE. Parsed skills are normalized into these shapes
// before membership is checked.
pub const CATEGORY_SLUGS: &[&str] = &[
    "build",
    "test",
    "deploy",
    "debug",
    "refactor",
    "code-review",
    "documentation",
    "security",
    "data",
    "design",
    "devops",
    "research",
    "automation",
    "productivity",
    "writing",
];

pub const PLATFORM_TOKENS: &[&str] = &[
    "CLAUDE_CODE",
    "CURSOR",
    "WINDSURF",
    "CODEX",
    "GEMINI_CLI",
    "GITHUB_COPILOT",
    "CLINE",
    "AIDER",
    "CONTINUE",
    "ZED",
];

// ── Quality scoring: schema dimension ─────────────────────────────────────
pub const SCHEMA_CAP: u32 = 25;
pub const SCHEMA_REQUIRED_FIELDS_POINTS: u32 = 10;
pub const SCHEMA_DESCRIPTION_POINTS: u32 = 5;
pub const SCHEMA_DESCRIPTION_MIN_CHARS: usize = 20;
pub const SCHEMA_SEMVER_POINTS: u32 = 5;
pub const SCHEMA_CATEGORY_POINTS: u32 = 5;

// ── Quality scoring: instructions dimension ───────────────────────────────
pub const INSTRUCTIONS_CAP: u32 = 75;
pub const INSTRUCTIONS_MIN_CHARS: usize = 200;
pub const INSTRUCTIONS_MIN_LENGTH_POINTS: u32 = 10;
pub const INSTRUCTIONS_LONG_CHARS: usize = 1000;
pub const INSTRUCTIONS_LONG_FORM_POINTS: u32 = 10;
pub const INSTRUCTIONS_STRUCTURE_POINTS: u32 = 15;
pub const INSTRUCTIONS_IO_POINTS: u32 = 10;
pub const INSTRUCTIONS_ERROR_HANDLING_POINTS: u32 = 10;
pub const INSTRUCTIONS_GUARDRAILS_POINTS: u32 = 10;
pub const INSTRUCTIONS_EXAMPLES_POINTS: u32 = 10;
pub const INSTRUCTIONS_OUTPUT_FORMAT_POINTS: u32 = 10;

/// Upper bound of `ScoreBreakdown::total`.
pub const QUALITY_TOTAL_CAP: u32 = 100;

/// Bumped whenever a detection pattern in `quality::signals` changes.
/// Scores computed under different versions are not comparable.
pub const SIGNAL_PATTERNS_VERSION: u32 = 1;

// ── Hand export defaults ──────────────────────────────────────────────────
pub const DEFAULT_MODEL_PROVIDER: &str = "anthropic";
pub const DEFAULT_MODEL_ID: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 4096;
pub const DEFAULT_TEMPERATURE: f64 = 0.3;
pub const DEFAULT_TIMEOUT_SECONDS: u32 = 120;
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Written to `metadata.source` of every exported hand.
pub const HAND_SOURCE: &str = "skillforge";
/// `metadata.category` when the skill declares none.
pub const HAND_DEFAULT_CATEGORY: &str = "general";
/// `instructions.user_template` when no input declaration is found.
pub const HAND_DEFAULT_USER_TEMPLATE: &str = "{{input}}";
/// `hand.name` when sanitization strips the whole display name.
pub const HAND_FALLBACK_NAME: &str = "unnamed-hand";
pub const HAND_NAME_MAX_CHARS: usize = 64;

// ── TOML rendering ────────────────────────────────────────────────────────
// Strings longer than this (in chars) are emitted as multi-line blocks.
pub const TOML_MULTILINE_THRESHOLD: usize = 200;
