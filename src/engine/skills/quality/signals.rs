// Skill Quality: Instruction Signals
//
// One named predicate per heuristic. The patterns are part of the scoring
// contract: changing one changes scores of content that was already scored,
// so bump SIGNAL_PATTERNS_VERSION with any edit here.
//
// Patterns are compiled once. A pattern that fails to compile is logged and
// then simply never matches.

use std::sync::LazyLock;

use log::warn;
use regex::Regex;

struct Signal {
    name: &'static str,
    patterns: Vec<Regex>,
}

impl Signal {
    fn new(name: &'static str, sources: &[&str]) -> Self {
        let patterns = sources
            .iter()
            .filter_map(|p| match Regex::new(p) {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!("[skill-quality] Failed to compile {} pattern '{}': {}", name, p, e);
                    None
                }
            })
            .collect();
        Self { name, patterns }
    }

    fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }
}

// ── Pattern definitions ────────────────────────────────────────────────────

static STRUCTURED_PHASES: LazyLock<Signal> = LazyLock::new(|| {
    Signal::new(
        "structured-phases",
        &[
            // "Phase 1", "step 2:", "Stage3"
            r"(?i)\b(?:phase|step|stage)\s*\d",
            // markdown heading line
            r"(?m)^[ \t]{0,3}#{1,6}[ \t]+\S",
            // numbered list line: "1. ", "2) "
            r"(?m)^[ \t]*\d+[.)][ \t]+\S",
        ],
    )
});

static IO_LANGUAGE: LazyLock<Signal> = LazyLock::new(|| {
    Signal::new("io", &[r"(?i)\b(?:input|output|returns?|produces?)\b"])
});

static ERROR_HANDLING: LazyLock<Signal> = LazyLock::new(|| {
    Signal::new(
        "error-handling",
        &[r"(?i)\b(?:error|fail|exception|catch|handle|fallback|retry)"],
    )
});

static GUARDRAILS: LazyLock<Signal> = LazyLock::new(|| {
    Signal::new(
        "guardrails",
        &[r"(?i)\b(?:strict|rules?|must\s+not|never|always|important|critical|do\s+not)\b"],
    )
});

static EXAMPLES: LazyLock<Signal> = LazyLock::new(|| {
    Signal::new(
        "examples",
        &[r"(?i)\b(?:example|e\.g\.|for\s+instance|such\s+as)", r"```"],
    )
});

static OUTPUT_FORMAT: LazyLock<Signal> = LazyLock::new(|| {
    Signal::new(
        "output-format",
        &[r"(?i)\boutput\s+(?:format|structure)\b|\bresponse\s+format\b|\bproduce|\bgenerate"],
    )
});

// ── Predicates ─────────────────────────────────────────────────────────────

/// A phase/step/stage word followed by a digit, a markdown heading, or a
/// numbered list.
pub fn has_structured_phases(text: &str) -> bool {
    STRUCTURED_PHASES.matches(text)
}

/// Talks about what goes in and what comes out.
pub fn mentions_io(text: &str) -> bool {
    IO_LANGUAGE.matches(text)
}

pub fn mentions_error_handling(text: &str) -> bool {
    ERROR_HANDLING.matches(text)
}

/// Hard constraints such as "never", "must not", "always".
pub fn has_guardrails(text: &str) -> bool {
    GUARDRAILS.matches(text)
}

/// Example wording or a fenced code block.
pub fn has_examples(text: &str) -> bool {
    EXAMPLES.matches(text)
}

pub fn specifies_output_format(text: &str) -> bool {
    OUTPUT_FORMAT.matches(text)
}

/// Names of the signals `text` triggers, in check order. Used for logging.
pub fn triggered(text: &str) -> Vec<&'static str> {
    [
        &*STRUCTURED_PHASES,
        &*IO_LANGUAGE,
        &*ERROR_HANDLING,
        &*GUARDRAILS,
        &*EXAMPLES,
        &*OUTPUT_FORMAT,
    ]
    .into_iter()
    .filter(|s| s.matches(text))
    .map(|s| s.name)
    .collect()
}
