// Hand Export: Translation options
//
// Callers pass a partial options object (usually JSON from the publish
// request). Each missing key falls back to its own default and unknown keys
// are ignored.

use serde::{Deserialize, Serialize};

use crate::atoms::constants::{
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL_ID, DEFAULT_MODEL_PROVIDER, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT_SECONDS,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HandOptions {
    pub model_provider: String,
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout_seconds: u32,
    /// Copied verbatim into `metadata.source_url`.
    pub source_url: String,
}

impl Default for HandOptions {
    fn default() -> Self {
        Self {
            model_provider: DEFAULT_MODEL_PROVIDER.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            source_url: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = HandOptions::default();
        assert_eq!(o.model_provider, "anthropic");
        assert_eq!(o.max_tokens, 4096);
        assert_eq!(o.temperature, 0.3);
        assert_eq!(o.timeout_seconds, 120);
        assert_eq!(o.source_url, "");
    }

    #[test]
    fn partial_json_overrides_individually() {
        let o: HandOptions = serde_json::from_str(
            r#"{"maxTokens": 8192, "sourceUrl": "https://example.com/s/1", "unknownKey": true}"#,
        )
        .unwrap();
        assert_eq!(o.max_tokens, 8192);
        assert_eq!(o.source_url, "https://example.com/s/1");
        assert_eq!(o.model_provider, "anthropic");
        assert_eq!(o.temperature, 0.3);
    }

    #[test]
    fn empty_object_is_default() {
        let o: HandOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(o, HandOptions::default());
    }
}
