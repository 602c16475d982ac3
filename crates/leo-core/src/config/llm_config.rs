use serde::{Deserialize, Serialize};

use super::defaults;

/// Outbound LLM call configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// OpenAI-compatible router base URL.
    pub base_url: String,
    /// Bearer key for the router; empty disables the auth header.
    pub api_key: String,
    pub model: String,
    /// Whole-request timeout. There is no retry policy: a failed call is
    /// surfaced once to the caller.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_LLM_BASE_URL.to_string(),
            api_key: String::new(),
            model: defaults::DEFAULT_LLM_MODEL.to_string(),
            timeout_secs: defaults::DEFAULT_LLM_TIMEOUT_SECS,
        }
    }
}
