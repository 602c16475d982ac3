//! Outbound call to the OpenAI-compatible LLM router.
//!
//! One shot, no retries: a failed call surfaces once to the caller as a 500.
//! The response content is schema-guided but not trusted; it is parsed into
//! the lenient [`RawAnalysis`] mirror, tolerating markdown fences around the
//! JSON body.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use leo_core::config::LlmConfig;
use leo_core::errors::ServiceError;
use leo_core::model::RawAnalysis;

/// OpenAI-compatible chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Client for the configured LLM router.
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    config: LlmConfig,
}

impl LlmClient {
    /// Build a client with the configured whole-request timeout.
    pub fn new(config: LlmConfig) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ServiceError::LlmFailed {
                reason: e.to_string(),
            })?;
        Ok(Self { http, config })
    }

    /// Send the prompt and parse the structured analysis out of the reply.
    pub async fn analyze(&self, prompt: String) -> Result<RawAnalysis, ServiceError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            stream: false,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let url = format!("{}/v1/chat/completions", self.config.base_url);
        let mut builder = self.http.post(&url).json(&request);
        if !self.config.api_key.is_empty() {
            builder = builder.bearer_auth(&self.config.api_key);
        }

        let response = builder
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| ServiceError::LlmFailed {
                reason: e.to_string(),
            })?;

        let completion: ChatCompletionResponse =
            response.json().await.map_err(|e| ServiceError::ParseFailed {
                reason: e.to_string(),
            })?;

        let content = completion
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| ServiceError::ParseFailed {
                reason: "empty choices in completion".to_string(),
            })?;

        parse_analysis(content)
    }
}

/// Parse the analysis JSON out of the message content, stripping a markdown
/// code fence when the model wrapped its output in one.
pub fn parse_analysis(content: &str) -> Result<RawAnalysis, ServiceError> {
    let json = strip_fences(content);
    serde_json::from_str(json).map_err(|e| ServiceError::ParseFailed {
        reason: e.to_string(),
    })
}

fn strip_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the optional language tag on the opening fence.
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_start_matches(['\r', '\n'])
        .strip_suffix("```")
        .unwrap_or(rest)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_json_parses() {
        let raw = parse_analysis(r#"{"domains": [], "summary": "ok"}"#).unwrap();
        assert_eq!(raw.summary, "ok");
    }

    #[test]
    fn fenced_json_parses() {
        let content = "```json\n{\"domains\": [], \"summary\": \"ok\"}\n```";
        let raw = parse_analysis(content).unwrap();
        assert_eq!(raw.summary, "ok");
    }

    #[test]
    fn fence_without_language_tag_parses() {
        let content = "```\n{\"domains\": [], \"summary\": \"ok\"}\n```";
        assert!(parse_analysis(content).is_ok());
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = parse_analysis("sorry, daar kan ik niets mee").unwrap_err();
        assert_eq!(err.status(), 500);
    }
}
