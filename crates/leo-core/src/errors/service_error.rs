/// Service-shell errors, each mapping onto one HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// 400 — empty or missing conversation text.
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    /// 401 — bearer token required but absent or wrong.
    #[error("unauthorized")]
    Unauthorized,

    /// 405 — anything but POST/OPTIONS.
    #[error("method not allowed: {method}")]
    MethodNotAllowed { method: String },

    /// 500 — the outbound LLM call failed.
    #[error("LLM invocation failed: {reason}")]
    LlmFailed { reason: String },

    /// 500 — the LLM response could not be parsed at the transport level.
    #[error("failed to parse LLM response: {reason}")]
    ParseFailed { reason: String },
}

impl ServiceError {
    /// The HTTP status code this error maps to.
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidRequest { .. } => 400,
            Self::Unauthorized => 401,
            Self::MethodNotAllowed { .. } => 405,
            Self::LlmFailed { .. } | Self::ParseFailed { .. } => 500,
        }
    }
}
