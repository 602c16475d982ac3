/// Knowledge-base errors. Document failures are degraded, never fatal to a
/// request: the caller logs them and proceeds with a null document.
#[derive(Debug, thiserror::Error)]
pub enum KbError {
    #[error("failed to fetch knowledge document {key}: {reason}")]
    FetchFailed { key: String, reason: String },

    #[error("failed to parse knowledge document {key}: {reason}")]
    ParseFailed { key: String, reason: String },
}
