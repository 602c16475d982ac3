//! Error types for the Leo workspace, one enum per concern.

mod kb_error;
mod service_error;

pub use kb_error::KbError;
pub use service_error::ServiceError;

/// Top-level error wrapping every subsystem.
#[derive(Debug, thiserror::Error)]
pub enum LeoError {
    #[error(transparent)]
    Kb(#[from] KbError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Workspace-wide result alias.
pub type LeoResult<T> = Result<T, LeoError>;
