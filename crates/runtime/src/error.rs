//! Errors surfaced by the runtime API.
//!
//! The per-opportunity path never fails; these only come from configuring
//! the module.
use thiserror::Error;
use totem_core::ConfigError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    InvalidSettings(#[from] ConfigError),

    #[error("unknown policy '{0}', expected 'threat' or 'health_gate'")]
    UnknownPolicy(String),
}

impl RuntimeError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::InvalidSettings(inner) => inner.error_code(),
            RuntimeError::UnknownPolicy(_) => "UNKNOWN_POLICY",
        }
    }
}
