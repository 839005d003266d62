//! Error types for configuration handling.
//!
//! The decision path itself never fails: missing data degrades to a zero
//! estimate or a negative verdict. Errors only surface where settings enter
//! the system from files or the settings store.

/// A bounded setting holds a value outside its allowed range.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("setting '{name}' is {value}, expected {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

impl ConfigError {
    /// Stable identifier for logs and tooling.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::OutOfRange { .. } => "CONFIG_OUT_OF_RANGE",
        }
    }
}
