//! Synthesis error types

use thiserror::Error;

/// Error returned when a generation call receives parameters outside its contract.
///
/// Amplitude is never range-checked: values outside [0, 1] clip silently
/// during PCM conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthError {
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, SynthError>;

impl SynthError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
