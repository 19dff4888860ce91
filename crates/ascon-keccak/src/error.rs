//! AEAD error types.

use crate::aead::Phase;
use thiserror::Error;

/// Errors returned by the Ascon-Keccak engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AeadError {
    /// Key, IV or tag length not supported by the selected permutation
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Tag verification failed; any produced plaintext must be discarded
    #[error("authentication failure: tag mismatch")]
    AuthenticationFailure,

    /// Operation called out of order
    #[error("{operation} not permitted in {phase} phase")]
    InvalidState {
        /// Name of the rejected operation
        operation: &'static str,
        /// Phase the session was in
        phase: Phase,
    },

    /// Known-answer self-test did not reproduce its reference output
    #[error("self-test failed")]
    SelfTestFailed,
}

impl AeadError {
    pub(crate) fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}
