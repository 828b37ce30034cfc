//! Error types for the signing layer.
//!
//! Every failure here is a caller-input or wiring mistake. Nothing is
//! transient and nothing is retried internally — these are pure,
//! deterministic computations, so retrying with the same inputs can only
//! produce the same error. The orchestrator decides what the user sees.

use crate::mode::SignMode;
use thiserror::Error;

/// Errors produced while generating sign bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignError {
    /// A handler was invoked with a mode it does not serve. Strict equality,
    /// by contract: handlers refuse instead of guessing.
    #[error("sign mode mismatch: expected {expected}, got {got}")]
    ModeMismatch {
        /// The mode the handler serves.
        expected: SignMode,
        /// The mode the caller asked for.
        got: SignMode,
    },

    /// The transaction does not expose the raw wire-bytes capability the
    /// handler requires. Carries the concrete type name for diagnosability.
    #[error("can only produce direct sign bytes for a raw-bytes transaction, got {shape}")]
    UnsupportedTxShape {
        /// Concrete type of the transaction value encountered.
        shape: &'static str,
    },

    /// The dispatcher has no handler installed for the requested mode.
    #[error("no sign-mode handler registered for {0}")]
    UnsupportedMode(SignMode),

    /// The canonical encoder could not represent the given field values
    /// within its wire format's limits.
    #[error("sign document encoding failed: {0}")]
    Encoding(String),
}
