//! Sign-mode handlers.
//!
//! One handler per encoding strategy. Each handler knows how to turn
//! `(signer context, transaction)` into sign bytes for exactly the modes it
//! declares, and refuses everything else. The contract is small on purpose:
//! three methods, no state, no side effects, every call independent and
//! idempotent.
//!
//! ```text
//! direct.rs          — protobuf SignDoc over raw wire bytes (the default)
//! canonical_json.rs  — fixed-field JSON doc for protobuf-less signers
//! ```

pub mod canonical_json;
pub mod direct;

use crate::error::SignError;
use crate::mode::SignMode;
use crate::signer::SignerData;
use crate::tx::Tx;

/// Produces sign bytes for one or more sign modes.
///
/// Implementations must be pure: no clocks, no randomness, no mutation.
/// `Send + Sync` is required so a wired handler set can be shared across
/// threads behind an `Arc` without ceremony — there is nothing to race on.
///
/// The [`SignModeRegistry`](crate::registry::SignModeRegistry) implements
/// this trait too, so "a handler" and "a set of handlers" are
/// interchangeable at every call site.
pub trait SignModeHandler: Send + Sync {
    /// The mode this handler prefers when the caller expresses no opinion
    /// (e.g. when constructing a fresh transaction for signing).
    fn default_mode(&self) -> SignMode;

    /// Every mode this handler serves. Concrete handlers typically return a
    /// one-element slice; a registry returns its whole table.
    fn modes(&self) -> &[SignMode];

    /// Produces the byte sequence to sign (or re-derive for verification).
    ///
    /// Fails with [`SignError::ModeMismatch`] for a mode this handler does
    /// not serve, and with [`SignError::UnsupportedTxShape`] when `tx`
    /// lacks a capability the mode requires. Never falls back to
    /// re-encoding the transaction itself.
    fn get_sign_bytes(
        &self,
        mode: SignMode,
        data: &SignerData,
        tx: &dyn Tx,
    ) -> Result<Vec<u8>, SignError>;
}
