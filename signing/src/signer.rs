//! Signer context.
//!
//! [`SignerData`] is everything the signing layer needs to know about *who*
//! is signing and *where*, supplied by the orchestrator (wallet, CLI signer,
//! or node-side verifier) on every call. This crate never looks these values
//! up itself — account state lives in the auth ledger, which is someone
//! else's module.

use serde::{Deserialize, Serialize};

/// Per-call signer context bound into every sign document.
///
/// Each field closes a replay hole:
///
/// - `chain_id` — a signature for `meridian-1` is worthless on any other
///   network.
/// - `account_number` — a signature for account 7 is worthless for account 8,
///   even if both are controlled by the same key.
/// - `account_sequence` — the signer's nonce; a signature for sequence 3 is
///   worthless once sequence 3 has been consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerData {
    /// Identifier of the target network.
    pub chain_id: String,
    /// The signer's chain-assigned account identifier.
    pub account_number: u64,
    /// The signer's current nonce.
    pub account_sequence: u64,
}

impl SignerData {
    /// Builds a signer context for one signing or verification attempt.
    pub fn new(chain_id: impl Into<String>, account_number: u64, account_sequence: u64) -> Self {
        Self {
            chain_id: chain_id.into(),
            account_number,
            account_sequence,
        }
    }
}
