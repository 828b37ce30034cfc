//! The canonical sign document and its encoder.
//!
//! [`SignDoc`] is the exact, exhaustive set of fields bound into every
//! direct-mode signature. Its encoding is protobuf — field-tagged and
//! length-prefixed — which buys the two properties this whole crate exists
//! for:
//!
//! - **Deterministic.** Field order is fixed by tag number, not by the
//!   insertion order of any in-memory structure. The same five values encode
//!   to the same bytes on every machine, every time.
//! - **Injective.** Every variable-length field carries its own length
//!   prefix, so no field's content can shift where the next field begins.
//!   Two distinct field tuples cannot collide into one byte sequence, and a
//!   crafted `body_bytes` cannot impersonate part of `chain_id`.
//!
//! JSON, or anything that iterates a map, is disqualified here: key order
//! is a serialization-library implementation detail, and "usually the same
//! bytes" is not a property you can sign.
//!
//! Tag numbers are consensus-frozen. Renumbering a field is a hard fork.

use crate::error::SignError;
use prost::Message;

/// The five-field canonical sign document for the direct mode.
///
/// `body_bytes` and `auth_info_bytes` are opaque here on purpose: they are
/// the exact regions the transaction envelope puts on the wire, captured by
/// the transaction's own accessors and passed through verbatim. This crate
/// never parses them, never re-encodes them, and never will — the moment it
/// does, signer and verifier can disagree.
///
/// Built transiently per sign/verify call, never persisted, immutable once
/// built.
#[derive(Clone, PartialEq, Message)]
pub struct SignDoc {
    /// Wire bytes of the transaction body (messages + memo), verbatim.
    #[prost(bytes = "vec", tag = "1")]
    pub body_bytes: Vec<u8>,
    /// Wire bytes of the fee and signer metadata, verbatim.
    #[prost(bytes = "vec", tag = "2")]
    pub auth_info_bytes: Vec<u8>,
    /// Target network identifier. May be empty — validating chain identity
    /// is the orchestrator's job, not the encoder's.
    #[prost(string, tag = "3")]
    pub chain_id: String,
    /// Signer's chain-assigned account identifier.
    #[prost(uint64, tag = "4")]
    pub account_number: u64,
    /// Signer's current nonce.
    #[prost(uint64, tag = "5")]
    pub account_sequence: u64,
}

impl SignDoc {
    /// Encodes the document into its canonical byte sequence.
    ///
    /// Pure function: no clock, no randomness, no state. Fails only if the
    /// wire format itself cannot represent the fields, which for
    /// heap-backed buffers does not happen in practice — the `Err` arm
    /// exists because the contract says encoding may fail, not because we
    /// expect it to.
    pub fn encode_canonical(&self) -> Result<Vec<u8>, SignError> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode(&mut buf)
            .map_err(|e| SignError::Encoding(e.to_string()))?;
        Ok(buf)
    }
}

/// Builds and encodes a [`SignDoc`] in one step.
///
/// This is the function every direct-mode signer and verifier ultimately
/// calls: the signer before producing a signature, the verifier to re-derive
/// the identical bytes from the received transaction and its own view of the
/// signer's account state.
pub fn sign_bytes(
    body_bytes: &[u8],
    auth_info_bytes: &[u8],
    chain_id: &str,
    account_number: u64,
    account_sequence: u64,
) -> Result<Vec<u8>, SignError> {
    let doc = SignDoc {
        body_bytes: body_bytes.to_vec(),
        auth_info_bytes: auth_info_bytes.to_vec(),
        chain_id: chain_id.to_owned(),
        account_number,
        account_sequence,
    };
    doc.encode_canonical()
}
