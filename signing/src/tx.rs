//! The transaction capability boundary.
//!
//! The signing layer does not own the transaction container — it consumes
//! one through the narrowest possible seam. [`Tx`] is "some transaction";
//! [`RawTx`] is "a transaction that can hand over the exact byte regions it
//! will transmit on the wire". The direct mode needs the latter, and the
//! narrowing is an explicit trait hook ([`Tx::as_raw`]) so a shape mismatch
//! surfaces as a typed error at the call boundary, not a runtime downcast
//! panic three stack frames down.
//!
//! ## The one external contract that actually matters
//!
//! [`RawTx::body_bytes`] and [`RawTx::auth_info_bytes`] must return the
//! *original wire bytes* of the envelope — not a re-serialization of some
//! decoded structure, however faithful it looks. Protobuf (like most wire
//! formats) is not canonical on the decode side: unknown fields, varint
//! widths, and field ordering can all survive a decode/re-encode trip
//! differently. A transaction type that re-derives these bytes will produce
//! signatures that verify on the signer's machine and nowhere else.

use prost::Message;

/// A transaction, as seen by the signing layer.
///
/// Deliberately minimal: the signing layer has no opinion about messages,
/// fees, or memos. Concrete transaction types implement this (and usually
/// [`RawTx`]) to become signable.
pub trait Tx {
    /// Narrows to the raw wire-bytes capability, if this transaction
    /// carries it. The default says no; types that hold their original
    /// envelope bytes override it.
    fn as_raw(&self) -> Option<&dyn RawTx> {
        None
    }

    /// Concrete type name, used in error reporting when narrowing fails.
    fn shape(&self) -> &'static str {
        std::any::type_name_of_val(self)
    }
}

/// Access to the exact byte regions the transaction transmits on the wire.
pub trait RawTx {
    /// The body region (messages + memo), byte-exact.
    fn body_bytes(&self) -> &[u8];

    /// The auth-info region (fee + signer metadata), byte-exact.
    fn auth_info_bytes(&self) -> &[u8];
}

/// The relay form of a transaction: opaque body and auth-info regions plus
/// one signature per signer.
///
/// This is what a node gossips and what a verifier holds when it re-derives
/// sign bytes — the regions are stored exactly as received, so `RawTx` is
/// satisfied trivially. Tag numbers are consensus-frozen.
#[derive(Clone, PartialEq, Message)]
pub struct TxEnvelope {
    /// Wire bytes of the transaction body.
    #[prost(bytes = "vec", tag = "1")]
    pub body_bytes: Vec<u8>,
    /// Wire bytes of the fee and signer metadata.
    #[prost(bytes = "vec", tag = "2")]
    pub auth_info_bytes: Vec<u8>,
    /// One signature per signer, in signer order.
    #[prost(bytes = "vec", repeated, tag = "3")]
    pub signatures: Vec<Vec<u8>>,
}

impl Tx for TxEnvelope {
    fn as_raw(&self) -> Option<&dyn RawTx> {
        Some(self)
    }
}

impl RawTx for TxEnvelope {
    fn body_bytes(&self) -> &[u8] {
        &self.body_bytes
    }

    fn auth_info_bytes(&self) -> &[u8] {
        &self.auth_info_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A transaction shape with no raw-bytes capability, standing in for
    /// any decoded-only representation.
    struct OpaqueTx;

    impl Tx for OpaqueTx {}

    #[test]
    fn envelope_exposes_its_wire_regions() {
        let env = TxEnvelope {
            body_bytes: vec![1, 2, 3],
            auth_info_bytes: vec![4, 5],
            signatures: vec![vec![9; 64]],
        };
        let raw = env.as_raw().expect("envelope carries raw bytes");
        assert_eq!(raw.body_bytes(), &[1, 2, 3]);
        assert_eq!(raw.auth_info_bytes(), &[4, 5]);
    }

    #[test]
    fn opaque_tx_does_not_narrow() {
        let tx = OpaqueTx;
        assert!(tx.as_raw().is_none());
    }

    #[test]
    fn shape_reports_the_concrete_type() {
        let tx = OpaqueTx;
        assert!(tx.shape().contains("OpaqueTx"));

        // Through a trait object too — the default method is instantiated
        // per concrete impl, so the name stays accurate.
        let dyn_tx: &dyn Tx = &tx;
        assert!(dyn_tx.shape().contains("OpaqueTx"));
    }

    #[test]
    fn envelope_wire_roundtrip() {
        let env = TxEnvelope {
            body_bytes: b"body".to_vec(),
            auth_info_bytes: b"auth".to_vec(),
            signatures: vec![b"sig0".to_vec(), b"sig1".to_vec()],
        };
        let wire = env.encode_to_vec();
        let back = TxEnvelope::decode(wire.as_slice()).unwrap();
        assert_eq!(env, back);
    }
}
