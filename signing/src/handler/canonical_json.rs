//! The canonical-JSON sign mode.
//!
//! Some signers cannot produce protobuf: airgapped tooling, hardware
//! wallets with a JSON-only display path, scripting environments. For them,
//! this mode signs a JSON document over the same five fields as the direct
//! mode's [`SignDoc`](crate::SignDoc).
//!
//! "Canonical JSON" is doing heavy lifting in that sentence, so here is the
//! whole trick: the document is a fixed Rust struct, so the key order is
//! frozen at compile time — there is no map anywhere, and therefore no
//! map-iteration order to go non-deterministic on us. Byte regions are
//! hex-encoded (injective by construction), numbers are emitted as JSON
//! numbers (u64 is exact in serde_json), and strings get standard JSON
//! escaping. Same five inputs, same bytes, every time.
//!
//! Note the output is deliberately *different* from the direct mode's — a
//! signature made under one mode must never verify under another.

use serde::Serialize;
use tracing::trace;

use crate::error::SignError;
use crate::handler::SignModeHandler;
use crate::mode::SignMode;
use crate::signer::SignerData;
use crate::tx::Tx;

/// The JSON sign document. Field order here *is* the wire order; reordering
/// these fields is a consensus change.
#[derive(Serialize)]
struct JsonSignDoc<'a> {
    chain_id: &'a str,
    account_number: u64,
    account_sequence: u64,
    body_bytes: String,
    auth_info_bytes: String,
}

/// Handler for [`SignMode::CanonicalJson`].
///
/// Requires the same raw wire-bytes capability as the direct mode — the
/// JSON rendering changes the envelope, not the no-re-encoding rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalJsonHandler;

impl SignModeHandler for CanonicalJsonHandler {
    fn default_mode(&self) -> SignMode {
        SignMode::CanonicalJson
    }

    fn modes(&self) -> &[SignMode] {
        &[SignMode::CanonicalJson]
    }

    fn get_sign_bytes(
        &self,
        mode: SignMode,
        data: &SignerData,
        tx: &dyn Tx,
    ) -> Result<Vec<u8>, SignError> {
        if mode != SignMode::CanonicalJson {
            return Err(SignError::ModeMismatch {
                expected: SignMode::CanonicalJson,
                got: mode,
            });
        }

        let raw = tx.as_raw().ok_or(SignError::UnsupportedTxShape {
            shape: tx.shape(),
        })?;

        let doc = JsonSignDoc {
            chain_id: &data.chain_id,
            account_number: data.account_number,
            account_sequence: data.account_sequence,
            body_bytes: hex::encode(raw.body_bytes()),
            auth_info_bytes: hex::encode(raw.auth_info_bytes()),
        };
        let bytes = serde_json::to_vec(&doc).map_err(|e| SignError::Encoding(e.to_string()))?;

        trace!(
            chain_id = %data.chain_id,
            account_number = data.account_number,
            account_sequence = data.account_sequence,
            len = bytes.len(),
            "produced canonical-json sign bytes"
        );
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::TxEnvelope;

    struct OpaqueTx;
    impl Tx for OpaqueTx {}

    fn sample_tx() -> TxEnvelope {
        TxEnvelope {
            body_bytes: b"body-bytes".to_vec(),
            auth_info_bytes: b"auth-info-bytes".to_vec(),
            signatures: vec![],
        }
    }

    fn sample_signer() -> SignerData {
        SignerData::new("test-chain", 1, 1)
    }

    #[test]
    fn serves_exactly_the_json_mode() {
        let handler = CanonicalJsonHandler;
        assert_eq!(handler.default_mode(), SignMode::CanonicalJson);
        assert_eq!(handler.modes(), &[SignMode::CanonicalJson]);
    }

    #[test]
    fn output_is_deterministic() {
        let handler = CanonicalJsonHandler;
        let tx = sample_tx();
        let signer = sample_signer();

        let a = handler
            .get_sign_bytes(SignMode::CanonicalJson, &signer, &tx)
            .unwrap();
        let b = handler
            .get_sign_bytes(SignMode::CanonicalJson, &signer, &tx)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn output_is_valid_json_with_frozen_key_order() {
        let handler = CanonicalJsonHandler;
        let bytes = handler
            .get_sign_bytes(SignMode::CanonicalJson, &sample_signer(), &sample_tx())
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            format!(
                "{{\"chain_id\":\"test-chain\",\"account_number\":1,\"account_sequence\":1,\
                 \"body_bytes\":\"{}\",\"auth_info_bytes\":\"{}\"}}",
                hex::encode(b"body-bytes"),
                hex::encode(b"auth-info-bytes"),
            )
        );
    }

    #[test]
    fn rejects_other_modes() {
        let handler = CanonicalJsonHandler;
        let err = handler
            .get_sign_bytes(SignMode::Direct, &sample_signer(), &sample_tx())
            .unwrap_err();
        assert_eq!(
            err,
            SignError::ModeMismatch {
                expected: SignMode::CanonicalJson,
                got: SignMode::Direct,
            }
        );
    }

    #[test]
    fn rejects_transactions_without_raw_bytes() {
        let handler = CanonicalJsonHandler;
        let err = handler
            .get_sign_bytes(SignMode::CanonicalJson, &sample_signer(), &OpaqueTx)
            .unwrap_err();
        assert!(matches!(err, SignError::UnsupportedTxShape { .. }));
    }

    #[test]
    fn differs_from_direct_mode_output() {
        use crate::handler::direct::DirectHandler;

        let tx = sample_tx();
        let signer = sample_signer();
        let json = CanonicalJsonHandler
            .get_sign_bytes(SignMode::CanonicalJson, &signer, &tx)
            .unwrap();
        let direct = DirectHandler
            .get_sign_bytes(SignMode::Direct, &signer, &tx)
            .unwrap();
        assert_ne!(json, direct, "modes must not produce interchangeable bytes");
    }

    #[test]
    fn byte_regions_are_binding() {
        let handler = CanonicalJsonHandler;
        let signer = sample_signer();

        let base = handler
            .get_sign_bytes(SignMode::CanonicalJson, &signer, &sample_tx())
            .unwrap();

        let mut tx = sample_tx();
        tx.body_bytes[0] ^= 0x01;
        let flipped = handler
            .get_sign_bytes(SignMode::CanonicalJson, &signer, &tx)
            .unwrap();
        assert_ne!(base, flipped);
    }
}
