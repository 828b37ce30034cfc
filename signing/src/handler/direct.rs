//! The direct sign mode.
//!
//! Direct is the default and the strictest mode: the sign bytes are the
//! protobuf encoding of a [`SignDoc`] built from the transaction's *raw wire
//! regions* plus the signer context. Because the verifier holds the exact
//! same wire regions (it received them), re-deriving the bytes is a pure
//! table-stakes computation — no re-encoding, no canonicalization judgement
//! calls, no disagreement.
//!
//! The price of that strictness is the capability requirement: a transaction
//! that cannot produce its original wire bytes cannot be signed in direct
//! mode, full stop. Falling back to re-serializing a decoded form would be
//! exactly the non-determinism this mode exists to rule out.

use tracing::trace;

use crate::doc::sign_bytes;
use crate::error::SignError;
use crate::handler::SignModeHandler;
use crate::mode::SignMode;
use crate::signer::SignerData;
use crate::tx::Tx;

/// Handler for [`SignMode::Direct`].
///
/// Stateless; construct it wherever, share it freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectHandler;

impl SignModeHandler for DirectHandler {
    fn default_mode(&self) -> SignMode {
        SignMode::Direct
    }

    fn modes(&self) -> &[SignMode] {
        &[SignMode::Direct]
    }

    fn get_sign_bytes(
        &self,
        mode: SignMode,
        data: &SignerData,
        tx: &dyn Tx,
    ) -> Result<Vec<u8>, SignError> {
        if mode != SignMode::Direct {
            return Err(SignError::ModeMismatch {
                expected: SignMode::Direct,
                got: mode,
            });
        }

        let raw = tx.as_raw().ok_or(SignError::UnsupportedTxShape {
            shape: tx.shape(),
        })?;

        let bytes = sign_bytes(
            raw.body_bytes(),
            raw.auth_info_bytes(),
            &data.chain_id,
            data.account_number,
            data.account_sequence,
        )?;

        trace!(
            chain_id = %data.chain_id,
            account_number = data.account_number,
            account_sequence = data.account_sequence,
            len = bytes.len(),
            "produced direct sign bytes"
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
    fn serves_exactly_the_direct_mode() {
        let handler = DirectHandler;
        assert_eq!(handler.default_mode(), SignMode::Direct);
        assert_eq!(handler.modes(), &[SignMode::Direct]);
    }

    #[test]
    fn output_equals_the_canonical_encoder() {
        let handler = DirectHandler;
        let tx = sample_tx();
        let signer = sample_signer();

        let via_handler = handler
            .get_sign_bytes(SignMode::Direct, &signer, &tx)
            .unwrap();
        let via_encoder =
            sign_bytes(b"body-bytes", b"auth-info-bytes", "test-chain", 1, 1).unwrap();

        assert_eq!(via_handler, via_encoder);
    }

    #[test]
    fn rejects_every_other_mode() {
        let handler = DirectHandler;
        let tx = sample_tx();
        let signer = sample_signer();

        for wrong in [
            SignMode::Unspecified,
            SignMode::Textual,
            SignMode::CanonicalJson,
        ] {
            let err = handler.get_sign_bytes(wrong, &signer, &tx).unwrap_err();
            assert_eq!(
                err,
                SignError::ModeMismatch {
                    expected: SignMode::Direct,
                    got: wrong,
                }
            );
        }
    }

    #[test]
    fn rejects_transactions_without_raw_bytes() {
        let handler = DirectHandler;
        let err = handler
            .get_sign_bytes(SignMode::Direct, &sample_signer(), &OpaqueTx)
            .unwrap_err();
        match err {
            SignError::UnsupportedTxShape { shape } => {
                assert!(shape.contains("OpaqueTx"), "got shape: {shape}");
            }
            other => panic!("expected UnsupportedTxShape, got {other:?}"),
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let handler = DirectHandler;
        let tx = sample_tx();
        let signer = sample_signer();

        let a = handler
            .get_sign_bytes(SignMode::Direct, &signer, &tx)
            .unwrap();
        let b = handler
            .get_sign_bytes(SignMode::Direct, &signer, &tx)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn signer_context_is_binding() {
        let handler = DirectHandler;
        let tx = sample_tx();

        let base = handler
            .get_sign_bytes(SignMode::Direct, &sample_signer(), &tx)
            .unwrap();
        let bumped_seq = handler
            .get_sign_bytes(SignMode::Direct, &SignerData::new("test-chain", 1, 2), &tx)
            .unwrap();
        let other_chain = handler
            .get_sign_bytes(SignMode::Direct, &SignerData::new("other-chain", 1, 1), &tx)
            .unwrap();

        assert_ne!(base, bumped_seq, "sequence must be binding");
        assert_ne!(base, other_chain, "chain id must be binding");
    }
}
