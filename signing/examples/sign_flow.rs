//! Walkthrough of the sign-byte flow, wallet side and verifier side.
//!
//! Wires a sign-mode registry, builds a relay envelope, derives sign bytes
//! in both shipped modes, signs them with an Ed25519 key, and plays verifier
//! to show the bytes re-derive bit-for-bit — plus one deliberate context
//! drift to show why they sometimes must not.
//!
//! Run with:
//!   cargo run --example sign_flow

use anyhow::Result;
use ed25519_dalek::{Signer, SigningKey, Verifier};
use rand::rngs::OsRng;
use tracing::info;

use meridian_signing::{
    CanonicalJsonHandler, DirectHandler, SignMode, SignModeHandler, SignModeRegistry, SignerData,
    TxEnvelope,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sign_flow=info,meridian_signing=trace".into()),
        )
        .init();

    // Application wiring: done once, shared forever after.
    let registry = SignModeRegistry::new(
        SignMode::Direct,
        vec![Box::new(DirectHandler), Box::new(CanonicalJsonHandler)],
    )?;
    info!(default_mode = %registry.default_mode(), "registry wired");

    // The transaction container (an external collaborator) hands us its
    // wire regions; we never look inside them.
    let tx = TxEnvelope {
        body_bytes: b"\x12\x0csometestmemo".to_vec(),
        auth_info_bytes: b"\x10\xa0\x9c\x01".to_vec(),
        signatures: vec![],
    };
    let signer = SignerData::new("meridian-1", 7, 0);

    // Wallet side: derive and sign.
    let key = SigningKey::generate(&mut OsRng);
    let to_sign = registry.get_sign_bytes(registry.default_mode(), &signer, &tx)?;
    let signature = key.sign(&to_sign);
    info!(
        mode = %registry.default_mode(),
        sign_bytes = %hex::encode(&to_sign),
        "wallet derived and signed"
    );

    // The JSON mode binds the same five fields into different bytes.
    let json_bytes = registry.get_sign_bytes(SignMode::CanonicalJson, &signer, &tx)?;
    info!(doc = %String::from_utf8_lossy(&json_bytes), "canonical-json rendering");

    // Verifier side: re-derive from the same inputs and check.
    let rederived = registry.get_sign_bytes(SignMode::Direct, &signer, &tx)?;
    key.verifying_key().verify(&rederived, &signature)?;
    info!("verifier re-derived identical bytes; signature verifies");

    // Replay protection in action: the same envelope at the next sequence
    // derives different bytes, so the old signature is useless.
    let next = SignerData::new("meridian-1", 7, 1);
    let next_bytes = registry.get_sign_bytes(SignMode::Direct, &next, &tx)?;
    assert!(key.verifying_key().verify(&next_bytes, &signature).is_err());
    info!("stale signature rejected at the next sequence, as designed");

    Ok(())
}
