// Copyright (c) 2026 Meridian Contributors. MIT License.
// See LICENSE for details.

//! # Meridian Signing — Sign-Byte Generation Layer
//!
//! This crate answers exactly one question: *what bytes does a signer sign?*
//! It sounds trivial until you realize that every answer that isn't
//! bit-for-bit reproducible by the verifier is a security hole. A signer and
//! a verifier that disagree about even one byte produce signatures that never
//! verify — or worse, a transaction that can be quietly rewritten in flight.
//!
//! ## Architecture
//!
//! The crate is a thin stack of pure functions and one lookup table:
//!
//! - **mode** — The [`SignMode`] tag identifying an encoding strategy.
//! - **signer** — [`SignerData`]: chain ID, account number, sequence.
//! - **doc** — [`SignDoc`], the canonical five-field sign document, and its
//!   protobuf encoding. This is the injective, deterministic core.
//! - **tx** — The capability boundary: what a transaction must expose
//!   ([`RawTx`]) for the direct mode to work, and how handlers narrow to it.
//! - **handler** — One [`SignModeHandler`] per encoding strategy. Ships the
//!   direct handler and a canonical-JSON handler.
//! - **registry** — [`SignModeRegistry`]: mode → handler dispatch, built
//!   once at wiring time, read-only forever after.
//! - **error** — [`SignError`]. Every failure here is a caller or wiring
//!   mistake; nothing is transient, nothing is retried.
//!
//! ## Design Rules
//!
//! 1. Sign bytes are a pure function of their inputs. No clocks, no
//!    randomness, no hidden state. Calling twice gives the same bytes twice.
//! 2. Handlers never re-encode a transaction. The direct mode signs the
//!    exact `body_bytes`/`auth_info_bytes` the transaction will put on the
//!    wire, passed through verbatim. Re-serializing "equivalent" structures
//!    is how you get unverifiable signatures.
//! 3. Mode checks are strict equality. A handler asked for a mode it does
//!    not serve refuses loudly instead of guessing.
//!
//! ## Example
//!
//! ```
//! use meridian_signing::{
//!     DirectHandler, SignMode, SignModeHandler, SignModeRegistry, SignerData, TxEnvelope,
//! };
//!
//! let registry =
//!     SignModeRegistry::new(SignMode::Direct, vec![Box::new(DirectHandler)]).unwrap();
//!
//! let tx = TxEnvelope {
//!     body_bytes: b"body".to_vec(),
//!     auth_info_bytes: b"auth".to_vec(),
//!     signatures: vec![],
//! };
//! let signer = SignerData::new("meridian-1", 7, 0);
//!
//! let bytes = registry
//!     .get_sign_bytes(SignMode::Direct, &signer, &tx)
//!     .unwrap();
//! assert!(!bytes.is_empty());
//! ```

pub mod doc;
pub mod error;
pub mod handler;
pub mod mode;
pub mod registry;
pub mod signer;
pub mod tx;

// Re-export the working set so callers don't have to memorize the module
// hierarchy for five types and a trait.
pub use doc::{sign_bytes, SignDoc};
pub use error::SignError;
pub use handler::canonical_json::CanonicalJsonHandler;
pub use handler::direct::DirectHandler;
pub use handler::SignModeHandler;
pub use mode::SignMode;
pub use registry::SignModeRegistry;
pub use signer::SignerData;
pub use tx::{RawTx, Tx, TxEnvelope};
