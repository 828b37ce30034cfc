//! Sign-mode tags.
//!
//! A [`SignMode`] names an encoding strategy: given the same transaction and
//! signer context, each mode produces a different (but equally binding) byte
//! sequence to sign. The discriminants are wire-stable — they appear in
//! signer metadata on the network, so they are assigned once and never
//! reused, even for retired modes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The encoding strategy used to produce sign bytes.
///
/// Adding a mode means adding a variant here and shipping a handler for it;
/// existing handlers are never touched. Holes in the discriminant space are
/// deliberate — `CanonicalJson` sits at 127 to keep the low range free for
/// future machine-verifiable modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i32)]
pub enum SignMode {
    /// Unknown or unset. Always rejected; exists so a zero-valued tag read
    /// off the wire cannot masquerade as a real mode.
    Unspecified = 0,
    /// Sign the protobuf [`SignDoc`](crate::SignDoc) over the transaction's
    /// raw wire bytes. The default, and the only mode a verifier can check
    /// without re-encoding anything.
    Direct = 1,
    /// Human-readable textual rendering. Declared for wire compatibility;
    /// no handler ships in this crate yet.
    Textual = 2,
    /// Fixed-field JSON document with hex-encoded byte regions. Kept for
    /// signers that cannot produce protobuf (hardware wallets, airgapped
    /// tooling).
    CanonicalJson = 127,
}

impl SignMode {
    /// Stable wire name, matching the network's protobuf schema.
    pub const fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "SIGN_MODE_UNSPECIFIED",
            Self::Direct => "SIGN_MODE_DIRECT",
            Self::Textual => "SIGN_MODE_TEXTUAL",
            Self::CanonicalJson => "SIGN_MODE_CANONICAL_JSON",
        }
    }

    /// Decodes a wire discriminant. Returns `None` for values this build
    /// does not know about — callers decide whether that is an error or a
    /// forward-compatibility shrug.
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Unspecified),
            1 => Some(Self::Direct),
            2 => Some(Self::Textual),
            127 => Some(Self::CanonicalJson),
            _ => None,
        }
    }
}

impl fmt::Display for SignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str_name())
    }
}
