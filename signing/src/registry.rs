//! Mode registry and dispatcher.
//!
//! [`SignModeRegistry`] is the wiring point of this crate: the application
//! builds one at startup from every handler it supports, then shares it
//! (typically behind an `Arc`) with everything that signs or verifies. It is
//! a pure lookup table — no state machine, no interior mutability, nothing
//! to lock. Concurrent callers are free to hammer it from as many threads as
//! they like.
//!
//! The registry itself implements [`SignModeHandler`], so code written
//! against "a handler" accepts a whole registry without knowing the
//! difference.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::error::SignError;
use crate::handler::SignModeHandler;
use crate::mode::SignMode;
use crate::signer::SignerData;
use crate::tx::Tx;

/// Immutable mode → handler dispatch table.
pub struct SignModeRegistry {
    default_mode: SignMode,
    handlers: BTreeMap<SignMode, Box<dyn SignModeHandler>>,
    // Cached key list so `modes()` can hand out a slice without allocating
    // per call. Kept in BTreeMap order: sorted, duplicate-free.
    modes: Vec<SignMode>,
}

impl std::fmt::Debug for SignModeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignModeRegistry")
            .field("default_mode", &self.default_mode)
            .field("modes", &self.modes)
            .finish_non_exhaustive()
    }
}

impl SignModeRegistry {
    /// Builds the dispatch table from a default mode and a set of handlers.
    ///
    /// Each handler is registered under every mode it declares via
    /// [`SignModeHandler::modes`]. If two handlers declare the same mode,
    /// the later one in `handlers` wins — pass them in priority order.
    ///
    /// Fails with [`SignError::UnsupportedMode`] when no handler covers
    /// `default_mode` (which also covers the empty-handler-set case): a
    /// registry whose preferred mode it cannot serve is a wiring bug, and
    /// we'd rather hear about it at startup than at signing time.
    pub fn new(
        default_mode: SignMode,
        handlers: Vec<Box<dyn SignModeHandler>>,
    ) -> Result<Self, SignError> {
        let mut table: BTreeMap<SignMode, Box<dyn SignModeHandler>> = BTreeMap::new();
        for handler in handlers {
            // A handler owns its slot for every mode it declares. Single-mode
            // handlers (the normal case) move straight in; a handler serving
            // several modes occupies all of them through shared ownership.
            let declared = handler.modes().to_vec();
            match declared.as_slice() {
                [] => continue,
                [single] => {
                    trace!(mode = %single, "registering sign-mode handler");
                    table.insert(*single, handler);
                }
                many => {
                    let shared: std::sync::Arc<dyn SignModeHandler> = handler.into();
                    for &mode in many {
                        trace!(mode = %mode, "registering sign-mode handler");
                        table.insert(mode, Box::new(SharedHandler(shared.clone())));
                    }
                }
            }
        }

        if !table.contains_key(&default_mode) {
            return Err(SignError::UnsupportedMode(default_mode));
        }

        let modes: Vec<SignMode> = table.keys().copied().collect();
        debug!(default_mode = %default_mode, count = modes.len(), "sign-mode registry built");

        Ok(Self {
            default_mode,
            handlers: table,
            modes,
        })
    }
}

impl SignModeHandler for SignModeRegistry {
    fn default_mode(&self) -> SignMode {
        self.default_mode
    }

    fn modes(&self) -> &[SignMode] {
        &self.modes
    }

    fn get_sign_bytes(
        &self,
        mode: SignMode,
        data: &SignerData,
        tx: &dyn Tx,
    ) -> Result<Vec<u8>, SignError> {
        let handler = self
            .handlers
            .get(&mode)
            .ok_or(SignError::UnsupportedMode(mode))?;
        handler.get_sign_bytes(mode, data, tx)
    }
}

/// Adapter letting one multi-mode handler occupy several table slots.
struct SharedHandler(std::sync::Arc<dyn SignModeHandler>);

impl SignModeHandler for SharedHandler {
    fn default_mode(&self) -> SignMode {
        self.0.default_mode()
    }

    fn modes(&self) -> &[SignMode] {
        self.0.modes()
    }

    fn get_sign_bytes(
        &self,
        mode: SignMode,
        data: &SignerData,
        tx: &dyn Tx,
    ) -> Result<Vec<u8>, SignError> {
        self.0.get_sign_bytes(mode, data, tx)
    }
}
