//! # Wire-Format Registry
//!
//! Process-wide slot holding the current [`WireFormat`] implementation, so
//! encode/decode call sites do not need to be told explicitly which codec
//! to use.
//!
//! The slot starts unset ([`get_default`] returns `None`) and is normally
//! assigned once at startup, before worker threads spawn. Access is guarded
//! by an `RwLock`, so concurrent get/set calls are safe; the last write
//! wins.

use crate::wire_format::WireFormat;
use std::sync::{Arc, PoisonError, RwLock};

static DEFAULT_WIRE_FORMAT: RwLock<Option<Arc<dyn WireFormat>>> = RwLock::new(None);

/// Register `format` as the process-wide default wire format.
///
/// Overwrites any previously registered instance.
pub fn set_default(format: Arc<dyn WireFormat>) {
    tracing::debug!("registering default wire format");
    let mut slot = DEFAULT_WIRE_FORMAT
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *slot = Some(format);
}

/// The currently registered wire format, or `None` if none has been
/// registered yet.
///
/// The returned handle is the same instance passed to [`set_default`]
/// (shared via `Arc`), not a copy.
pub fn get_default() -> Option<Arc<dyn WireFormat>> {
    DEFAULT_WIRE_FORMAT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Unset the process-wide wire format, restoring the initial state.
///
/// Intended for tests and controlled teardown.
pub fn clear_default() {
    let mut slot = DEFAULT_WIRE_FORMAT
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *slot = None;
}
