//! EVM-level primitives that do not fit `msg`/`block`/`tx`/`contract`:
//! gas accounting, event logs, and the two hash functions.

extern crate alloc;

use alloc::vec::Vec;

use wasmc_core::host::{ContextAccess, CryptoAccess, LogAccess};

use crate::host::WasmHost;

/// Gas remaining in the current invocation. Always re-read from the host:
/// caching this would be observably wrong, since it changes on every
/// instruction.
pub fn gas_left() -> u64 {
    WasmHost.gas_left()
}

/// Hashes `data` with the host's native `keccak256`.
pub fn keccak256(data: impl AsRef<[u8]>) -> [u8; 32] {
    WasmHost.native_keccak256(data.as_ref())
}

/// Hashes `data` with the host's native `sha256`.
pub fn sha256(data: impl AsRef<[u8]>) -> [u8; 32] {
    WasmHost.native_sha256(data.as_ref())
}

/// Emits a log with up to 4 topics and an arbitrary data payload.
///
/// Returns [`wasmc_core::Error::DataTooShort`] is never produced here;
/// the only failure mode is supplying more than 4 topics, which is a
/// programmer error and panics rather than being recoverable, matching
/// the host import's own hard limit.
pub fn raw_log(topics: &[[u8; 32]], data: &[u8]) {
    assert!(topics.len() <= 4, "a log may carry at most 4 topics");
    WasmHost.emit_log(data, topics);
}

/// Builds and emits a log from an already-ABI-encoded event payload and its
/// topics (selector hash first, then indexed fields).
pub fn log(topics: &[[u8; 32]], data: Vec<u8>) {
    raw_log(topics, &data);
}
