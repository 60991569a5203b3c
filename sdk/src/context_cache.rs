//! Invocation-scoped memoization for the handful of context getters that
//! are genuinely constant for the lifetime of one host invocation.
//!
//! `gas_left` is deliberately never routed through this macro: it changes
//! between calls, and caching it would observably lie to the contract.
//! Execution is strictly single-threaded within one invocation (see the
//! concurrency model), so a `static mut` cache cell is sound here; nothing
//! ever runs concurrently with it.

/// Declares a free function that returns a context value, backed by a
/// process-wide (but invocation-scoped, by construction) cache cell.
///
/// ```ignore
/// cached_context_getter!(number, u64, |host| host.block_number());
/// ```
macro_rules! cached_context_getter {
    ($(#[$meta:meta])* $name:ident, $ty:ty, $getter:expr) => {
        $(#[$meta])*
        pub fn $name() -> $ty {
            static mut CACHE: Option<$ty> = None;
            // SAFETY: the guest is single-threaded within one invocation
            // (see the concurrency model); there is never a concurrent
            // access to this cell.
            unsafe {
                if let Some(value) = CACHE {
                    return value;
                }
                let host = crate::host::WasmHost;
                let getter: fn(&crate::host::WasmHost) -> $ty = $getter;
                let value = getter(&host);
                CACHE = Some(value);
                value
            }
        }
    };
}

pub(crate) use cached_context_getter;
