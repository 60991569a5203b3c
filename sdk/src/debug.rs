//! Debug-build console logging. Compiled to a no-op unless the `debug`
//! feature is enabled, since the host ABI already provides the logging
//! primitive (`debug_bytes` in debug builds, `emitLogEvent` for real
//! on-chain event logs), so this crate does not pull in a separate logging
//! facade for the `wasm32` guest target.

extern crate alloc;

use wasmc_core::host::DebugAccess;

use crate::host::WasmHost;

/// Writes a line to the host's debug console. A no-op unless the `debug`
/// feature is enabled.
pub fn println(message: &str) {
    WasmHost.debug_print(message);
}

/// Formats and writes a line to the host's debug console, `format!`-style.
/// A no-op unless the `debug` feature is enabled.
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        $crate::debug::println(&alloc::format!($($arg)*))
    };
}
