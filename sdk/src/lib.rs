//! Core of a smart-contract authoring library for a WebAssembly-based
//! EVM-compatible execution environment: `U256`, the ABI codec, the
//! storage engine, the host-import bindings, and the outbound-call API.
//! `#![no_std]` + `alloc`: a contract is a `wasm32-unknown-unknown` binary
//! linked against this crate, with no host operating system underneath it.
#![no_std]

extern crate alloc;

use alloc::vec::Vec;

pub use wasmc_core as core_types;
pub use wasmc_core::{Address, Error, U256};

pub mod abi;
pub mod block;
pub mod call;
pub mod contract;
pub mod debug;
pub mod evm;
pub mod hex;
pub mod msg;
pub mod storage;
pub mod tx;

pub mod host;

mod context_cache;
mod hostio;

/// Re-exported so a contract crate only needs one `dev-dependencies` entry
/// (on `wasmc-sdk` itself, with the `wasmc-test` feature on) to get an
/// in-memory mock host for its own unit tests, instead of also naming
/// `wasmc-test` directly.
#[cfg(feature = "wasmc-test")]
pub use wasmc_test;

use wasmc_core::host::{CalldataAccess, TerminateAccess};
use host::WasmHost;

/// Copies the full inbound calldata out, given its length (as reported by
/// the host to the entrypoint export).
pub fn args(len: usize) -> Vec<u8> {
    WasmHost.read_args(len)
}

/// Writes `data` out as the successful return value and halts. Does not
/// return, matching the host `finish` import's terminal contract.
pub fn output(data: Vec<u8>) -> ! {
    WasmHost.finish(&data)
}

/// Declares the `wasm32` export the host calls to invoke a contract.
///
/// `$name` must be a function `fn(Vec<u8>) -> Result<Vec<u8>, wasmc_core::Error>`:
/// the inbound calldata in, the ABI-encoded return value or an error out.
/// `Ok` is written via the host's `finish` import; `Err` is converted to
/// its revert-message bytes and written via `revert`. Both are terminal:
/// nothing in `$name` runs again after this macro's generated export
/// returns control to the host.
#[macro_export]
macro_rules! entrypoint {
    ($name:expr) => {
        #[no_mangle]
        pub extern "C" fn wasmc_main(len: usize) {
            let input = $crate::args(len);
            match $name(input) {
                Ok(data) => $crate::output(data),
                Err(err) => {
                    use wasmc_core::host::TerminateAccess as _;
                    $crate::host::WasmHost.revert(&err.message())
                }
            }
        }
    };
}

#[cfg(all(target_arch = "wasm32", feature = "mini-alloc"))]
#[global_allocator]
static ALLOCATOR: mini_alloc::MiniAlloc = mini_alloc::MiniAlloc::INIT;

#[cfg(target_arch = "wasm32")]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    use alloc::format;
    use wasmc_core::host::TerminateAccess;
    let message = format!("{info}");
    WasmHost.revert(message.as_bytes())
}
