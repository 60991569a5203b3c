//! The concrete `wasm32` guest [`wasmc_core::Host`] implementation.

mod wasm;

pub use wasm::WasmHost;
