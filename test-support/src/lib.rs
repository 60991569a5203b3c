//! In-memory mock [`wasmc_core::Host`] for unit testing contract logic
//! written against `wasmc_sdk`'s storage engine, ABI codec, and call API,
//! without a real `wasm32` guest or on-chain host underneath it.
//!
//! Everything a contract's business logic touches through `H: Host` (or one
//! of its narrower sub-traits) runs unmodified against [`TestHost`]: storage
//! reads/writes, `keccak256`/`sha256`, scripted outbound calls, and the
//! block/message context getters.

mod builder;
mod constants;
mod host;
mod state;

pub use builder::TestHostBuilder;
pub use constants::{DEFAULT_CHAIN_ID, DEFAULT_CONTRACT_ADDRESS, DEFAULT_GAS_LIMIT, DEFAULT_SENDER};
pub use host::TestHost;
pub use state::HostState;
