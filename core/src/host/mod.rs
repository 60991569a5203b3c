//! Defines the narrow host-import surface a contract program is linked
//! against, as a composition of small traits rather than one monolithic
//! interface. Splitting it this way keeps each sub-trait mockable on its
//! own and matches the "model as a trait whose methods take borrowed byte
//! slices" redesign: no trait method here takes a raw pointer, and none of
//! them memoize a result beyond the lifetime of a single call.
//!
//! Real contract code is linked against [`crate::Host`] through whichever
//! concrete implementation its target provides (the `wasm32` guest
//! implementation lives in `wasmc-sdk`; an in-memory mock lives in
//! `wasmc-test`). Nothing in this module is wasm-specific.

extern crate alloc;

use alloc::vec::Vec;

use crate::{Address, Error, U256};

/// The full host surface a contract program may use.
pub trait Host:
    CryptoAccess
    + CalldataAccess
    + StorageAccess
    + CallAccess
    + DeploymentAccess
    + ContextAccess
    + AccountAccess
    + LogAccess
    + TerminateAccess
    + DebugAccess
{
}

/// Gives a type that owns or references a [`Host`] access to it. Contract
/// storage types that need host access (to hash a mapping key, say)
/// implement this rather than reaching for a process-wide global.
pub trait HostAccess<H: Host> {
    fn vm(&self) -> &H;
}

/// `keccak256` and `sha256`, the two hash primitives named by the host
/// import ABI.
pub trait CryptoAccess {
    fn native_keccak256(&self, input: &[u8]) -> [u8; 32];
    fn native_sha256(&self, input: &[u8]) -> [u8; 32];
}

/// Inbound calldata and outbound return-data access.
pub trait CalldataAccess {
    /// Total length of the inbound calldata (`getCallDataSize`).
    fn args_len(&self) -> usize;
    /// Copies the full inbound calldata out (`callDataCopy` over the whole range).
    fn read_args(&self, len: usize) -> Vec<u8>;
    /// Size of the most recent outbound call's return data (`getReturnDataSize`).
    fn return_data_size(&self) -> usize;
    /// Copies `size` bytes of the most recent return data starting at `offset`
    /// (`returnDataCopy`). `size = None` means "to the end".
    fn read_return_data(&self, offset: usize, size: Option<usize>) -> Vec<u8>;
}

/// Persistent and transient key-value storage. Both tiers share this trait;
/// the `transient_*` methods address a separate store that a host resets at
/// the end of each transaction.
pub trait StorageAccess {
    fn storage_load(&self, key: U256) -> [u8; 32];
    fn storage_store(&self, key: U256, value: [u8; 32]);
    fn transient_load(&self, key: U256) -> [u8; 32];
    fn transient_store(&self, key: U256, value: [u8; 32]);
}

/// The four outbound call flavors, each returning the raw host status code
/// (`0` on success) and writing the length of whatever return data is now
/// available via `outs_len`. Friendly `Result`-returning wrappers live in
/// `wasmc-sdk::call`; this trait only exposes the unified primitive.
///
/// # Safety
/// Implementations read and write raw host-exposed buffers; callers must
/// not rely on storage reads made before the call observing writes made by
/// the callee without an explicit reload (reentrancy is the caller's
/// concern, not this trait's).
pub unsafe trait CallAccess {
    unsafe fn call_contract(
        &self,
        to: Address,
        data: &[u8],
        value: U256,
        gas: u64,
        outs_len: &mut usize,
    ) -> u8;

    unsafe fn call_code_contract(
        &self,
        to: Address,
        data: &[u8],
        value: U256,
        gas: u64,
        outs_len: &mut usize,
    ) -> u8;

    unsafe fn delegate_call_contract(
        &self,
        to: Address,
        data: &[u8],
        gas: u64,
        outs_len: &mut usize,
    ) -> u8;

    unsafe fn static_call_contract(
        &self,
        to: Address,
        data: &[u8],
        gas: u64,
        outs_len: &mut usize,
    ) -> u8;
}

/// `createContract`, unified over CREATE (no salt) and CREATE2 (with salt).
///
/// # Safety
/// `contract` is written on success; on failure the revert data can be
/// retrieved through [`CalldataAccess::read_return_data`].
pub unsafe trait DeploymentAccess {
    unsafe fn create1(&self, code: &[u8], endowment: U256, contract: &mut Address) -> Option<()>;
    unsafe fn create2(
        &self,
        code: &[u8],
        endowment: U256,
        salt: [u8; 32],
        contract: &mut Address,
    ) -> Option<()>;
}

/// Caller, message, block, and chain context getters. None of these are
/// cached by the trait itself: implementations that want invocation-scoped
/// memoization (everything here except [`ContextAccess::gas_left`], which
/// changes between calls and must never be cached) do so above this trait.
pub trait ContextAccess {
    fn contract_address(&self) -> Address;
    fn caller(&self) -> Address;
    fn call_value(&self) -> U256;
    fn tx_origin(&self) -> Address;
    fn tx_gas_price(&self) -> U256;
    fn block_number(&self) -> u64;
    fn block_timestamp(&self) -> u64;
    fn block_coinbase(&self) -> Address;
    fn block_gas_limit(&self) -> u64;
    fn block_hash(&self, number: u64) -> [u8; 32];
    fn block_prevrandao(&self) -> [u8; 32];
    fn base_fee(&self) -> U256;
    fn blob_base_fee(&self) -> U256;
    fn chain_id(&self) -> u64;
    /// Gas remaining in the current invocation. Time-varying: never cache this.
    fn gas_left(&self) -> u64;
}

/// Account introspection for an arbitrary address, plus this contract's own code.
pub trait AccountAccess {
    fn external_balance(&self, account: Address) -> U256;
    fn external_code_hash(&self, account: Address) -> [u8; 32];
    fn external_code_size(&self, account: Address) -> usize;
    fn external_code(&self, account: Address) -> Vec<u8>;
    fn code_size(&self) -> usize;
    fn code(&self) -> Vec<u8>;
}

/// Event log emission.
pub trait LogAccess {
    /// `topics.len()` must be at most 4; implementations may panic otherwise.
    fn emit_log(&self, data: &[u8], topics: &[[u8; 32]]);
}

/// The three "does not return" host calls. Anything downstream of one of
/// these methods is unreachable, matching the terminal-sink design used
/// for error propagation (see [`crate::Error`]).
pub trait TerminateAccess {
    fn finish(&self, data: &[u8]) -> !;
    fn revert(&self, data: &[u8]) -> !;
    fn self_destruct(&self, beneficiary: Address) -> !;
}

/// Debug-build console logging; compiled out entirely in release builds of
/// real contract code, but always present for the mock host so tests can
/// assert on it.
pub trait DebugAccess {
    fn debug_print(&self, message: &str);
}
