//! The current contract's own identity and code, plus `require` and
//! `self_destruct` convenience wrappers.

extern crate alloc;

use alloc::vec::Vec;

use wasmc_core::host::{AccountAccess, ContextAccess, TerminateAccess};
use wasmc_core::Address;

use crate::context_cache::cached_context_getter;
use crate::host::WasmHost;

cached_context_getter!(
    /// This contract's own address.
    address,
    Address,
    |host| host.contract_address()
);

/// The size in bytes of this contract's own deployed code.
pub fn code_size() -> usize {
    WasmHost.code_size()
}

/// This contract's own deployed code.
pub fn code() -> Vec<u8> {
    WasmHost.code()
}

/// Reverts the current invocation with `message` unless `condition` holds.
pub fn require(condition: bool, message: &str) {
    if !condition {
        WasmHost.revert(message.as_bytes());
    }
}

/// Destroys the current contract, sending its remaining balance to
/// `beneficiary`. Like `finish`/`revert`, this does not return.
pub fn self_destruct(beneficiary: Address) -> ! {
    WasmHost.self_destruct(beneficiary)
}
