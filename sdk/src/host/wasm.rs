//! The `wasm32` guest implementation of [`wasmc_core::Host`]: every method
//! here is a thin, allocating wrapper over the raw imports in
//! [`crate::hostio`]. This is the only place in the crate that touches a
//! raw pointer.

extern crate alloc;

use alloc::vec::Vec;

use wasmc_core::{host::*, Address, U256};

use crate::hostio;

/// The default [`Host`] for contract programs compiled to `wasm32-unknown-unknown`.
#[derive(Clone, Copy, Default)]
pub struct WasmHost;

impl Host for WasmHost {}

impl CryptoAccess for WasmHost {
    fn native_keccak256(&self, input: &[u8]) -> [u8; 32] {
        let mut out = [0u8; 32];
        unsafe { hostio::keccak256(input.as_ptr(), input.len(), out.as_mut_ptr()) };
        out
    }

    fn native_sha256(&self, input: &[u8]) -> [u8; 32] {
        let mut out = [0u8; 32];
        unsafe { hostio::sha256(input.as_ptr(), input.len(), out.as_mut_ptr()) };
        out
    }
}

impl CalldataAccess for WasmHost {
    fn args_len(&self) -> usize {
        unsafe { hostio::get_call_data_size() }
    }

    fn read_args(&self, len: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(len);
        unsafe {
            hostio::call_data_copy(data.as_mut_ptr(), 0, len);
            data.set_len(len);
        }
        data
    }

    fn return_data_size(&self) -> usize {
        unsafe { hostio::get_return_data_size() }
    }

    fn read_return_data(&self, offset: usize, size: Option<usize>) -> Vec<u8> {
        let size = size.unwrap_or_else(|| self.return_data_size().saturating_sub(offset));
        let mut data = Vec::with_capacity(size);
        if size > 0 {
            unsafe {
                hostio::return_data_copy(data.as_mut_ptr(), offset, size);
                data.set_len(size);
            }
        }
        data
    }
}

impl StorageAccess for WasmHost {
    fn storage_load(&self, key: U256) -> [u8; 32] {
        let key = key.bytes();
        let mut out = [0u8; 32];
        unsafe { hostio::storage_load(key.as_ptr(), out.as_mut_ptr()) };
        out
    }

    fn storage_store(&self, key: U256, value: [u8; 32]) {
        let key = key.bytes();
        unsafe { hostio::storage_store(key.as_ptr(), value.as_ptr()) };
    }

    fn transient_load(&self, key: U256) -> [u8; 32] {
        let key = key.bytes();
        let mut out = [0u8; 32];
        unsafe { hostio::transient_load(key.as_ptr(), out.as_mut_ptr()) };
        out
    }

    fn transient_store(&self, key: U256, value: [u8; 32]) {
        let key = key.bytes();
        unsafe { hostio::transient_store(key.as_ptr(), value.as_ptr()) };
    }
}

unsafe impl CallAccess for WasmHost {
    unsafe fn call_contract(
        &self,
        to: Address,
        data: &[u8],
        value: U256,
        gas: u64,
        outs_len: &mut usize,
    ) -> u8 {
        let value = value.bytes();
        hostio::call_contract(
            gas,
            to.as_bytes().as_ptr(),
            value.as_ptr(),
            data.as_ptr(),
            data.len(),
            outs_len,
        )
    }

    unsafe fn call_code_contract(
        &self,
        to: Address,
        data: &[u8],
        value: U256,
        gas: u64,
        outs_len: &mut usize,
    ) -> u8 {
        let value = value.bytes();
        hostio::call_code(
            gas,
            to.as_bytes().as_ptr(),
            value.as_ptr(),
            data.as_ptr(),
            data.len(),
            outs_len,
        )
    }

    unsafe fn delegate_call_contract(
        &self,
        to: Address,
        data: &[u8],
        gas: u64,
        outs_len: &mut usize,
    ) -> u8 {
        hostio::call_delegate(gas, to.as_bytes().as_ptr(), data.as_ptr(), data.len(), outs_len)
    }

    unsafe fn static_call_contract(
        &self,
        to: Address,
        data: &[u8],
        gas: u64,
        outs_len: &mut usize,
    ) -> u8 {
        hostio::call_static(gas, to.as_bytes().as_ptr(), data.as_ptr(), data.len(), outs_len)
    }
}

unsafe impl DeploymentAccess for WasmHost {
    unsafe fn create1(&self, code: &[u8], endowment: U256, contract: &mut Address) -> Option<()> {
        let endowment = endowment.bytes();
        let mut out = [0u8; 20];
        let status = hostio::create_contract(
            endowment.as_ptr(),
            code.as_ptr(),
            code.len(),
            core::ptr::null(),
            0,
            out.as_mut_ptr(),
        );
        *contract = Address::new(out);
        (status == 0).then_some(())
    }

    unsafe fn create2(
        &self,
        code: &[u8],
        endowment: U256,
        salt: [u8; 32],
        contract: &mut Address,
    ) -> Option<()> {
        let endowment = endowment.bytes();
        let mut out = [0u8; 20];
        let status = hostio::create_contract(
            endowment.as_ptr(),
            code.as_ptr(),
            code.len(),
            salt.as_ptr(),
            1,
            out.as_mut_ptr(),
        );
        *contract = Address::new(out);
        (status == 0).then_some(())
    }
}

impl ContextAccess for WasmHost {
    fn contract_address(&self) -> Address {
        let mut buf = [0u8; 20];
        unsafe { hostio::get_address(buf.as_mut_ptr()) };
        Address::new(buf)
    }

    fn caller(&self) -> Address {
        let mut buf = [0u8; 20];
        unsafe { hostio::get_caller(buf.as_mut_ptr()) };
        Address::new(buf)
    }

    fn call_value(&self) -> U256 {
        let mut buf = [0u8; 32];
        unsafe { hostio::get_call_value(buf.as_mut_ptr()) };
        U256::from_be_bytes(buf)
    }

    fn tx_origin(&self) -> Address {
        let mut buf = [0u8; 20];
        unsafe { hostio::get_tx_origin(buf.as_mut_ptr()) };
        Address::new(buf)
    }

    fn tx_gas_price(&self) -> U256 {
        let mut buf = [0u8; 32];
        unsafe { hostio::get_tx_gas_price(buf.as_mut_ptr()) };
        U256::from_be_bytes(buf)
    }

    fn block_number(&self) -> u64 {
        unsafe { hostio::get_block_number() }
    }

    fn block_timestamp(&self) -> u64 {
        unsafe { hostio::get_block_timestamp() }
    }

    fn block_coinbase(&self) -> Address {
        let mut buf = [0u8; 20];
        unsafe { hostio::get_block_coinbase(buf.as_mut_ptr()) };
        Address::new(buf)
    }

    fn block_gas_limit(&self) -> u64 {
        unsafe { hostio::get_block_gas_limit() }
    }

    fn block_hash(&self, number: u64) -> [u8; 32] {
        let mut buf = [0u8; 32];
        unsafe { hostio::get_block_hash(number, buf.as_mut_ptr()) };
        buf
    }

    fn block_prevrandao(&self) -> [u8; 32] {
        let mut buf = [0u8; 32];
        unsafe { hostio::get_block_prevrandao(buf.as_mut_ptr()) };
        buf
    }

    fn base_fee(&self) -> U256 {
        let mut buf = [0u8; 32];
        unsafe { hostio::get_base_fee(buf.as_mut_ptr()) };
        U256::from_be_bytes(buf)
    }

    fn blob_base_fee(&self) -> U256 {
        let mut buf = [0u8; 32];
        unsafe { hostio::get_blob_base_fee(buf.as_mut_ptr()) };
        U256::from_be_bytes(buf)
    }

    fn chain_id(&self) -> u64 {
        unsafe { hostio::get_chain_id() }
    }

    fn gas_left(&self) -> u64 {
        unsafe { hostio::get_gas_left() }
    }
}

impl AccountAccess for WasmHost {
    fn external_balance(&self, account: Address) -> U256 {
        let mut buf = [0u8; 32];
        unsafe { hostio::get_external_balance(account.as_bytes().as_ptr(), buf.as_mut_ptr()) };
        U256::from_be_bytes(buf)
    }

    fn external_code_hash(&self, account: Address) -> [u8; 32] {
        let mut buf = [0u8; 32];
        unsafe { hostio::get_external_code_hash(account.as_bytes().as_ptr(), buf.as_mut_ptr()) };
        buf
    }

    fn external_code_size(&self, account: Address) -> usize {
        unsafe { hostio::get_external_code_size(account.as_bytes().as_ptr()) }
    }

    fn external_code(&self, account: Address) -> Vec<u8> {
        let len = self.external_code_size(account);
        let mut data = Vec::with_capacity(len);
        unsafe {
            hostio::external_code_copy(account.as_bytes().as_ptr(), data.as_mut_ptr(), 0, len);
            data.set_len(len);
        }
        data
    }

    fn code_size(&self) -> usize {
        unsafe { hostio::get_code_size() }
    }

    fn code(&self) -> Vec<u8> {
        let len = self.code_size();
        let mut data = Vec::with_capacity(len);
        unsafe {
            hostio::code_copy(data.as_mut_ptr(), 0, len);
            data.set_len(len);
        }
        data
    }
}

impl LogAccess for WasmHost {
    fn emit_log(&self, data: &[u8], topics: &[[u8; 32]]) {
        assert!(topics.len() <= 4, "a log may carry at most 4 topics");
        let mut ptrs: [*const u8; 4] = [core::ptr::null(); 4];
        for (i, topic) in topics.iter().enumerate() {
            ptrs[i] = topic.as_ptr();
        }
        unsafe {
            hostio::emit_log_event(
                data.as_ptr(),
                data.len(),
                topics.len(),
                ptrs[0],
                ptrs[1],
                ptrs[2],
                ptrs[3],
            )
        };
    }
}

impl TerminateAccess for WasmHost {
    fn finish(&self, data: &[u8]) -> ! {
        unsafe { hostio::finish(data.as_ptr(), data.len()) };
        unreachable_after_host_exit()
    }

    fn revert(&self, data: &[u8]) -> ! {
        unsafe { hostio::revert(data.as_ptr(), data.len()) };
        unreachable_after_host_exit()
    }

    fn self_destruct(&self, beneficiary: Address) -> ! {
        unsafe { hostio::self_destruct(beneficiary.as_bytes().as_ptr()) };
        unreachable_after_host_exit()
    }
}

impl DebugAccess for WasmHost {
    fn debug_print(&self, message: &str) {
        #[cfg(feature = "debug")]
        unsafe {
            hostio::debug_bytes(message.as_ptr(), message.len())
        };
        #[cfg(not(feature = "debug"))]
        let _ = message;
    }
}

/// `finish`/`revert`/`self_destruct` halt the guest instance at the host
/// level and never hand control back to the caller. This satisfies the
/// Rust type checker's `-> !` obligation for the rare case a host
/// implementation mistakenly returns anyway.
fn unreachable_after_host_exit() -> ! {
    #[cfg(target_arch = "wasm32")]
    core::arch::wasm32::unreachable();
    #[cfg(not(target_arch = "wasm32"))]
    unreachable!("host import that should have halted the guest returned control");
}
