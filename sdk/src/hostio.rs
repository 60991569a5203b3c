//! Raw bindings to the host import surface, plus the `vm_hooks!`-style
//! macro that declares them.
//!
//! Every buffer argument here is a raw `(pointer, length)` pair; nothing in
//! this module allocates or copies on the caller's behalf — that is
//! [`crate::host::wasm::WasmHost`]'s job. Off the `wasm32` target (plain
//! `cargo check`/doc builds, or this crate compiled as a dependency of a
//! host-side tool) the import block is replaced with stubs that panic if
//! ever actually called, so the crate still type-checks without a wasm
//! linker available.

macro_rules! host_imports {
    ($($(#[$meta:meta])* fn $name:ident($($arg:ident: $arg_ty:ty),*) $(-> $ret:ty)?;)*) => {
        cfg_if::cfg_if! {
            if #[cfg(target_arch = "wasm32")] {
                #[link(wasm_import_module = "wasmc_host")]
                extern "C" {
                    $($(#[$meta])* pub(crate) fn $name($($arg: $arg_ty),*) $(-> $ret)?;)*
                }
            } else {
                $(
                    #[allow(unused_variables)]
                    pub(crate) unsafe fn $name($($arg: $arg_ty),*) $(-> $ret)? {
                        unimplemented!(concat!("host import `", stringify!($name), "` is only available on wasm32"))
                    }
                )*
            }
        }
    };
}

host_imports! {
    // context
    fn get_address(result_offset: *mut u8);
    fn get_caller(result_offset: *mut u8);
    fn get_call_value(result_offset: *mut u8);
    fn get_call_data_size() -> usize;
    fn call_data_copy(result_offset: *mut u8, data_offset: usize, length: usize);
    fn get_tx_origin(result_offset: *mut u8);
    fn get_block_number() -> u64;
    fn get_block_timestamp() -> u64;
    fn get_block_coinbase(result_offset: *mut u8);
    fn get_block_gas_limit() -> u64;
    fn get_block_hash(number: u64, result_offset: *mut u8);
    fn get_block_prevrandao(result_offset: *mut u8);
    fn get_tx_gas_price(result_offset: *mut u8);
    fn get_base_fee(result_offset: *mut u8);
    fn get_blob_base_fee(result_offset: *mut u8);
    fn get_chain_id() -> u64;
    fn get_gas_left() -> u64;
    fn get_external_balance(address_offset: *const u8, result_offset: *mut u8);
    fn get_external_code_hash(address_offset: *const u8, result_offset: *mut u8);
    fn get_code_size() -> usize;
    fn code_copy(result_offset: *mut u8, code_offset: usize, length: usize);
    fn get_external_code_size(address_offset: *const u8) -> usize;
    fn external_code_copy(address_offset: *const u8, result_offset: *mut u8, code_offset: usize, length: usize);

    // storage
    fn storage_load(key_offset: *const u8, result_offset: *mut u8);
    fn storage_store(key_offset: *const u8, value_offset: *const u8);
    fn transient_load(key_offset: *const u8, result_offset: *mut u8);
    fn transient_store(key_offset: *const u8, value_offset: *const u8);

    // calls
    fn call_contract(
        gas: u64,
        address_offset: *const u8,
        value_offset: *const u8,
        data_offset: *const u8,
        data_length: usize,
        outs_len: *mut usize
    ) -> u8;
    fn call_code(
        gas: u64,
        address_offset: *const u8,
        value_offset: *const u8,
        data_offset: *const u8,
        data_length: usize,
        outs_len: *mut usize
    ) -> u8;
    fn call_delegate(
        gas: u64,
        address_offset: *const u8,
        data_offset: *const u8,
        data_length: usize,
        outs_len: *mut usize
    ) -> u8;
    fn call_static(
        gas: u64,
        address_offset: *const u8,
        data_offset: *const u8,
        data_length: usize,
        outs_len: *mut usize
    ) -> u8;
    fn create_contract(
        value_offset: *const u8,
        code_offset: *const u8,
        code_length: usize,
        salt_offset: *const u8,
        is_create2: u8,
        result_address_offset: *mut u8
    ) -> u8;

    // return / log / terminate
    fn get_return_data_size() -> usize;
    fn return_data_copy(result_offset: *mut u8, data_offset: usize, length: usize);
    fn finish(data_offset: *const u8, length: usize);
    fn revert(data_offset: *const u8, length: usize);
    fn emit_log_event(
        data_offset: *const u8,
        data_length: usize,
        num_topics: usize,
        topic1: *const u8,
        topic2: *const u8,
        topic3: *const u8,
        topic4: *const u8
    );
    fn self_destruct(address_offset: *const u8);

    // hashing
    fn keccak256(input_offset: *const u8, input_length: usize, result_offset: *mut u8);
    fn sha256(input_offset: *const u8, input_length: usize, result_offset: *mut u8);

    // debug
    fn debug_bytes(data_offset: *const u8, length: usize);
}
