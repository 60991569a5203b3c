//! Block context getters.

use wasmc_core::{host::ContextAccess, Address, U256};

use crate::context_cache::cached_context_getter;
use crate::host::WasmHost;

cached_context_getter!(
    /// The current block number.
    number,
    u64,
    |host| host.block_number()
);

cached_context_getter!(
    /// The current block's Unix timestamp.
    timestamp,
    u64,
    |host| host.block_timestamp()
);

cached_context_getter!(
    /// The current block's coinbase (fee recipient) address.
    coinbase,
    Address,
    |host| host.block_coinbase()
);

cached_context_getter!(
    /// The current block's gas limit.
    gas_limit,
    u64,
    |host| host.block_gas_limit()
);

cached_context_getter!(
    /// The current block's base fee per gas.
    basefee,
    U256,
    |host| host.base_fee()
);

cached_context_getter!(
    /// The current block's blob base fee.
    blob_basefee,
    U256,
    |host| host.blob_base_fee()
);

cached_context_getter!(
    /// The chain id of the network executing this contract.
    chainid,
    u64,
    |host| host.chain_id()
);

/// The hash of a historical block. Not cached: the argument varies per call.
pub fn hash(number: u64) -> [u8; 32] {
    WasmHost.block_hash(number)
}

/// `PREVRANDAO` for the current block.
pub fn prevrandao() -> [u8; 32] {
    WasmHost.block_prevrandao()
}
