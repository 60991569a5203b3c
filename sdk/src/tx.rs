//! Transaction-level context getters.

use wasmc_core::{host::ContextAccess, Address, U256};

use crate::context_cache::cached_context_getter;

cached_context_getter!(
    /// The original sender of the transaction (as opposed to [`crate::msg::sender`],
    /// which is the immediate caller).
    origin,
    Address,
    |host| host.tx_origin()
);

cached_context_getter!(
    /// The gas price of the transaction.
    gas_price,
    U256,
    |host| host.tx_gas_price()
);
