//! The message that invoked the current contract.

use wasmc_core::{host::ContextAccess, Address, U256};

use crate::context_cache::cached_context_getter;

cached_context_getter!(
    /// The address that sent the current call.
    sender,
    Address,
    |host| host.caller()
);

cached_context_getter!(
    /// The amount of wei sent along with the current call.
    value,
    U256,
    |host| host.call_value()
);
