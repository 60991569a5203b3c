//! Defaults used by [`crate::TestHost`] when a [`crate::TestHostBuilder`]
//! field is left unset.

use wasmc_core::Address;

pub const DEFAULT_SENDER: Address = Address::new([0xde; 20]);
pub const DEFAULT_CONTRACT_ADDRESS: Address = Address::new([0xce; 20]);
pub const DEFAULT_CHAIN_ID: u64 = 1;
pub const DEFAULT_GAS_LIMIT: u64 = 30_000_000;
