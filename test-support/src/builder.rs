//! A builder for constructing a pre-configured [`crate::TestHost`].

use wasmc_core::{Address, U256};

use crate::host::TestHost;
use crate::state::HostState;

/// Convenience configuration surface for [`TestHost`], covering the fields
/// a test usually wants to set up before exercising contract logic. Any
/// field not set here can still be adjusted afterwards through the
/// corresponding `TestHost::set_*` method.
///
/// # Examples
/// ```
/// use wasmc_test::TestHostBuilder;
/// use wasmc_core::Address;
///
/// let host = TestHostBuilder::new()
///     .sender(Address::new([1u8; 20]))
///     .contract_address(Address::new([2u8; 20]))
///     .block_number(100)
///     .build();
/// ```
#[derive(Default)]
pub struct TestHostBuilder {
    sender: Option<Address>,
    contract_address: Option<Address>,
    call_value: Option<U256>,
    chain_id: Option<u64>,
    block_number: Option<u64>,
    block_timestamp: Option<u64>,
    gas_left: Option<u64>,
    calldata: Option<Vec<u8>>,
    storage_overrides: Option<Vec<(U256, [u8; 32])>>,
}

impl TestHostBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sender(mut self, sender: Address) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn contract_address(mut self, address: Address) -> Self {
        self.contract_address = Some(address);
        self
    }

    pub fn call_value(mut self, value: U256) -> Self {
        self.call_value = Some(value);
        self
    }

    pub fn chain_id(mut self, id: u64) -> Self {
        self.chain_id = Some(id);
        self
    }

    pub fn block_number(mut self, number: u64) -> Self {
        self.block_number = Some(number);
        self
    }

    pub fn block_timestamp(mut self, timestamp: u64) -> Self {
        self.block_timestamp = Some(timestamp);
        self
    }

    pub fn gas_left(mut self, gas: u64) -> Self {
        self.gas_left = Some(gas);
        self
    }

    pub fn calldata(mut self, data: Vec<u8>) -> Self {
        self.calldata = Some(data);
        self
    }

    /// Pre-populates persistent storage slots. There is no RPC-fork
    /// equivalent (no network access from this crate); this is the only
    /// supported way to seed storage before a test runs.
    pub fn with_storage_overrides(mut self, slots: Vec<(U256, [u8; 32])>) -> Self {
        self.storage_overrides = Some(slots);
        self
    }

    pub fn build(self) -> TestHost {
        let mut state = HostState::default();
        if let Some(sender) = self.sender {
            state.sender = sender;
        }
        if let Some(address) = self.contract_address {
            state.contract_address = address;
        }
        if let Some(value) = self.call_value {
            state.call_value = value;
        }
        if let Some(id) = self.chain_id {
            state.chain_id = id;
        }
        if let Some(number) = self.block_number {
            state.block_number = number;
        }
        if let Some(timestamp) = self.block_timestamp {
            state.block_timestamp = timestamp;
        }
        if let Some(gas) = self.gas_left {
            state.gas_left = gas;
        }
        if let Some(data) = self.calldata {
            state.calldata = data;
        }
        if let Some(slots) = self.storage_overrides {
            for (key, value) in slots {
                state.storage.insert(key, value);
            }
        }
        TestHost::from(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasmc_core::host::ContextAccess;

    #[test]
    fn builder_applies_overrides() {
        let sender = Address::new([1u8; 20]);
        let contract = Address::new([2u8; 20]);
        let host = TestHostBuilder::new()
            .sender(sender)
            .contract_address(contract)
            .block_number(42)
            .with_storage_overrides(vec![(U256::from(5u8), [9u8; 32])])
            .build();

        assert_eq!(host.caller(), sender);
        assert_eq!(host.contract_address(), contract);
        assert_eq!(host.block_number(), 42);
        assert_eq!(host.get_storage(U256::from(5u8)), [9u8; 32]);
    }
}
