//! [`TestHost`]: an in-memory [`wasmc_core::Host`] implementation for unit
//! testing contract logic without a real `wasm32` guest or on-chain host
//! underneath it.
//!
//! ```
//! use wasmc_test::TestHost;
//! use wasmc_core::host::StorageAccess;
//! use wasmc_core::U256;
//!
//! let host = TestHost::new();
//! host.storage_store(U256::from(1u8), [7u8; 32]);
//! assert_eq!(host.storage_load(U256::from(1u8)), [7u8; 32]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use sha2::{Digest, Sha256};
use tiny_keccak::{Hasher, Keccak};

use wasmc_core::host::{
    AccountAccess, CalldataAccess, CallAccess, ContextAccess, CryptoAccess, DebugAccess,
    DeploymentAccess, Host, LogAccess, StorageAccess, TerminateAccess,
};
use wasmc_core::{Address, U256};

use crate::state::HostState;

/// A cheap-to-clone handle onto shared in-memory host state. Clones share
/// the same state (via `Rc<RefCell<_>>`), matching how a single invocation's
/// host reference is threaded through contract code under test.
#[derive(Clone)]
pub struct TestHost {
    state: Rc<RefCell<HostState>>,
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HostState> for TestHost {
    fn from(state: HostState) -> Self {
        TestHost {
            state: Rc::new(RefCell::new(state)),
        }
    }
}

impl TestHost {
    pub fn new() -> Self {
        TestHost {
            state: Rc::new(RefCell::new(HostState::default())),
        }
    }

    /// A cloned snapshot of the internal state, for assertions.
    pub fn snapshot(&self) -> HostState {
        self.state.borrow().clone()
    }

    pub fn set_calldata(&self, data: Vec<u8>) {
        self.state.borrow_mut().calldata = data;
    }

    pub fn set_sender(&self, sender: Address) {
        self.state.borrow_mut().sender = sender;
    }

    pub fn set_contract_address(&self, address: Address) {
        self.state.borrow_mut().contract_address = address;
    }

    pub fn set_call_value(&self, value: U256) {
        self.state.borrow_mut().call_value = value;
    }

    pub fn set_tx_origin(&self, origin: Address) {
        self.state.borrow_mut().tx_origin = Some(origin);
    }

    pub fn set_tx_gas_price(&self, price: U256) {
        self.state.borrow_mut().tx_gas_price = price;
    }

    pub fn set_chain_id(&self, id: u64) {
        self.state.borrow_mut().chain_id = id;
    }

    pub fn set_block_number(&self, number: u64) {
        self.state.borrow_mut().block_number = number;
    }

    pub fn set_block_timestamp(&self, timestamp: u64) {
        self.state.borrow_mut().block_timestamp = timestamp;
    }

    pub fn set_block_hash(&self, number: u64, hash: [u8; 32]) {
        self.state.borrow_mut().block_hashes.insert(number, hash);
    }

    pub fn set_gas_left(&self, gas: u64) {
        self.state.borrow_mut().gas_left = gas;
    }

    pub fn set_balance(&self, account: Address, balance: U256) {
        self.state.borrow_mut().balances.insert(account, balance);
    }

    pub fn set_external_code(&self, account: Address, code: Vec<u8>) {
        self.state.borrow_mut().code_storage.insert(account, code);
    }

    pub fn set_own_code(&self, code: Vec<u8>) {
        self.state.borrow_mut().own_code = code;
    }

    pub fn get_storage(&self, key: U256) -> [u8; 32] {
        self.state.borrow().storage.get(&key).copied().unwrap_or([0u8; 32])
    }

    pub fn set_storage(&self, key: U256, value: [u8; 32]) {
        self.state.borrow_mut().storage.insert(key, value);
    }

    pub fn clear_storage(&self) {
        let mut state = self.state.borrow_mut();
        state.storage.clear();
        state.transient.clear();
    }

    /// Scripts the return value of a plain [`CallAccess::call_contract`]
    /// matching `to`/`data`/`value`.
    pub fn mock_call(&self, to: Address, data: Vec<u8>, value: U256, result: Result<Vec<u8>, Vec<u8>>) {
        self.state
            .borrow_mut()
            .call_returns
            .insert((to, data, value), result);
    }

    pub fn mock_call_code(&self, to: Address, data: Vec<u8>, value: U256, result: Result<Vec<u8>, Vec<u8>>) {
        self.state
            .borrow_mut()
            .call_code_returns
            .insert((to, data, value), result);
    }

    pub fn mock_delegate_call(&self, to: Address, data: Vec<u8>, result: Result<Vec<u8>, Vec<u8>>) {
        self.state
            .borrow_mut()
            .delegate_call_returns
            .insert((to, data), result);
    }

    pub fn mock_static_call(&self, to: Address, data: Vec<u8>, result: Result<Vec<u8>, Vec<u8>>) {
        self.state
            .borrow_mut()
            .static_call_returns
            .insert((to, data), result);
    }

    pub fn mock_deploy(&self, code: Vec<u8>, salt: Option<[u8; 32]>, result: Result<Address, Vec<u8>>) {
        self.state.borrow_mut().deploy_returns.insert((code, salt), result);
    }

    /// All logs emitted so far, as `(data, topics)` pairs.
    pub fn emitted_logs(&self) -> Vec<(Vec<u8>, Vec<[u8; 32]>)> {
        self.state.borrow().emitted_logs.clone()
    }

    /// All lines written through [`DebugAccess::debug_print`] so far.
    pub fn debug_lines(&self) -> Vec<String> {
        self.state.borrow().debug_lines.clone()
    }

    pub fn clear_mocks(&self) {
        let mut state = self.state.borrow_mut();
        state.call_returns.clear();
        state.call_code_returns.clear();
        state.delegate_call_returns.clear();
        state.static_call_returns.clear();
        state.deploy_returns.clear();
        state.emitted_logs.clear();
        state.debug_lines.clear();
    }
}

impl Host for TestHost {}

impl CryptoAccess for TestHost {
    fn native_keccak256(&self, input: &[u8]) -> [u8; 32] {
        let mut hasher = Keccak::v256();
        let mut out = [0u8; 32];
        hasher.update(input);
        hasher.finalize(&mut out);
        out
    }

    fn native_sha256(&self, input: &[u8]) -> [u8; 32] {
        let digest = Sha256::digest(input);
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest);
        out
    }
}

impl CalldataAccess for TestHost {
    fn args_len(&self) -> usize {
        self.state.borrow().calldata.len()
    }

    fn read_args(&self, len: usize) -> Vec<u8> {
        let state = self.state.borrow();
        state.calldata[..len.min(state.calldata.len())].to_vec()
    }

    fn return_data_size(&self) -> usize {
        self.state.borrow().return_data.len()
    }

    fn read_return_data(&self, offset: usize, size: Option<usize>) -> Vec<u8> {
        let state = self.state.borrow();
        let data = &state.return_data;
        let start = offset.min(data.len());
        let end = match size {
            Some(s) => (start + s).min(data.len()),
            None => data.len(),
        };
        data[start..end].to_vec()
    }
}

impl StorageAccess for TestHost {
    fn storage_load(&self, key: U256) -> [u8; 32] {
        self.state.borrow().storage.get(&key).copied().unwrap_or([0u8; 32])
    }

    fn storage_store(&self, key: U256, value: [u8; 32]) {
        self.state.borrow_mut().storage.insert(key, value);
    }

    fn transient_load(&self, key: U256) -> [u8; 32] {
        self.state.borrow().transient.get(&key).copied().unwrap_or([0u8; 32])
    }

    fn transient_store(&self, key: U256, value: [u8; 32]) {
        self.state.borrow_mut().transient.insert(key, value);
    }
}

unsafe impl CallAccess for TestHost {
    unsafe fn call_contract(
        &self,
        to: Address,
        data: &[u8],
        value: U256,
        _gas: u64,
        outs_len: &mut usize,
    ) -> u8 {
        let result = self
            .state
            .borrow()
            .call_returns
            .get(&(to, data.to_vec(), value))
            .cloned()
            .unwrap_or(Ok(Vec::new()));
        self.stash_return_data(result, outs_len)
    }

    unsafe fn call_code_contract(
        &self,
        to: Address,
        data: &[u8],
        value: U256,
        _gas: u64,
        outs_len: &mut usize,
    ) -> u8 {
        let result = self
            .state
            .borrow()
            .call_code_returns
            .get(&(to, data.to_vec(), value))
            .cloned()
            .unwrap_or(Ok(Vec::new()));
        self.stash_return_data(result, outs_len)
    }

    unsafe fn delegate_call_contract(
        &self,
        to: Address,
        data: &[u8],
        _gas: u64,
        outs_len: &mut usize,
    ) -> u8 {
        let result = self
            .state
            .borrow()
            .delegate_call_returns
            .get(&(to, data.to_vec()))
            .cloned()
            .unwrap_or(Ok(Vec::new()));
        self.stash_return_data(result, outs_len)
    }

    unsafe fn static_call_contract(
        &self,
        to: Address,
        data: &[u8],
        _gas: u64,
        outs_len: &mut usize,
    ) -> u8 {
        let result = self
            .state
            .borrow()
            .static_call_returns
            .get(&(to, data.to_vec()))
            .cloned()
            .unwrap_or(Ok(Vec::new()));
        self.stash_return_data(result, outs_len)
    }
}

impl TestHost {
    /// Shared tail end of the four call-flavor mocks: writes the result
    /// into the return-data buffer `read_return_data` serves from, and
    /// reports its length plus a `0`/`1` status code the way the real
    /// host's raw call imports do.
    fn stash_return_data(&self, result: Result<Vec<u8>, Vec<u8>>, outs_len: &mut usize) -> u8 {
        let (status, data) = match result {
            Ok(data) => (0, data),
            Err(data) => (1, data),
        };
        *outs_len = data.len();
        self.state.borrow_mut().return_data = data;
        status
    }
}

unsafe impl DeploymentAccess for TestHost {
    unsafe fn create1(&self, code: &[u8], _endowment: U256, contract: &mut Address) -> Option<()> {
        let result = self
            .state
            .borrow()
            .deploy_returns
            .get(&(code.to_vec(), None))
            .cloned();
        match result {
            Some(Ok(addr)) => {
                *contract = addr;
                Some(())
            }
            Some(Err(data)) => {
                self.state.borrow_mut().return_data = data;
                None
            }
            None => Some(()),
        }
    }

    unsafe fn create2(
        &self,
        code: &[u8],
        _endowment: U256,
        salt: [u8; 32],
        contract: &mut Address,
    ) -> Option<()> {
        let result = self
            .state
            .borrow()
            .deploy_returns
            .get(&(code.to_vec(), Some(salt)))
            .cloned();
        match result {
            Some(Ok(addr)) => {
                *contract = addr;
                Some(())
            }
            Some(Err(data)) => {
                self.state.borrow_mut().return_data = data;
                None
            }
            None => Some(()),
        }
    }
}

impl ContextAccess for TestHost {
    fn contract_address(&self) -> Address {
        self.state.borrow().contract_address
    }

    fn caller(&self) -> Address {
        self.state.borrow().sender
    }

    fn call_value(&self) -> U256 {
        self.state.borrow().call_value
    }

    fn tx_origin(&self) -> Address {
        let state = self.state.borrow();
        state.tx_origin.unwrap_or(state.sender)
    }

    fn tx_gas_price(&self) -> U256 {
        self.state.borrow().tx_gas_price
    }

    fn block_number(&self) -> u64 {
        self.state.borrow().block_number
    }

    fn block_timestamp(&self) -> u64 {
        self.state.borrow().block_timestamp
    }

    fn block_coinbase(&self) -> Address {
        self.state.borrow().block_coinbase
    }

    fn block_gas_limit(&self) -> u64 {
        self.state.borrow().block_gas_limit
    }

    fn block_hash(&self, number: u64) -> [u8; 32] {
        self.state.borrow().block_hashes.get(&number).copied().unwrap_or([0u8; 32])
    }

    fn block_prevrandao(&self) -> [u8; 32] {
        self.state.borrow().block_prevrandao
    }

    fn base_fee(&self) -> U256 {
        self.state.borrow().base_fee
    }

    fn blob_base_fee(&self) -> U256 {
        self.state.borrow().blob_base_fee
    }

    fn chain_id(&self) -> u64 {
        self.state.borrow().chain_id
    }

    fn gas_left(&self) -> u64 {
        self.state.borrow().gas_left
    }
}

impl AccountAccess for TestHost {
    fn external_balance(&self, account: Address) -> U256 {
        self.state.borrow().balances.get(&account).copied().unwrap_or(U256::ZERO)
    }

    fn external_code_hash(&self, account: Address) -> [u8; 32] {
        let state = self.state.borrow();
        match state.code_storage.get(&account) {
            Some(code) => {
                drop(state);
                self.native_keccak256(code)
            }
            None => [0u8; 32],
        }
    }

    fn external_code_size(&self, account: Address) -> usize {
        self.state.borrow().code_storage.get(&account).map_or(0, Vec::len)
    }

    fn external_code(&self, account: Address) -> Vec<u8> {
        self.state.borrow().code_storage.get(&account).cloned().unwrap_or_default()
    }

    fn code_size(&self) -> usize {
        self.state.borrow().own_code.len()
    }

    fn code(&self) -> Vec<u8> {
        self.state.borrow().own_code.clone()
    }
}

impl LogAccess for TestHost {
    fn emit_log(&self, data: &[u8], topics: &[[u8; 32]]) {
        assert!(topics.len() <= 4, "a log may carry at most 4 topics");
        self.state
            .borrow_mut()
            .emitted_logs
            .push((data.to_vec(), topics.to_vec()));
    }
}

impl TerminateAccess for TestHost {
    fn finish(&self, data: &[u8]) -> ! {
        self.state.borrow_mut().return_data = data.to_vec();
        panic!("wasmc-test: finish() called directly; test the function's Result instead of its entrypoint wrapper");
    }

    fn revert(&self, data: &[u8]) -> ! {
        self.state.borrow_mut().return_data = data.to_vec();
        panic!("wasmc-test: revert() called directly; test the function's Result instead of its entrypoint wrapper");
    }

    fn self_destruct(&self, _beneficiary: Address) -> ! {
        panic!("wasmc-test: self_destruct() called directly; assert on its precondition instead");
    }
}

impl DebugAccess for TestHost {
    fn debug_print(&self, message: &str) {
        log::debug!("{message}");
        self.state.borrow_mut().debug_lines.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_round_trips() {
        let host = TestHost::new();
        host.storage_store(U256::from(1u8), [7u8; 32]);
        assert_eq!(host.storage_load(U256::from(1u8)), [7u8; 32]);
        assert_eq!(host.storage_load(U256::from(2u8)), [0u8; 32]);
    }

    #[test]
    fn transient_is_a_separate_tier() {
        let host = TestHost::new();
        host.storage_store(U256::from(1u8), [7u8; 32]);
        host.transient_store(U256::from(1u8), [9u8; 32]);
        assert_eq!(host.storage_load(U256::from(1u8)), [7u8; 32]);
        assert_eq!(host.transient_load(U256::from(1u8)), [9u8; 32]);
    }

    #[test]
    fn keccak_matches_known_vector() {
        let host = TestHost::new();
        let digest = host.native_keccak256(b"");
        assert_eq!(
            wasmc_sdk_hex_for_tests(&digest),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a47"
        );
    }

    fn wasmc_sdk_hex_for_tests(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn mocked_call_is_served_back() {
        let host = TestHost::new();
        let to = Address::new([1u8; 20]);
        host.mock_call(to, vec![1, 2, 3], U256::ZERO, Ok(vec![4, 5]));

        let mut outs_len = 0usize;
        let status = unsafe { host.call_contract(to, &[1, 2, 3], U256::ZERO, 1000, &mut outs_len) };
        assert_eq!(status, 0);
        assert_eq!(outs_len, 2);
        assert_eq!(host.read_return_data(0, None), vec![4, 5]);
    }

    #[test]
    fn unmocked_call_succeeds_with_empty_data() {
        let host = TestHost::new();
        let to = Address::new([2u8; 20]);
        let mut outs_len = 0usize;
        let status = unsafe { host.call_contract(to, &[], U256::ZERO, 1000, &mut outs_len) };
        assert_eq!(status, 0);
        assert_eq!(outs_len, 0);
    }

    #[test]
    fn logs_are_recorded() {
        let host = TestHost::new();
        host.emit_log(&[1, 2, 3], &[[9u8; 32]]);
        let logs = host.emitted_logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].0, vec![1, 2, 3]);
        assert_eq!(logs[0].1, vec![[9u8; 32]]);
    }
}
