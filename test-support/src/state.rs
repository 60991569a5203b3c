//! Internal state backing [`crate::TestHost`].

use std::collections::HashMap;

use wasmc_core::{Address, U256};

use crate::constants::{
    DEFAULT_CHAIN_ID, DEFAULT_CONTRACT_ADDRESS, DEFAULT_GAS_LIMIT, DEFAULT_SENDER,
};

type CallKey = (Address, Vec<u8>, U256);
type DelegateOrStaticCallKey = (Address, Vec<u8>);
type DeployKey = (Vec<u8>, Option<[u8; 32]>);
type CallReturn = Result<Vec<u8>, Vec<u8>>;
type DeployReturn = Result<Address, Vec<u8>>;

/// Everything a [`crate::TestHost`] tracks: the two storage tiers, mocked
/// call/deploy return values, balances, and the block/message context a
/// contract under test observes.
#[derive(Debug, Clone)]
pub struct HostState {
    pub storage: HashMap<U256, [u8; 32]>,
    pub transient: HashMap<U256, [u8; 32]>,

    pub calldata: Vec<u8>,
    pub return_data: Vec<u8>,

    pub sender: Address,
    pub contract_address: Address,
    pub call_value: U256,
    pub tx_origin: Option<Address>,
    pub tx_gas_price: U256,

    pub chain_id: u64,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub block_coinbase: Address,
    pub block_gas_limit: u64,
    pub block_prevrandao: [u8; 32],
    pub base_fee: U256,
    pub blob_base_fee: U256,
    pub block_hashes: HashMap<u64, [u8; 32]>,

    pub gas_left: u64,

    pub balances: HashMap<Address, U256>,
    pub code_storage: HashMap<Address, Vec<u8>>,
    pub own_code: Vec<u8>,

    pub call_returns: HashMap<CallKey, CallReturn>,
    pub call_code_returns: HashMap<CallKey, CallReturn>,
    pub delegate_call_returns: HashMap<DelegateOrStaticCallKey, CallReturn>,
    pub static_call_returns: HashMap<DelegateOrStaticCallKey, CallReturn>,
    pub deploy_returns: HashMap<DeployKey, DeployReturn>,

    pub emitted_logs: Vec<(Vec<u8>, Vec<[u8; 32]>)>,
    pub debug_lines: Vec<String>,
}

impl Default for HostState {
    fn default() -> Self {
        HostState {
            storage: HashMap::new(),
            transient: HashMap::new(),
            calldata: Vec::new(),
            return_data: Vec::new(),
            sender: DEFAULT_SENDER,
            contract_address: DEFAULT_CONTRACT_ADDRESS,
            call_value: U256::ZERO,
            tx_origin: None,
            tx_gas_price: U256::from(1u8),
            chain_id: DEFAULT_CHAIN_ID,
            block_number: 0,
            block_timestamp: 0,
            block_coinbase: Address::zero(),
            block_gas_limit: DEFAULT_GAS_LIMIT,
            block_prevrandao: [0u8; 32],
            base_fee: U256::from(1_000_000_000u64),
            blob_base_fee: U256::ZERO,
            block_hashes: HashMap::new(),
            gas_left: u64::MAX,
            balances: HashMap::new(),
            code_storage: HashMap::new(),
            own_code: Vec::new(),
            call_returns: HashMap::new(),
            call_code_returns: HashMap::new(),
            delegate_call_returns: HashMap::new(),
            static_call_returns: HashMap::new(),
            deploy_returns: HashMap::new(),
            emitted_logs: Vec::new(),
            debug_lines: Vec::new(),
        }
    }
}
