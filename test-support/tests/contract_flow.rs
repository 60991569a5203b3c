//! End-to-end exercises of a toy contract's logic through [`TestHost`],
//! the way a real contract crate would unit test against this crate as a
//! dev-dependency: storage round trips, an outbound call chain, and a
//! revert path.

use wasmc_core::calls::Call;
use wasmc_core::host::{CalldataAccess, ContextAccess};
use wasmc_core::{Address, Error, U256};
use wasmc_sdk::call::{call_plain, current_call_info};
use wasmc_sdk::storage::{StorageMap, StorageWord};
use wasmc_test::{TestHost, TestHostBuilder};

/// A toy "token balance" contract: `balances[holder]` backed by a
/// `StorageMap` of full-width words, exercising the slot-derivation and
/// packed read/write path end to end.
struct TokenBalances {
    balances: StorageMap<TestHost, Address, StorageWord<TestHost>>,
}

impl TokenBalances {
    fn new(host: TestHost) -> Self {
        TokenBalances {
            balances: StorageMap::new(host, U256::from(0u8)),
        }
    }

    fn balance_of(&self, holder: Address) -> U256 {
        self.balances.at(&holder, StorageWord::new).get()
    }

    fn mint(&self, holder: Address, amount: U256) {
        let mut current = self.balances.at(&holder, StorageWord::new);
        current.set(current.get() + amount);
    }

    fn transfer(&self, from: Address, to: Address, amount: U256) -> Result<(), Error> {
        let mut from_balance = self.balances.at(&from, StorageWord::new);
        if from_balance.get() < amount {
            return Err(Error::ContractRevert(b"insufficient balance".to_vec()));
        }
        from_balance.set(from_balance.get() - amount);
        let mut to_balance = self.balances.at(&to, StorageWord::new);
        to_balance.set(to_balance.get() + amount);
        Ok(())
    }
}

#[test]
fn storage_round_trips_through_mint_and_transfer() {
    let host = TestHost::new();
    let alice = Address::new([1u8; 20]);
    let bob = Address::new([2u8; 20]);
    let token = TokenBalances::new(host);

    token.mint(alice, U256::from(100u8));
    assert_eq!(token.balance_of(alice), U256::from(100u8));
    assert_eq!(token.balance_of(bob), U256::ZERO);

    token.transfer(alice, bob, U256::from(40u8)).unwrap();
    assert_eq!(token.balance_of(alice), U256::from(60u8));
    assert_eq!(token.balance_of(bob), U256::from(40u8));
}

#[test]
fn transfer_reverts_on_insufficient_balance() {
    let host = TestHost::new();
    let alice = Address::new([3u8; 20]);
    let bob = Address::new([4u8; 20]);
    let token = TokenBalances::new(host);

    token.mint(alice, U256::from(10u8));
    let err = token.transfer(alice, bob, U256::from(20u8)).unwrap_err();
    assert_eq!(err, Error::ContractRevert(b"insufficient balance".to_vec()));
    assert_eq!(token.balance_of(alice), U256::from(10u8));
}

#[test]
fn outbound_call_chain_is_served_from_a_mocked_return() {
    let host = TestHostBuilder::new()
        .sender(Address::new([9u8; 20]))
        .gas_left(6_400_000)
        .build();

    let oracle = Address::new([5u8; 20]);
    host.mock_call(oracle, b"price()".to_vec(), U256::ZERO, Ok(vec![0, 0, 0, 42]));

    let gas = current_call_info(&host);
    assert_eq!(gas, 6_400_000 - 6_400_000 / 64);

    let got = call_plain(&host, &Call::new(), oracle, b"price()").unwrap();
    assert_eq!(got, vec![0, 0, 0, 42]);
}

#[test]
fn calldata_round_trips_through_read_args() {
    let host = TestHostBuilder::new().calldata(vec![1, 2, 3, 4]).build();
    assert_eq!(host.args_len(), 4);
    assert_eq!(host.read_args(4), vec![1, 2, 3, 4]);
}

#[test]
fn builder_configures_block_and_chain_context() {
    let host = TestHostBuilder::new()
        .chain_id(1337)
        .block_number(99)
        .build();
    assert_eq!(host.chain_id(), 1337);
    assert_eq!(host.block_number(), 99);
}
