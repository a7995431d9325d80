#![cfg(any(test, feature = "test"))]

use crate::state::{
    ChainIndex,
    NativeState,
};

use alloy_primitives::{
    Address,
    B256,
    FixedBytes,
    Log,
    U256,
};
use std::collections::{
    BTreeMap,
    HashMap,
};

/// Ledger backed by a map, collecting emitted logs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryState {
    pub balances: HashMap<Address, U256>,
    pub logs: Vec<Log>,
}

impl InMemoryState {
    pub fn with_balance(mut self, address: Address, balance: U256) -> Self {
        self.balances.insert(address, balance);
        self
    }

    /// Sum of every balance held, saturating at `U256::MAX`.
    pub fn total_balance(&self) -> U256 {
        self.balances
            .values()
            .fold(U256::ZERO, |total, balance| total.saturating_add(*balance))
    }
}

impl NativeState for InMemoryState {
    fn balance(&self, address: Address) -> U256 {
        self.balances.get(&address).copied().unwrap_or_default()
    }

    fn add_balance(&mut self, address: Address, amount: U256) {
        let balance = self.balances.entry(address).or_default();
        *balance = balance.saturating_add(amount);
    }

    fn sub_balance(&mut self, address: Address, amount: U256) {
        let balance = self.balances.entry(address).or_default();
        *balance = balance.saturating_sub(amount);
    }

    fn add_log(&mut self, log: Log) {
        self.logs.push(log);
    }
}

/// Chain of block hashes keyed by number.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChain {
    pub blocks: BTreeMap<u64, B256>,
}

impl InMemoryChain {
    pub fn with_block(mut self, number: u64, hash: B256) -> Self {
        self.blocks.insert(number, hash);
        self
    }
}

impl ChainIndex for InMemoryChain {
    type Block = B256;

    fn block_by_number(&self, number: u64) -> Option<Self::Block> {
        self.blocks.get(&number).copied()
    }
}

pub fn random_bytes<const N: usize>() -> FixedBytes<N> {
    let mut value = [0u8; N];
    value.iter_mut().for_each(|x| *x = rand::random());
    FixedBytes::new(value)
}

pub fn random_address() -> Address {
    random_bytes::<20>().into()
}

pub fn random_u256() -> U256 {
    random_bytes::<32>().into()
}

pub fn random_selector() -> FixedBytes<4> {
    random_bytes::<4>()
}

pub fn random_bytes32() -> FixedBytes<32> {
    random_bytes::<32>()
}
