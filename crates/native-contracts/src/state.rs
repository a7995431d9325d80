//! Handles on state the native contracts do not own.
//!
//! The execution engine passes these into every invocation. Native functions never hold onto
//! them, which keeps each call independent and lets tests swap in an in-memory backend.

use alloy_consensus::Header;
use alloy_primitives::{
    Address,
    B256,
    Log,
    Sealed,
    U256,
};

/// Account ledger and log sink of the executing transaction.
///
/// Mutations are assumed to be serialized by the caller, the way a single transaction execution
/// thread serializes them. Implementations do not need to lock.
pub trait NativeState {
    /// Native balance of `address`. Unknown accounts hold zero.
    fn balance(&self, address: Address) -> U256;

    fn add_balance(&mut self, address: Address, amount: U256);

    /// Only called after the caller checked `balance(address) >= amount`.
    fn sub_balance(&mut self, address: Address, amount: U256);

    /// Appends a log to the transaction's log sink.
    fn add_log(&mut self, log: Log);
}

/// Index of canonical blocks by number.
pub trait ChainIndex {
    type Block: BlockHash;

    fn block_by_number(&self, number: u64) -> Option<Self::Block>;
}

/// Anything that can report the hash of the block it describes.
pub trait BlockHash {
    fn block_hash(&self) -> B256;
}

impl BlockHash for B256 {
    fn block_hash(&self) -> B256 {
        *self
    }
}

impl BlockHash for Header {
    fn block_hash(&self) -> B256 {
        self.hash_slow()
    }
}

impl BlockHash for Sealed<Header> {
    fn block_hash(&self) -> B256 {
        self.hash()
    }
}

impl<T: BlockHash + ?Sized> BlockHash for &T {
    fn block_hash(&self) -> B256 {
        (**self).block_hash()
    }
}

impl<S: NativeState + ?Sized> NativeState for &mut S {
    fn balance(&self, address: Address) -> U256 {
        (**self).balance(address)
    }

    fn add_balance(&mut self, address: Address, amount: U256) {
        (**self).add_balance(address, amount)
    }

    fn sub_balance(&mut self, address: Address, amount: U256) {
        (**self).sub_balance(address, amount)
    }

    fn add_log(&mut self, log: Log) {
        (**self).add_log(log)
    }
}

impl<C: ChainIndex + ?Sized> ChainIndex for &C {
    type Block = C::Block;

    fn block_by_number(&self, number: u64) -> Option<Self::Block> {
        (**self).block_by_number(number)
    }
}
