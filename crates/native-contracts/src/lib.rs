//! # `native-contracts`
//!
//! Natively implemented contracts served at reserved addresses. When the execution engine sees a
//! call to one of these addresses it skips bytecode interpretation, resolves the callable through
//! the [`Registry`] and invokes it against the ledger and chain handles it owns.
//!
//! Two contracts exist:
//!
//! - the Aplo token, a fungible asset aliased directly onto native account balances;
//! - the block oracle, which exposes historical block hashes.
//!
//! Inputs, outputs, gas charges and revert behaviour are consensus rules shared by every node, so
//! every byte layout here is consensus-relevant.

mod error;
pub use error::{
    DispatchError,
    Revert,
    RevertReason,
};

pub mod abi;

pub mod config;
pub use config::NativeConfig;

pub mod constants;

mod dispatch;

pub mod evm;

pub mod natives;
pub use natives::{
    NativeContract,
    NativeFunction,
    NativeOutput,
    NativeResult,
};

pub mod registry;
pub use registry::{
    FunctionTable,
    Registry,
    RegistryBuilder,
    default_registry,
};

pub mod sol_primitives;

pub mod state;
pub use state::{
    BlockHash,
    ChainIndex,
    NativeState,
};

#[cfg(any(test, feature = "test"))]
pub mod test_utils;
