use crate::abi::Selector;

use alloy_primitives::{
    Address,
    U256,
};
use thiserror::Error;

/// Failure to route a call to a native function. Raised before anything executes, so the engine
/// can fall back to regular bytecode handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("No native contract at {0}")]
    UnknownContract(Address),
    #[error("No native function at {address} for selector {selector:?}")]
    NoFunction {
        address: Address,
        /// `None` when the input was too short to carry a selector.
        selector: Option<Selector>,
    },
}

/// A native call that reverted. Callers only ever observe a bare revert with no payload, but
/// the revert still charges `gas_used`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("execution reverted: {reason}")]
pub struct Revert {
    pub gas_used: u64,
    pub reason: RevertReason,
}

impl Revert {
    pub fn new(gas_used: u64, reason: RevertReason) -> Self {
        Self { gas_used, reason }
    }
}

/// Why a native call reverted. Diagnostic only, never encoded into the call output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevertReason {
    #[error("invalid input length {actual}, expected {expected}")]
    InvalidInputLength { expected: usize, actual: usize },
    #[error("input length {actual} shorter than {min}")]
    InputTooShort { min: usize, actual: usize },
    #[error("insufficient gas {provided}, required {required}")]
    InsufficientGas { required: u64, provided: u64 },
    #[error("insufficient balance {balance} for amount {amount}")]
    InsufficientBalance { balance: U256, amount: U256 },
    #[error("unknown block {0}")]
    UnknownBlock(u64),
}
