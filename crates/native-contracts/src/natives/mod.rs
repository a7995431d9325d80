//! # `natives`
//!
//! The closed set of natively implemented functions. Each variant of [`NativeFunction`] is a
//! pure function of `(chain, state, caller, input, gas_limit)`: it holds no state of its own and
//! leaves no residue beyond what it writes through the [`NativeState`] handle.
//!
//! - [`token`]: the Aplo fungible token over native balances.
//! - [`block_oracle`]: historical block hashes.

use crate::{
    Revert,
    RevertReason,
    abi::Selector,
    sol_primitives::{
        IAploToken,
        IBlockOracle,
    },
    state::{
        ChainIndex,
        NativeState,
    },
};

use alloy_primitives::{
    Address,
    Bytes,
    FixedBytes,
};
use alloy_sol_types::SolCall;
use tracing::debug;

pub mod block_oracle;
pub mod token;

/// Output of a native call that completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeOutput {
    pub output: Bytes,
    pub gas_used: u64,
}

impl NativeOutput {
    pub fn new(output: Bytes, gas_used: u64) -> Self {
        Self { output, gas_used }
    }
}

pub type NativeResult = Result<NativeOutput, Revert>;

/// Native contract a function belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeContract {
    Token,
    BlockOracle,
}

/// A natively implemented contract function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeFunction {
    BalanceOf,
    Transfer,
    Name,
    Symbol,
    Decimals,
    SupportsInterface,
    GetBlockHash,
}

impl NativeFunction {
    /// Functions hosted by the token contract. Also the set of interface ids it reports as
    /// supported.
    pub const TOKEN: [NativeFunction; 6] = [
        Self::BalanceOf,
        Self::Transfer,
        Self::Name,
        Self::Symbol,
        Self::Decimals,
        Self::SupportsInterface,
    ];

    /// Functions hosted by the block oracle.
    pub const BLOCK_ORACLE: [NativeFunction; 1] = [Self::GetBlockHash];

    pub const fn selector(self) -> Selector {
        FixedBytes(match self {
            Self::BalanceOf => IAploToken::balanceOfCall::SELECTOR,
            Self::Transfer => IAploToken::transferCall::SELECTOR,
            Self::Name => IAploToken::nameCall::SELECTOR,
            Self::Symbol => IAploToken::symbolCall::SELECTOR,
            Self::Decimals => IAploToken::decimalsCall::SELECTOR,
            Self::SupportsInterface => IAploToken::supportsInterfaceCall::SELECTOR,
            Self::GetBlockHash => IBlockOracle::GetBlockHashCall::SELECTOR,
        })
    }

    pub const fn contract(self) -> NativeContract {
        match self {
            Self::GetBlockHash => NativeContract::BlockOracle,
            _ => NativeContract::Token,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::BalanceOf => "balanceOf",
            Self::Transfer => "transfer",
            Self::Name => "name",
            Self::Symbol => "symbol",
            Self::Decimals => "decimals",
            Self::SupportsInterface => "supportsInterface",
            Self::GetBlockHash => "GetBlockHash",
        }
    }

    /// Runs the function. `caller` is the immediate sender of the call and `gas_limit` the gas
    /// forwarded to it.
    pub fn invoke<C, S>(
        self,
        chain: &C,
        state: &mut S,
        caller: Address,
        input: &[u8],
        gas_limit: u64,
    ) -> NativeResult
    where
        C: ChainIndex + ?Sized,
        S: NativeState + ?Sized,
    {
        match self {
            Self::BalanceOf => token::balance_of(&*state, input),
            Self::Transfer => token::transfer(state, caller, input, gas_limit),
            Self::Name => Ok(token::name()),
            Self::Symbol => Ok(token::symbol()),
            Self::Decimals => Ok(token::decimals()),
            Self::SupportsInterface => token::supports_interface(input),
            Self::GetBlockHash => block_oracle::get_block_hash(chain, input),
        }
    }
}

/// Builds a [`Revert`] charging `gas_used`, recording why it happened under the target of the
/// contract serving `function`.
pub(crate) fn revert(function: NativeFunction, gas_used: u64, reason: RevertReason) -> Revert {
    match function.contract() {
        NativeContract::Token => {
            debug!(target: "native-contracts::token", %function, gas_used, %reason, "Native call reverted");
        }
        NativeContract::BlockOracle => {
            debug!(target: "native-contracts::block-oracle", %function, gas_used, %reason, "Native call reverted");
        }
    }
    Revert::new(gas_used, reason)
}

impl std::fmt::Display for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
