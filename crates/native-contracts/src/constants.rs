use alloy_primitives::{
    Address,
    address,
};

/// Address of the Aplo token contract.
pub const APLO_TOKEN_ADDRESS: Address = address!("0000000000000000000000000000000000001235");

/// Address of the block hash oracle.
pub const BLOCK_ORACLE_ADDRESS: Address = address!("0000000000000000000000000000000000001236");

/// Address recorded as the emitter of token `Transfer` logs.
pub const TOKEN_LOG_EMITTER: Address = Address::ZERO;

/// Flat gas charged by a successful `transfer`, and the minimum gas a transfer must be given.
pub const TRANSFER_GAS: u64 = 25_000;

pub const TOKEN_NAME: &str = "Aplo native";
pub const TOKEN_SYMBOL: &str = "APLO";
pub const TOKEN_DECIMALS: u8 = 18;

/// Length of an ABI argument word.
pub const WORD_SIZE: usize = 32;

/// Length of a function selector.
pub const SELECTOR_SIZE: usize = 4;
