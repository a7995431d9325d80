//! Helpers for the fixed 32-byte word calling convention shared with bytecode contracts.
//!
//! Decoding is deliberately lax: argument words are sliced by position, and address words only
//! have their low 20 bytes read. Dirty upper bytes are ignored, never rejected.

use crate::constants::{
    SELECTOR_SIZE,
    WORD_SIZE,
};

use alloy_primitives::{
    Address,
    B256,
    Bytes,
    FixedBytes,
    U256,
};
use alloy_sol_types::SolValue;

/// First four bytes of call input.
pub type Selector = FixedBytes<4>;

/// Returns the selector of `input`, or `None` when it is shorter than four bytes.
pub fn selector(input: &[u8]) -> Option<Selector> {
    input
        .get(..SELECTOR_SIZE)
        .map(Selector::from_slice)
}

/// Returns the `index`-th argument word following the selector.
pub fn word(input: &[u8], index: usize) -> Option<&[u8; WORD_SIZE]> {
    let start = SELECTOR_SIZE + index * WORD_SIZE;
    input
        .get(start..start + WORD_SIZE)
        .and_then(|word| word.try_into().ok())
}

/// Reads an address from the low 20 bytes of an argument word.
pub fn word_to_address(word: &[u8; WORD_SIZE]) -> Address {
    Address::from_slice(&word[12..])
}

/// Reads a big-endian unsigned integer from an argument word.
pub fn word_to_u256(word: &[u8; WORD_SIZE]) -> U256 {
    U256::from_be_bytes(*word)
}

/// Left-pads an address into a word, as used for indexed event topics.
pub fn address_to_word(address: Address) -> B256 {
    address.into_word()
}

pub fn encode_u256(value: U256) -> Bytes {
    value.abi_encode().into()
}

pub fn encode_bool(value: bool) -> Bytes {
    value.abi_encode().into()
}

/// `uint8` return value, right-aligned in a word.
pub fn encode_u8(value: u8) -> Bytes {
    encode_u256(U256::from(value))
}

pub fn encode_b256(value: B256) -> Bytes {
    value.abi_encode().into()
}

/// Encodes a string as a single dynamic return value: offset word, length word, then the UTF-8
/// bytes right-padded to a word boundary.
pub fn encode_string(value: &str) -> Bytes {
    value.abi_encode().into()
}
