//! Block hash oracle.

use crate::{
    NativeOutput,
    NativeResult,
    RevertReason,
    abi,
    constants::{
        SELECTOR_SIZE,
        WORD_SIZE,
    },
    natives::{
        NativeFunction,
        revert,
    },
    state::{
        BlockHash,
        ChainIndex,
    },
};

use tracing::trace;

/// `GetBlockHash(uint256)`: selector plus one word.
pub const GET_BLOCK_HASH_INPUT_LEN: usize = SELECTOR_SIZE + WORD_SIZE;

/// `GetBlockHash(uint256 blockNumber) -> bytes32`
///
/// Only the low eight bytes of the argument are read as the block number; the upper 24 bytes are
/// ignored. Every failure, malformed input or unknown block, reverts for free.
pub fn get_block_hash<C: ChainIndex + ?Sized>(chain: &C, input: &[u8]) -> NativeResult {
    let Some(number_word) = (input.len() == GET_BLOCK_HASH_INPUT_LEN)
        .then(|| abi::word(input, 0))
        .flatten()
    else {
        return Err(revert(
            NativeFunction::GetBlockHash,
            0,
            RevertReason::InvalidInputLength {
                expected: GET_BLOCK_HASH_INPUT_LEN,
                actual: input.len(),
            },
        ));
    };

    let number = block_number(number_word);
    let Some(block) = chain.block_by_number(number) else {
        return Err(revert(
            NativeFunction::GetBlockHash,
            0,
            RevertReason::UnknownBlock(number),
        ));
    };

    let hash = block.block_hash();
    trace!(target: "native-contracts::block-oracle", number, %hash, "GetBlockHash");
    Ok(NativeOutput::new(abi::encode_b256(hash), 0))
}

fn block_number(word: &[u8; WORD_SIZE]) -> u64 {
    let mut low = [0u8; 8];
    low.copy_from_slice(&word[WORD_SIZE - 8..]);
    u64::from_be_bytes(low)
}
