//! The Aplo token.
//!
//! An ERC20-shaped view over native account balances: there is no contract storage, `balanceOf`
//! reads the ledger balance and `transfer` moves ledger balance. Apart from `transfer`, every
//! function is free.

use crate::{
    NativeOutput,
    NativeResult,
    RevertReason,
    abi::{
        self,
        Selector,
    },
    constants::{
        SELECTOR_SIZE,
        TOKEN_DECIMALS,
        TOKEN_LOG_EMITTER,
        TOKEN_NAME,
        TOKEN_SYMBOL,
        TRANSFER_GAS,
        WORD_SIZE,
    },
    natives::{
        NativeFunction,
        revert,
    },
    sol_primitives::IAploToken,
    state::NativeState,
};

use alloy_primitives::{
    Address,
    B256,
    Bytes,
    Log,
};
use alloy_sol_types::SolEvent;
use tracing::{
    error,
    trace,
};

/// `balanceOf(address)`: selector plus one word.
pub const BALANCE_OF_INPUT_LEN: usize = SELECTOR_SIZE + WORD_SIZE;

/// `transfer(address,uint256)`: selector plus two words.
pub const TRANSFER_INPUT_LEN: usize = SELECTOR_SIZE + 2 * WORD_SIZE;

/// `supportsInterface(bytes4)` only needs the four id bytes after the selector.
pub const SUPPORTS_INTERFACE_MIN_INPUT_LEN: usize = SELECTOR_SIZE + 4;

/// `balanceOf(address) -> uint256`
///
/// Reverts for free unless the input is exactly one argument word.
pub fn balance_of<S: NativeState + ?Sized>(state: &S, input: &[u8]) -> NativeResult {
    let Some(account) = exact_input(input, BALANCE_OF_INPUT_LEN)
        .and_then(|input| abi::word(input, 0))
        .map(abi::word_to_address)
    else {
        return Err(revert(
            NativeFunction::BalanceOf,
            0,
            RevertReason::InvalidInputLength {
                expected: BALANCE_OF_INPUT_LEN,
                actual: input.len(),
            },
        ));
    };

    let balance = state.balance(account);
    trace!(target: "native-contracts::token", %account, %balance, "balanceOf");
    Ok(NativeOutput::new(abi::encode_u256(balance), 0))
}

/// `transfer(address to, uint256 amount) -> bool`
///
/// Moves `amount` of the caller's native balance to `to` and emits an ERC20 `Transfer` log from
/// the zero address. Costs a flat [`TRANSFER_GAS`]. Every revert charges half of `gas_limit`,
/// whether the input was malformed, the gas too low, or the balance insufficient.
///
/// The caller topic is the left-padded caller address, but the recipient topic is the raw argument
/// word as supplied, upper bytes included. The data is the raw amount word.
pub fn transfer<S: NativeState + ?Sized>(
    state: &mut S,
    caller: Address,
    input: &[u8],
    gas_limit: u64,
) -> NativeResult {
    let penalty = gas_limit / 2;

    let Some((to_word, amount_word)) = exact_input(input, TRANSFER_INPUT_LEN)
        .and_then(|input| abi::word(input, 0).zip(abi::word(input, 1)))
    else {
        return Err(revert(
            NativeFunction::Transfer,
            penalty,
            RevertReason::InvalidInputLength {
                expected: TRANSFER_INPUT_LEN,
                actual: input.len(),
            },
        ));
    };

    if gas_limit < TRANSFER_GAS {
        return Err(revert(
            NativeFunction::Transfer,
            penalty,
            RevertReason::InsufficientGas {
                required: TRANSFER_GAS,
                provided: gas_limit,
            },
        ));
    }

    let to = abi::word_to_address(to_word);
    let amount = abi::word_to_u256(amount_word);

    let balance = state.balance(caller);
    if balance < amount {
        return Err(revert(
            NativeFunction::Transfer,
            penalty,
            RevertReason::InsufficientBalance { balance, amount },
        ));
    }

    state.sub_balance(caller, amount);
    state.add_balance(to, amount);
    state.add_log(Log::new_unchecked(
        TOKEN_LOG_EMITTER,
        vec![
            IAploToken::Transfer::SIGNATURE_HASH,
            abi::address_to_word(caller),
            B256::from(*to_word),
        ],
        Bytes::copy_from_slice(amount_word),
    ));

    trace!(target: "native-contracts::token", from = %caller, %to, %amount, "transfer");
    Ok(NativeOutput::new(abi::encode_bool(true), TRANSFER_GAS))
}

/// `name() -> string`
pub fn name() -> NativeOutput {
    NativeOutput::new(abi::encode_string(TOKEN_NAME), 0)
}

/// `symbol() -> string`
pub fn symbol() -> NativeOutput {
    NativeOutput::new(abi::encode_string(TOKEN_SYMBOL), 0)
}

/// `decimals() -> uint8`
pub fn decimals() -> NativeOutput {
    NativeOutput::new(abi::encode_u8(TOKEN_DECIMALS), 0)
}

/// `supportsInterface(bytes4) -> bool`
///
/// ERC165-style introspection over the token's own selectors. An unknown id answers `false`
/// rather than reverting; only an input too short to hold the id reverts.
pub fn supports_interface(input: &[u8]) -> NativeResult {
    let Some(interface_id) = input
        .get(SELECTOR_SIZE..SUPPORTS_INTERFACE_MIN_INPUT_LEN)
        .map(Selector::from_slice)
    else {
        return Err(revert(
            NativeFunction::SupportsInterface,
            0,
            RevertReason::InputTooShort {
                min: SUPPORTS_INTERFACE_MIN_INPUT_LEN,
                actual: input.len(),
            },
        ));
    };

    let supported = is_supported_interface(interface_id);
    if !supported {
        error!(target: "native-contracts::token", %interface_id, "unsupported interface");
    }

    Ok(NativeOutput::new(abi::encode_bool(supported), 0))
}

/// Whether `interface_id` is one of the token's selectors.
pub fn is_supported_interface(interface_id: Selector) -> bool {
    NativeFunction::TOKEN
        .iter()
        .any(|function| function.selector() == interface_id)
}

fn exact_input(input: &[u8], len: usize) -> Option<&[u8]> {
    (input.len() == len).then_some(input)
}
