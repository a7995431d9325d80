//! Conversion of native call results into the interpreter's result types, for engines that
//! intercept calls to reserved addresses from a revm inspector or frame handler.

use crate::NativeResult;

use alloy_primitives::Bytes;
use revm::interpreter::{
    CallOutcome,
    Gas,
    InstructionResult,
    InterpreterResult,
};
use std::ops::Range;

/// Converts a native call result into an [`InterpreterResult`] for a call forwarded `gas_limit`.
///
/// A revert has empty output, exactly like a bytecode `REVERT` with no data, but still spends the
/// gas it charged. A charge exceeding `gas_limit` is reported as out of gas.
pub fn to_interpreter_result(result: NativeResult, gas_limit: u64) -> InterpreterResult {
    let (instruction_result, output, gas_used) = match result {
        Ok(native) => (InstructionResult::Return, native.output, native.gas_used),
        Err(revert) => (InstructionResult::Revert, Bytes::new(), revert.gas_used),
    };

    let mut gas = Gas::new(gas_limit);
    if !gas.record_cost(gas_used) {
        gas.spend_all();
        return InterpreterResult::new(InstructionResult::OutOfGas, Bytes::new(), gas);
    }

    InterpreterResult::new(instruction_result, output, gas)
}

/// Like [`to_interpreter_result`], wrapped into the [`CallOutcome`] an inspector returns from its
/// `call` hook.
pub fn to_call_outcome(
    result: NativeResult,
    gas_limit: u64,
    memory_offset: Range<usize>,
) -> CallOutcome {
    CallOutcome::new(to_interpreter_result(result, gas_limit), memory_offset)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        NativeOutput,
        Revert,
        RevertReason,
        abi,
    };

    #[test]
    fn test_success_spends_charged_gas() {
        let result = to_interpreter_result(Ok(NativeOutput::new(abi::encode_bool(true), 25_000)), 40_000);

        assert_eq!(result.result, InstructionResult::Return);
        assert_eq!(result.output, abi::encode_bool(true));
        assert_eq!(result.gas.spent(), 25_000);
        assert_eq!(result.gas.remaining(), 15_000);
    }

    #[test]
    fn test_revert_has_no_output() {
        let revert = Revert::new(
            10_000,
            RevertReason::InsufficientGas {
                required: 25_000,
                provided: 20_000,
            },
        );
        let result = to_interpreter_result(Err(revert), 20_000);

        assert_eq!(result.result, InstructionResult::Revert);
        assert!(result.output.is_empty());
        assert_eq!(result.gas.spent(), 10_000);
    }

    #[test]
    fn test_free_revert_spends_nothing() {
        let result = to_interpreter_result(
            Err(Revert::new(0, RevertReason::UnknownBlock(9))),
            1_000,
        );
        assert_eq!(result.result, InstructionResult::Revert);
        assert_eq!(result.gas.remaining(), 1_000);
    }

    #[test]
    fn test_charge_above_limit_is_out_of_gas() {
        let result = to_interpreter_result(Ok(NativeOutput::new(Bytes::new(), 25_000)), 100);
        assert_eq!(result.result, InstructionResult::OutOfGas);
        assert_eq!(result.gas.remaining(), 0);
    }

    #[test]
    fn test_call_outcome_keeps_memory_offset() {
        let outcome = to_call_outcome(Ok(NativeOutput::new(Bytes::new(), 0)), 10, 4..36);
        assert_eq!(outcome.memory_offset, 4..36);
        assert_eq!(outcome.result.result, InstructionResult::Return);
    }
}
