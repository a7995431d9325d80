use crate::{
    DispatchError,
    NativeResult,
    abi,
    natives::NativeFunction,
    registry::Registry,
    state::{
        ChainIndex,
        NativeState,
    },
};

use alloy_primitives::Address;
use tracing::debug;

impl Registry {
    /// Resolves the native function serving a call of `input` to `address`.
    ///
    /// Pure routing: no state is read and no gas is charged. Inputs shorter than a selector go to
    /// the table's fallback.
    pub fn resolve(&self, address: Address, input: &[u8]) -> Result<NativeFunction, DispatchError> {
        let table = self
            .lookup(&address)
            .ok_or(DispatchError::UnknownContract(address))?;

        let selector = abi::selector(input);
        let function = match selector {
            Some(selector) => table.function(&selector),
            None => table.fallback(),
        };

        function.ok_or(DispatchError::NoFunction { address, selector })
    }

    /// Resolves and runs a call to `target`.
    ///
    /// A [`DispatchError`] means `target` has no native implementation for this input and the
    /// engine should handle the call some other way. A revert is reported inside the
    /// [`NativeResult`].
    pub fn execute<C, S>(
        &self,
        chain: &C,
        state: &mut S,
        target: Address,
        caller: Address,
        input: &[u8],
        gas_limit: u64,
    ) -> Result<NativeResult, DispatchError>
    where
        C: ChainIndex + ?Sized,
        S: NativeState + ?Sized,
    {
        let function = self.resolve(target, input).inspect_err(|error| {
            debug!(target: "native-contracts::dispatch", %target, %error, "Native dispatch failed");
        })?;

        debug!(target: "native-contracts::dispatch", %target, %caller, %function, gas_limit, "Executing native function");
        Ok(function.invoke(chain, state, caller, input, gas_limit))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        constants::{
            APLO_TOKEN_ADDRESS,
            BLOCK_ORACLE_ADDRESS,
        },
        default_registry,
        registry::FunctionTable,
        test_utils::{
            InMemoryChain,
            InMemoryState,
            random_address,
        },
    };

    use alloy_primitives::{
        U256,
        hex,
    };

    #[test]
    fn test_unknown_contract() {
        let address = random_address();
        assert_eq!(
            default_registry().resolve(address, &hex!("70a08231")),
            Err(DispatchError::UnknownContract(address))
        );
    }

    #[test]
    fn test_unknown_selector() {
        assert_eq!(
            default_registry().resolve(APLO_TOKEN_ADDRESS, &hex!("deadbeef")),
            Err(DispatchError::NoFunction {
                address: APLO_TOKEN_ADDRESS,
                selector: Some(hex!("deadbeef").into()),
            })
        );
    }

    #[test]
    fn test_short_input_without_fallback() {
        for input in [&[][..], &hex!("70a082")[..]] {
            assert_eq!(
                default_registry().resolve(APLO_TOKEN_ADDRESS, input),
                Err(DispatchError::NoFunction {
                    address: APLO_TOKEN_ADDRESS,
                    selector: None,
                })
            );
        }
    }

    #[test]
    fn test_short_input_with_fallback() {
        let registry = Registry::builder()
            .register(
                APLO_TOKEN_ADDRESS,
                FunctionTable::token().with_fallback(NativeFunction::Name),
            )
            .build();
        assert_eq!(
            registry.resolve(APLO_TOKEN_ADDRESS, &[]),
            Ok(NativeFunction::Name)
        );
    }

    #[test]
    fn test_resolves_registered_functions_deterministically() {
        let registry = default_registry();
        for function in NativeFunction::TOKEN {
            let mut input = function.selector().to_vec();
            input.extend_from_slice(&[0u8; 32]);
            for _ in 0..3 {
                assert_eq!(registry.resolve(APLO_TOKEN_ADDRESS, &input), Ok(function));
            }
        }
        assert_eq!(
            registry.resolve(BLOCK_ORACLE_ADDRESS, &hex!("efd87d07")),
            Ok(NativeFunction::GetBlockHash)
        );
    }

    #[test]
    fn test_oracle_selector_not_served_by_token() {
        assert!(matches!(
            default_registry().resolve(APLO_TOKEN_ADDRESS, &hex!("efd87d07")),
            Err(DispatchError::NoFunction { .. })
        ));
    }

    #[test]
    fn test_execute_runs_resolved_function() {
        let account = random_address();
        let chain = InMemoryChain::default();
        let mut state = InMemoryState::default().with_balance(account, U256::from(77));

        let mut input = NativeFunction::BalanceOf.selector().to_vec();
        input.extend_from_slice(account.into_word().as_slice());

        let out = default_registry()
            .execute(&chain, &mut state, APLO_TOKEN_ADDRESS, random_address(), &input, 0)
            .unwrap()
            .unwrap();
        assert_eq!(U256::from_be_slice(&out.output), U256::from(77));
    }

    #[test]
    fn test_execute_unknown_contract_does_not_run() {
        let chain = InMemoryChain::default();
        let mut state = InMemoryState::default();
        let target = random_address();

        let result = default_registry().execute(
            &chain,
            &mut state,
            target,
            random_address(),
            &hex!("a9059cbb"),
            100_000,
        );
        assert_eq!(result, Err(DispatchError::UnknownContract(target)));
        assert!(state.logs.is_empty());
    }
}
