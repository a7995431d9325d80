use alloy_primitives::{
    Address,
    U256,
};
use alloy_sol_types::SolCall;
use native_contracts::{
    DispatchError,
    NativeResult,
    Registry,
    constants::APLO_TOKEN_ADDRESS,
    default_registry,
    sol_primitives::{
        IAploToken,
        IBlockOracle,
    },
    test_utils::{
        InMemoryChain,
        InMemoryState,
    },
};

/// Routes calls through a registry against an in-memory ledger and chain, the way an engine
/// would on hitting a reserved address.
pub struct Harness {
    pub registry: &'static Registry,
    pub chain: InMemoryChain,
    pub state: InMemoryState,
}

impl Default for Harness {
    fn default() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            registry: default_registry(),
            chain: InMemoryChain::default(),
            state: InMemoryState::default(),
        }
    }
}

impl Harness {
    pub fn call(
        &mut self,
        target: Address,
        caller: Address,
        input: &[u8],
        gas_limit: u64,
    ) -> Result<NativeResult, DispatchError> {
        self.registry
            .execute(&self.chain, &mut self.state, target, caller, input, gas_limit)
    }

    pub fn transfer(
        &mut self,
        from: Address,
        to: Address,
        amount: U256,
        gas_limit: u64,
    ) -> NativeResult {
        let input = IAploToken::transferCall { to, amount }.abi_encode();
        self.call(APLO_TOKEN_ADDRESS, from, &input, gas_limit)
            .expect("token is registered")
    }

    pub fn balance_of(&mut self, account: Address) -> U256 {
        let input = IAploToken::balanceOfCall { account }.abi_encode();
        let output = self
            .call(APLO_TOKEN_ADDRESS, Address::ZERO, &input, 0)
            .expect("token is registered")
            .expect("balanceOf does not revert");
        U256::from_be_slice(&output.output)
    }

    pub fn get_block_hash_input(number: u64) -> Vec<u8> {
        IBlockOracle::GetBlockHashCall {
            blockNumber: U256::from(number),
        }
        .abi_encode()
    }
}
