use crate::{
    constants::{
        APLO_TOKEN_ADDRESS,
        BLOCK_ORACLE_ADDRESS,
    },
    registry::{
        FunctionTable,
        Registry,
    },
};

use alloy_primitives::Address;
use serde::{
    Deserialize,
    Serialize,
};
use tracing::info;

/// Where the native contracts are served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeConfig {
    /// Address of the Aplo token.
    pub token_address: Address,
    /// Address of the block hash oracle, `None` to leave the oracle unregistered.
    pub block_oracle_address: Option<Address>,
}

impl Default for NativeConfig {
    fn default() -> Self {
        NativeConfig {
            token_address: APLO_TOKEN_ADDRESS,
            block_oracle_address: Some(BLOCK_ORACLE_ADDRESS),
        }
    }
}

impl NativeConfig {
    /// Set the address of the Aplo token
    pub fn with_token_address(mut self, address: Address) -> Self {
        self.token_address = address;
        self
    }

    /// Set the address of the block hash oracle
    pub fn with_block_oracle_address(mut self, address: Address) -> Self {
        self.block_oracle_address = Some(address);
        self
    }

    /// Do not register the block hash oracle
    pub fn without_block_oracle(mut self) -> Self {
        self.block_oracle_address = None;
        self
    }

    /// Build the registry of native contracts.
    ///
    /// Should the oracle share the token's address, the oracle table wins.
    pub fn build(self) -> Registry {
        let mut builder = Registry::builder().register(self.token_address, FunctionTable::token());
        if let Some(oracle) = self.block_oracle_address {
            builder = builder.register(oracle, FunctionTable::block_oracle());
        }

        info!(
            target: "native-contracts::config",
            token = %self.token_address,
            block_oracle = ?self.block_oracle_address,
            "Native contracts registered"
        );
        builder.build()
    }
}
