//! # `registry`
//!
//! Maps reserved addresses to the function tables served there. A [`Registry`] is assembled once
//! through [`RegistryBuilder`] at startup and is read-only afterwards, so it can be shared across
//! execution threads without synchronization.

use crate::{
    abi::Selector,
    config::NativeConfig,
    natives::NativeFunction,
};

use alloy_primitives::Address;
use std::{
    collections::HashMap,
    sync::OnceLock,
};

/// Functions of a single native contract, keyed by selector. The fallback is used for inputs
/// too short to carry a selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionTable {
    functions: HashMap<Selector, NativeFunction>,
    fallback: Option<NativeFunction>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table of the Aplo token.
    pub fn token() -> Self {
        Self::from_functions(NativeFunction::TOKEN)
    }

    /// Table of the block hash oracle.
    pub fn block_oracle() -> Self {
        Self::from_functions(NativeFunction::BLOCK_ORACLE)
    }

    fn from_functions(functions: impl IntoIterator<Item = NativeFunction>) -> Self {
        functions
            .into_iter()
            .fold(Self::new(), |table, function| table.with_function(function))
    }

    /// Serve `function` under its own selector, replacing whatever was registered there.
    pub fn with_function(self, function: NativeFunction) -> Self {
        self.with_function_at(function.selector(), function)
    }

    /// Serve `function` under `selector`, replacing whatever was registered there.
    pub fn with_function_at(mut self, selector: Selector, function: NativeFunction) -> Self {
        self.functions.insert(selector, function);
        self
    }

    /// Serve `function` for inputs shorter than a selector.
    pub fn with_fallback(mut self, function: NativeFunction) -> Self {
        self.fallback = Some(function);
        self
    }

    pub fn function(&self, selector: &Selector) -> Option<NativeFunction> {
        self.functions.get(selector).copied()
    }

    pub fn fallback(&self) -> Option<NativeFunction> {
        self.fallback
    }

    pub fn selectors(&self) -> impl Iterator<Item = &Selector> {
        self.functions.keys()
    }

    /// Number of selector entries. The fallback is not counted.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// Immutable map of reserved addresses to their function tables.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    contracts: HashMap<Address, FunctionTable>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn lookup(&self, address: &Address) -> Option<&FunctionTable> {
        self.contracts.get(address)
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.contracts.contains_key(address)
    }

    pub fn addresses(&self) -> impl Iterator<Item = &Address> {
        self.contracts.keys()
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

/// Accumulates function tables before they are frozen into a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    contracts: HashMap<Address, FunctionTable>,
}

impl RegistryBuilder {
    /// Register `table` at `address`, replacing any table already there.
    pub fn register(mut self, address: Address, table: FunctionTable) -> Self {
        self.contracts.insert(address, table);
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            contracts: self.contracts,
        }
    }
}

/// Registry built from [`NativeConfig::default`] on first use and kept for the process lifetime.
pub fn default_registry() -> &'static Registry {
    static INSTANCE: OnceLock<Registry> = OnceLock::new();
    INSTANCE.get_or_init(|| NativeConfig::default().build())
}
