use alloy_sol_types::sol;

// Canonical ABI of the natively implemented contracts.
// Selectors and event topics used by the dispatcher are derived from these declarations.
sol! {
    interface IAploToken {
        event Transfer(address indexed from, address indexed to, uint256 value);

        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function supportsInterface(bytes4 interfaceId) external view returns (bool);
    }

    interface IBlockOracle {
        // Capitalised: selector 0xefd87d07 is derived from this exact name.
        function GetBlockHash(uint256 blockNumber) external view returns (bytes32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{
        b256,
        hex,
    };
    use alloy_sol_types::{
        SolCall,
        SolEvent,
    };

    /// These values are ABI-critical: callers on the network hardcode them.
    #[test]
    fn test_selectors_are_stable() {
        let expected: Vec<(&str, [u8; 4], [u8; 4])> = vec![
            (
                "balanceOf(address)",
                IAploToken::balanceOfCall::SELECTOR,
                hex!("70a08231"),
            ),
            (
                "transfer(address,uint256)",
                IAploToken::transferCall::SELECTOR,
                hex!("a9059cbb"),
            ),
            ("name()", IAploToken::nameCall::SELECTOR, hex!("06fdde03")),
            ("symbol()", IAploToken::symbolCall::SELECTOR, hex!("95d89b41")),
            ("decimals()", IAploToken::decimalsCall::SELECTOR, hex!("313ce567")),
            (
                "supportsInterface(bytes4)",
                IAploToken::supportsInterfaceCall::SELECTOR,
                hex!("01ffc9a7"),
            ),
            (
                "GetBlockHash(uint256)",
                IBlockOracle::GetBlockHashCall::SELECTOR,
                hex!("efd87d07"),
            ),
        ];

        for (signature, actual, wanted) in expected {
            assert_eq!(actual, wanted, "selector drift for {signature}");
        }
    }

    #[test]
    fn test_transfer_topic_is_erc20_transfer() {
        assert_eq!(
            IAploToken::Transfer::SIGNATURE_HASH,
            b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef")
        );
    }
}
