//! Wire types for token balance and metadata responses.

use serde::Deserialize;
use serde_json::Value;

/// Which token balances to fetch for an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenBalanceSpec {
    /// Every ERC-20 token the address has interacted with.
    Erc20,
    /// The upstream curated top-100 token list.
    DefaultTokens,
    /// An explicit contract list (1 to 1500 entries).
    Contracts(Vec<String>),
}

/// Balance entry for one token contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub contract_address: String,
    /// Hex balance; absent when the contract call failed.
    #[serde(default)]
    pub token_balance: Option<String>,
    /// Per-contract error, when the balance could not be read.
    #[serde(default)]
    pub error: Option<Value>,
}

/// One page of token balances plus the continuation key.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalancesPage {
    pub address: String,
    pub token_balances: Vec<TokenBalance>,
    #[serde(default)]
    pub page_key: Option<String>,
}

/// Metadata for a token contract.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenMetadata {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
    pub logo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balances_page_deserialize() {
        let page: TokenBalancesPage = serde_json::from_str(
            r#"{
                "address": "0x000000000000000000000000000000000000beef",
                "tokenBalances": [
                    {"contractAddress": "0x000000000000000000000000000000000000dead",
                     "tokenBalance": "0x3e8", "error": null}
                ],
                "pageKey": "balances-page-2"
            }"#,
        )
        .unwrap();
        assert_eq!(page.token_balances.len(), 1);
        assert_eq!(page.token_balances[0].token_balance.as_deref(), Some("0x3e8"));
        assert_eq!(page.page_key.as_deref(), Some("balances-page-2"));
    }

    #[test]
    fn metadata_deserialize_with_nulls() {
        let meta: TokenMetadata = serde_json::from_str(
            r#"{"name": "Wrapped Ether", "symbol": "WETH", "decimals": 18, "logo": null}"#,
        )
        .unwrap();
        assert_eq!(meta.symbol.as_deref(), Some("WETH"));
        assert_eq!(meta.decimals, Some(18));
        assert!(meta.logo.is_none());
    }
}
