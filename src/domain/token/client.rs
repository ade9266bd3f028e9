//! Tokens sub-client — balance and metadata queries.

use crate::client::AlchemyClient;
use crate::domain::token::wire::{TokenBalanceSpec, TokenBalancesPage, TokenMetadata};
use crate::error::{SdkError, SdkResult};
use crate::shared::is_address;

use serde_json::json;

/// Upstream limit on explicit contract lists per balance call.
const MAX_CONTRACT_BATCH: usize = 1500;

pub struct Tokens<'a> {
    pub(crate) client: &'a AlchemyClient,
}

impl Tokens<'_> {
    /// Token balances of `address` (`alchemy_getTokenBalances`).
    ///
    /// Pagination applies to the token-type specs; an explicit contract
    /// list is answered in one response, so `page_key` must be `None` there.
    pub fn get_balances(
        &self,
        address: &str,
        spec: &TokenBalanceSpec,
        page_key: Option<&str>,
    ) -> SdkResult<TokenBalancesPage> {
        if !is_address(address) {
            return Err(SdkError::Validation(format!("malformed address: {address:?}")));
        }

        let params = match spec {
            TokenBalanceSpec::Contracts(contracts) => {
                if contracts.is_empty() {
                    return Err(SdkError::Validation("no token addresses".into()));
                }
                if contracts.len() > MAX_CONTRACT_BATCH {
                    return Err(SdkError::Validation(format!(
                        "too many token addresses: {} (limit {MAX_CONTRACT_BATCH})",
                        contracts.len()
                    )));
                }
                for contract in contracts {
                    if !is_address(contract) {
                        return Err(SdkError::Validation(format!(
                            "malformed contract address: {contract:?}"
                        )));
                    }
                }
                if page_key.is_some() {
                    return Err(SdkError::Validation(
                        "page keys do not apply to explicit contract lists".into(),
                    ));
                }
                json!([address, contracts])
            }
            TokenBalanceSpec::Erc20 | TokenBalanceSpec::DefaultTokens => {
                let token_type = match spec {
                    TokenBalanceSpec::Erc20 => "erc20",
                    _ => "DEFAULT_TOKENS",
                };
                let options = match page_key {
                    Some(key) => json!({ "pageKey": key }),
                    None => json!({}),
                };
                json!([address, token_type, options])
            }
        };

        let result = self.client.http.rpc_labeled(
            "alchemy_getTokenBalances",
            params,
            Some("getTokenBalances"),
        )?;
        Ok(serde_json::from_value(result)?)
    }

    /// Name, symbol, decimals, and logo of a token contract
    /// (`alchemy_getTokenMetadata`).
    pub fn get_metadata(&self, token_address: &str) -> SdkResult<TokenMetadata> {
        if !is_address(token_address) {
            return Err(SdkError::Validation(format!(
                "malformed token address: {token_address:?}"
            )));
        }
        let result = self.client.http.rpc_labeled(
            "alchemy_getTokenMetadata",
            json!([token_address]),
            Some("getTokenMetadata"),
        )?;
        Ok(serde_json::from_value(result)?)
    }
}
