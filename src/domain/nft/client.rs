//! NFT sub-client — REST ownership queries.

use crate::client::AlchemyClient;
use crate::domain::nft::wire::{NftPage, NftQuery, TokenOwners};
use crate::error::{SdkError, SdkResult};
use crate::shared::is_address;

pub struct Nft<'a> {
    pub(crate) client: &'a AlchemyClient,
}

impl Nft<'_> {
    /// NFTs held by `owner` (`getNFTs`), one page per call.
    pub fn owned_by(&self, owner: &str, query: &NftQuery) -> SdkResult<NftPage> {
        if !is_address(owner) {
            return Err(SdkError::Validation(format!("malformed address: {owner:?}")));
        }
        for contract in &query.contract_addresses {
            if !is_address(contract) {
                return Err(SdkError::Validation(format!(
                    "malformed contract address: {contract:?}"
                )));
            }
        }

        let mut params: Vec<(&str, String)> = vec![
            ("owner", owner.to_string()),
            ("withMetadata", query.with_metadata.to_string()),
        ];
        for contract in &query.contract_addresses {
            params.push(("contractAddresses[]", contract.clone()));
        }
        if let Some(key) = &query.page_key {
            params.push(("pageKey", key.clone()));
        }

        Ok(self.client.http.get_nft("getNFTs", &params)?)
    }

    /// Current owners of one token (`getOwnersForToken`).
    pub fn owners_of(&self, contract_address: &str, token_id: &str) -> SdkResult<Vec<String>> {
        if !is_address(contract_address) {
            return Err(SdkError::Validation(format!(
                "malformed contract address: {contract_address:?}"
            )));
        }
        if token_id.is_empty() {
            return Err(SdkError::Validation("token id is required".into()));
        }

        let params = [
            ("contractAddress", contract_address.to_string()),
            ("tokenId", token_id.to_string()),
        ];
        let owners: TokenOwners = self.client.http.get_nft("getOwnersForToken", &params)?;
        Ok(owners.owners)
    }
}
