//! Wire types for the NFT REST endpoints.

use serde::Deserialize;
use serde_json::Value;

/// Options for owned-NFT lookups.
#[derive(Debug, Clone, Default)]
pub struct NftQuery {
    /// Restrict results to these collection contracts.
    pub contract_addresses: Vec<String>,
    /// Include per-token metadata in each entry.
    pub with_metadata: bool,
    pub page_key: Option<String>,
}

/// One page of owned NFTs plus the continuation key.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftPage {
    pub owned_nfts: Vec<Value>,
    #[serde(default)]
    pub page_key: Option<String>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

/// Owner list for a single token.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TokenOwners {
    pub owners: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nft_page_deserialize() {
        let page: NftPage = serde_json::from_str(
            r#"{
                "ownedNfts": [{"contract": {"address": "0xabc"}, "id": {"tokenId": "0x1"}}],
                "pageKey": "nft-page-2",
                "totalCount": 41
            }"#,
        )
        .unwrap();
        assert_eq!(page.owned_nfts.len(), 1);
        assert_eq!(page.page_key.as_deref(), Some("nft-page-2"));
        assert_eq!(page.total_count, Some(41));
    }

    #[test]
    fn last_page_has_no_key() {
        let page: NftPage = serde_json::from_str(r#"{"ownedNfts": []}"#).unwrap();
        assert!(page.page_key.is_none());
        assert!(page.total_count.is_none());
    }
}
