//! Wire types for asset-transfer queries and pages.

use crate::shared::BlockRef;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Transfer category filter (lowercase wire form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferCategory {
    External,
    Internal,
    Erc20,
    Erc721,
    SpecialNft,
}

impl TransferCategory {
    /// The upstream default: every category.
    pub const ALL: &'static [TransferCategory] = &[
        TransferCategory::External,
        TransferCategory::Internal,
        TransferCategory::Erc20,
        TransferCategory::Erc721,
        TransferCategory::SpecialNft,
    ];
}

/// Query for one transfers page.
///
/// Absent optionals are omitted from the request. A `to_block` of `None`
/// is resolved to the current block number before sending.
#[derive(Debug, Clone)]
pub struct TransferQuery {
    pub from_address: Option<String>,
    pub to_address: Option<String>,
    pub from_block: BlockRef,
    pub to_block: Option<BlockRef>,
    pub max_count: u64,
    pub contract_addresses: Option<Vec<String>>,
    pub categories: Vec<TransferCategory>,
    pub page_key: Option<String>,
}

impl Default for TransferQuery {
    fn default() -> Self {
        Self {
            from_address: None,
            to_address: None,
            from_block: BlockRef::Number(0),
            to_block: None,
            max_count: 1000,
            contract_addresses: None,
            categories: TransferCategory::ALL.to_vec(),
            page_key: None,
        }
    }
}

/// One page of transfers plus the continuation key, when more exist.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransfersPage {
    pub transfers: Vec<Value>,
    #[serde(default)]
    pub page_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_form_is_lowercase() {
        let json = serde_json::to_string(TransferCategory::ALL).unwrap();
        assert_eq!(
            json,
            r#"["external","internal","erc20","erc721","specialnft"]"#
        );
    }

    #[test]
    fn page_splits_out_page_key() {
        let page: TransfersPage = serde_json::from_str(
            r#"{"transfers": [{"hash": "0xabc"}], "pageKey": "next-page"}"#,
        )
        .unwrap();
        assert_eq!(page.transfers.len(), 1);
        assert_eq!(page.page_key.as_deref(), Some("next-page"));
    }

    #[test]
    fn page_key_absent_means_last_page() {
        let page: TransfersPage =
            serde_json::from_str(r#"{"transfers": []}"#).unwrap();
        assert!(page.transfers.is_empty());
        assert!(page.page_key.is_none());
    }
}
