//! Transfers sub-client — paginated asset-transfer history.

use crate::client::AlchemyClient;
use crate::domain::transfers::wire::{TransferQuery, TransfersPage};
use crate::error::{SdkError, SdkResult};
use crate::shared::{is_address, BlockRef, Quantity};

use serde_json::{json, Value};

pub struct Transfers<'a> {
    pub(crate) client: &'a AlchemyClient,
}

impl Transfers<'_> {
    /// One page of transfers matching `query`.
    ///
    /// The returned page key, when present, goes back verbatim in
    /// `query.page_key` to fetch the next page. No multi-page aggregation
    /// happens here — see [`get_all`](Self::get_all) for that.
    pub fn get(&self, query: &TransferQuery) -> SdkResult<TransfersPage> {
        validate(query)?;

        let from_block = block_param(&query.from_block)?;
        let to_block = match &query.to_block {
            Some(block) => block_param(block)?,
            // Upstream pins an open range to the block height at query time.
            None => Quantity::from(self.client.node().block_number()?).to_hex(),
        };

        let mut params = json!({
            "fromBlock": from_block,
            "toBlock": to_block,
            "category": query.categories,
            "excludeZeroValue": false,
            "maxCount": Quantity::from(query.max_count).to_hex(),
        });
        if let Some(key) = &query.page_key {
            params["pageKey"] = Value::from(key.as_str());
        }
        if let Some(contracts) = &query.contract_addresses {
            params["contractAddresses"] = json!(contracts);
        }
        if let Some(from) = &query.from_address {
            params["fromAddress"] = Value::from(from.to_lowercase());
        }
        if let Some(to) = &query.to_address {
            params["toAddress"] = Value::from(to.to_lowercase());
        }

        let result = self.client.http.rpc_labeled(
            "alchemy_getAssetTransfers",
            json!([params]),
            Some("getAssetTransfers"),
        )?;
        Ok(serde_json::from_value(result)?)
    }

    /// Every matching transfer, following continuation keys until exhausted.
    ///
    /// Each page is one API call; wide block ranges can mean many calls.
    pub fn get_all(&self, query: &TransferQuery) -> SdkResult<Vec<Value>> {
        let mut query = query.clone();
        // Pin the range once so later pages see the same window.
        if query.to_block.is_none() {
            query.to_block = Some(BlockRef::Number(self.client.node().block_number()?));
        }
        query.page_key = None;

        let mut all = Vec::new();
        loop {
            let page = self.get(&query)?;
            all.extend(page.transfers);
            match page.page_key {
                Some(key) => query.page_key = Some(key),
                None => return Ok(all),
            }
        }
    }
}

fn validate(query: &TransferQuery) -> SdkResult<()> {
    if query.categories.is_empty() {
        return Err(SdkError::Validation(
            "at least one transfer category is required".into(),
        ));
    }
    if query.max_count == 0 {
        return Err(SdkError::Validation("max_count must be positive".into()));
    }
    for addr in [&query.from_address, &query.to_address].into_iter().flatten() {
        if !is_address(addr) {
            return Err(SdkError::Validation(format!("malformed address: {addr:?}")));
        }
    }
    for addr in query.contract_addresses.iter().flatten() {
        if !is_address(addr) {
            return Err(SdkError::Validation(format!(
                "malformed contract address: {addr:?}"
            )));
        }
    }
    Ok(())
}

fn block_param(block: &BlockRef) -> SdkResult<String> {
    block.number_param().ok_or_else(|| {
        SdkError::Validation("a block hash cannot bound a transfer range".into())
    })
}
