//! Node sub-client — one method per JSON-RPC endpoint.
//!
//! Numeric results arrive as `0x`-hex strings and are decoded to integers;
//! free-form objects (blocks, transactions, receipts, logs) are returned as
//! raw JSON.

use crate::client::AlchemyClient;
use crate::domain::node::wire::{CallRequest, FeeData};
use crate::error::{SdkError, SdkResult};
use crate::shared::{is_address, is_hash, BlockRef, Quantity};

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

/// Code result for an address with no contract deployed.
const NO_CODE: &str = "0x";

pub struct Node<'a> {
    pub(crate) client: &'a AlchemyClient,
}

impl Node<'_> {
    // ── Chain state ──────────────────────────────────────────────────────

    /// Current block number (`eth_blockNumber`).
    pub fn block_number(&self) -> SdkResult<u64> {
        let result = self.client.http.rpc("eth_blockNumber", json!([]))?;
        Ok(quantity(result)?.as_u64())
    }

    /// Native balance of `address` in wei (`eth_getBalance`).
    pub fn get_balance(&self, address: &str, block: Option<BlockRef>) -> SdkResult<u128> {
        check_address(address)?;
        let result = self
            .client
            .http
            .rpc("eth_getBalance", json!([address, position_param(block)?]))?;
        Ok(quantity(result)?.as_u128())
    }

    /// Contract code at `address` (`eth_getCode`); `"0x"` when none.
    pub fn get_code(&self, address: &str, block: Option<BlockRef>) -> SdkResult<String> {
        check_address(address)?;
        let result = self
            .client
            .http
            .rpc("eth_getCode", json!([address, position_param(block)?]))?;
        string(result)
    }

    /// Outgoing transaction count — the account nonce (`eth_getTransactionCount`).
    pub fn get_transaction_count(&self, address: &str, block: Option<BlockRef>) -> SdkResult<u64> {
        check_address(address)?;
        let result = self.client.http.rpc(
            "eth_getTransactionCount",
            json!([address, position_param(block)?]),
        )?;
        Ok(quantity(result)?.as_u64())
    }

    /// Storage slot value (`eth_getStorageAt`).
    pub fn get_storage_at(
        &self,
        address: &str,
        position: Quantity,
        block: Option<BlockRef>,
    ) -> SdkResult<String> {
        check_address(address)?;
        let result = self.client.http.rpc(
            "eth_getStorageAt",
            json!([address, position.to_hex(), position_param(block)?]),
        )?;
        string(result)
    }

    // ── Blocks ───────────────────────────────────────────────────────────

    /// Block by tag, number, or hash; dispatches to the matching RPC variant.
    pub fn get_block(&self, block: BlockRef, full_transactions: bool) -> SdkResult<Value> {
        let result = match block.as_hash() {
            Some(hash) => self
                .client
                .http
                .rpc("eth_getBlockByHash", json!([hash, full_transactions]))?,
            None => self.client.http.rpc(
                "eth_getBlockByNumber",
                json!([position_param(Some(block))?, full_transactions]),
            )?,
        };
        Ok(result)
    }

    /// Transaction count of a block (`eth_getBlockTransactionCountBy{Hash,Number}`).
    pub fn get_block_transaction_count(&self, block: BlockRef) -> SdkResult<u64> {
        let result = match block.as_hash() {
            Some(hash) => self
                .client
                .http
                .rpc("eth_getBlockTransactionCountByHash", json!([hash]))?,
            None => self.client.http.rpc(
                "eth_getBlockTransactionCountByNumber",
                json!([position_param(Some(block))?]),
            )?,
        };
        Ok(quantity(result)?.as_u64())
    }

    /// Uncle count of a block (`eth_getUncleCountByBlock{Hash,Number}`).
    pub fn get_uncle_count(&self, block: BlockRef) -> SdkResult<u64> {
        let result = match block.as_hash() {
            Some(hash) => self
                .client
                .http
                .rpc("eth_getUncleCountByBlockHash", json!([hash]))?,
            None => self.client.http.rpc(
                "eth_getUncleCountByBlockNumber",
                json!([position_param(Some(block))?]),
            )?,
        };
        Ok(quantity(result)?.as_u64())
    }

    /// Uncle by block and index (`eth_getUncleByBlock{Hash,Number}AndIndex`).
    pub fn get_uncle(&self, block: BlockRef, index: u64) -> SdkResult<Value> {
        let index = Quantity::from(index).to_hex();
        let result = match block.as_hash() {
            Some(hash) => self
                .client
                .http
                .rpc("eth_getUncleByBlockHashAndIndex", json!([hash, index]))?,
            None => self.client.http.rpc(
                "eth_getUncleByBlockNumberAndIndex",
                json!([position_param(Some(block))?, index]),
            )?,
        };
        Ok(result)
    }

    /// UTC timestamps of the given block numbers, one header fetch each.
    pub fn block_timestamps(
        &self,
        blocks: impl IntoIterator<Item = u64>,
    ) -> SdkResult<Vec<(u64, DateTime<Utc>)>> {
        let mut out = Vec::new();
        for number in blocks {
            let header = self.get_block(BlockRef::Number(number), false)?;
            let ts = quantity(header["timestamp"].clone())?.as_u64();
            let when = Utc
                .timestamp_opt(ts as i64, 0)
                .single()
                .ok_or_else(|| SdkError::Validation(format!("block {number}: timestamp {ts} out of range")))?;
            out.push((number, when));
        }
        Ok(out)
    }

    // ── Transactions ─────────────────────────────────────────────────────

    /// Transaction by hash (`eth_getTransactionByHash`).
    pub fn get_transaction_by_hash(&self, hash: &str) -> SdkResult<Value> {
        check_hash(hash)?;
        Ok(self
            .client
            .http
            .rpc("eth_getTransactionByHash", json!([hash]))?)
    }

    /// Transaction by block and index position.
    pub fn get_transaction_by_block_and_index(
        &self,
        block: BlockRef,
        index: u64,
    ) -> SdkResult<Value> {
        let index = Quantity::from(index).to_hex();
        let result = match block.as_hash() {
            Some(hash) => self.client.http.rpc(
                "eth_getTransactionByBlockHashAndIndex",
                json!([hash, index]),
            )?,
            None => self.client.http.rpc(
                "eth_getTransactionByBlockNumberAndIndex",
                json!([position_param(Some(block))?, index]),
            )?,
        };
        Ok(result)
    }

    /// Receipt of a mined transaction (`eth_getTransactionReceipt`).
    pub fn get_transaction_receipt(&self, hash: &str) -> SdkResult<Value> {
        check_hash(hash)?;
        Ok(self
            .client
            .http
            .rpc("eth_getTransactionReceipt", json!([hash]))?)
    }

    /// All receipts of a block (`alchemy_getTransactionReceipts`).
    pub fn get_block_receipts(&self, block: BlockRef) -> SdkResult<Vec<Value>> {
        let input = match block.as_hash() {
            Some(hash) => json!({ "blockHash": hash }),
            None => {
                let param = position_param(Some(block))?;
                json!({ "blockNumber": param })
            }
        };
        let result = self.client.http.rpc_labeled(
            "alchemy_getTransactionReceipts",
            json!([input]),
            Some("getTransactionReceipts"),
        )?;
        let receipts = result
            .get("receipts")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        Ok(receipts)
    }

    /// Broadcast a signed raw transaction (`eth_sendRawTransaction`).
    pub fn send_raw_transaction(&self, data: &str) -> SdkResult<String> {
        let result = self
            .client
            .http
            .rpc("eth_sendRawTransaction", json!([data]))?;
        string(result)
    }

    // ── Execution ────────────────────────────────────────────────────────

    /// Read-only contract call (`eth_call`).
    pub fn call(&self, request: &CallRequest, block: Option<BlockRef>) -> SdkResult<String> {
        check_call_request(request)?;
        let result = self
            .client
            .http
            .rpc("eth_call", json!([request, position_param(block)?]))?;
        string(result)
    }

    /// Gas estimate for a call (`eth_estimateGas`).
    pub fn estimate_gas(&self, request: &CallRequest, block: Option<BlockRef>) -> SdkResult<u64> {
        check_call_request(request)?;
        let result = self
            .client
            .http
            .rpc("eth_estimateGas", json!([request, position_param(block)?]))?;
        Ok(quantity(result)?.as_u64())
    }

    // ── Fees ─────────────────────────────────────────────────────────────

    /// Current gas price in wei (`eth_gasPrice`).
    pub fn gas_price(&self) -> SdkResult<u128> {
        let result = self.client.http.rpc("eth_gasPrice", json!([]))?;
        Ok(quantity(result)?.as_u128())
    }

    /// Current max priority fee per gas in wei (`eth_maxPriorityFeePerGas`).
    pub fn max_priority_fee_per_gas(&self) -> SdkResult<u128> {
        let result = self.client.http.rpc("eth_maxPriorityFeePerGas", json!([]))?;
        Ok(quantity(result)?.as_u128())
    }

    /// Raw fee history (`eth_feeHistory`).
    pub fn fee_history(
        &self,
        block_count: u64,
        newest_block: BlockRef,
        reward_percentiles: Option<&[f64]>,
    ) -> SdkResult<Value> {
        let count = Quantity::from(block_count).to_hex();
        let newest = position_param(Some(newest_block))?;
        let params = match reward_percentiles {
            Some(p) => json!([count, newest, p]),
            None => json!([count, newest]),
        };
        Ok(self.client.http.rpc("eth_feeHistory", params)?)
    }

    /// Base fee of the latest block, from a one-block fee history.
    pub fn base_fee_per_gas(&self) -> SdkResult<u128> {
        let history = self.fee_history(1, BlockRef::default(), None)?;
        let base = history["baseFeePerGas"]
            .get(0)
            .cloned()
            .unwrap_or(Value::Null);
        Ok(quantity(base)?.as_u128())
    }

    /// Base fee plus current priority fee.
    pub fn max_fee_per_gas(&self) -> SdkResult<u128> {
        Ok(self.base_fee_per_gas()? + self.max_priority_fee_per_gas()?)
    }

    /// Recommended fee data, composed the way upstream composes it.
    pub fn fee_data(&self) -> SdkResult<FeeData> {
        let max_priority_fee_per_gas = self.max_priority_fee_per_gas()?;
        let max_fee_per_gas = self.base_fee_per_gas()? + max_priority_fee_per_gas;
        let gas_price = self.gas_price()?;
        Ok(FeeData {
            max_fee_per_gas,
            max_priority_fee_per_gas,
            gas_price,
        })
    }

    // ── Logs ─────────────────────────────────────────────────────────────

    /// Event logs for a contract and topic filter (`eth_getLogs`).
    pub fn get_logs(
        &self,
        contract_address: &str,
        topics: &[String],
        from_block: Option<BlockRef>,
        to_block: Option<BlockRef>,
    ) -> SdkResult<Value> {
        check_address(contract_address)?;
        let from = position_param(Some(from_block.unwrap_or(BlockRef::Number(0))))?;
        let to = position_param(Some(to_block.unwrap_or_default()))?;
        let filter = json!({
            "address": contract_address,
            "fromBlock": from,
            "toBlock": to,
            "topics": topics,
        });
        Ok(self.client.http.rpc("eth_getLogs", json!([filter]))?)
    }

    // ── Contract discovery ───────────────────────────────────────────────

    /// First block in `[from_block, to_block]` where `address` has code,
    /// by binary search over `eth_getCode`.
    pub fn first_block_with_code(
        &self,
        mut from_block: u64,
        mut to_block: u64,
        address: &str,
    ) -> SdkResult<u64> {
        check_address(address)?;
        while from_block < to_block {
            let mid = from_block + (to_block - from_block) / 2;
            let code = self.get_code(address, Some(BlockRef::Number(mid)))?;
            if code == NO_CODE {
                from_block = mid + 1;
            } else {
                to_block = mid;
            }
        }
        Ok(to_block)
    }

    /// Deployer address and deployment block of a contract.
    ///
    /// Binary-searches for the deployment block, then scans that block's
    /// receipts for the one that created `address`.
    pub fn find_contract_deployer(&self, address: &str) -> SdkResult<(String, u64)> {
        check_address(address)?;
        let head = self.block_number()?;
        let code = self.get_code(address, Some(BlockRef::Number(head)))?;
        if code == NO_CODE {
            return Err(SdkError::Validation(format!(
                "no contract code at {address}"
            )));
        }
        let deploy_block = self.first_block_with_code(0, head, address)?;
        let receipts = self.get_block_receipts(BlockRef::Number(deploy_block))?;
        let wanted = address.to_lowercase();
        for receipt in receipts {
            let created = receipt["contractAddress"]
                .as_str()
                .map(str::to_lowercase);
            if created.as_deref() == Some(wanted.as_str()) {
                let deployer = receipt["from"].as_str().unwrap_or_default().to_string();
                return Ok((deployer, deploy_block));
            }
        }
        Err(SdkError::Validation(format!(
            "no deployment receipt for {address} in block {deploy_block}"
        )))
    }

    // ── Node metadata ────────────────────────────────────────────────────

    /// Client software version (`web3_clientVersion`).
    pub fn client_version(&self) -> SdkResult<String> {
        string(self.client.http.rpc("web3_clientVersion", json!([]))?)
    }

    /// Keccak-256 of the given data (`web3_sha3`). Plain text is
    /// hex-encoded before sending.
    pub fn sha3(&self, data: &str) -> SdkResult<String> {
        let data = if data.starts_with("0x") {
            data.to_string()
        } else {
            format!("0x{}", hex::encode(data.as_bytes()))
        };
        string(self.client.http.rpc("web3_sha3", json!([data]))?)
    }

    /// Network id string (`net_version`).
    pub fn net_version(&self) -> SdkResult<String> {
        string(self.client.http.rpc("net_version", json!([]))?)
    }

    /// Whether the node is listening for connections (`net_listening`).
    pub fn net_listening(&self) -> SdkResult<bool> {
        let result = self.client.http.rpc("net_listening", json!([]))?;
        Ok(serde_json::from_value(result)?)
    }

    /// Protocol version string (`eth_protocolVersion`).
    pub fn protocol_version(&self) -> SdkResult<String> {
        string(self.client.http.rpc("eth_protocolVersion", json!([]))?)
    }

    /// Sync status: `false`, or a progress object (`eth_syncing`).
    pub fn syncing(&self) -> SdkResult<Value> {
        Ok(self.client.http.rpc("eth_syncing", json!([]))?)
    }
}

// ── Shared helpers ───────────────────────────────────────────────────────

fn quantity(value: Value) -> SdkResult<Quantity> {
    Ok(serde_json::from_value(value)?)
}

fn string(value: Value) -> SdkResult<String> {
    Ok(serde_json::from_value(value)?)
}

fn check_address(address: &str) -> SdkResult<()> {
    if is_address(address) {
        Ok(())
    } else {
        Err(SdkError::Validation(format!("malformed address: {address:?}")))
    }
}

fn check_hash(hash: &str) -> SdkResult<()> {
    if is_hash(hash) {
        Ok(())
    } else {
        Err(SdkError::Validation(format!(
            "malformed 32-byte hash: {hash:?}"
        )))
    }
}

fn check_call_request(request: &CallRequest) -> SdkResult<()> {
    check_address(&request.to)?;
    if let Some(from) = &request.from {
        check_address(from)?;
    }
    Ok(())
}

/// Positional block parameter: tag name or hex number, default `latest`.
/// Hashes are rejected — the by-hash RPC variants take those.
fn position_param(block: Option<BlockRef>) -> SdkResult<String> {
    block
        .unwrap_or_default()
        .number_param()
        .ok_or_else(|| {
            SdkError::Validation("a block hash cannot be used as a position parameter".into())
        })
}
