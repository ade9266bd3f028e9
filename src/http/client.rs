//! Low-level blocking HTTP executor — `AlchemyHttp`.
//!
//! Two request shapes: a JSON-RPC POST against the `v2` endpoint and a REST
//! GET against the `nft/v2` sibling path. One synchronous round trip per
//! call, no retries. Internal to the SDK — the high-level client wraps this.

use crate::error::RequestError;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Header naming the convenience method, attached on enhanced-endpoint calls.
const SDK_METHOD_HEADER: &str = "Alchemy-Rust-Sdk-Method";

/// Blocking HTTP executor for one network's endpoint pair.
#[derive(Debug)]
pub struct AlchemyHttp {
    rpc_url: String,
    nft_url: String,
    client: Client,
    call_id: AtomicU64,
}

#[derive(Debug, Deserialize)]
struct RpcEnvelope {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

impl AlchemyHttp {
    pub fn new(rpc_url: String, nft_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            rpc_url: rpc_url.trim_end_matches('/').to_string(),
            nft_url: nft_url.trim_end_matches('/').to_string(),
            client,
            call_id: AtomicU64::new(0),
        }
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    pub fn nft_url(&self) -> &str {
        &self.nft_url
    }

    /// Swap both endpoints in one step, keeping them consistent.
    pub(crate) fn set_urls(&mut self, rpc_url: String, nft_url: String) {
        self.rpc_url = rpc_url.trim_end_matches('/').to_string();
        self.nft_url = nft_url.trim_end_matches('/').to_string();
    }

    // ── JSON-RPC ─────────────────────────────────────────────────────────

    /// POST a JSON-RPC call and unwrap its `result`.
    pub fn rpc(&self, method: &str, params: Value) -> Result<Value, RequestError> {
        self.rpc_labeled(method, params, None)
    }

    /// Like [`rpc`](Self::rpc), tagging the request with the SDK method name
    /// the way upstream expects for enhanced endpoints.
    pub fn rpc_labeled(
        &self,
        method: &str,
        params: Value,
        sdk_method: Option<&str>,
    ) -> Result<Value, RequestError> {
        let id = self.call_id.fetch_add(1, Ordering::Relaxed);
        let payload = json!({
            "id": id,
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
        });

        tracing::debug!(method, id, "sending JSON-RPC request");

        let mut req = self.client.post(&self.rpc_url).json(&payload);
        if let Some(label) = sdk_method {
            req = req.header(SDK_METHOD_HEADER, label);
        }

        let resp = req.send()?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().unwrap_or_default();
            tracing::warn!(status = status.as_u16(), method, "JSON-RPC request failed");
            return Err(RequestError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: RpcEnvelope = resp.json()?;
        if let Some(err) = envelope.error {
            return Err(RequestError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        match envelope.result {
            Some(result) if !result.is_null() => Ok(result),
            _ => Err(RequestError::EmptyResult),
        }
    }

    // ── REST (NFT endpoint family) ───────────────────────────────────────

    /// GET `{nft_url}/{path}` with percent-encoded query parameters.
    pub fn get_nft<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, RequestError> {
        let mut url = format!("{}/{}", self.nft_url, path);
        if !query.is_empty() {
            let params = query
                .iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                .collect::<Vec<_>>();
            url = format!("{}?{}", url, params.join("&"));
        }

        tracing::debug!(%path, "sending NFT REST request");

        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %path, "NFT REST request failed");
            return Err(RequestError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(resp.json::<T>()?)
    }
}
