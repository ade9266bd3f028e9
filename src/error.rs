//! Unified SDK error types.

use thiserror::Error;

/// Result alias used across the SDK.
pub type SdkResult<T> = Result<T, SdkError>;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    /// No API key was supplied and `ALCHEMY_API_KEY` is unset.
    #[error(
        "no API key: pass one to the builder or set the ALCHEMY_API_KEY \
         environment variable"
    )]
    Config,

    /// Network selector did not match any supported chain.
    #[error("unsupported network selector: {0:?}")]
    UnsupportedNetwork(String),

    /// A parameter failed local validation; nothing was sent.
    #[error("validation error: {0}")]
    Validation(String),

    /// The request was sent and failed (transport, HTTP status, or RPC error).
    #[error("request error: {0}")]
    Request(#[from] RequestError),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors produced by a single request/response round trip.
#[derive(Error, Debug)]
pub enum RequestError {
    /// Transport-level failure from reqwest (connect, timeout, TLS, decode).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx HTTP status; `message` is the remote response body.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// JSON-RPC level error object returned by the node.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Success status, but the JSON-RPC envelope carried no `result`.
    #[error("response contained no result")]
    EmptyResult,
}

impl RequestError {
    /// HTTP status of the failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            RequestError::Transport(e) => e.status().map(|s| s.as_u16()),
            RequestError::Rpc { .. } | RequestError::EmptyResult => None,
        }
    }
}
