//! # Alchemy SDK
//!
//! A Rust client for the Alchemy blockchain-data API: the node JSON-RPC
//! surface plus the enhanced transfers, token, and NFT endpoint families.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared value types, network table, unified errors
//! 2. **HTTP** — `AlchemyHttp`, one blocking round trip per call
//! 3. **Domains** — Vertical slices (node, transfers, token, nft) with wire
//!    types and sub-clients
//! 4. **High-Level Client** — `AlchemyClient` with builder and nested
//!    sub-client accessors
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use alchemy_sdk::prelude::*;
//!
//! let client = AlchemyClient::builder()
//!     .api_key("your-key")
//!     .network("eth_mainnet")
//!     .build()?;
//!
//! let head = client.node().block_number()?;
//! let page = client.transfers().get(&TransferQuery {
//!     from_address: Some("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045".into()),
//!     ..Default::default()
//! })?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared value types used across all domains.
pub mod shared;

/// Unified SDK error types.
pub mod error;

/// Supported networks and base-URL derivation.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Blocking HTTP executor.
pub mod http;

// ── Layer 3: Domains ─────────────────────────────────────────────────────────

/// Domain modules (vertical slices): wire types and sub-clients.
pub mod domain;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `AlchemyClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared value types
    pub use crate::shared::{BlockRef, BlockTag, Quantity};

    // Domain types — node
    pub use crate::domain::node::{CallRequest, FeeData};

    // Domain types — transfers
    pub use crate::domain::transfers::{TransferCategory, TransferQuery, TransfersPage};

    // Domain types — token
    pub use crate::domain::token::{
        TokenBalance, TokenBalanceSpec, TokenBalancesPage, TokenMetadata,
    };

    // Domain types — nft
    pub use crate::domain::nft::{NftPage, NftQuery};

    // Errors
    pub use crate::error::{RequestError, SdkError, SdkResult};

    // Network
    pub use crate::network::Network;

    // Client + sub-clients
    pub use crate::client::{AlchemyClient, AlchemyClientBuilder, API_KEY_ENV};
    pub use crate::domain::nft::Nft;
    pub use crate::domain::node::Node;
    pub use crate::domain::token::Tokens;
    pub use crate::domain::transfers::Transfers;
}
