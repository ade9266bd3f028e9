//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `wire.rs` — serde structs and enums matching endpoint payloads
//! - `client.rs` — sub-client borrowing the top-level client

pub mod nft;
pub mod node;
pub mod token;
pub mod transfers;
