//! Node domain — the eth/net/web3 JSON-RPC surface of the endpoint.

pub mod client;
pub mod wire;

pub use client::Node;
pub use wire::{CallRequest, FeeData};
