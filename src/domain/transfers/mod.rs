//! Transfers domain — the `alchemy_getAssetTransfers` enhanced endpoint.

pub mod client;
pub mod wire;

pub use client::Transfers;
pub use wire::{TransferCategory, TransferQuery, TransfersPage};
