//! Token domain — ERC-20 balances and metadata enhanced endpoints.

pub mod client;
pub mod wire;

pub use client::Tokens;
pub use wire::{TokenBalance, TokenBalanceSpec, TokenBalancesPage, TokenMetadata};
