//! NFT domain — ownership lookups on the `nft/v2` REST family.

pub mod client;
pub mod wire;

pub use client::Nft;
pub use wire::{NftPage, NftQuery};
