//! Block references — tags, numbers, and hashes.
//!
//! Block-oriented operations accept any of the three forms; the node client
//! dispatches hashes to the `...ByHash` RPC variant and everything else to
//! the `...ByNumber` variant.

use crate::shared::{is_hash, Quantity};

/// Symbolic block tag understood by the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    Latest,
    Earliest,
    Pending,
    Safe,
    Finalized,
}

impl BlockTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockTag::Latest => "latest",
            BlockTag::Earliest => "earliest",
            BlockTag::Pending => "pending",
            BlockTag::Safe => "safe",
            BlockTag::Finalized => "finalized",
        }
    }

    pub fn parse(s: &str) -> Option<BlockTag> {
        match s.to_ascii_lowercase().as_str() {
            "latest" => Some(BlockTag::Latest),
            "earliest" => Some(BlockTag::Earliest),
            "pending" => Some(BlockTag::Pending),
            "safe" => Some(BlockTag::Safe),
            "finalized" => Some(BlockTag::Finalized),
            _ => None,
        }
    }
}

/// A block named by tag, number, or 32-byte hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockRef {
    Tag(BlockTag),
    Number(u64),
    Hash(String),
}

impl BlockRef {
    /// Parse a tag name, a block hash, or a decimal/hex block number.
    pub fn parse(s: &str) -> Option<BlockRef> {
        if let Some(tag) = BlockTag::parse(s) {
            return Some(BlockRef::Tag(tag));
        }
        if is_hash(s) {
            return Some(BlockRef::Hash(s.to_string()));
        }
        Quantity::parse(s).map(|q| BlockRef::Number(q.as_u64()))
    }

    /// The `...ByNumber` positional parameter: tag name or hex number.
    /// `None` for hashes — those go to the `...ByHash` variant.
    pub fn number_param(&self) -> Option<String> {
        match self {
            BlockRef::Tag(tag) => Some(tag.as_str().to_string()),
            BlockRef::Number(n) => Some(Quantity::from(*n).to_hex()),
            BlockRef::Hash(_) => None,
        }
    }

    pub fn as_hash(&self) -> Option<&str> {
        match self {
            BlockRef::Hash(h) => Some(h),
            _ => None,
        }
    }
}

impl Default for BlockRef {
    fn default() -> Self {
        BlockRef::Tag(BlockTag::Latest)
    }
}

impl From<u64> for BlockRef {
    fn from(n: u64) -> Self {
        BlockRef::Number(n)
    }
}

impl From<BlockTag> for BlockRef {
    fn from(tag: BlockTag) -> Self {
        BlockRef::Tag(tag)
    }
}
