//! Shared value types and validation helpers used across all domains.

pub mod block;
pub mod quantity;

pub use block::{BlockRef, BlockTag};
pub use quantity::Quantity;

/// True for a `0x`-prefixed 20-byte hex address.
pub fn is_address(s: &str) -> bool {
    hex_bytes(s).map(|n| n == 20).unwrap_or(false)
}

/// True for a `0x`-prefixed 32-byte hex hash (block or transaction).
pub fn is_hash(s: &str) -> bool {
    hex_bytes(s).map(|n| n == 32).unwrap_or(false)
}

fn hex_bytes(s: &str) -> Option<usize> {
    let stripped = s.strip_prefix("0x")?;
    hex::decode(stripped).ok().map(|b| b.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_validation() {
        assert!(is_address("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"));
        assert!(!is_address("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045"));
        assert!(!is_address("0x1234"));
        assert!(!is_address(&format!("0x{}", "ab".repeat(32))));
    }

    #[test]
    fn hash_validation() {
        assert!(is_hash(&format!("0x{}", "cd".repeat(32))));
        assert!(!is_hash(&format!("0x{}", "cd".repeat(20))));
        assert!(!is_hash("latest"));
    }
}
