//! Numeric quantities in their JSON-RPC encoding.
//!
//! The node protocol encodes every number as a `0x`-prefixed hex string.
//! [`Quantity`] accepts decimal integers, decimal strings, and hex strings,
//! and always serializes back to the hex form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An unsigned numeric value, hex-encoded on the wire.
///
/// `u128` covers every quantity the protocol carries (wei balances included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Quantity(u128);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub fn new(value: u128) -> Self {
        Quantity(value)
    }

    /// Parse a decimal (`"68943"`) or hex (`"0x10d4f"`) string.
    ///
    /// Pure lookup — returns `None` on anything unparsable; callers raise
    /// the validation error at the boundary.
    pub fn parse(s: &str) -> Option<Quantity> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix("0x") {
            return u128::from_str_radix(hex, 16).ok().map(Quantity);
        }
        s.parse::<u128>().ok().map(Quantity)
    }

    /// Wire encoding: `0x`-prefixed lowercase hex, no leading zeros.
    pub fn to_hex(&self) -> String {
        format!("{:#x}", self.0)
    }

    pub fn as_u128(&self) -> u128 {
        self.0
    }

    pub fn as_u64(&self) -> u64 {
        self.0 as u64
    }
}

impl From<u64> for Quantity {
    fn from(v: u64) -> Self {
        Quantity(v as u128)
    }
}

impl From<u128> for Quantity {
    fn from(v: u128) -> Self {
        Quantity(v)
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Quantity::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid quantity {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decimal() {
        assert_eq!(Quantity::parse("0"), Some(Quantity::ZERO));
        assert_eq!(Quantity::parse("68943"), Some(Quantity::new(68943)));
    }

    #[test]
    fn parse_hex() {
        assert_eq!(Quantity::parse("0x0"), Some(Quantity::ZERO));
        assert_eq!(Quantity::parse("0x10d4f"), Some(Quantity::new(68943)));
        assert_eq!(Quantity::parse("0xDE0B6B3A7640000"), Some(Quantity::new(10u128.pow(18))));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Quantity::parse(""), None);
        assert_eq!(Quantity::parse("0x"), None);
        assert_eq!(Quantity::parse("latest"), None);
        assert_eq!(Quantity::parse("-5"), None);
        assert_eq!(Quantity::parse("1.5"), None);
    }

    #[test]
    fn hex_round_trip() {
        let q = Quantity::new(68943);
        assert_eq!(q.to_hex(), "0x10d4f");
        assert_eq!(Quantity::parse(&q.to_hex()), Some(q));
    }

    #[test]
    fn serde_uses_hex() {
        let json = serde_json::to_string(&Quantity::new(1000)).unwrap();
        assert_eq!(json, r#""0x3e8""#);
        let back: Quantity = serde_json::from_str(r#""0x3e8""#).unwrap();
        assert_eq!(back, Quantity::new(1000));
    }
}
