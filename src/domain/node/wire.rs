//! Wire types for node calls.

use crate::shared::Quantity;
use serde::{Deserialize, Serialize};

/// Call object for `eth_call` / `eth_estimateGas`.
///
/// Serialized camelCase with hex quantities, absent optionals omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl CallRequest {
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            from: None,
            to: to.into(),
            gas: None,
            gas_price: None,
            value: None,
            data: None,
        }
    }
}

/// Recommended fee values for a transaction.
///
/// EIP-1559 transactions use the max fields; legacy transactions use
/// `gas_price`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeeData {
    pub max_fee_per_gas: u128,
    pub max_priority_fee_per_gas: u128,
    pub gas_price: u128,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Quantity;

    #[test]
    fn call_request_serializes_camel_case_hex() {
        let mut req = CallRequest::new("0x000000000000000000000000000000000000dead");
        req.from = Some("0x000000000000000000000000000000000000beef".into());
        req.gas = Some(Quantity::new(21000));
        req.gas_price = Some(Quantity::new(1_000_000_000));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["to"], "0x000000000000000000000000000000000000dead");
        assert_eq!(json["gas"], "0x5208");
        assert_eq!(json["gasPrice"], "0x3b9aca00");
        assert!(json.get("value").is_none());
        assert!(json.get("data").is_none());
    }
}
