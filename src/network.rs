//! Supported networks and base-URL derivation.
//!
//! A [`Network`] is resolved from a selector — the symbolic name
//! (`"eth_mainnet"`), the decimal chain ID (`"1"`), or the hex chain ID
//! (`"0x1"`) — through a static lookup table. Resolution is a pure lookup
//! returning `Option`; the client boundary turns `None` into
//! [`SdkError::UnsupportedNetwork`](crate::error::SdkError::UnsupportedNetwork).

/// A chain supported by the Alchemy endpoint family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    EthMainnet,
    EthRopsten,
    EthRinkeby,
    EthGoerli,
    EthKovan,
    OptMainnet,
    OptGoerli,
    ArbMainnet,
    ArbRinkeby,
    MaticMainnet,
    MaticMumbai,
    AstarMainnet,
}

/// Every supported network, in chain-table order.
pub const ALL_NETWORKS: &[Network] = &[
    Network::EthMainnet,
    Network::EthRopsten,
    Network::EthRinkeby,
    Network::EthGoerli,
    Network::EthKovan,
    Network::OptMainnet,
    Network::OptGoerli,
    Network::ArbMainnet,
    Network::ArbRinkeby,
    Network::MaticMainnet,
    Network::MaticMumbai,
    Network::AstarMainnet,
];

impl Network {
    /// Canonical symbolic name (underscore form).
    pub fn name(&self) -> &'static str {
        match self {
            Network::EthMainnet => "eth_mainnet",
            Network::EthRopsten => "eth_ropsten",
            Network::EthRinkeby => "eth_rinkeby",
            Network::EthGoerli => "eth_goerli",
            Network::EthKovan => "eth_kovan",
            Network::OptMainnet => "opt_mainnet",
            Network::OptGoerli => "opt_goerli",
            Network::ArbMainnet => "arb_mainnet",
            Network::ArbRinkeby => "arb_rinkeby",
            Network::MaticMainnet => "matic_mainnet",
            Network::MaticMumbai => "matic_mumbai",
            Network::AstarMainnet => "astar_mainnet",
        }
    }

    /// Chain ID as registered upstream.
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::EthMainnet => 1,
            Network::EthRopsten => 3,
            Network::EthRinkeby => 4,
            Network::EthGoerli => 5,
            Network::EthKovan => 42,
            Network::OptMainnet => 10,
            Network::OptGoerli => 420,
            Network::ArbMainnet => 42161,
            Network::ArbRinkeby => 421611,
            Network::MaticMainnet => 137,
            Network::MaticMumbai => 80001,
            Network::AstarMainnet => 592,
        }
    }

    /// Subdomain segment used in request URLs (hyphen form of the name).
    pub fn url_segment(&self) -> String {
        self.name().replace('_', "-")
    }

    /// Resolve a selector: symbolic name, decimal chain ID, or hex chain ID.
    ///
    /// Pure lookup — returns `None` for anything outside the table.
    pub fn resolve(selector: &str) -> Option<Network> {
        let selector = selector.trim();
        if let Some(hex) = selector.strip_prefix("0x") {
            let id = u64::from_str_radix(hex, 16).ok()?;
            return Self::from_chain_id(id);
        }
        if let Ok(id) = selector.parse::<u64>() {
            return Self::from_chain_id(id);
        }
        ALL_NETWORKS.iter().copied().find(|n| n.name() == selector)
    }

    /// Lookup by numeric chain ID.
    pub fn from_chain_id(id: u64) -> Option<Network> {
        ALL_NETWORKS.iter().copied().find(|n| n.chain_id() == id)
    }

    /// JSON-RPC base URL for this network and key.
    pub fn rpc_url(&self, api_key: &str) -> String {
        format!("https://{}.g.alchemy.com/v2/{}", self.url_segment(), api_key)
    }

    /// NFT REST base URL (sibling path of the JSON-RPC endpoint).
    pub fn nft_url(&self, api_key: &str) -> String {
        format!(
            "https://{}.g.alchemy.com/nft/v2/{}",
            self.url_segment(),
            api_key
        )
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::EthMainnet
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_by_name() {
        assert_eq!(Network::resolve("eth_mainnet"), Some(Network::EthMainnet));
        assert_eq!(Network::resolve("matic_mumbai"), Some(Network::MaticMumbai));
        assert_eq!(Network::resolve("astar_mainnet"), Some(Network::AstarMainnet));
    }

    #[test]
    fn resolve_by_decimal_and_hex() {
        assert_eq!(Network::resolve("1"), Some(Network::EthMainnet));
        assert_eq!(Network::resolve("0x1"), Some(Network::EthMainnet));
        assert_eq!(Network::resolve("42161"), Some(Network::ArbMainnet));
        assert_eq!(Network::resolve("0xa4b1"), Some(Network::ArbMainnet));
        assert_eq!(Network::resolve("137"), Some(Network::MaticMainnet));
        assert_eq!(Network::resolve("0x89"), Some(Network::MaticMainnet));
    }

    #[test]
    fn all_selector_forms_agree() {
        for net in ALL_NETWORKS {
            let by_name = Network::resolve(net.name());
            let by_dec = Network::resolve(&net.chain_id().to_string());
            let by_hex = Network::resolve(&format!("{:#x}", net.chain_id()));
            assert_eq!(by_name, Some(*net));
            assert_eq!(by_dec, Some(*net));
            assert_eq!(by_hex, Some(*net));
        }
    }

    #[test]
    fn resolve_rejects_unknown() {
        assert_eq!(Network::resolve("eth_classic"), None);
        assert_eq!(Network::resolve("2"), None);
        assert_eq!(Network::resolve("0xdeadbeef"), None);
        assert_eq!(Network::resolve(""), None);
        assert_eq!(Network::resolve("0x"), None);
    }

    #[test]
    fn url_segment_is_hyphenated() {
        assert_eq!(Network::EthMainnet.url_segment(), "eth-mainnet");
        assert_eq!(Network::ArbRinkeby.url_segment(), "arb-rinkeby");
    }

    #[test]
    fn rpc_url_shape() {
        assert_eq!(
            Network::OptGoerli.rpc_url("demo-key"),
            "https://opt-goerli.g.alchemy.com/v2/demo-key"
        );
        assert_eq!(
            Network::OptGoerli.nft_url("demo-key"),
            "https://opt-goerli.g.alchemy.com/nft/v2/demo-key"
        );
    }
}
