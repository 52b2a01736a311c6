//! Static configuration tables
//!
//! Built-in networks and nodes, the language table, and the navigation
//! links the header tabs are computed from. Built-ins are process-wide
//! constants: created at startup, never removed.

use crate::types::{NetworkConfig, NodeConfig, Selection};
use once_cell::sync::Lazy;

/// Well-known identifiers
pub mod ids {
    pub const ETH: &str = "ETH";
    pub const WAN: &str = "WAN";

    pub const ETH_AUTO: &str = "eth_auto";
    pub const ETH_MYCRYPTO: &str = "eth_mycrypto";
    pub const ETH_ETHSCAN: &str = "eth_ethscan";
    pub const WAN_AUTO: &str = "wan_auto";
    pub const WAN_REMOTE: &str = "wan_remote";
}

/// Startup defaults (overridable via CLI/env, see `config`)
pub mod defaults {
    pub const NETWORK: &str = super::ids::WAN;
    pub const NODE: &str = super::ids::WAN_AUTO;
    pub const LANGUAGE: &str = "en";
}

/// Built-in networks, in declaration order.
pub static STATIC_NETWORKS: Lazy<Vec<NetworkConfig>> = Lazy::new(|| {
    vec![
        NetworkConfig {
            id: ids::ETH.to_string(),
            name: "Ethereum".to_string(),
            color: "#007896".to_string(),
            is_custom: false,
            chain_id: 1,
            unit: "ETH".to_string(),
        },
        NetworkConfig {
            id: ids::WAN.to_string(),
            name: "Wanchain".to_string(),
            color: "#266ea5".to_string(),
            is_custom: false,
            chain_id: 888,
            unit: "WAN".to_string(),
        },
    ]
});

/// Built-in nodes, in declaration order. Option lists preserve this order.
pub static STATIC_NODES: Lazy<Vec<NodeConfig>> = Lazy::new(|| {
    vec![
        NodeConfig {
            id: ids::ETH_AUTO.to_string(),
            network: ids::ETH.to_string(),
            service: "AUTO".to_string(),
            is_custom: false,
            url: "https://api.mycryptoapi.com/eth".to_string(),
        },
        NodeConfig {
            id: ids::ETH_MYCRYPTO.to_string(),
            network: ids::ETH.to_string(),
            service: "MyCrypto".to_string(),
            is_custom: false,
            url: "https://api.mycryptoapi.com/eth".to_string(),
        },
        NodeConfig {
            id: ids::ETH_ETHSCAN.to_string(),
            network: ids::ETH.to_string(),
            service: "Etherscan".to_string(),
            is_custom: false,
            url: "https://api.etherscan.io/api".to_string(),
        },
        NodeConfig {
            id: ids::WAN_AUTO.to_string(),
            network: ids::WAN.to_string(),
            service: "AUTO".to_string(),
            is_custom: false,
            url: "https://gwan-ssl.wandevs.org:56891".to_string(),
        },
        NodeConfig {
            id: ids::WAN_REMOTE.to_string(),
            network: ids::WAN.to_string(),
            service: "Remote".to_string(),
            is_custom: false,
            url: "https://gwan-ssl.wandevs.org:46891".to_string(),
        },
    ]
});

pub fn static_network(id: &str) -> Option<&'static NetworkConfig> {
    STATIC_NETWORKS.iter().find(|n| n.id == id)
}

pub fn static_node(id: &str) -> Option<&'static NodeConfig> {
    STATIC_NODES.iter().find(|n| n.id == id)
}

pub fn is_static_network_id(id: &str) -> bool {
    static_network(id).is_some()
}

pub fn is_static_node_id(id: &str) -> bool {
    static_node(id).is_some()
}

/// First built-in node of a network, used as the deterministic fallback
/// when a selected custom node is removed.
pub fn default_node_for_network(network_id: &str) -> Option<&'static NodeConfig> {
    STATIC_NODES.iter().find(|n| n.network == network_id)
}

pub fn default_selection() -> Selection {
    Selection::new(defaults::NETWORK, defaults::NODE)
}

/// Language table: key -> display name
pub mod languages {
    pub const TABLE: &[(&str, &str)] = &[
        ("en", "English"),
        ("de", "Deutsch"),
        ("es", "Español"),
        ("fr", "Français"),
        ("it", "Italiano"),
        ("ja", "日本語"),
        ("ko", "한국어"),
        ("ru", "Русский"),
        ("zhcn", "简体中文"),
    ];

    pub fn is_valid_key(key: &str) -> bool {
        TABLE.iter().any(|(k, _)| *k == key)
    }

    pub fn display_name(key: &str) -> Option<&'static str> {
        TABLE.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    /// Reverse lookup used by dropdown UIs that hand back the display name.
    pub fn key_for_name(name: &str) -> Option<&'static str> {
        TABLE.iter().find(|(_, v)| *v == name).map(|(k, _)| *k)
    }
}

/// Header navigation links. Tab index = position here + 1; index 0 is the
/// hidden home tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationLink {
    pub name: &'static str,
    pub to: &'static str,
}

pub const NAVIGATION_LINKS: &[NavigationLink] = &[
    NavigationLink {
        name: "NAV_SEND",
        to: "/send",
    },
    NavigationLink {
        name: "NAV_WALLETS",
        to: "/wallets",
    },
    NavigationLink {
        name: "NAV_SWAP",
        to: "/swap",
    },
    NavigationLink {
        name: "NAV_CONTRACTS",
        to: "/contracts",
    },
];
