use serde::{Deserialize, Serialize};
use std::fmt;

/// A blockchain network the wallet can target.
///
/// Built-in networks are declared once in [`crate::constants`] and never
/// change; custom networks are created through the endpoint registry and
/// always carry `is_custom: true`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkConfig {
    pub id: String,
    pub name: String,
    /// Accent color used by the outer UI (hex string, e.g. "#007896").
    pub color: String,
    pub is_custom: bool,
    pub chain_id: u64,
    /// Base currency unit symbol ("ETH", "WAN", ...).
    pub unit: String,
}

/// An RPC node endpoint belonging to exactly one network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeConfig {
    pub id: String,
    /// Identifier of the owning [`NetworkConfig`].
    pub network: String,
    /// Provider label for built-ins ("MyCrypto", "Etherscan"), user-chosen
    /// label for custom nodes.
    pub service: String,
    pub is_custom: bool,
    pub url: String,
}

/// Display-ready projection of a node, regenerated whenever the registry
/// or the selected network changes. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeOption {
    Static {
        id: String,
        network: String,
        service: String,
    },
    Custom {
        id: String,
        network: String,
        node_name: String,
    },
}

impl NodeOption {
    pub fn id(&self) -> &str {
        match self {
            NodeOption::Static { id, .. } | NodeOption::Custom { id, .. } => id,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, NodeOption::Custom { .. })
    }

    /// The bound removal capability of a custom option: the intent that
    /// removes exactly this node. `None` for built-ins.
    pub fn removal_intent(&self) -> Option<crate::intents::Intent> {
        match self {
            NodeOption::Custom { id, .. } => {
                Some(crate::intents::Intent::RemoveCustomNode { id: id.clone() })
            }
            NodeOption::Static { .. } => None,
        }
    }
}

impl fmt::Display for NodeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeOption::Static {
                network, service, ..
            } => write!(f, "{network} ({service})"),
            NodeOption::Custom {
                network, node_name, ..
            } => write!(f, "{network} - {node_name} (custom)"),
        }
    }
}

/// A resolved network/node pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selection {
    pub network_id: String,
    pub node_id: String,
}

impl Selection {
    pub fn new(network_id: impl Into<String>, node_id: impl Into<String>) -> Self {
        Self {
            network_id: network_id.into(),
            node_id: node_id.into(),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network_id, self.node_id)
    }
}

/// Snapshot of the resolver as exposed to readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub selection: Selection,
    pub is_changing_node: bool,
    pub offline: bool,
}

/// Payload for adding a custom node through the registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomNodePayload {
    pub id: String,
    pub network: String,
    /// User-chosen display label.
    pub service: String,
    pub url: String,
}

/// Completion signal for an in-flight node switch, delivered by the outer
/// connection layer once the switch attempt settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    Completed,
    Failed { connectivity_lost: bool },
}
