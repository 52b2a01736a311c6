//! Custom endpoint registry
//!
//! Owns the create/remove lifecycle of user-supplied custom nodes and
//! custom networks. This is the only mutation source for those sets; the
//! option catalog reads them back through [`custom_nodes`] /
//! [`custom_networks`] and keys its memo on [`version`], so every
//! successful mutation is visible on the next read.
//!
//! [`custom_nodes`]: CustomEndpointRegistry::custom_nodes
//! [`custom_networks`]: CustomEndpointRegistry::custom_networks
//! [`version`]: CustomEndpointRegistry::version

use crate::constants;
use crate::error::ConfigError;
use crate::types::{CustomNodePayload, NetworkConfig, NodeConfig};
use url::Url;

#[derive(Debug, Default)]
pub struct CustomEndpointRegistry {
    custom_nodes: Vec<NodeConfig>,
    custom_networks: Vec<NetworkConfig>,
    version: u64,
}

impl CustomEndpointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monotonic counter, bumped on every successful mutation. Failed
    /// operations leave it (and the sets) untouched.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Custom nodes in creation order.
    pub fn custom_nodes(&self) -> &[NodeConfig] {
        &self.custom_nodes
    }

    /// Custom networks in creation order.
    pub fn custom_networks(&self) -> &[NetworkConfig] {
        &self.custom_networks
    }

    pub fn custom_node(&self, id: &str) -> Option<&NodeConfig> {
        self.custom_nodes.iter().find(|n| n.id == id)
    }

    pub fn custom_network(&self, id: &str) -> Option<&NetworkConfig> {
        self.custom_networks.iter().find(|n| n.id == id)
    }

    /// Whether `id` names any node, built-in or custom.
    pub fn node_id_taken(&self, id: &str) -> bool {
        constants::is_static_node_id(id) || self.custom_node(id).is_some()
    }

    /// Whether `id` names any network, built-in or custom.
    pub fn network_exists(&self, id: &str) -> bool {
        constants::is_static_network_id(id) || self.custom_network(id).is_some()
    }

    /// Add a user-supplied node. Rejects id collisions with any existing
    /// node, references to unknown networks, and malformed endpoint URLs;
    /// no mutation happens on any error path.
    pub fn add_custom_node(&mut self, payload: CustomNodePayload) -> Result<&NodeConfig, ConfigError> {
        if self.node_id_taken(&payload.id) {
            return Err(ConfigError::DuplicateIdentifier(payload.id));
        }
        if !self.network_exists(&payload.network) {
            return Err(ConfigError::UnknownNetwork(payload.network));
        }
        validate_endpoint(&payload.url)?;

        let node = NodeConfig {
            id: payload.id,
            network: payload.network,
            service: payload.service,
            is_custom: true,
            url: payload.url,
        };
        log::info!("registry: added custom node '{}' on {}", node.id, node.network);
        let idx = self.custom_nodes.len();
        self.custom_nodes.push(node);
        self.version += 1;
        Ok(&self.custom_nodes[idx])
    }

    /// Remove a custom node by id. Built-ins are never removable and fail
    /// with `NotFound`, same as ids that were never added.
    pub fn remove_custom_node(&mut self, id: &str) -> Result<NodeConfig, ConfigError> {
        let pos = self
            .custom_nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| ConfigError::NotFound(id.to_string()))?;
        let removed = self.custom_nodes.remove(pos);
        self.version += 1;
        log::info!("registry: removed custom node '{}'", removed.id);
        Ok(removed)
    }

    /// Add a user-supplied network. The stored config always carries
    /// `is_custom: true` regardless of the payload flag.
    pub fn add_custom_network(
        &mut self,
        config: NetworkConfig,
    ) -> Result<&NetworkConfig, ConfigError> {
        if self.network_exists(&config.id) {
            return Err(ConfigError::DuplicateIdentifier(config.id));
        }
        let network = NetworkConfig {
            is_custom: true,
            ..config
        };
        log::info!("registry: added custom network '{}'", network.id);
        let idx = self.custom_networks.len();
        self.custom_networks.push(network);
        self.version += 1;
        Ok(&self.custom_networks[idx])
    }
}

/// Endpoint URLs must parse and use an http(s)/ws(s) scheme.
fn validate_endpoint(raw: &str) -> Result<(), ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidEndpoint {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" | "ws" | "wss" => Ok(()),
        other => Err(ConfigError::InvalidEndpoint {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
