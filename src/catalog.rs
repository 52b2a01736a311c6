//! Node option catalog
//!
//! Pure projection from the node registries to display-ready options for
//! the selected network: built-ins first in declaration order, then custom
//! nodes in creation order. Nothing here mutates state.

use crate::constants;
use crate::registry::CustomEndpointRegistry;
use crate::types::{NodeConfig, NodeOption};

/// Project the options for `network_id` out of the given node sets.
///
/// Network labels on custom options come from whichever registry owns the
/// network; a dangling reference falls back to the raw id. A network with
/// zero nodes yields an empty vec.
pub fn node_options(
    statics: &[NodeConfig],
    registry: &CustomEndpointRegistry,
    network_id: &str,
) -> Vec<NodeOption> {
    let network_label = |id: &str| -> String {
        constants::static_network(id)
            .map(|n| n.name.clone())
            .or_else(|| registry.custom_network(id).map(|n| n.name.clone()))
            .unwrap_or_else(|| id.to_string())
    };

    let mut options = Vec::new();
    for node in statics.iter().filter(|n| n.network == network_id) {
        options.push(NodeOption::Static {
            id: node.id.clone(),
            network: network_label(&node.network),
            service: node.service.clone(),
        });
    }
    for node in registry.custom_nodes().iter().filter(|n| n.network == network_id) {
        options.push(NodeOption::Custom {
            id: node.id.clone(),
            network: network_label(&node.network),
            node_name: node.service.clone(),
        });
    }
    options
}

/// Memoizing wrapper keyed on (registry version, network id). Because the
/// registry bumps its version on every successful mutation there is no
/// staleness window between a mutation and the next read.
#[derive(Debug, Default)]
pub struct Catalog {
    key: Option<(u64, String)>,
    cached: Vec<NodeOption>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&mut self, registry: &CustomEndpointRegistry, network_id: &str) -> &[NodeOption] {
        let key = (registry.version(), network_id.to_string());
        if self.key.as_ref() != Some(&key) {
            self.cached = node_options(&constants::STATIC_NODES, registry, network_id);
            self.key = Some(key);
        }
        &self.cached
    }
}
