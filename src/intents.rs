//! Intent dispatch
//!
//! Every user-originated action becomes exactly one discrete [`Intent`].
//! The dispatcher is the only path allowed to feed mutations to the store:
//! it validates what can be validated synchronously (language keys),
//! preserves submission order, and is fire-and-forget for callers.

use crate::constants::languages;
use crate::types::{CustomNodePayload, NetworkConfig};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    ChangeLanguage { key: String },
    /// Standing node change from an explicit user pick.
    ChangeNode { node_id: String },
    /// One-time node change derived from the URL network hint; distinct
    /// from `ChangeNode` so it never overwrites a later explicit pick.
    ChangeNodeOneTime { network: String },
    SetGasPriceField { value: String },
    AddCustomNode { payload: CustomNodePayload },
    RemoveCustomNode { id: String },
    AddCustomNetwork { config: NetworkConfig },
}

/// FIFO queue of intents awaiting the store. A single queue keeps global
/// submission order, which implies per-type order.
#[derive(Debug, Default)]
pub struct IntentDispatcher {
    queue: VecDeque<Intent>,
}

impl IntentDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Language change. Keys not present in the static language table are
    /// dropped here, never dispatched.
    pub fn change_language(&mut self, key: &str) {
        if !languages::is_valid_key(key) {
            log::debug!("intents: unknown language key '{key}' dropped");
            return;
        }
        self.queue.push_back(Intent::ChangeLanguage {
            key: key.to_string(),
        });
    }

    pub fn change_node(&mut self, node_id: &str) {
        self.queue.push_back(Intent::ChangeNode {
            node_id: node_id.to_string(),
        });
    }

    pub fn change_node_one_time(&mut self, network: &str) {
        self.queue.push_back(Intent::ChangeNodeOneTime {
            network: network.to_string(),
        });
    }

    pub fn set_gas_price_field(&mut self, value: &str) {
        self.queue.push_back(Intent::SetGasPriceField {
            value: value.to_string(),
        });
    }

    pub fn add_custom_node(&mut self, payload: CustomNodePayload) {
        self.queue.push_back(Intent::AddCustomNode { payload });
    }

    pub fn remove_custom_node(&mut self, id: &str) {
        self.queue.push_back(Intent::RemoveCustomNode { id: id.to_string() });
    }

    pub fn add_custom_network(&mut self, config: NetworkConfig) {
        self.queue.push_back(Intent::AddCustomNetwork { config });
    }

    /// Raw enqueue for pre-built intents (e.g. a custom option's bound
    /// removal intent).
    pub fn dispatch(&mut self, intent: Intent) {
        self.queue.push_back(intent);
    }

    pub fn pop(&mut self) -> Option<Intent> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_keys_are_dropped() {
        let mut d = IntentDispatcher::new();
        d.change_language("tlh");
        assert!(d.is_empty());

        d.change_language("de");
        assert_eq!(
            d.pop(),
            Some(Intent::ChangeLanguage {
                key: "de".to_string()
            })
        );
    }

    #[test]
    fn submission_order_is_preserved() {
        let mut d = IntentDispatcher::new();
        d.change_node("eth_auto");
        d.set_gas_price_field("21");
        d.change_node("wan_auto");

        assert_eq!(
            d.pop(),
            Some(Intent::ChangeNode {
                node_id: "eth_auto".to_string()
            })
        );
        assert_eq!(
            d.pop(),
            Some(Intent::SetGasPriceField {
                value: "21".to_string()
            })
        );
        assert_eq!(
            d.pop(),
            Some(Intent::ChangeNode {
                node_id: "wan_auto".to_string()
            })
        );
        assert_eq!(d.pop(), None);
    }

    #[test]
    fn intents_serialize_with_a_type_tag() {
        let json = serde_json::to_value(Intent::RemoveCustomNode {
            id: "mine".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "remove_custom_node");
        assert_eq!(json["id"], "mine");
    }
}
