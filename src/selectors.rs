//! Read selectors
//!
//! Free functions over an [`App`] snapshot, replacing connected-component
//! state access: rendering code reads through these and never touches the
//! store's internals. All of them are side-effect free.

use crate::app::App;
use crate::catalog;
use crate::constants::{self, languages};
use crate::types::{NetworkConfig, NodeConfig, NodeOption};

pub fn get_offline(app: &App) -> bool {
    app.resolver().offline()
}

pub fn is_node_changing(app: &App) -> bool {
    app.resolver().is_changing_node()
}

/// The stored language key, or the default if the stored key is not in the
/// language table (treated as unset).
pub fn get_language_selection(app: &App) -> &str {
    let key = app.language();
    if languages::is_valid_key(key) {
        key
    } else {
        constants::defaults::LANGUAGE
    }
}

pub fn get_node_id(app: &App) -> &str {
    app.resolver().node_id()
}

/// Config of the currently selected node. The selection invariant keeps
/// this id pointing at an existing node; if it ever dangles, the selected
/// network's first built-in is returned (global default when the network
/// has none) rather than panicking with a mismatched pair.
pub fn get_node_config(app: &App) -> NodeConfig {
    let id = app.resolver().node_id();
    constants::static_node(id)
        .cloned()
        .or_else(|| app.registry().custom_node(id).cloned())
        .unwrap_or_else(|| {
            log::debug!("selectors: selected node '{id}' not found, using default");
            constants::default_node_for_network(app.resolver().network_id())
                .or_else(|| constants::static_node(constants::defaults::NODE))
                .cloned()
                .expect("default node is built-in")
        })
}

/// Unmemoized option list for the selected network; the memoizing variant
/// is [`App::node_options`].
pub fn get_node_options(app: &App) -> Vec<NodeOption> {
    catalog::node_options(
        &constants::STATIC_NODES,
        app.registry(),
        app.resolver().network_id(),
    )
}

/// Config of the currently selected network, built-in or custom.
pub fn get_network_config(app: &App) -> NetworkConfig {
    let id = app.resolver().network_id();
    constants::static_network(id)
        .cloned()
        .or_else(|| app.registry().custom_network(id).cloned())
        .unwrap_or_else(|| {
            log::debug!("selectors: selected network '{id}' not found, using default");
            constants::static_network(constants::defaults::NETWORK)
                .cloned()
                .expect("default network is built-in")
        })
}

/// Whether `id` names a built-in node.
pub fn is_static_node_id(id: &str) -> bool {
    constants::is_static_node_id(id)
}

/// Whether the routing parameter should trigger the one-time node intent:
/// present, names a built-in network, and the load guard has not fired yet.
pub fn should_set_node_from_qs(app: &App, network_param: Option<&str>) -> bool {
    match network_param {
        Some(param) => {
            constants::is_static_network_id(param) && !app.resolver().hint_attempted()
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ids;
    use crate::intents::Intent;
    use crate::types::Selection;

    #[test]
    fn defaults_read_back() {
        let app = App::default();
        assert!(!get_offline(&app));
        assert!(!is_node_changing(&app));
        assert_eq!(get_language_selection(&app), "en");
        assert_eq!(get_node_id(&app), ids::WAN_AUTO);
        assert_eq!(get_node_config(&app).url, "https://gwan-ssl.wandevs.org:56891");
        assert_eq!(get_network_config(&app).id, ids::WAN);
        assert_eq!(get_node_options(&app).len(), 2);
    }

    #[test]
    fn invalid_stored_language_reads_as_default() {
        let app = App::new(constants::default_selection(), "zz".to_string());
        assert_eq!(get_language_selection(&app), "en");
    }

    #[test]
    fn static_node_predicate() {
        assert!(is_static_node_id(ids::ETH_AUTO));
        assert!(!is_static_node_id("mine"));
    }

    #[test]
    fn qs_predicate_requires_builtin_and_fresh_load() {
        let mut app = App::default();
        assert!(should_set_node_from_qs(&app, Some(ids::ETH)));
        assert!(!should_set_node_from_qs(&app, Some("NOPE")));
        assert!(!should_set_node_from_qs(&app, None));

        app.attempt_node_from_query(Some(ids::ETH));
        app.process_intents();
        assert!(!should_set_node_from_qs(&app, Some(ids::ETH)));
    }

    #[test]
    fn dangling_selection_falls_back_without_panicking() {
        let mut app = App::new(Selection::new(ids::ETH, "ghost"), "en".to_string());
        // Fallback stays on the selected network.
        assert_eq!(get_node_config(&app).id, ids::ETH_AUTO);
        assert_eq!(get_node_config(&app).network, ids::ETH);
        // Still recoverable through a normal intent.
        app.handle_intent(Intent::ChangeNode {
            node_id: ids::ETH_AUTO.to_string(),
        })
        .unwrap();
    }

    #[test]
    fn dangling_selection_on_nodeless_network_uses_global_default() {
        let app = App::new(Selection::new("TESTNET", "ghost"), "en".to_string());
        assert_eq!(get_node_config(&app).id, ids::WAN_AUTO);
    }
}
