//! Application store
//!
//! Single-threaded, event-driven store tying the pieces together: it owns
//! the custom endpoint registry, the selection resolver, the option
//! catalog, the language selection and the gas-price field, and it is the
//! only place intents are applied. Readers go through `selectors` or the
//! accessors here; mutation happens exclusively in [`App::handle_intent`]
//! on the event thread, so no locking is needed.

use crate::catalog::Catalog;
use crate::constants::{self, languages};
use crate::error::ConfigError;
use crate::intents::{Intent, IntentDispatcher};
use crate::registry::CustomEndpointRegistry;
use crate::resolver::SelectionResolver;
use crate::types::{NodeConfig, NodeOption, Selection, SwitchOutcome};

#[derive(Debug)]
pub struct App {
    registry: CustomEndpointRegistry,
    resolver: SelectionResolver,
    catalog: Catalog,
    dispatcher: IntentDispatcher,
    language: String,
    gas_price_field: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new(
            constants::default_selection(),
            constants::defaults::LANGUAGE.to_string(),
        )
    }
}

impl App {
    pub fn new(default_selection: Selection, language: String) -> Self {
        Self {
            registry: CustomEndpointRegistry::new(),
            resolver: SelectionResolver::new(default_selection),
            catalog: Catalog::new(),
            dispatcher: IntentDispatcher::new(),
            language,
            gas_price_field: String::new(),
        }
    }

    pub fn registry(&self) -> &CustomEndpointRegistry {
        &self.registry
    }

    pub fn resolver(&self) -> &SelectionResolver {
        &self.resolver
    }

    pub fn dispatcher(&self) -> &IntentDispatcher {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut IntentDispatcher {
        &mut self.dispatcher
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn gas_price_field(&self) -> &str {
        &self.gas_price_field
    }

    /// Memoized option list for the currently selected network.
    pub fn node_options(&mut self) -> &[NodeOption] {
        let network_id = self.resolver.network_id().to_string();
        self.catalog.options(&self.registry, &network_id)
    }

    /// Mount hook: consume the optional routing parameter exactly once per
    /// load. Enqueues the one-time node intent only for a hint that names a
    /// built-in network; anything else is a silent no-op.
    pub fn attempt_node_from_query(&mut self, network_param: Option<&str>) {
        let Some(param) = network_param else { return };
        if self.resolver.hint_attempted() {
            return;
        }
        if !constants::is_static_network_id(param) {
            log::debug!("store: network hint '{param}' is not a built-in network, ignoring");
            return;
        }
        self.dispatcher.change_node_one_time(param);
    }

    /// Completion signal for the in-flight node switch, forwarded from the
    /// connection layer.
    pub fn complete_node_switch(&mut self, outcome: SwitchOutcome) {
        self.resolver.complete_switch(outcome);
    }

    /// Drain the dispatcher queue in submission order. Errors are collected
    /// for user-facing display; none of them stop processing.
    pub fn process_intents(&mut self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        while let Some(intent) = self.dispatcher.pop() {
            if let Err(e) = self.handle_intent(intent) {
                errors.push(e);
            }
        }
        errors
    }

    /// Apply one intent. The only mutation entry point.
    pub fn handle_intent(&mut self, intent: Intent) -> Result<(), ConfigError> {
        match intent {
            Intent::ChangeLanguage { key } => {
                if languages::is_valid_key(&key) {
                    self.language = key;
                } else {
                    log::debug!("store: invalid language key '{key}' ignored");
                }
            }
            Intent::ChangeNode { node_id } => {
                match self.lookup_node(&node_id) {
                    Some(node) => {
                        let target = Selection::new(node.network.clone(), node.id.clone());
                        self.resolver.request_change(target);
                    }
                    None => {
                        log::warn!("store: change-node intent for unknown node '{node_id}' dropped")
                    }
                }
            }
            Intent::ChangeNodeOneTime { network } => {
                match constants::default_node_for_network(&network) {
                    Some(node) if constants::is_static_network_id(&network) => {
                        let target = Selection::new(network, node.id.clone());
                        self.resolver.request_one_time(target);
                    }
                    _ => {
                        // InvalidNetworkHint policy: a no-op, not a failure.
                        log::debug!("store: one-time hint for '{network}' ignored");
                    }
                }
            }
            Intent::SetGasPriceField { value } => {
                self.gas_price_field = value;
            }
            Intent::AddCustomNode { payload } => {
                self.registry.add_custom_node(payload)?;
            }
            Intent::RemoveCustomNode { id } => {
                let removed = self.registry.remove_custom_node(&id)?;
                let fallback = self.fallback_for(&removed.network);
                self.resolver.selected_node_removed(&removed.id, fallback);
            }
            Intent::AddCustomNetwork { config } => {
                self.registry.add_custom_network(config)?;
            }
        }
        Ok(())
    }

    fn lookup_node(&self, id: &str) -> Option<NodeConfig> {
        constants::static_node(id)
            .cloned()
            .or_else(|| self.registry.custom_node(id).cloned())
    }

    /// Deterministic fallback when a selected node disappears: the first
    /// built-in node of the affected network, else the global default
    /// selection (custom networks have no built-ins).
    fn fallback_for(&self, network_id: &str) -> Selection {
        match constants::default_node_for_network(network_id) {
            Some(node) => Selection::new(network_id, node.id.clone()),
            None => constants::default_selection(),
        }
    }
}
