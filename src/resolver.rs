//! Selection resolver
//!
//! State machine over {Idle, Changing, Error} that arbitrates which
//! network/node pair is current. Three selection sources compete: the
//! standing user preference, a one-time URL network hint applied at most
//! once per load, and the revert path after a failed switch. Explicit user
//! intent always beats the hint.
//!
//! All transitions run on the single event thread; nothing here is
//! re-entrant. While a change is in flight, readers see the previous
//! stable selection so the UI never flickers to an unconfirmed target.

use crate::types::{Selection, SelectionState, SwitchOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Changing,
    Error,
}

/// Which selection source started the in-flight switch. A standing switch
/// is final until it settles; a hint switch yields to an explicit pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChangeOrigin {
    Standing,
    Hint,
}

#[derive(Debug)]
pub struct SelectionResolver {
    phase: Phase,
    /// Last acknowledged selection. This is what readers always see.
    stable: Selection,
    /// In-flight target and its origin, only set while `phase == Changing`.
    target: Option<(Selection, ChangeOrigin)>,
    offline: bool,
    /// Load guard: the URL hint may be attempted at most once per
    /// application load, even across component remounts.
    hint_attempted: bool,
    /// Set once any explicit standing change has been requested; a pending
    /// hint is dropped in that case.
    explicit_change_seen: bool,
}

impl SelectionResolver {
    pub fn new(default: Selection) -> Self {
        Self {
            phase: Phase::Idle,
            stable: default,
            target: None,
            offline: false,
            hint_attempted: false,
            explicit_change_seen: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_changing_node(&self) -> bool {
        self.phase == Phase::Changing
    }

    pub fn offline(&self) -> bool {
        self.offline
    }

    pub fn hint_attempted(&self) -> bool {
        self.hint_attempted
    }

    /// The effective selection. While changing this is the pre-change
    /// value, never the unconfirmed target.
    pub fn selection(&self) -> &Selection {
        &self.stable
    }

    pub fn node_id(&self) -> &str {
        &self.stable.node_id
    }

    pub fn network_id(&self) -> &str {
        &self.stable.network_id
    }

    /// In-flight target, if any. Exposed for the connection layer, not for
    /// UI reads.
    pub fn target(&self) -> Option<&Selection> {
        self.target.as_ref().map(|(t, _)| t)
    }

    pub fn state(&self) -> SelectionState {
        SelectionState {
            selection: self.stable.clone(),
            is_changing_node: self.is_changing_node(),
            offline: self.offline,
        }
    }

    /// Standing change from an explicit user pick. Returns whether a switch
    /// toward the target is now in flight.
    ///
    /// While a standing switch is in flight, a second standing request is
    /// dropped, not queued; the drop is deterministic and logged as
    /// superseded. A hint-originated switch offers no such protection:
    /// explicit user intent always wins, so the explicit target displaces
    /// the hint's mid-flight.
    pub fn request_change(&mut self, target: Selection) -> bool {
        self.explicit_change_seen = true;
        if self.phase == Phase::Changing {
            let (current, origin) = self.target.as_ref().expect("target set while changing");
            if *origin == ChangeOrigin::Standing {
                log::warn!(
                    "selection: change to {target} superseded, switch to {current} already in flight"
                );
                return false;
            }
            log::info!("selection: explicit pick {target} displaces hint switch to {current}");
            if target == self.stable {
                // Picked the node we never left; nothing to switch to.
                self.target = None;
                self.phase = Phase::Idle;
                return false;
            }
            self.target = Some((target, ChangeOrigin::Standing));
            return true;
        }
        self.begin(target, ChangeOrigin::Standing)
    }

    /// One-time change derived from the URL network hint. Applies at most
    /// once per load, and only while no explicit selection exists yet.
    pub fn request_one_time(&mut self, target: Selection) -> bool {
        if self.hint_attempted {
            log::debug!("selection: network hint already attempted this load, ignoring");
            return false;
        }
        self.hint_attempted = true;
        if self.explicit_change_seen || self.phase != Phase::Idle {
            log::debug!("selection: network hint dropped, explicit selection takes precedence");
            return false;
        }
        self.begin(target, ChangeOrigin::Hint)
    }

    fn begin(&mut self, target: Selection, origin: ChangeOrigin) -> bool {
        if target == self.stable {
            log::debug!("selection: already on {target}, nothing to change");
            return false;
        }
        log::info!("selection: switching {} -> {target}", self.stable);
        self.target = Some((target, origin));
        self.phase = Phase::Changing;
        true
    }

    /// Completion signal from the connection layer. On success the target
    /// becomes stable; on failure the selection stays reverted to the prior
    /// value and `offline` reflects a connectivity loss.
    pub fn complete_switch(&mut self, outcome: SwitchOutcome) {
        if self.phase != Phase::Changing {
            log::debug!("selection: spurious switch completion in {:?}, ignoring", self.phase);
            return;
        }
        match outcome {
            SwitchOutcome::Completed => {
                if let Some((target, _)) = self.target.take() {
                    log::info!("selection: switch to {target} confirmed");
                    self.stable = target;
                }
                self.offline = false;
                self.phase = Phase::Idle;
            }
            SwitchOutcome::Failed { connectivity_lost } => {
                let target = self.target.take();
                log::warn!(
                    "selection: switch to {} failed, keeping {}",
                    target.as_ref().map(|(t, _)| t).unwrap_or(&self.stable),
                    self.stable
                );
                self.offline = connectivity_lost;
                self.phase = Phase::Error;
            }
        }
    }

    /// Called when the currently selected node was removed from the
    /// registry. Falls back deterministically so the selection never points
    /// at a nonexistent id. An in-flight switch to the removed node is
    /// cancelled.
    pub fn selected_node_removed(&mut self, removed_id: &str, fallback: Selection) {
        if self
            .target
            .as_ref()
            .is_some_and(|(t, _)| t.node_id == removed_id)
        {
            log::info!("selection: in-flight target '{removed_id}' removed, cancelling switch");
            self.target = None;
            self.phase = Phase::Idle;
        }
        if self.stable.node_id == removed_id {
            log::info!(
                "selection: selected node '{removed_id}' removed, falling back to {fallback}"
            );
            self.stable = fallback;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ids;

    fn wan_auto() -> Selection {
        Selection::new(ids::WAN, ids::WAN_AUTO)
    }

    fn eth_auto() -> Selection {
        Selection::new(ids::ETH, ids::ETH_AUTO)
    }

    #[test]
    fn starts_idle_on_default() {
        let r = SelectionResolver::new(wan_auto());
        assert_eq!(r.phase(), Phase::Idle);
        assert!(!r.is_changing_node());
        assert_eq!(r.selection(), &wan_auto());
    }

    #[test]
    fn reads_stay_on_prior_value_while_changing() {
        let mut r = SelectionResolver::new(wan_auto());
        assert!(r.request_change(eth_auto()));
        assert!(r.is_changing_node());
        assert_eq!(r.selection(), &wan_auto(), "no flicker to unconfirmed target");

        r.complete_switch(SwitchOutcome::Completed);
        assert_eq!(r.phase(), Phase::Idle);
        assert_eq!(r.selection(), &eth_auto());
    }

    #[test]
    fn second_concurrent_change_is_dropped() {
        let mut r = SelectionResolver::new(wan_auto());
        assert!(r.request_change(eth_auto()));
        assert!(!r.request_change(Selection::new(ids::ETH, ids::ETH_ETHSCAN)));

        r.complete_switch(SwitchOutcome::Completed);
        assert_eq!(r.selection(), &eth_auto(), "first request wins, second dropped");
    }

    #[test]
    fn failure_reverts_and_flags_offline() {
        let mut r = SelectionResolver::new(wan_auto());
        r.request_change(eth_auto());
        r.complete_switch(SwitchOutcome::Failed {
            connectivity_lost: true,
        });
        assert_eq!(r.phase(), Phase::Error);
        assert_eq!(r.selection(), &wan_auto());
        assert!(r.offline());
        assert!(!r.is_changing_node());
    }

    #[test]
    fn error_recovers_on_next_successful_change() {
        let mut r = SelectionResolver::new(wan_auto());
        r.request_change(eth_auto());
        r.complete_switch(SwitchOutcome::Failed {
            connectivity_lost: true,
        });

        assert!(r.request_change(eth_auto()), "retry allowed from Error");
        r.complete_switch(SwitchOutcome::Completed);
        assert_eq!(r.phase(), Phase::Idle);
        assert!(!r.offline());
        assert_eq!(r.selection(), &eth_auto());
    }

    #[test]
    fn hint_applies_once_per_load() {
        let mut r = SelectionResolver::new(wan_auto());
        assert!(r.request_one_time(eth_auto()));
        r.complete_switch(SwitchOutcome::Completed);

        // Remount-equivalent: second attempt must be a no-op.
        assert!(!r.request_one_time(wan_auto()));
        assert_eq!(r.selection(), &eth_auto());
    }

    #[test]
    fn explicit_pick_displaces_in_flight_hint_switch() {
        let mut r = SelectionResolver::new(wan_auto());
        assert!(r.request_one_time(eth_auto()));
        assert!(r.is_changing_node());

        // Hint switch still in flight when the user picks a node: the
        // explicit target takes over.
        let picked = Selection::new(ids::WAN, ids::WAN_REMOTE);
        assert!(r.request_change(picked.clone()));
        assert_eq!(r.target(), Some(&picked));
        assert_eq!(r.selection(), &wan_auto(), "stable unchanged until settled");

        r.complete_switch(SwitchOutcome::Completed);
        assert_eq!(r.selection(), &picked);
    }

    #[test]
    fn explicit_pick_of_current_node_cancels_hint_switch() {
        let mut r = SelectionResolver::new(wan_auto());
        assert!(r.request_one_time(eth_auto()));

        // User re-picks the node the hint was switching away from.
        assert!(!r.request_change(wan_auto()));
        assert_eq!(r.phase(), Phase::Idle);
        assert_eq!(r.target(), None);
        assert_eq!(r.selection(), &wan_auto());
    }

    #[test]
    fn explicit_intent_beats_pending_hint() {
        let mut r = SelectionResolver::new(wan_auto());
        assert!(r.request_change(Selection::new(ids::ETH, ids::ETH_ETHSCAN)));
        assert!(!r.request_one_time(eth_auto()), "hint dropped in favor of explicit pick");
        r.complete_switch(SwitchOutcome::Completed);
        assert_eq!(r.selection(), &Selection::new(ids::ETH, ids::ETH_ETHSCAN));
        assert!(r.hint_attempted(), "dropped hint still consumes the load guard");
    }

    #[test]
    fn spurious_completion_is_ignored() {
        let mut r = SelectionResolver::new(wan_auto());
        r.complete_switch(SwitchOutcome::Completed);
        assert_eq!(r.phase(), Phase::Idle);
        assert_eq!(r.selection(), &wan_auto());
    }

    #[test]
    fn no_op_change_to_current_selection() {
        let mut r = SelectionResolver::new(wan_auto());
        assert!(!r.request_change(wan_auto()));
        assert_eq!(r.phase(), Phase::Idle);
    }

    #[test]
    fn removed_selected_node_falls_back() {
        let mut r = SelectionResolver::new(Selection::new(ids::ETH, "mine"));
        r.selected_node_removed("mine", eth_auto());
        assert_eq!(r.selection(), &eth_auto());
        assert_eq!(r.phase(), Phase::Idle);
    }

    #[test]
    fn removed_in_flight_target_cancels_switch() {
        let mut r = SelectionResolver::new(wan_auto());
        r.request_change(Selection::new(ids::ETH, "mine"));
        r.selected_node_removed("mine", eth_auto());
        assert_eq!(r.phase(), Phase::Idle);
        assert_eq!(r.selection(), &wan_auto(), "stable untouched, switch cancelled");
    }
}
