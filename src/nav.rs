//! Active view tracking
//!
//! Maps the current navigation path to the logical header tab index. Pure
//! function of the path: recomputed on every navigation change, never
//! updated incrementally.

use crate::constants::NAVIGATION_LINKS;

/// Tab index for `path`. Index 0 is the hidden home tab; configured links
/// occupy 1..=N in declaration order.
///
/// Detail-view special case: a three-segment path ending in `view` whose
/// first segment maps to tab 1 returns tab 3 instead, so the detail view
/// does not highlight the list tab it shares a prefix with.
pub fn calculate_active_tab(path: &str) -> usize {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let Some(first) = segments.first() else {
        return 0;
    };
    let initial = NAVIGATION_LINKS
        .iter()
        .position(|link| link.to.trim_start_matches('/') == *first)
        .map(|i| i + 1)
        .unwrap_or(0);

    if initial == 1 && segments.len() == 3 && segments[2] == "view" {
        initial + 2
    } else {
        initial
    }
}
