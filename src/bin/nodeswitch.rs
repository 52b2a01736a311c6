// Inspection binary for the selection core: loads the startup
// configuration, replays the mount-time query hint, and prints the
// resolved selection state plus the option list as JSON.

use anyhow::{Context, Result};
use serde_json::json;

use nodeswitch::{
    app::App,
    config,
    constants::languages,
    selectors,
    types::SwitchOutcome,
};

fn main() -> Result<()> {
    env_logger::init();

    let cfg = config::load().context("Failed to load configuration")?;
    cfg.print_summary();

    let mut app = App::new(cfg.default_selection.clone(), cfg.language.clone());

    // Mount-equivalent: consume the query hint once, then settle the
    // resulting switch immediately (no real connection layer here).
    app.attempt_node_from_query(cfg.network_param.as_deref());
    for err in app.process_intents() {
        log::warn!("intent failed: {err}");
    }
    if app.resolver().is_changing_node() {
        app.complete_node_switch(SwitchOutcome::Completed);
    }

    let options: Vec<String> = app.node_options().iter().map(|o| o.to_string()).collect();
    let snapshot = json!({
        "selection": {
            "network": selectors::get_network_config(&app).id,
            "node": selectors::get_node_id(&app),
            "url": selectors::get_node_config(&app).url,
        },
        "is_changing_node": selectors::is_node_changing(&app),
        "offline": selectors::get_offline(&app),
        "language": {
            "key": selectors::get_language_selection(&app),
            "name": languages::display_name(selectors::get_language_selection(&app)),
        },
        "node_options": options,
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
