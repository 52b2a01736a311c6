use crate::constants::{self, languages};
use crate::types::Selection;
use anyhow::{anyhow, Result};
use clap::Parser;

/// Nodeswitch - wallet node/network selection core
///
/// Inspection binary for the selection subsystem.
/// Configuration priority: CLI args > Environment variables > Defaults
#[derive(Parser, Debug, Default)]
#[command(name = "nodeswitch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Wallet node/network selection core", long_about = None)]
pub struct CliArgs {
    /// Default network identifier (built-in: ETH, WAN)
    #[arg(long, env = "DEFAULT_NETWORK")]
    pub network: Option<String>,

    /// Default node identifier (must be a built-in node of the network)
    #[arg(long, env = "DEFAULT_NODE")]
    pub node: Option<String>,

    /// Interface language key (en, de, es, ...)
    #[arg(long, env = "DEFAULT_LANGUAGE")]
    pub language: Option<String>,

    /// Network hint as supplied via the page's query string, consumed once
    /// at startup to trigger the one-time node intent
    #[arg(long, env = "NETWORK_PARAM")]
    pub network_param: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub default_selection: Selection,
    pub language: String,
    pub network_param: Option<String>,
}

/// Load configuration from CLI args and environment variables
/// Priority: CLI args > Environment variables > Defaults
pub fn load() -> Result<Config> {
    from_args(CliArgs::parse())
}

pub fn from_args(args: CliArgs) -> Result<Config> {
    let network = args
        .network
        .unwrap_or_else(|| constants::defaults::NETWORK.to_string());
    let network_cfg = constants::static_network(&network).ok_or_else(|| {
        anyhow!(
            "DEFAULT_NETWORK '{network}' is not a built-in network (valid: {})",
            constants::STATIC_NETWORKS
                .iter()
                .map(|n| n.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;

    let node = match args.node {
        Some(node) => node,
        None => {
            constants::default_node_for_network(&network_cfg.id)
                .map(|n| n.id.clone())
                .ok_or_else(|| anyhow!("network '{network}' has no built-in nodes"))?
        }
    };
    let node_cfg = constants::static_node(&node)
        .ok_or_else(|| anyhow!("DEFAULT_NODE '{node}' is not a built-in node"))?;
    if node_cfg.network != network_cfg.id {
        return Err(anyhow!(
            "DEFAULT_NODE '{node}' belongs to network '{}', not '{}'",
            node_cfg.network,
            network_cfg.id
        ));
    }

    let language = args
        .language
        .unwrap_or_else(|| constants::defaults::LANGUAGE.to_string());
    if !languages::is_valid_key(&language) {
        return Err(anyhow!(
            "DEFAULT_LANGUAGE '{language}' is not in the language table"
        ));
    }

    Ok(Config {
        default_selection: Selection::new(network_cfg.id.clone(), node_cfg.id.clone()),
        language,
        network_param: args.network_param,
    })
}

impl Config {
    /// Print current configuration (useful for debugging)
    pub fn print_summary(&self) {
        eprintln!("Nodeswitch Configuration:");
        eprintln!("  Default selection: {}", self.default_selection);
        eprintln!("  Language: {}", self.language);
        match &self.network_param {
            Some(p) => eprintln!("  Network param: {p}"),
            None => eprintln!("  Network param: (none)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ids;

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = from_args(CliArgs::default()).unwrap();
        assert_eq!(cfg.default_selection, constants::default_selection());
        assert_eq!(cfg.language, "en");
        assert!(cfg.network_param.is_none());
    }

    #[test]
    fn network_implies_its_first_builtin_node() {
        let cfg = from_args(CliArgs {
            network: Some(ids::ETH.to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(cfg.default_selection, Selection::new(ids::ETH, ids::ETH_AUTO));
    }

    #[test]
    fn mismatched_node_and_network_is_rejected() {
        let err = from_args(CliArgs {
            network: Some(ids::ETH.to_string()),
            node: Some(ids::WAN_AUTO.to_string()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("belongs to network"));
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert!(from_args(CliArgs {
            network: Some("NOPE".to_string()),
            ..Default::default()
        })
        .is_err());
        assert!(from_args(CliArgs {
            language: Some("tlh".to_string()),
            ..Default::default()
        })
        .is_err());
    }
}
