//! @acp:module "Networks Command"
//! @acp:summary "Print Mantle network metadata"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::network;

/// Options for the networks command
#[derive(Debug, Clone, Default)]
pub struct NetworksOptions {
    /// Output as JSON
    pub json: bool,
    /// Network marked as the default
    pub default_network: String,
}

/// Execute the networks command
pub fn execute_networks(options: NetworksOptions) -> Result<()> {
    let networks = network::all();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&networks)?);
        return Ok(());
    }

    for (key, net) in &networks {
        let marker = if key.eq_ignore_ascii_case(&options.default_network) {
            style("*").green().to_string()
        } else {
            " ".to_string()
        };
        println!("{} {} ({})", marker, style(net.name).bold(), key);
        println!("    Chain ID: {}", net.chain_id);
        println!("    RPC:      {}", net.rpc);
        println!("    Explorer: {}", net.explorer);
        if let Some(faucet) = net.faucet {
            println!("    Faucet:   {}", faucet);
        }
    }

    Ok(())
}
