//! @acp:module "Serve Command"
//! @acp:summary "Run the HTTP API"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::generator::Generator;
use crate::server;

/// Options for the serve command; unset fields fall back to config
#[derive(Debug, Clone, Default)]
pub struct ServeOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<PathBuf>,
}

/// Execute the serve command
pub async fn execute_serve(options: ServeOptions, mut config: Config, generator: Generator) -> Result<()> {
    if let Some(host) = options.host {
        config.server.host = host;
    }
    if let Some(port) = options.port {
        config.server.port = port;
    }
    if options.static_dir.is_some() {
        config.server.static_dir = options.static_dir;
    }

    println!(
        "{} MantleForge API at http://{}:{}",
        style("→").cyan(),
        config.server.host,
        config.server.port
    );
    println!("  POST /api/generate  {{\"prompt\": \"...\"}}");

    server::serve(&config, generator).await
}
