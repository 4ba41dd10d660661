#![forbid(unsafe_code)]
//! MantleForge Command Line Interface

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mantleforge::commands::{
    execute_batch, execute_classify, execute_generate, execute_networks, execute_serve,
    execute_templates, BatchOptions, ClassifyOptions, GenerateOptions, NetworksOptions,
    ServeOptions, TemplatesSubcommand,
};
use mantleforge::config::CONFIG_FILE;
use mantleforge::{Archetype, Config, Generator, UnitScope};

#[derive(Parser)]
#[command(name = "mantleforge")]
#[command(about = "MantleForge - Generate Solidity smart contracts from plain English")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Where magnitude words apply to a supply (adjacent, prompt)
    #[arg(long, global = true, env = "MANTLEFORGE_UNIT_SCOPE")]
    unit_scope: Option<UnitScope>,

    /// Directory of <archetype>.sol files overriding built-in templates
    #[arg(long, global = true)]
    templates_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a contract from a description
    Generate {
        /// Contract description (prompted for if omitted)
        prompt: Vec<String>,

        /// Print the API JSON response instead of the source banner
        #[arg(long)]
        json: bool,

        /// Write the generated source to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show which archetype and parameters a description resolves to
    Classify {
        /// Contract description
        prompt: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Print the classification rules in priority order
        #[arg(long)]
        rules: bool,
    },

    /// Generate contracts for every line of a file
    Batch {
        /// File with one description per line
        input: PathBuf,

        /// Write JSON lines here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect contract templates
    Templates {
        #[command(subcommand)]
        cmd: Option<TemplatesCommands>,
    },

    /// Show Mantle network information
    Networks {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the HTTP API
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory of static files served at /
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum TemplatesCommands {
    /// List templates and their placeholders
    List,

    /// Print a template
    Show {
        /// Archetype (erc20, erc721, timelock, voting, multisig, staking)
        archetype: Archetype,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "mantleforge=debug,tower_http=debug"
    } else {
        "mantleforge=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load config
    let mut config = Config::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    if let Some(scope) = cli.unit_scope {
        config.extraction.unit_scope = scope;
    }
    if let Some(dir) = cli.templates_dir {
        config.templates.override_dir = Some(dir);
    }

    let generator = Generator::from_config(&config).context("Failed to load templates")?;

    match cli.command {
        Commands::Generate { prompt, json, output } => {
            let options = GenerateOptions { prompt, json, output };
            execute_generate(options, &generator)?;
        }

        Commands::Classify { prompt, json, rules } => {
            let options = ClassifyOptions { prompt, json, rules };
            execute_classify(options, &generator)?;
        }

        Commands::Batch { input, output } => {
            let options = BatchOptions { input, output };
            execute_batch(options, &generator)?;
        }

        Commands::Templates { cmd } => {
            let subcommand = match cmd {
                None | Some(TemplatesCommands::List) => TemplatesSubcommand::List,
                Some(TemplatesCommands::Show { archetype }) => {
                    TemplatesSubcommand::Show { archetype }
                }
            };
            execute_templates(subcommand, &generator)?;
        }

        Commands::Networks { json } => {
            let options = NetworksOptions {
                json,
                default_network: config.network.clone(),
            };
            execute_networks(options)?;
        }

        Commands::Serve { host, port, static_dir } => {
            let options = ServeOptions { host, port, static_dir };
            execute_serve(options, config, generator).await?;
        }
    }

    Ok(())
}
