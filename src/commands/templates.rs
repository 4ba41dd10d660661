//! @acp:module "Templates Command"
//! @acp:summary "List registered contract templates or print one"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::{anyhow, Result};
use console::style;

use crate::archetype::Archetype;
use crate::generator::Generator;

/// Templates subcommands
#[derive(Debug, Clone)]
pub enum TemplatesSubcommand {
    /// List archetypes with their placeholders
    List,
    /// Print the raw template for an archetype
    Show { archetype: Archetype },
}

/// Execute the templates command
pub fn execute_templates(cmd: TemplatesSubcommand, generator: &Generator) -> Result<()> {
    let store = generator.store();

    match cmd {
        TemplatesSubcommand::List => {
            for archetype in store.archetypes() {
                let tokens: Vec<String> = store
                    .placeholders(archetype)
                    .iter()
                    .map(|p| format!("{}={}", p.token, p.default))
                    .collect();
                println!(
                    "{:<10} {:<16} {}",
                    style(archetype).cyan(),
                    archetype.label(),
                    style(tokens.join(" ")).dim()
                );
            }
        }
        TemplatesSubcommand::Show { archetype } => {
            let source = store
                .source(archetype)
                .ok_or_else(|| anyhow!("No template registered for '{}'", archetype))?;
            println!("{}", source);
        }
    }

    Ok(())
}
