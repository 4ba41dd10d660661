//! @acp:module "Classify Command"
//! @acp:summary "Show the archetype and parameters a prompt resolves to"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use serde::Serialize;

use super::generate::resolve_prompt;
use super::output::format_params;
use crate::archetype::Archetype;
use crate::generator::{rules, Generator, ParameterSet};

/// Options for the classify command
#[derive(Debug, Clone, Default)]
pub struct ClassifyOptions {
    pub prompt: Vec<String>,
    /// Output as JSON
    pub json: bool,
    /// Print the rule table instead of classifying
    pub rules: bool,
}

#[derive(Debug, Serialize)]
struct Analysis<'a> {
    #[serde(rename = "type")]
    archetype: Archetype,
    params: &'a ParameterSet,
}

/// Execute the classify command
pub fn execute_classify(options: ClassifyOptions, generator: &Generator) -> Result<()> {
    if options.rules {
        for (i, rule) in rules().iter().enumerate() {
            println!("{:>2}. {}", i + 1, rule);
        }
        println!("{:>2}. {} <- (no match)", rules().len() + 1, Archetype::Custom);
        return Ok(());
    }

    let prompt = resolve_prompt(&options.prompt)?;
    let (archetype, params) = generator.analyze(&prompt);

    if options.json {
        let analysis = Analysis {
            archetype,
            params: &params,
        };
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    if archetype.is_custom() {
        println!(
            "{} No archetype matched; generation would fail",
            style("!").yellow()
        );
    } else {
        println!("{} {}", style(archetype).cyan().bold(), archetype.label());
        println!("  Parameters: {}", format_params(&params));
    }

    Ok(())
}
