//! @acp:module "Generate Command"
//! @acp:summary "Generate a Solidity contract from a prompt"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `mantleforge generate`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};

use super::output::{banner_line, format_params};
use crate::generator::{GenerationResult, Generator};

/// Prompt used when none is given and no terminal is attached
pub const SAMPLE_PROMPT: &str = "Create an ERC-20 token called MantleGold with 1 million supply";

/// Options for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Prompt words, joined with spaces
    pub prompt: Vec<String>,
    /// Print the API JSON shape instead of the banner
    pub json: bool,
    /// Write the generated source to this file
    pub output: Option<PathBuf>,
}

/// Join prompt words, asking interactively when there are none
pub fn resolve_prompt(words: &[String]) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    if !console::Term::stdout().is_term() {
        return Ok(SAMPLE_PROMPT.to_string());
    }

    let prompt: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Describe your smart contract")
        .default(SAMPLE_PROMPT.to_string())
        .interact_text()?;
    Ok(prompt)
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions, generator: &Generator) -> Result<()> {
    let prompt = resolve_prompt(&options.prompt)?;
    let result = generator.generate(&prompt);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        if !result.is_success() {
            std::process::exit(1);
        }
        return Ok(());
    }

    println!(
        "{} Generating contract for: \"{}\"",
        style("→").cyan(),
        prompt
    );

    match result {
        GenerationResult::Success {
            archetype,
            parameters,
            source,
        } => {
            println!("  Type: {} ({})", style(archetype).cyan(), archetype.label());
            println!("  Parameters: {}", format_params(&parameters));
            println!(
                "{} Generated {} contract!",
                style("✓").green(),
                archetype.as_str().to_uppercase()
            );

            if let Some(path) = options.output {
                std::fs::write(&path, &source)
                    .with_context(|| format!("Failed to write contract to {:?}", path))?;
                println!("{} Wrote {}", style("✓").green(), path.display());
            } else {
                println!("{}", banner_line());
                println!("{}", source);
                println!("{}", banner_line());
            }
        }
        GenerationResult::Failure { message } => {
            eprintln!("{} {}", style("✗").red(), message);
            std::process::exit(1);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prompt_joins_words() {
        let words: Vec<String> = ["Build", "a", "staking", "pool"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(resolve_prompt(&words).unwrap(), "Build a staking pool");
    }

    #[test]
    fn test_execute_generate_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Token.sol");
        let options = GenerateOptions {
            prompt: vec![SAMPLE_PROMPT.to_string()],
            json: false,
            output: Some(path.clone()),
        };

        execute_generate(options, &Generator::default()).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("contract MantleGold is ERC20"));
    }
}
