//! @acp:module "Batch Command"
//! @acp:summary "Generate contracts for many prompts in parallel"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Reads one prompt per line and writes one JSON object per line, in input
//! order. Blank lines and lines starting with `#` are skipped.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use rayon::prelude::*;
use serde::Serialize;

use crate::generator::{GenerationResult, Generator};

/// Options for the batch command
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// File with one prompt per line
    pub input: PathBuf,
    /// JSON lines destination (stdout if None)
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct BatchLine<'a> {
    prompt: &'a str,
    result: &'a GenerationResult,
}

/// Extract prompts from file content
pub fn parse_prompts(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Generate every prompt on the rayon pool, preserving order
pub fn generate_batch(generator: &Generator, prompts: &[String]) -> Vec<GenerationResult> {
    prompts
        .par_iter()
        .map(|prompt| generator.generate(prompt))
        .collect()
}

/// Execute the batch command
pub fn execute_batch(options: BatchOptions, generator: &Generator) -> Result<()> {
    let content = std::fs::read_to_string(&options.input)
        .with_context(|| format!("Failed to read prompts from {:?}", options.input))?;
    let prompts = parse_prompts(&content);
    let results = generate_batch(generator, &prompts);

    let mut out: Box<dyn Write> = match options.output {
        Some(ref path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create {:?}", path))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };

    for (prompt, result) in prompts.iter().zip(&results) {
        let line = BatchLine { prompt, result };
        writeln!(out, "{}", serde_json::to_string(&line)?)?;
    }
    out.flush()?;

    let succeeded = results.iter().filter(|r| r.is_success()).count();
    eprintln!(
        "{} {} generated, {} {} failed",
        style("✓").green(),
        succeeded,
        style("✗").red(),
        results.len() - succeeded
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::Archetype;

    #[test]
    fn test_parse_prompts_skips_comments_and_blanks() {
        let prompts = parse_prompts("# examples\nBuild a staking pool\n\n  Create a 2 of 3 multisig  \n");
        assert_eq!(prompts, vec!["Build a staking pool", "Create a 2 of 3 multisig"]);
    }

    #[test]
    fn test_generate_batch_preserves_order() {
        let prompts: Vec<String> = [
            "Build a staking pool contract",
            "make me a contract",
            "Build a voting contract for DAO proposals",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let results = generate_batch(&Generator::default(), &prompts);
        let archetypes: Vec<_> = results.iter().map(|r| r.archetype()).collect();
        assert_eq!(
            archetypes,
            vec![Some(Archetype::Staking), None, Some(Archetype::Voting)]
        );
    }

    #[test]
    fn test_execute_batch_writes_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("prompts.txt");
        let output = dir.path().join("out.jsonl");
        std::fs::write(&input, "Build a staking pool contract\nhello\n").unwrap();

        execute_batch(
            BatchOptions {
                input,
                output: Some(output.clone()),
            },
            &Generator::default(),
        )
        .unwrap();

        let written = std::fs::read_to_string(output).unwrap();
        let lines: Vec<serde_json::Value> = written
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["result"]["type"], "staking");
        assert_eq!(lines[1]["prompt"], "hello");
        assert_eq!(lines[1]["result"]["success"], false);
    }
}
