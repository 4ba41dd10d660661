//! @acp:module "Generator"
//! @acp:summary "Prompt to Solidity pipeline: classify, extract, render"
//! @acp:domain generator
//! @acp:layer service
//!
//! # Pipeline
//!
//! 1. **Classify** the prompt into one [`Archetype`] (first matching rule wins)
//! 2. **Extract** a [`ParameterSet`] with per-archetype heuristics and defaults
//! 3. **Render** the archetype's template with those parameters
//!
//! Each call is independent. A [`Generator`] only holds read-only state and
//! can be shared between threads behind an `Arc` or cloned cheaply.

pub mod classify;
pub mod extract;
pub mod number;
pub mod params;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub use classify::{classify, rules, Rule};
pub use extract::{extract, Extractor, UnitScope};
pub use params::{ParamValue, ParameterSet};

use crate::archetype::Archetype;
use crate::config::Config;
use crate::error::{ForgeError, Result};
use crate::template::TemplateStore;

/// Advisory returned when no archetype matches the prompt
pub const UNRECOGNIZED_MESSAGE: &str =
    "Could not determine contract type from prompt. Try being more specific.";

/// Outcome of one generation request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "GenerationResponse")]
pub enum GenerationResult {
    Success {
        archetype: Archetype,
        parameters: ParameterSet,
        source: String,
    },
    Failure {
        message: String,
    },
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success { .. })
    }

    pub fn archetype(&self) -> Option<Archetype> {
        match self {
            GenerationResult::Success { archetype, .. } => Some(*archetype),
            GenerationResult::Failure { .. } => None,
        }
    }

    pub fn parameters(&self) -> Option<&ParameterSet> {
        match self {
            GenerationResult::Success { parameters, .. } => Some(parameters),
            GenerationResult::Failure { .. } => None,
        }
    }

    /// Rendered Solidity source
    pub fn source(&self) -> Option<&str> {
        match self {
            GenerationResult::Success { source, .. } => Some(source),
            GenerationResult::Failure { .. } => None,
        }
    }

    /// Advisory message of a failed generation
    pub fn message(&self) -> Option<&str> {
        match self {
            GenerationResult::Success { .. } => None,
            GenerationResult::Failure { message } => Some(message),
        }
    }
}

/// Wire shape of a [`GenerationResult`]:
/// `{success: true, type, params, code}` or `{success: false, error}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub success: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub archetype: Option<Archetype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<ParameterSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<GenerationResult> for GenerationResponse {
    fn from(result: GenerationResult) -> Self {
        match result {
            GenerationResult::Success {
                archetype,
                parameters,
                source,
            } => Self {
                success: true,
                archetype: Some(archetype),
                params: Some(parameters),
                code: Some(source),
                error: None,
            },
            GenerationResult::Failure { message } => Self {
                success: false,
                archetype: None,
                params: None,
                code: None,
                error: Some(message),
            },
        }
    }
}

/// Stateless prompt-to-contract generator
#[derive(Debug, Clone)]
pub struct Generator {
    store: Arc<TemplateStore>,
    extractor: Extractor,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(TemplateStore::shared(), Extractor::default())
    }
}

impl Generator {
    pub fn new(store: Arc<TemplateStore>, extractor: Extractor) -> Self {
        Self { store, extractor }
    }

    /// Build a generator from configuration, loading template overrides if set
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = match config.templates.override_dir {
            Some(ref dir) => Arc::new(TemplateStore::with_overrides(dir)?),
            None => TemplateStore::shared(),
        };
        Ok(Self::new(store, Extractor::new(config.extraction.unit_scope)))
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Classify and extract without rendering
    pub fn analyze(&self, prompt: &str) -> (Archetype, ParameterSet) {
        let archetype = classify(prompt);
        let params = self.extractor.extract(prompt, archetype);
        (archetype, params)
    }

    /// Run the full pipeline. Never panics; every outcome is a result value.
    pub fn generate(&self, prompt: &str) -> GenerationResult {
        let (archetype, parameters) = self.analyze(prompt);

        match self.store.render(archetype, &parameters) {
            Ok(source) => {
                tracing::info!("Generated {} contract", archetype);
                GenerationResult::Success {
                    archetype,
                    parameters,
                    source,
                }
            }
            Err(ForgeError::NoTemplate(_)) => {
                tracing::warn!("No archetype recognized for prompt");
                GenerationResult::Failure {
                    message: UNRECOGNIZED_MESSAGE.to_string(),
                }
            }
            Err(e) => {
                tracing::warn!("Generation failed: {}", e);
                GenerationResult::Failure {
                    message: e.to_string(),
                }
            }
        }
    }
}

/// Generate with the built-in templates and default extraction options
pub fn generate(prompt: &str) -> GenerationResult {
    Generator::default().generate(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_success_shape() {
        let result = generate("Build a voting contract for DAO proposals");
        assert!(result.is_success());
        assert_eq!(result.archetype(), Some(Archetype::Voting));
        assert!(result
            .source()
            .unwrap()
            .contains("contract VotingContract {"));
    }

    #[test]
    fn test_generate_failure_for_custom() {
        let result = generate("make me a contract");
        assert_eq!(
            result,
            GenerationResult::Failure {
                message: UNRECOGNIZED_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_success_serializes_to_wire_shape() {
        let result = generate("Build a staking pool contract");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["type"], "staking");
        assert_eq!(json["params"]["rewardRate"], "1000000000000");
        assert!(json["code"].as_str().unwrap().contains("contract StakingPool"));
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failure_serializes_to_wire_shape() {
        let json = serde_json::to_value(generate("hello")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "error": UNRECOGNIZED_MESSAGE })
        );
    }

    #[test]
    fn test_from_config_uses_unit_scope() {
        let mut config = Config::default();
        config.extraction.unit_scope = UnitScope::Prompt;
        let generator = Generator::from_config(&config).unwrap();

        let (_, params) = generator.analyze("10 tokens, million-dollar idea, 500 supply");
        assert_eq!(params.get("supply"), Some(&ParamValue::Integer(500_000_000)));
    }
}
