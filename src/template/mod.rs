//! @acp:module "Template Store"
//! @acp:summary "Immutable per-archetype Solidity templates and placeholder rendering"
//! @acp:domain template
//! @acp:layer service
//!
//! Templates are loaded in two layers:
//! 1. Built-in templates compiled into the binary (`templates/*.sol`)
//! 2. Optional project overrides (`<dir>/<archetype>.sol`)
//!
//! The store is never modified after construction, so one instance can be
//! shared across threads without locking.

pub mod placeholder;

use handlebars::Handlebars;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, LazyLock};

pub use placeholder::{lookup, scan_tokens, Placeholder, PLACEHOLDERS};

use crate::archetype::Archetype;
use crate::error::{ForgeError, Result};
use crate::generator::ParameterSet;

const BUILTIN_TEMPLATES: &[(Archetype, &str)] = &[
    (Archetype::Erc20, include_str!("../../templates/erc20.sol")),
    (Archetype::Erc721, include_str!("../../templates/erc721.sol")),
    (Archetype::Timelock, include_str!("../../templates/timelock.sol")),
    (Archetype::Voting, include_str!("../../templates/voting.sol")),
    (Archetype::Multisig, include_str!("../../templates/multisig.sol")),
    (Archetype::Staking, include_str!("../../templates/staking.sol")),
];

static BUILTIN: LazyLock<Arc<TemplateStore>> = LazyLock::new(|| {
    Arc::new(TemplateStore::builtin().expect("built-in templates must register"))
});

/// Registered templates keyed by archetype
pub struct TemplateStore {
    registry: Handlebars<'static>,
    sources: BTreeMap<Archetype, String>,
}

impl TemplateStore {
    /// Store holding only the built-in templates
    pub fn builtin() -> Result<Self> {
        let mut store = Self::empty();
        for (archetype, source) in BUILTIN_TEMPLATES {
            store.register(*archetype, source.to_string())?;
        }
        Ok(store)
    }

    /// Shared built-in store, initialized on first use
    pub fn shared() -> Arc<TemplateStore> {
        Arc::clone(&BUILTIN)
    }

    /// Built-in templates with any `<archetype>.sol` files in `dir` layered on top
    pub fn with_overrides(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(ForgeError::InvalidConfig(format!(
                "template override directory not found: {}",
                dir.display()
            )));
        }

        let mut store = Self::builtin()?;

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().map(|e| e != "sol").unwrap_or(true) {
                continue;
            }

            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            let archetype = match stem.parse::<Archetype>() {
                Ok(a) if !a.is_custom() => a,
                _ => {
                    tracing::warn!("Ignoring template override for unknown archetype: {}", path.display());
                    continue;
                }
            };

            let source = std::fs::read_to_string(&path)?;
            store.register(archetype, source)?;
            tracing::info!("Loaded {} template override from {}", archetype, path.display());
        }

        Ok(store)
    }

    fn empty() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        Self {
            registry,
            sources: BTreeMap::new(),
        }
    }

    /// Validate and register a template. Every token must have a known default
    /// and a render with all defaults must leave no `{{` behind.
    fn register(&mut self, archetype: Archetype, source: String) -> Result<()> {
        if let Some(unknown) = scan_tokens(&source)
            .into_iter()
            .find(|token| lookup(token).is_none())
        {
            return Err(ForgeError::UnknownPlaceholder {
                archetype,
                placeholder: unknown,
            });
        }

        self.registry
            .register_template_string(archetype.as_str(), &source)
            .map_err(|e| ForgeError::Template {
                archetype,
                message: e.to_string(),
            })?;

        let rendered = self
            .registry
            .render(archetype.as_str(), &render_data(&ParameterSet::new()))
            .map_err(|e| ForgeError::Template {
                archetype,
                message: e.to_string(),
            })?;
        if rendered.contains("{{") {
            return Err(ForgeError::Template {
                archetype,
                message: "rendered output still contains '{{'".to_string(),
            });
        }

        self.sources.insert(archetype, source);
        Ok(())
    }

    /// Archetypes with a registered template
    pub fn archetypes(&self) -> impl Iterator<Item = Archetype> + '_ {
        self.sources.keys().copied()
    }

    /// Raw template text
    pub fn source(&self, archetype: Archetype) -> Option<&str> {
        self.sources.get(&archetype).map(String::as_str)
    }

    /// Placeholders referenced by an archetype's template
    pub fn placeholders(&self, archetype: Archetype) -> Vec<&'static Placeholder> {
        self.source(archetype)
            .map(|source| scan_tokens(source).iter().filter_map(|t| lookup(t)).collect())
            .unwrap_or_default()
    }

    /// Substitute every placeholder from `params`, defaulting absent keys.
    ///
    /// Fails with [`ForgeError::NoTemplate`] for archetypes without a template.
    pub fn render(&self, archetype: Archetype, params: &ParameterSet) -> Result<String> {
        if !self.sources.contains_key(&archetype) {
            return Err(ForgeError::NoTemplate(archetype));
        }

        self.registry
            .render(archetype.as_str(), &render_data(params))
            .map_err(|e| ForgeError::Render {
                archetype,
                message: e.to_string(),
            })
    }
}

/// Value for every placeholder, from `params` or the placeholder default
fn render_data(params: &ParameterSet) -> BTreeMap<&'static str, String> {
    PLACEHOLDERS
        .iter()
        .map(|p| {
            let value = params
                .get(p.param)
                .map(ToString::to_string)
                .unwrap_or_else(|| p.default.to_string());
            (p.token, value)
        })
        .collect()
}

impl fmt::Debug for TemplateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateStore")
            .field("archetypes", &self.sources.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Render with the shared built-in store
pub fn render(archetype: Archetype, params: &ParameterSet) -> Result<String> {
    BUILTIN.render(archetype, params)
}
