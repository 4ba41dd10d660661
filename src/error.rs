//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain cli
//! @acp:layer model

use thiserror::Error;

use crate::archetype::Archetype;

/// Errors produced by the MantleForge library
#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A template failed to register with the rendering engine
    #[error("Invalid template for {archetype}: {message}")]
    Template { archetype: Archetype, message: String },

    #[error("Failed to render {archetype} template: {message}")]
    Render { archetype: Archetype, message: String },

    /// No template is registered for the archetype (always the case for `custom`)
    #[error("No template registered for archetype '{0}'")]
    NoTemplate(Archetype),

    /// A template references a placeholder that has no documented default
    #[error("Template {archetype} uses unknown placeholder {{{{{placeholder}}}}}")]
    UnknownPlaceholder {
        archetype: Archetype,
        placeholder: String,
    },

    #[error("Unknown archetype: {0}")]
    UnknownArchetype(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, ForgeError>;
