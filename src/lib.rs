#![forbid(unsafe_code)]

//! @acp:module "MantleForge Library"
//! @acp:summary "Natural language to Solidity contract generation for Mantle"
//! @acp:domain generator
//! @acp:layer api
//! @acp:stability stable
//!
//! # MantleForge
//!
//! Turns a free-text description of a smart contract into Solidity source.
//!
//! ## Pipeline
//!
//! - **Classify**: ordered keyword rules pick one contract archetype
//! - **Extract**: archetype-specific heuristics pull names, supplies and prices
//! - **Render**: parameters fill the archetype's template, with defaults for anything missing
//!
//! ## Example
//!
//! ```rust
//! use mantleforge::{generate, Archetype};
//!
//! let result = generate("Create an ERC-20 token called MantleGold with 1 million supply");
//! assert_eq!(result.archetype(), Some(Archetype::Erc20));
//! assert!(result.source().unwrap().contains("contract MantleGold"));
//! ```

pub mod archetype;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod network;
pub mod server;
pub mod template;

// Re-exports
pub use archetype::Archetype;
pub use config::Config;
pub use error::{ForgeError, Result};
pub use generator::{
    classify, extract, generate, Extractor, GenerationResponse, GenerationResult, Generator,
    ParamValue, ParameterSet, UnitScope, UNRECOGNIZED_MESSAGE,
};
pub use network::Network;
pub use template::{render, TemplateStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
