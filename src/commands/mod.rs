//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command is in its own submodule. Commands only move strings in and
//! results out; all decisions live in the generator.

pub mod batch;
pub mod classify;
pub mod generate;
pub mod networks;
pub mod output;
pub mod serve;
pub mod templates;

pub use batch::{execute_batch, generate_batch, parse_prompts, BatchOptions};
pub use classify::{execute_classify, ClassifyOptions};
pub use generate::{execute_generate, resolve_prompt, GenerateOptions, SAMPLE_PROMPT};
pub use networks::{execute_networks, NetworksOptions};
pub use output::{banner_line, format_params, BANNER_WIDTH};
pub use serve::{execute_serve, ServeOptions};
pub use templates::{execute_templates, TemplatesSubcommand};
