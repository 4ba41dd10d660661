//! @acp:module "Output Formatting"
//! @acp:summary "Shared terminal formatting for command output"
//! @acp:domain cli
//! @acp:layer output

use crate::generator::ParameterSet;

/// Width of the rule printed around generated source
pub const BANNER_WIDTH: usize = 60;

pub fn banner_line() -> String {
    "━".repeat(BANNER_WIDTH)
}

/// Render parameters as `key=value` pairs in key order
pub fn format_params(params: &ParameterSet) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(", ")
}
