//! @acp:module "Template Placeholders"
//! @acp:summary "Placeholder tokens, the parameters that feed them, and their defaults"
//! @acp:domain template
//! @acp:layer model

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// A `{{TOKEN}}` marker that templates may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    /// Token name as written between the braces
    pub token: &'static str,
    /// ParameterSet key supplying the value
    pub param: &'static str,
    /// Value used when the parameter is absent
    pub default: &'static str,
}

/// Every placeholder a template may use. Adding a token here is the only way
/// to make it legal in a template.
pub static PLACEHOLDERS: &[Placeholder] = &[
    Placeholder { token: "NAME", param: "name", default: "Contract" },
    Placeholder { token: "TOKEN_NAME", param: "name", default: "Token" },
    Placeholder { token: "SYMBOL", param: "symbol", default: "TKN" },
    Placeholder { token: "SUPPLY", param: "supply", default: "1000000" },
    Placeholder { token: "MAX_SUPPLY", param: "maxSupply", default: "10000" },
    Placeholder { token: "MINT_PRICE", param: "mintPrice", default: "0.01" },
    Placeholder { token: "LOCK_DAYS", param: "lockDays", default: "30" },
    Placeholder { token: "REWARD_RATE", param: "rewardRate", default: "1000000000000" },
];

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap());

/// Look up a placeholder by token name
pub fn lookup(token: &str) -> Option<&'static Placeholder> {
    PLACEHOLDERS.iter().find(|p| p.token == token)
}

/// Distinct simple `{{TOKEN}}` names referenced by a template, in sorted order
pub fn scan_tokens(template: &str) -> BTreeSet<String> {
    TOKEN_PATTERN
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}
