//! @acp:module "Parameter Extractor"
//! @acp:summary "Archetype-specific heuristics pulling template parameters out of a prompt"
//! @acp:domain generator
//! @acp:layer logic
//!
//! Every parameter has a default, so extraction never fails. A pattern that
//! matches text which cannot be parsed as a number counts as no match.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::number::{parse_decimal, parse_integer, parse_scaled, Magnitude};
use super::params::{ParamValue, ParameterSet};
use crate::archetype::Archetype;

pub const DEFAULT_TOKEN_NAME: &str = "MyToken";
pub const DEFAULT_NFT_NAME: &str = "MyNFT";
pub const DEFAULT_SUPPLY: u64 = 1_000_000;
pub const DEFAULT_MAX_SUPPLY: u64 = 10_000;
pub const DEFAULT_MINT_PRICE: f64 = 0.01;
pub const DEFAULT_LOCK_DAYS: u64 = 30;
pub const DEFAULT_REQUIRED: u64 = 2;
pub const TIMELOCK_NAME: &str = "TimeLock";
pub const VOTING_NAME: &str = "VotingContract";
pub const MULTISIG_NAME: &str = "MultiSigWallet";
pub const STAKING_NAME: &str = "StakingPool";
/// 0.000001 tokens per second at 18 decimals
pub const STAKING_REWARD_RATE: &str = "1000000000000";

/// "called MantleGold", "call 'Vault'"
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bcall(?:ed)?\s+["']?(\w+)["']?"#).unwrap());

static SYMBOL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bsymbol\b\s*[:=]?\s*["']?(\w+)["']?"#).unwrap());

/// "1 million supply", "1,500,000 total supply"
static SUPPLY_BEFORE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d+(?:,\d+)*(?:\.\d+)?)\s*(?:(million|thousand|m|k)\b\s*)?(?:(?:total|max)\s+)?supply",
    )
    .unwrap()
});

/// "supply of 2 million", "supply: 500k"
static SUPPLY_AFTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bsupply\s*(?:of|:|=)?\s*(\d+(?:,\d+)*(?:\.\d+)?)(?:\s*(million|thousand|m|k)\b)?")
        .unwrap()
});

/// "10000 max supply"
static MAX_SUPPLY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+(?:,\d{3})*)\s*(?:max(?:imum)?\s+)?supply").unwrap()
});

/// "max supply of 500", "supply: 2,000"
static MAX_SUPPLY_AFTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bsupply\s*(?:of|:|=)?\s*(\d+(?:,\d{3})*)\b").unwrap()
});

static PRICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s*(?:ethereum|ether|eth|mnt)\b").unwrap()
});

static DAYS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:,\d{3})*)\s*days?\b").unwrap());

/// "2 of 3", "2-of-3", "3 out of 5"
static THRESHOLD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)[\s-]*(?:out\s+of|of)[\s-]*(\d+)").unwrap());

/// How far from the matched supply number magnitude words are looked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitScope {
    /// Only a unit inside the matched supply phrase counts
    #[default]
    Adjacent,
    /// Any "million"/" m " and "thousand"/" k " in the prompt counts, both may apply
    Prompt,
}

impl std::str::FromStr for UnitScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "adjacent" => Ok(UnitScope::Adjacent),
            "prompt" => Ok(UnitScope::Prompt),
            _ => Err(format!("Unknown unit scope: {}", s)),
        }
    }
}

/// Extracts a [`ParameterSet`] for a given archetype
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    unit_scope: UnitScope,
}

impl Extractor {
    pub fn new(unit_scope: UnitScope) -> Self {
        Self { unit_scope }
    }

    /// Build the parameter set for `archetype`, defaulting anything not found
    pub fn extract(&self, prompt: &str, archetype: Archetype) -> ParameterSet {
        let mut params = ParameterSet::new();

        match archetype {
            Archetype::Erc20 => {
                let name = capture_word(&NAME_PATTERN, prompt)
                    .unwrap_or_else(|| DEFAULT_TOKEN_NAME.to_string());
                let symbol = capture_word(&SYMBOL_PATTERN, prompt)
                    .unwrap_or_else(|| derive_symbol(&name));
                let supply = self
                    .token_supply(prompt)
                    .unwrap_or(ParamValue::Integer(DEFAULT_SUPPLY));
                params.insert("name", name);
                params.insert("symbol", symbol);
                params.insert("supply", supply);
            }
            Archetype::Erc721 => {
                let name = capture_word(&NAME_PATTERN, prompt)
                    .unwrap_or_else(|| DEFAULT_NFT_NAME.to_string());
                let max_supply = capture_integer(&MAX_SUPPLY_PATTERN, prompt)
                    .or_else(|| capture_integer(&MAX_SUPPLY_AFTER_PATTERN, prompt))
                    .unwrap_or(DEFAULT_MAX_SUPPLY);
                let mint_price = PRICE_PATTERN
                    .captures(prompt)
                    .and_then(|caps| parse_decimal(&caps[1]))
                    .unwrap_or(ParamValue::Decimal(DEFAULT_MINT_PRICE));
                params.insert("symbol", derive_symbol(&name));
                params.insert("name", name);
                params.insert("maxSupply", max_supply);
                params.insert("mintPrice", mint_price);
            }
            Archetype::Timelock => {
                params.insert("name", TIMELOCK_NAME);
                params.insert(
                    "lockDays",
                    capture_integer(&DAYS_PATTERN, prompt).unwrap_or(DEFAULT_LOCK_DAYS),
                );
            }
            Archetype::Voting => {
                params.insert("name", VOTING_NAME);
            }
            Archetype::Multisig => {
                params.insert("name", MULTISIG_NAME);
                params.insert(
                    "required",
                    capture_integer(&THRESHOLD_PATTERN, prompt).unwrap_or(DEFAULT_REQUIRED),
                );
            }
            Archetype::Staking => {
                params.insert("name", STAKING_NAME);
                params.insert("rewardRate", STAKING_REWARD_RATE);
            }
            Archetype::Custom => {}
        }

        tracing::debug!("Extracted {} parameters for {}: {:?}", params.len(), archetype, params);
        params
    }

    fn token_supply(&self, prompt: &str) -> Option<ParamValue> {
        let caps = SUPPLY_BEFORE_PATTERN
            .captures(prompt)
            .or_else(|| SUPPLY_AFTER_PATTERN.captures(prompt))?;

        let factor = match self.unit_scope {
            UnitScope::Adjacent => adjacent_factor(&caps),
            UnitScope::Prompt => prompt_factor(prompt),
        };

        parse_scaled(&caps[1], factor)
    }
}

/// Extract parameters with the default [`UnitScope::Adjacent`] policy
pub fn extract(prompt: &str, archetype: Archetype) -> ParameterSet {
    Extractor::default().extract(prompt, archetype)
}

fn adjacent_factor(caps: &Captures<'_>) -> u64 {
    caps.get(2)
        .and_then(|unit| Magnitude::from_unit(unit.as_str()))
        .map(|m| m.factor())
        .unwrap_or(1)
}

fn prompt_factor(prompt: &str) -> u64 {
    let lower = prompt.to_lowercase();
    let mut factor = 1;
    if lower.contains("million") || lower.contains(" m ") {
        factor *= Magnitude::Million.factor();
    }
    if lower.contains("thousand") || lower.contains(" k ") {
        factor *= Magnitude::Thousand.factor();
    }
    factor
}

fn capture_word(pattern: &Regex, prompt: &str) -> Option<String> {
    pattern.captures(prompt).map(|caps| caps[1].to_string())
}

fn capture_integer(pattern: &Regex, prompt: &str) -> Option<u64> {
    pattern
        .captures(prompt)
        .and_then(|caps| parse_integer(&caps[1]))
}

/// First four characters of the name, upper-cased
fn derive_symbol(name: &str) -> String {
    name.chars().take(4).collect::<String>().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supply_of(prompt: &str, scope: UnitScope) -> Option<ParamValue> {
        Extractor::new(scope)
            .extract(prompt, Archetype::Erc20)
            .get("supply")
            .cloned()
    }

    #[test]
    fn test_erc20_name_symbol_supply() {
        let params = extract(
            "Create an ERC-20 token called MantleGold with 1 million supply",
            Archetype::Erc20,
        );
        assert_eq!(params.get_str("name"), Some("MantleGold"));
        assert_eq!(params.get_str("symbol"), Some("MANT"));
        assert_eq!(params.get("supply"), Some(&ParamValue::Integer(1_000_000)));
    }

    #[test]
    fn test_erc20_explicit_symbol() {
        let params = extract(
            "A token called 'Mantle' with symbol MNTL and 500 supply",
            Archetype::Erc20,
        );
        assert_eq!(params.get_str("name"), Some("Mantle"));
        assert_eq!(params.get_str("symbol"), Some("MNTL"));
        assert_eq!(params.get("supply"), Some(&ParamValue::Integer(500)));
    }

    #[test]
    fn test_erc20_defaults() {
        let params = extract("erc20 please", Archetype::Erc20);
        assert_eq!(params.get_str("name"), Some(DEFAULT_TOKEN_NAME));
        assert_eq!(params.get_str("symbol"), Some("MYTO"));
        assert_eq!(params.get("supply"), Some(&ParamValue::Integer(DEFAULT_SUPPLY)));
    }

    #[test]
    fn test_supply_units_and_separators() {
        let scope = UnitScope::Adjacent;
        assert_eq!(
            supply_of("token with a supply of 2 million", scope),
            Some(ParamValue::Integer(2_000_000))
        );
        assert_eq!(
            supply_of("token with 1,500,000 supply", scope),
            Some(ParamValue::Integer(1_500_000))
        );
        assert_eq!(
            supply_of("token with 250k total supply", scope),
            Some(ParamValue::Integer(250_000))
        );
        assert_eq!(
            supply_of("token with 2.5 million supply", scope),
            Some(ParamValue::Integer(2_500_000))
        );
    }

    #[test]
    fn test_supply_abbreviated_units() {
        assert_eq!(
            supply_of("token with 1m supply", UnitScope::Adjacent),
            Some(ParamValue::Integer(1_000_000))
        );
        assert_eq!(
            supply_of("token with 2 m supply", UnitScope::Prompt),
            Some(ParamValue::Integer(2_000_000))
        );
        assert_eq!(
            supply_of("token, 40 supply, about 1 k holders", UnitScope::Prompt),
            Some(ParamValue::Integer(40_000))
        );
    }

    #[test]
    fn test_fractional_supply_scales_exactly() {
        assert_eq!(
            supply_of("token with 1.005k supply", UnitScope::Adjacent),
            Some(ParamValue::Integer(1_005))
        );
    }

    #[test]
    fn test_archetype_digits_are_not_amounts() {
        assert_eq!(
            supply_of("Create an ERC20 total supply of 5 million", UnitScope::Adjacent),
            Some(ParamValue::Integer(5_000_000))
        );

        let params = extract("Launch an ERC721 max supply of 500 at 0.1 eth", Archetype::Erc721);
        assert_eq!(params.get("maxSupply"), Some(&ParamValue::Integer(500)));
        assert_eq!(params.get("mintPrice"), Some(&ParamValue::Decimal(0.1)));
    }

    #[test]
    fn test_unit_scope_adjacent_ignores_stray_units() {
        let prompt = "10 tokens, million-dollar idea, 500 supply";
        assert_eq!(
            supply_of(prompt, UnitScope::Adjacent),
            Some(ParamValue::Integer(500))
        );
        assert_eq!(
            supply_of(prompt, UnitScope::Prompt),
            Some(ParamValue::Integer(500_000_000))
        );
    }

    #[test]
    fn test_unit_scope_prompt_applies_both_multipliers() {
        assert_eq!(
            supply_of("a million thanks, 3 thousand supply token", UnitScope::Prompt),
            Some(ParamValue::Integer(3_000_000_000))
        );
    }

    #[test]
    fn test_supply_overflow_falls_back_to_default() {
        assert_eq!(
            supply_of("token with 99999999999999999999 million supply", UnitScope::Adjacent),
            Some(ParamValue::Integer(DEFAULT_SUPPLY))
        );
    }

    #[test]
    fn test_erc721_parameters() {
        let params = extract(
            "Build an NFT collection called MantleApes with 10000 max supply and 0.05 MNT mint price",
            Archetype::Erc721,
        );
        assert_eq!(params.get_str("name"), Some("MantleApes"));
        assert_eq!(params.get_str("symbol"), Some("MANT"));
        assert_eq!(params.get("maxSupply"), Some(&ParamValue::Integer(10_000)));
        assert_eq!(params.get("mintPrice"), Some(&ParamValue::Decimal(0.05)));
    }

    #[test]
    fn test_erc721_defaults() {
        let params = extract("an nft drop", Archetype::Erc721);
        assert_eq!(params.get_str("name"), Some(DEFAULT_NFT_NAME));
        assert_eq!(params.get_str("symbol"), Some("MYNF"));
        assert_eq!(params.get("maxSupply"), Some(&ParamValue::Integer(DEFAULT_MAX_SUPPLY)));
        assert_eq!(params.get("mintPrice"), Some(&ParamValue::Decimal(DEFAULT_MINT_PRICE)));
    }

    #[test]
    fn test_erc721_separated_max_supply() {
        let params = extract("nft with 5,000 max supply at 1 ETH", Archetype::Erc721);
        assert_eq!(params.get("maxSupply"), Some(&ParamValue::Integer(5_000)));
        assert_eq!(params.get("mintPrice"), Some(&ParamValue::Integer(1)));
    }

    #[test]
    fn test_timelock_days() {
        let params = extract(
            "Create a timelock contract that releases funds after 90 days",
            Archetype::Timelock,
        );
        assert_eq!(params.get_str("name"), Some(TIMELOCK_NAME));
        assert_eq!(params.get("lockDays"), Some(&ParamValue::Integer(90)));

        let params = extract("timelock", Archetype::Timelock);
        assert_eq!(params.get("lockDays"), Some(&ParamValue::Integer(DEFAULT_LOCK_DAYS)));
    }

    #[test]
    fn test_multisig_threshold() {
        let params = extract("Create a 2 of 3 multisig wallet", Archetype::Multisig);
        assert_eq!(params.get("required"), Some(&ParamValue::Integer(2)));
        assert_eq!(params.get_str("name"), Some(MULTISIG_NAME));

        let params = extract("multisig needing 3 out of 5 owners", Archetype::Multisig);
        assert_eq!(params.get("required"), Some(&ParamValue::Integer(3)));

        let params = extract("multisig", Archetype::Multisig);
        assert_eq!(params.get("required"), Some(&ParamValue::Integer(DEFAULT_REQUIRED)));
    }

    #[test]
    fn test_fixed_literal_archetypes() {
        let params = extract("Build a staking pool contract", Archetype::Staking);
        assert_eq!(params.get_str("name"), Some(STAKING_NAME));
        assert_eq!(params.get_str("rewardRate"), Some(STAKING_REWARD_RATE));

        let params = extract("a dao", Archetype::Voting);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get_str("name"), Some(VOTING_NAME));
    }

    #[test]
    fn test_custom_has_no_parameters() {
        assert!(extract("make me a contract", Archetype::Custom).is_empty());
    }

    #[test]
    fn test_unit_scope_from_str() {
        assert_eq!("PROMPT".parse::<UnitScope>(), Ok(UnitScope::Prompt));
        assert!("nearby".parse::<UnitScope>().is_err());
    }
}
