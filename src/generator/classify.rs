//! @acp:module "Classifier"
//! @acp:summary "Ordered keyword rules mapping a prompt to one archetype"
//! @acp:domain generator
//! @acp:layer logic
//!
//! Rules are evaluated top to bottom against the lower-cased prompt and the
//! first match wins. The order is the tie-break policy: a prompt mentioning
//! both a token supply and a vote is an ERC-20, not a voting contract.

use std::fmt;

use crate::archetype::Archetype;

/// One classification rule.
///
/// `clauses` is a disjunction of conjunctions: the rule matches when every
/// keyword of at least one clause appears in the prompt.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub archetype: Archetype,
    pub clauses: &'static [&'static [&'static str]],
}

impl Rule {
    /// Check the rule against already lower-cased text
    pub fn matches(&self, lower: &str) -> bool {
        self.clauses
            .iter()
            .any(|clause| clause.iter().all(|keyword| lower.contains(keyword)))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clauses: Vec<String> = self
            .clauses
            .iter()
            .map(|clause| {
                let words: Vec<String> = clause.iter().map(|w| format!("\"{}\"", w)).collect();
                if words.len() > 1 {
                    format!("({})", words.join(" AND "))
                } else {
                    words.join("")
                }
            })
            .collect();
        write!(f, "{} <- {}", self.archetype, clauses.join(" OR "))
    }
}

static RULES: &[Rule] = &[
    Rule {
        archetype: Archetype::Erc20,
        clauses: &[&["erc20"], &["token", "supply"]],
    },
    Rule {
        archetype: Archetype::Erc721,
        clauses: &[&["nft"], &["erc721"], &["collectible"]],
    },
    Rule {
        archetype: Archetype::Timelock,
        clauses: &[&["timelock"], &["lock", "release"]],
    },
    Rule {
        archetype: Archetype::Voting,
        clauses: &[&["voting"], &["vote"], &["dao"], &["proposal"]],
    },
    Rule {
        archetype: Archetype::Multisig,
        clauses: &[&["multisig"], &["multi-sig"], &["multiple signatures"]],
    },
    Rule {
        archetype: Archetype::Staking,
        clauses: &[&["staking"], &["stake"]],
    },
];

/// The classification rules in priority order
pub fn rules() -> &'static [Rule] {
    RULES
}

/// Assign exactly one archetype to a prompt, `Custom` when no rule matches
pub fn classify(prompt: &str) -> Archetype {
    let lower = prompt.to_lowercase();
    let archetype = RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .map(|rule| rule.archetype)
        .unwrap_or(Archetype::Custom);

    tracing::debug!("Classified prompt as {}", archetype);
    archetype
}
