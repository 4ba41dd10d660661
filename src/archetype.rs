//! @acp:module "Archetypes"
//! @acp:summary "Fixed taxonomy of contract families the generator understands"
//! @acp:domain generator
//! @acp:layer model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ForgeError;

/// Contract family assigned to a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Erc20,
    Erc721,
    Timelock,
    Voting,
    Multisig,
    Staking,
    /// No archetype recognized
    Custom,
}

impl Archetype {
    /// Get all archetypes, `Custom` last
    pub fn all() -> &'static [Archetype] {
        &[
            Archetype::Erc20,
            Archetype::Erc721,
            Archetype::Timelock,
            Archetype::Voting,
            Archetype::Multisig,
            Archetype::Staking,
            Archetype::Custom,
        ]
    }

    /// Archetypes that have a source template
    pub fn templated() -> &'static [Archetype] {
        &Self::all()[..6]
    }

    /// Get the wire tag (`erc20`, `multisig`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Erc20 => "erc20",
            Archetype::Erc721 => "erc721",
            Archetype::Timelock => "timelock",
            Archetype::Voting => "voting",
            Archetype::Multisig => "multisig",
            Archetype::Staking => "staking",
            Archetype::Custom => "custom",
        }
    }

    /// Get the human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::Erc20 => "ERC-20 Token",
            Archetype::Erc721 => "NFT Collection",
            Archetype::Timelock => "Timelock",
            Archetype::Voting => "Voting DAO",
            Archetype::Multisig => "MultiSig Wallet",
            Archetype::Staking => "Staking Pool",
            Archetype::Custom => "Custom",
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Archetype::Custom)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "erc20" | "erc-20" | "token" => Ok(Archetype::Erc20),
            "erc721" | "erc-721" | "nft" => Ok(Archetype::Erc721),
            "timelock" => Ok(Archetype::Timelock),
            "voting" | "dao" => Ok(Archetype::Voting),
            "multisig" | "multi-sig" => Ok(Archetype::Multisig),
            "staking" => Ok(Archetype::Staking),
            "custom" => Ok(Archetype::Custom),
            _ => Err(ForgeError::UnknownArchetype(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archetype_wire_tags() {
        assert_eq!(Archetype::Erc20.to_string(), "erc20");
        assert_eq!(Archetype::Multisig.as_str(), "multisig");
        assert_eq!(
            serde_json::to_string(&Archetype::Erc721).unwrap(),
            "\"erc721\""
        );
    }

    #[test]
    fn test_archetype_from_str() {
        assert_eq!("ERC-20".parse::<Archetype>().unwrap(), Archetype::Erc20);
        assert_eq!("nft".parse::<Archetype>().unwrap(), Archetype::Erc721);
        assert!("lottery".parse::<Archetype>().is_err());
    }

    #[test]
    fn test_templated_excludes_custom() {
        assert_eq!(Archetype::templated().len(), 6);
        assert!(!Archetype::templated().contains(&Archetype::Custom));
    }
}
