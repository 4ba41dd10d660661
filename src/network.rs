//! @acp:module "Networks"
//! @acp:summary "Static Mantle network metadata exposed to clients"
//! @acp:domain network
//! @acp:layer model

use serde::Serialize;
use std::collections::BTreeMap;

/// Public metadata for one Mantle network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub chain_id: u64,
    pub name: &'static str,
    pub rpc: &'static str,
    pub explorer: &'static str,
    pub currency: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faucet: Option<&'static str>,
}

static NETWORKS: &[(&str, Network)] = &[
    (
        "mainnet",
        Network {
            chain_id: 5000,
            name: "Mantle",
            rpc: "https://rpc.mantle.xyz",
            explorer: "https://explorer.mantle.xyz",
            currency: "MNT",
            faucet: None,
        },
    ),
    (
        "sepolia",
        Network {
            chain_id: 5003,
            name: "Mantle Sepolia",
            rpc: "https://rpc.sepolia.mantle.xyz",
            explorer: "https://explorer.sepolia.mantle.xyz",
            currency: "MNT",
            faucet: Some("https://faucet.sepolia.mantle.xyz"),
        },
    ),
];

/// Look up a network by key (`mainnet`, `sepolia`)
pub fn lookup(name: &str) -> Option<&'static Network> {
    let name = name.to_lowercase();
    NETWORKS.iter().find(|(key, _)| *key == name).map(|(_, n)| n)
}

pub fn names() -> Vec<&'static str> {
    NETWORKS.iter().map(|(key, _)| *key).collect()
}

/// All networks keyed by name
pub fn all() -> BTreeMap<&'static str, Network> {
    NETWORKS.iter().copied().collect()
}
