use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::CanonicalAddr;
use cw_storage_plus::{Item, Map};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub registry_address: CanonicalAddr,
    pub owner: CanonicalAddr,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");

pub const RECORDS: Map<(Vec<u8>, String), String> = Map::new("RECORDS");

// Per-node key index in first-write order; Map iteration is lexicographic,
// so the order of appearance has to be tracked explicitly.
pub const KEYS: Map<Vec<u8>, Vec<String>> = Map::new("KEYS");
