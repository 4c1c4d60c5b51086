use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::CanonicalAddr;
use cw_storage_plus::{Item, Map};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub name: String,
    pub symbol: String,
    pub base_name: String,
    pub base_node: Vec<u8>,
    pub owner: CanonicalAddr,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Record {
    pub owner: CanonicalAddr,
    pub resolver: Option<CanonicalAddr>,
    pub token_uri: String,
}

pub const RECORDS: Map<Vec<u8>, Record> = Map::new("RECORDS");

pub const MINTERS: Map<Vec<u8>, bool> = Map::new("MINTERS");

pub const OPERATORS: Map<(Vec<u8>, Vec<u8>), bool> = Map::new("OPERATORS");

// Token URI of the safe mint currently in flight, read back by the
// failure reply for diagnostics.
pub const PENDING_SAFE_MINT: Item<String> = Item::new("PENDING_SAFE_MINT");
