use cosmwasm_std::CanonicalAddr;
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub registry_address: CanonicalAddr,
    pub owner: CanonicalAddr,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");

pub const MINTERS: Map<Vec<u8>, bool> = Map::new("MINTERS");
