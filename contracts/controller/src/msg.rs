use cosmwasm_std::{Addr, Binary};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub registry_address: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    MintUri {
        owner: String,
        label: String,
    },
    SafeMintUri {
        owner: String,
        label: String,
        data: Binary,
    },
    MintSubUri {
        owner: String,
        node: Vec<u8>,
        label: String,
    },
    SafeMintSubUri {
        owner: String,
        node: Vec<u8>,
        label: String,
        data: Binary,
    },
    BurnSubUri {
        node: Vec<u8>,
        label: String,
    },

    // Only owner
    AddMinter {
        address: String,
    },
    RemoveMinter {
        address: String,
    },
    SetConfig {
        registry_address: String,
        owner: String,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Owner {},
    Registry {},
    IsMinter {
        address: String,
    },
    IsValidLabel {
        label: String,
    },
    GetTokenId {
        label: String,
    },
    GetNodehash {
        name: String,
    },
    GetConfig {},
}

// We define a custom struct for each query response
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RegistryResponse {
    pub registry_address: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct IsMinterResponse {
    pub is_minter: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct IsValidLabelResponse {
    pub is_valid_label: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TokenIdResponse {
    pub token_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct NodehashResponse {
    pub node: Vec<u8>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub registry_address: Addr,
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
