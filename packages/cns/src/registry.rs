use cosmwasm_std::{Addr, Binary};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    /// Top-level suffix every minted name hangs under, e.g. "cfx".
    pub base_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    GrantMinterRole {
        address: String,
    },
    RevokeMinterRole {
        address: String,
    },
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
    TransferUri {
        from: String,
        to: String,
        label: String,
    },
    TransferSubUri {
        from: String,
        to: String,
        parent_label: String,
        label: String,
    },
    SetResolver {
        node: Vec<u8>,
        resolver: Option<String>,
    },
    SetApprovalForAll {
        operator: String,
        approved: bool,
    },
    SetConfig {
        owner: String,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    OwnerOf { node: Vec<u8> },
    ResolverOf { node: Vec<u8> },
    TokenUri { node: Vec<u8> },
    Root {},
    ContractInfo {},
    HasMinterRole { address: String },
    GetIsNodeOwner { node: Vec<u8>, address: String },
    GetIsApprovedForAll { owner: String, operator: String },
    GetConfig {},
}

// We define a custom struct for each query response
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ResolverResponse {
    pub resolver: Option<Addr>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TokenUriResponse {
    pub token_uri: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RootResponse {
    pub root: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct HasMinterRoleResponse {
    pub has_role: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OperatorResponse {
    pub is_approve: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub name: String,
    pub symbol: String,
    pub base_name: String,
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
