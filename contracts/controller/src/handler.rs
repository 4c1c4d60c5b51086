use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, IsMinterResponse, IsValidLabelResponse, NodehashResponse, OwnerResponse,
    RegistryResponse, TokenIdResponse,
};
use crate::state::{CONFIG, MINTERS};
use cns::registry::ExecuteMsg as RegistryExecuteMsg;
use cns::utils::{label_hash, namehash, node_to_hex, token_id_from_label};
use cosmwasm_std::{
    to_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response, StdResult, WasmMsg,
};
use unicode_segmentation::UnicodeSegmentation;

fn only_owner(deps: Deps, info: &MessageInfo) -> Result<bool, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if sender != config.owner {
        return Err(ContractError::NotOwner {
            sender: info.sender.to_string(),
            owner: deps.api.addr_humanize(&config.owner)?.to_string(),
        });
    }
    Ok(true)
}

// The config owner administers the allow-list and is always authorized.
fn only_minter(deps: Deps, info: &MessageInfo) -> Result<bool, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if sender == config.owner {
        return Ok(true);
    }
    let approved = MINTERS
        .may_load(deps.storage, sender.to_vec())?
        .unwrap_or(false);
    if !approved {
        return Err(ContractError::Unauthorized {
            sender: info.sender.to_string(),
        });
    }
    Ok(true)
}

fn validate_label(label: &String) -> Result<(), ContractError> {
    if !get_is_valid_label(label)?.is_valid_label {
        return Err(ContractError::InvalidLabel {
            label: label.clone(),
        });
    }
    Ok(())
}

fn registry_execute_msg(
    deps: Deps,
    msg: &RegistryExecuteMsg,
) -> Result<CosmosMsg, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let registry_address = deps
        .api
        .addr_humanize(&config.registry_address)?
        .to_string();
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: registry_address,
        msg: to_binary(msg)?,
        funds: vec![],
    }))
}

pub fn add_minter(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let canonical = deps.api.addr_canonicalize(address.as_str())?;
    MINTERS.save(deps.storage, canonical.to_vec(), &true)?;
    Ok(Response::new()
        .add_attribute("method", "add_minter")
        .add_attribute("address", address))
}

pub fn remove_minter(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let canonical = deps.api.addr_canonicalize(address.as_str())?;
    MINTERS.remove(deps.storage, canonical.to_vec());
    Ok(Response::new()
        .add_attribute("method", "remove_minter")
        .add_attribute("address", address))
}

pub fn mint_uri(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: String,
    label: String,
) -> Result<Response, ContractError> {
    only_minter(deps.as_ref(), &info)?;
    validate_label(&label)?;

    let mint_registry_msg = registry_execute_msg(
        deps.as_ref(),
        &RegistryExecuteMsg::MintUri {
            owner: owner.clone(),
            label: label.clone(),
        },
    )?;

    Ok(Response::new()
        .add_message(mint_registry_msg)
        .add_attribute("method", "mint_uri")
        .add_attribute("owner", owner)
        .add_attribute("label", label))
}

pub fn safe_mint_uri(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: String,
    label: String,
    data: Binary,
) -> Result<Response, ContractError> {
    only_minter(deps.as_ref(), &info)?;
    validate_label(&label)?;

    let mint_registry_msg = registry_execute_msg(
        deps.as_ref(),
        &RegistryExecuteMsg::SafeMintUri {
            owner: owner.clone(),
            label: label.clone(),
            data,
        },
    )?;

    Ok(Response::new()
        .add_message(mint_registry_msg)
        .add_attribute("method", "safe_mint_uri")
        .add_attribute("owner", owner)
        .add_attribute("label", label))
}

pub fn mint_sub_uri(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: String,
    node: Vec<u8>,
    label: String,
) -> Result<Response, ContractError> {
    only_minter(deps.as_ref(), &info)?;
    validate_label(&label)?;

    let mint_registry_msg = registry_execute_msg(
        deps.as_ref(),
        &RegistryExecuteMsg::MintSubUri {
            owner: owner.clone(),
            node: node.clone(),
            label: label.clone(),
        },
    )?;

    Ok(Response::new()
        .add_message(mint_registry_msg)
        .add_attribute("method", "mint_sub_uri")
        .add_attribute("owner", owner)
        .add_attribute("node", node_to_hex(&node))
        .add_attribute("label", label))
}

pub fn safe_mint_sub_uri(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: String,
    node: Vec<u8>,
    label: String,
    data: Binary,
) -> Result<Response, ContractError> {
    only_minter(deps.as_ref(), &info)?;
    validate_label(&label)?;

    let mint_registry_msg = registry_execute_msg(
        deps.as_ref(),
        &RegistryExecuteMsg::SafeMintSubUri {
            owner: owner.clone(),
            node: node.clone(),
            label: label.clone(),
            data,
        },
    )?;

    Ok(Response::new()
        .add_message(mint_registry_msg)
        .add_attribute("method", "safe_mint_sub_uri")
        .add_attribute("owner", owner)
        .add_attribute("node", node_to_hex(&node))
        .add_attribute("label", label))
}

pub fn burn_sub_uri(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    label: String,
) -> Result<Response, ContractError> {
    only_minter(deps.as_ref(), &info)?;

    let burn_registry_msg = registry_execute_msg(
        deps.as_ref(),
        &RegistryExecuteMsg::BurnSubUri {
            node: node.clone(),
            label: label.clone(),
        },
    )?;

    Ok(Response::new()
        .add_message(burn_registry_msg)
        .add_attribute("method", "burn_sub_uri")
        .add_attribute("node", node_to_hex(&node))
        .add_attribute("label", label))
}

pub fn set_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    registry_address: String,
    owner: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;

    let registry_address = deps.api.addr_canonicalize(registry_address.as_str())?;
    let owner = deps.api.addr_canonicalize(owner.as_str())?;

    config.registry_address = registry_address.clone();
    config.owner = owner.clone();

    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_config")
        .add_attribute("registry_address", registry_address.to_string())
        .add_attribute("owner", owner.to_string()))
}

pub fn get_is_valid_label(label: &String) -> StdResult<IsValidLabelResponse> {
    let graphemes = label.graphemes(true).collect::<Vec<&str>>();
    let name_length = graphemes.len();
    if name_length == 0 || graphemes[0usize] == "-" {
        return Ok(IsValidLabelResponse {
            is_valid_label: false,
        });
    }
    let is_valid_label = name_length >= 3
        && label.chars().all(|c| -> bool {
            match c {
                '0'..='9' => true,
                'a'..='z' => true,
                '-' => true,
                _ => false,
            }
        });
    Ok(IsValidLabelResponse { is_valid_label })
}

pub fn get_token_id_from_label(label: &String) -> StdResult<TokenIdResponse> {
    Ok(TokenIdResponse {
        token_id: token_id_from_label(&label_hash(label)),
    })
}

pub fn get_nodehash_from_name(name: &String) -> StdResult<NodehashResponse> {
    Ok(NodehashResponse {
        node: namehash(name),
    })
}

pub fn get_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let config = CONFIG.load(deps.storage)?;
    let owner = deps.api.addr_humanize(&config.owner)?;
    Ok(OwnerResponse { owner })
}

pub fn get_registry(deps: Deps) -> StdResult<RegistryResponse> {
    let config = CONFIG.load(deps.storage)?;
    let registry_address = deps.api.addr_humanize(&config.registry_address)?;
    Ok(RegistryResponse { registry_address })
}

pub fn get_is_minter(deps: Deps, address: String) -> StdResult<IsMinterResponse> {
    let canonical = deps.api.addr_canonicalize(&address)?;
    let is_minter = MINTERS
        .may_load(deps.storage, canonical.to_vec())?
        .unwrap_or(false);
    Ok(IsMinterResponse { is_minter })
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let owner = deps.api.addr_humanize(&config.owner)?;
    let registry_address = deps.api.addr_humanize(&config.registry_address)?;
    Ok(ConfigResponse {
        registry_address,
        owner,
    })
}
