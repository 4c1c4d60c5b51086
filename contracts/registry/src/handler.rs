use crate::error::ContractError;
use crate::state::{Record, CONFIG, MINTERS, OPERATORS, PENDING_SAFE_MINT, RECORDS};
use cns::registry::{
    ConfigResponse, HasMinterRoleResponse, OperatorResponse, OwnerResponse, ResolverResponse,
    RootResponse, TokenUriResponse,
};
use cns::utils::{label_hash, node_to_hex, subnode, token_id_from_label};
use cosmwasm_std::{
    Binary, CanonicalAddr, Deps, DepsMut, Env, MessageInfo, Response, StdResult, SubMsg,
};
use cw0::maybe_addr;
use cw721::{ContractInfoResponse, Cw721ReceiveMsg};

pub const SAFE_MINT_REPLY_ID: u64 = 1;

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

fn only_minter(deps: Deps, info: &MessageInfo, uri: &str) -> Result<bool, ContractError> {
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    let granted = MINTERS
        .may_load(deps.storage, sender.to_vec())?
        .unwrap_or(false);
    if !granted {
        return Err(ContractError::Unauthorized {
            sender: info.sender.to_string(),
            uri: uri.to_string(),
        });
    }
    Ok(true)
}

fn has_node_authority(deps: Deps, sender: &CanonicalAddr, record: &Record) -> StdResult<bool> {
    if record.owner == *sender {
        return Ok(true);
    }
    let operator = OPERATORS.may_load(
        deps.storage,
        (record.owner.to_vec(), sender.to_vec()),
    )?;
    Ok(operator.unwrap_or(false))
}

fn check_node_authority(
    deps: Deps,
    info: &MessageInfo,
    record: &Record,
) -> Result<(), ContractError> {
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if has_node_authority(deps, &sender, record)? {
        return Ok(());
    }
    Err(ContractError::Unauthorized {
        sender: info.sender.to_string(),
        uri: record.token_uri.clone(),
    })
}

// Sub names are created and burned under the parent's authority: its owner,
// an operator approved by that owner, or a holder of the minter grant.
fn check_sub_authority(
    deps: Deps,
    info: &MessageInfo,
    parent: &Record,
    uri: &str,
) -> Result<(), ContractError> {
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if has_node_authority(deps, &sender, parent)? {
        return Ok(());
    }
    let granted = MINTERS
        .may_load(deps.storage, sender.to_vec())?
        .unwrap_or(false);
    if granted {
        return Ok(());
    }
    Err(ContractError::Unauthorized {
        sender: info.sender.to_string(),
        uri: uri.to_string(),
    })
}

fn save_new_record(
    deps: DepsMut,
    node: Vec<u8>,
    owner: String,
    token_uri: String,
) -> Result<(), ContractError> {
    if RECORDS.may_load(deps.storage, node.clone())?.is_some() {
        return Err(ContractError::AlreadyMinted { uri: token_uri });
    }
    let owner = deps.api.addr_canonicalize(owner.as_str())?;
    RECORDS.save(
        deps.storage,
        node,
        &Record {
            owner,
            resolver: None,
            token_uri,
        },
    )?;
    Ok(())
}

fn receive_hook(
    deps: DepsMut,
    info: &MessageInfo,
    owner: String,
    token_id: String,
    token_uri: String,
    data: Binary,
) -> Result<SubMsg, ContractError> {
    PENDING_SAFE_MINT.save(deps.storage, &token_uri)?;
    let receive = Cw721ReceiveMsg {
        sender: info.sender.to_string(),
        token_id,
        msg: data,
    };
    Ok(SubMsg::reply_on_error(
        receive.into_cosmos_msg(owner)?,
        SAFE_MINT_REPLY_ID,
    ))
}

pub fn grant_minter_role(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let canonical = deps.api.addr_canonicalize(address.as_str())?;
    MINTERS.save(deps.storage, canonical.to_vec(), &true)?;
    Ok(Response::new()
        .add_attribute("method", "grant_minter_role")
        .add_attribute("address", address))
}

pub fn revoke_minter_role(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let canonical = deps.api.addr_canonicalize(address.as_str())?;
    MINTERS.remove(deps.storage, canonical.to_vec());
    Ok(Response::new()
        .add_attribute("method", "revoke_minter_role")
        .add_attribute("address", address))
}

pub fn mint_uri(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: String,
    label: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let token_uri = format!("{}.{}", label, config.base_name);
    only_minter(deps.as_ref(), &info, &token_uri)?;
    let node = subnode(&config.base_node, &label_hash(&label));
    save_new_record(deps, node.clone(), owner.clone(), token_uri.clone())?;
    Ok(Response::new()
        .add_attribute("method", "mint_uri")
        .add_attribute("owner", owner)
        .add_attribute("token_uri", token_uri)
        .add_attribute("node", node_to_hex(&node)))
}

pub fn safe_mint_uri(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: String,
    label: String,
    data: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let token_uri = format!("{}.{}", label, config.base_name);
    only_minter(deps.as_ref(), &info, &token_uri)?;
    let hash = label_hash(&label);
    let node = subnode(&config.base_node, &hash);
    save_new_record(deps.branch(), node.clone(), owner.clone(), token_uri.clone())?;
    let hook = receive_hook(
        deps,
        &info,
        owner.clone(),
        token_id_from_label(&hash),
        token_uri.clone(),
        data,
    )?;
    Ok(Response::new()
        .add_submessage(hook)
        .add_attribute("method", "safe_mint_uri")
        .add_attribute("owner", owner)
        .add_attribute("token_uri", token_uri)
        .add_attribute("node", node_to_hex(&node)))
}

pub fn mint_sub_uri(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: String,
    node: Vec<u8>,
    label: String,
) -> Result<Response, ContractError> {
    let parent = RECORDS
        .may_load(deps.storage, node.clone())?
        .ok_or_else(|| ContractError::ParentNotFound {
            node: node_to_hex(&node),
        })?;
    let token_uri = format!("{}.{}", label, parent.token_uri);
    check_sub_authority(deps.as_ref(), &info, &parent, &token_uri)?;
    let sub = subnode(&node, &label_hash(&label));
    save_new_record(deps, sub.clone(), owner.clone(), token_uri.clone())?;
    Ok(Response::new()
        .add_attribute("method", "mint_sub_uri")
        .add_attribute("owner", owner)
        .add_attribute("token_uri", token_uri)
        .add_attribute("node", node_to_hex(&sub)))
}

pub fn safe_mint_sub_uri(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: String,
    node: Vec<u8>,
    label: String,
    data: Binary,
) -> Result<Response, ContractError> {
    let parent = RECORDS
        .may_load(deps.storage, node.clone())?
        .ok_or_else(|| ContractError::ParentNotFound {
            node: node_to_hex(&node),
        })?;
    let token_uri = format!("{}.{}", label, parent.token_uri);
    check_sub_authority(deps.as_ref(), &info, &parent, &token_uri)?;
    let hash = label_hash(&label);
    let sub = subnode(&node, &hash);
    save_new_record(deps.branch(), sub.clone(), owner.clone(), token_uri.clone())?;
    let hook = receive_hook(
        deps,
        &info,
        owner.clone(),
        token_id_from_label(&hash),
        token_uri.clone(),
        data,
    )?;
    Ok(Response::new()
        .add_submessage(hook)
        .add_attribute("method", "safe_mint_sub_uri")
        .add_attribute("owner", owner)
        .add_attribute("token_uri", token_uri)
        .add_attribute("node", node_to_hex(&sub)))
}

pub fn burn_sub_uri(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    label: String,
) -> Result<Response, ContractError> {
    let sub = subnode(&node, &label_hash(&label));
    let record = RECORDS
        .may_load(deps.storage, sub.clone())?
        .ok_or_else(|| ContractError::NotFound {
            uri: node_to_hex(&sub),
        })?;
    let parent = RECORDS
        .may_load(deps.storage, node.clone())?
        .ok_or_else(|| ContractError::ParentNotFound {
            node: node_to_hex(&node),
        })?;
    check_sub_authority(deps.as_ref(), &info, &parent, &record.token_uri)?;
    RECORDS.remove(deps.storage, sub.clone());
    // Resolver rows keyed by the burned node are left in place; a re-mint
    // starts from a fresh resolver reference.
    Ok(Response::new()
        .add_attribute("method", "burn_sub_uri")
        .add_attribute("token_uri", record.token_uri)
        .add_attribute("node", node_to_hex(&sub)))
}

fn transfer(
    deps: DepsMut,
    info: &MessageInfo,
    node: Vec<u8>,
    from: String,
    to: String,
) -> Result<String, ContractError> {
    let mut record = RECORDS
        .may_load(deps.storage, node.clone())?
        .ok_or_else(|| ContractError::NotFound {
            uri: node_to_hex(&node),
        })?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    let from = deps.api.addr_canonicalize(from.as_str())?;
    if record.owner != from || !has_node_authority(deps.as_ref(), &sender, &record)? {
        return Err(ContractError::Unauthorized {
            sender: info.sender.to_string(),
            uri: record.token_uri,
        });
    }
    record.owner = deps.api.addr_canonicalize(to.as_str())?;
    RECORDS.save(deps.storage, node, &record)?;
    Ok(record.token_uri)
}

pub fn transfer_uri(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    from: String,
    to: String,
    label: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let node = subnode(&config.base_node, &label_hash(&label));
    let token_uri = transfer(deps, &info, node, from, to.clone())?;
    Ok(Response::new()
        .add_attribute("method", "transfer_uri")
        .add_attribute("new_owner", to)
        .add_attribute("token_uri", token_uri))
}

pub fn transfer_sub_uri(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    from: String,
    to: String,
    parent_label: String,
    label: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let parent = subnode(&config.base_node, &label_hash(&parent_label));
    let node = subnode(&parent, &label_hash(&label));
    let token_uri = transfer(deps, &info, node, from, to.clone())?;
    Ok(Response::new()
        .add_attribute("method", "transfer_sub_uri")
        .add_attribute("new_owner", to)
        .add_attribute("token_uri", token_uri))
}

pub fn set_resolver(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    resolver: Option<String>,
) -> Result<Response, ContractError> {
    let mut record = RECORDS
        .may_load(deps.storage, node.clone())?
        .ok_or_else(|| ContractError::NotFound {
            uri: node_to_hex(&node),
        })?;
    check_node_authority(deps.as_ref(), &info, &record)?;
    let resolver = maybe_addr(deps.api, resolver)?;
    record.resolver = resolver
        .as_ref()
        .map(|addr| deps.api.addr_canonicalize(addr.as_str()))
        .transpose()?;
    RECORDS.save(deps.storage, node.clone(), &record)?;
    Ok(Response::new()
        .add_attribute("method", "set_resolver")
        .add_attribute("node", node_to_hex(&node))
        .add_attribute(
            "resolver",
            resolver.map(|a| a.to_string()).unwrap_or_default(),
        ))
}

pub fn set_approval_for_all(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    operator: String,
    approved: bool,
) -> Result<Response, ContractError> {
    let sender_address = deps.api.addr_canonicalize(info.sender.as_str())?;
    let operator_address = deps.api.addr_canonicalize(operator.as_str())?;
    OPERATORS.save(
        deps.storage,
        (sender_address.to_vec(), operator_address.to_vec()),
        &approved,
    )?;
    Ok(Response::new()
        .add_attribute("method", "set_approval_for_all")
        .add_attribute("operator", operator)
        .add_attribute("approved", approved.to_string()))
}

pub fn set_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;
    let owner = deps.api.addr_canonicalize(owner.as_str())?;
    config.owner = owner.clone();
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_config")
        .add_attribute("owner", owner.to_string()))
}

pub fn query_owner_of(deps: Deps, _env: Env, node: Vec<u8>) -> StdResult<OwnerResponse> {
    let record = RECORDS.load(deps.storage, node)?;
    let owner = deps.api.addr_humanize(&record.owner)?;
    Ok(OwnerResponse { owner })
}

pub fn query_resolver_of(deps: Deps, _env: Env, node: Vec<u8>) -> StdResult<ResolverResponse> {
    let record = RECORDS.load(deps.storage, node)?;
    let resolver = record
        .resolver
        .as_ref()
        .map(|r| deps.api.addr_humanize(r))
        .transpose()?;
    Ok(ResolverResponse { resolver })
}

pub fn query_token_uri(deps: Deps, _env: Env, node: Vec<u8>) -> StdResult<TokenUriResponse> {
    let record = RECORDS.load(deps.storage, node)?;
    Ok(TokenUriResponse {
        token_uri: record.token_uri,
    })
}

pub fn query_root(deps: Deps) -> StdResult<RootResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(RootResponse {
        root: node_to_hex(&config.base_node),
    })
}

pub fn query_contract_info(deps: Deps) -> StdResult<ContractInfoResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ContractInfoResponse {
        name: config.name,
        symbol: config.symbol,
    })
}

pub fn query_has_minter_role(deps: Deps, address: String) -> StdResult<HasMinterRoleResponse> {
    let canonical = deps.api.addr_canonicalize(&address)?;
    let has_role = MINTERS
        .may_load(deps.storage, canonical.to_vec())?
        .unwrap_or(false);
    Ok(HasMinterRoleResponse { has_role })
}

pub fn is_node_owner(deps: Deps, _env: Env, node: Vec<u8>, address: String) -> StdResult<bool> {
    let record_option = RECORDS.may_load(deps.storage, node)?;
    let canonical = deps.api.addr_canonicalize(&address)?;
    if let Some(record) = record_option {
        if record.owner == canonical {
            return Ok(true);
        }
        let operator = OPERATORS.may_load(
            deps.storage,
            (record.owner.to_vec(), canonical.to_vec()),
        )?;
        if let Some(approved) = operator {
            return Ok(approved);
        }
    }
    Ok(false)
}

pub fn query_is_approved_for_all(
    deps: Deps,
    _env: Env,
    owner: String,
    operator: String,
) -> StdResult<OperatorResponse> {
    let owner_address = deps.api.addr_canonicalize(owner.as_str())?;
    let operator_address = deps.api.addr_canonicalize(operator.as_str())?;
    let value = OPERATORS.may_load(
        deps.storage,
        (owner_address.to_vec(), operator_address.to_vec()),
    )?;
    Ok(OperatorResponse {
        is_approve: value.unwrap_or(false),
    })
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let owner = deps.api.addr_humanize(&config.owner)?;
    Ok(ConfigResponse {
        name: config.name,
        symbol: config.symbol,
        base_name: config.base_name,
        owner,
    })
}
