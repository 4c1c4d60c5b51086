use crate::error::ContractError;
use crate::state::{CONFIG, KEYS, RECORDS};
use cns::registry::QueryMsg as RegistryQueryMsg;
use cns::resolver::{
    AllKeysResponse, AllRecordsResponse, ConfigResponse, GetMultiResponse, GetResponse,
    RecordResponse,
};
use cns::utils::node_to_hex;
use cosmwasm_std::{
    to_binary, Deps, DepsMut, Env, MessageInfo, QueryRequest, Response, StdResult, WasmQuery,
};

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

pub fn only_authorized(
    deps: &DepsMut,
    info: &MessageInfo,
    node: &Vec<u8>,
) -> Result<bool, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let registry_address = deps
        .api
        .addr_humanize(&config.registry_address)?
        .to_string();
    let is_node_owner: bool = deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: registry_address,
        msg: to_binary(&RegistryQueryMsg::GetIsNodeOwner {
            node: node.clone(),
            address: info.sender.to_string(),
        })?,
    }))?;

    if is_node_owner {
        return Ok(true);
    }
    return Err(ContractError::Unauthorized {
        sender: info.sender.to_string(),
        node: node_to_hex(node),
    });
}

pub fn set(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    key: String,
    value: String,
) -> Result<Response, ContractError> {
    only_authorized(&deps, &info, &node)?;
    let mut keys = KEYS.may_load(deps.storage, node.clone())?.unwrap_or_default();
    if !keys.contains(&key) {
        keys.push(key.clone());
        KEYS.save(deps.storage, node.clone(), &keys)?;
    }
    RECORDS.save(deps.storage, (node.clone(), key.clone()), &value)?;
    Ok(Response::new()
        .add_attribute("method", "set")
        .add_attribute("node", node_to_hex(&node))
        .add_attribute("key", key))
}

pub fn set_multi(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    keys: Vec<String>,
    values: Vec<String>,
) -> Result<Response, ContractError> {
    only_authorized(&deps, &info, &node)?;
    if keys.len() != values.len() {
        return Err(ContractError::LengthMismatch {
            keys: keys.len(),
            values: values.len(),
        });
    }
    let mut known = KEYS.may_load(deps.storage, node.clone())?.unwrap_or_default();
    for (key, value) in keys.iter().zip(values.iter()) {
        if !known.contains(key) {
            known.push(key.clone());
        }
        RECORDS.save(deps.storage, (node.clone(), key.clone()), value)?;
    }
    KEYS.save(deps.storage, node.clone(), &known)?;
    Ok(Response::new()
        .add_attribute("method", "set_multi")
        .add_attribute("node", node_to_hex(&node))
        .add_attribute("count", keys.len().to_string()))
}

pub fn reset(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
) -> Result<Response, ContractError> {
    only_authorized(&deps, &info, &node)?;
    let keys = KEYS.may_load(deps.storage, node.clone())?.unwrap_or_default();
    for key in keys {
        RECORDS.remove(deps.storage, (node.clone(), key));
    }
    KEYS.remove(deps.storage, node.clone());
    Ok(Response::new()
        .add_attribute("method", "reset")
        .add_attribute("node", node_to_hex(&node)))
}

pub fn query_get(deps: Deps, _env: Env, node: Vec<u8>, key: String) -> StdResult<GetResponse> {
    let value = RECORDS.may_load(deps.storage, (node, key))?;
    Ok(GetResponse { value })
}

pub fn query_get_multi(
    deps: Deps,
    _env: Env,
    node: Vec<u8>,
    keys: Vec<String>,
) -> StdResult<GetMultiResponse> {
    let values = keys
        .into_iter()
        .map(|key| RECORDS.may_load(deps.storage, (node.clone(), key)))
        .collect::<StdResult<Vec<Option<String>>>>()?;
    Ok(GetMultiResponse { values })
}

pub fn query_all_keys(deps: Deps, _env: Env, node: Vec<u8>) -> StdResult<AllKeysResponse> {
    let keys = KEYS.may_load(deps.storage, node)?.unwrap_or_default();
    Ok(AllKeysResponse { keys })
}

pub fn query_all_records(deps: Deps, _env: Env, node: Vec<u8>) -> StdResult<AllRecordsResponse> {
    let keys = KEYS.may_load(deps.storage, node.clone())?.unwrap_or_default();
    let records = keys
        .into_iter()
        .map(|key| {
            let value = RECORDS
                .may_load(deps.storage, (node.clone(), key.clone()))?
                .unwrap_or_default();
            Ok(RecordResponse { key, value })
        })
        .collect::<StdResult<Vec<RecordResponse>>>()?;
    Ok(AllRecordsResponse { records })
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

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let owner = deps.api.addr_humanize(&config.owner)?;
    let registry_address = deps.api.addr_humanize(&config.registry_address)?;
    Ok(ConfigResponse {
        registry_address,
        owner,
    })
}
