use crate::error::ContractError;
use crate::handler::{
    burn_sub_uri, get_config, grant_minter_role, is_node_owner, mint_sub_uri, mint_uri,
    query_contract_info, query_has_minter_role, query_is_approved_for_all, query_owner_of,
    query_resolver_of, query_root, query_token_uri, revoke_minter_role, safe_mint_sub_uri,
    safe_mint_uri, set_approval_for_all, set_config, set_resolver, transfer_sub_uri, transfer_uri,
    SAFE_MINT_REPLY_ID,
};
use crate::state::{Config, Record, CONFIG, PENDING_SAFE_MINT, RECORDS};
use cns::registry::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use cns::utils::namehash;
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdError, StdResult,
};
use cw2::set_contract_version;

const CONTRACT_NAME: &str = "crates.io:cns-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let owner = deps.api.addr_canonicalize(info.sender.as_str())?;
    let base_node = namehash(&msg.base_name);
    CONFIG.save(
        deps.storage,
        &Config {
            name: msg.name,
            symbol: msg.symbol,
            base_name: msg.base_name.clone(),
            base_node: base_node.clone(),
            owner: owner.clone(),
        },
    )?;
    RECORDS.save(
        deps.storage,
        base_node,
        &Record {
            owner,
            resolver: None,
            token_uri: msg.base_name,
        },
    )?;
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::GrantMinterRole { address } => grant_minter_role(deps, env, info, address),
        ExecuteMsg::RevokeMinterRole { address } => revoke_minter_role(deps, env, info, address),
        ExecuteMsg::MintUri { owner, label } => mint_uri(deps, env, info, owner, label),
        ExecuteMsg::SafeMintUri { owner, label, data } => {
            safe_mint_uri(deps, env, info, owner, label, data)
        }
        ExecuteMsg::MintSubUri { owner, node, label } => {
            mint_sub_uri(deps, env, info, owner, node, label)
        }
        ExecuteMsg::SafeMintSubUri {
            owner,
            node,
            label,
            data,
        } => safe_mint_sub_uri(deps, env, info, owner, node, label, data),
        ExecuteMsg::BurnSubUri { node, label } => burn_sub_uri(deps, env, info, node, label),
        ExecuteMsg::TransferUri { from, to, label } => {
            transfer_uri(deps, env, info, from, to, label)
        }
        ExecuteMsg::TransferSubUri {
            from,
            to,
            parent_label,
            label,
        } => transfer_sub_uri(deps, env, info, from, to, parent_label, label),
        ExecuteMsg::SetResolver { node, resolver } => set_resolver(deps, env, info, node, resolver),
        ExecuteMsg::SetApprovalForAll { operator, approved } => {
            set_approval_for_all(deps, env, info, operator, approved)
        }
        ExecuteMsg::SetConfig { owner } => set_config(deps, env, info, owner),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::OwnerOf { node } => to_binary(&query_owner_of(deps, env, node)?),
        QueryMsg::ResolverOf { node } => to_binary(&query_resolver_of(deps, env, node)?),
        QueryMsg::TokenUri { node } => to_binary(&query_token_uri(deps, env, node)?),
        QueryMsg::Root {} => to_binary(&query_root(deps)?),
        QueryMsg::ContractInfo {} => to_binary(&query_contract_info(deps)?),
        QueryMsg::HasMinterRole { address } => to_binary(&query_has_minter_role(deps, address)?),
        QueryMsg::GetIsNodeOwner { node, address } => {
            to_binary(&is_node_owner(deps, env, node, address)?)
        }
        QueryMsg::GetIsApprovedForAll { owner, operator } => {
            to_binary(&query_is_approved_for_all(deps, env, owner, operator)?)
        }
        QueryMsg::GetConfig {} => to_binary(&get_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        // Dispatched reply_on_error, so reaching here means the receiver
        // rejected the acceptance hook; failing reverts the mint with it.
        SAFE_MINT_REPLY_ID => {
            let token_uri = PENDING_SAFE_MINT.may_load(deps.storage)?.unwrap_or_default();
            Err(ContractError::ReceiverRejected { token_uri })
        }
        id => Err(StdError::generic_err(format!("unknown reply id: {}", id)).into()),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::default())
}
