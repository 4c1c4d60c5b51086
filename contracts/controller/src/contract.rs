use crate::error::ContractError;
use crate::handler::{
    add_minter, burn_sub_uri, get_config, get_is_minter, get_is_valid_label, get_nodehash_from_name,
    get_owner, get_registry, get_token_id_from_label, mint_sub_uri, mint_uri, remove_minter,
    safe_mint_sub_uri, safe_mint_uri, set_config,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Config, CONFIG};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

const CONTRACT_NAME: &str = "crates.io:cns-controller";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let registry_address = deps.api.addr_canonicalize(msg.registry_address.as_str())?;
    let owner = deps.api.addr_canonicalize(info.sender.as_str())?;
    CONFIG.save(
        deps.storage,
        &Config {
            registry_address,
            owner,
        },
    )?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
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

        // Only owner
        ExecuteMsg::AddMinter { address } => add_minter(deps, env, info, address),
        ExecuteMsg::RemoveMinter { address } => remove_minter(deps, env, info, address),
        ExecuteMsg::SetConfig {
            registry_address,
            owner,
        } => set_config(deps, env, info, registry_address, owner),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Owner {} => to_binary(&get_owner(deps)?),
        QueryMsg::Registry {} => to_binary(&get_registry(deps)?),
        QueryMsg::IsMinter { address } => to_binary(&get_is_minter(deps, address)?),
        QueryMsg::IsValidLabel { label } => to_binary(&get_is_valid_label(&label)?),
        QueryMsg::GetTokenId { label } => to_binary(&get_token_id_from_label(&label)?),
        QueryMsg::GetNodehash { name } => to_binary(&get_nodehash_from_name(&name)?),
        QueryMsg::GetConfig {} => to_binary(&get_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::default())
}
