use crate::error::ContractError;
use crate::handler::{
    get_config, query_all_keys, query_all_records, query_get, query_get_multi, reset, set,
    set_config, set_multi,
};
use crate::state::{Config, CONFIG};
use cns::resolver::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

const CONTRACT_NAME: &str = "crates.io:cns-resolver";
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
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    CONFIG.save(
        deps.storage,
        &Config {
            registry_address,
            owner: sender,
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
        ExecuteMsg::Set { node, key, value } => set(deps, env, info, node, key, value),
        ExecuteMsg::SetMulti { node, keys, values } => {
            set_multi(deps, env, info, node, keys, values)
        }
        ExecuteMsg::Reset { node } => reset(deps, env, info, node),
        ExecuteMsg::SetConfig {
            registry_address,
            owner,
        } => set_config(deps, env, info, registry_address, owner),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Get { node, key } => to_binary(&query_get(deps, env, node, key)?),
        QueryMsg::GetMulti { node, keys } => to_binary(&query_get_multi(deps, env, node, keys)?),
        QueryMsg::AllKeys { node } => to_binary(&query_all_keys(deps, env, node)?),
        QueryMsg::AllRecords { node } => to_binary(&query_all_records(deps, env, node)?),
        QueryMsg::GetConfig {} => to_binary(&get_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::default())
}
