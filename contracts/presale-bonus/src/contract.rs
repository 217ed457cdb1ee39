use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::{get_contract_version, set_contract_version};
use presale::ownership;
use presale::state::ClaimPhase;

use crate::error::ContractError;
use crate::execute::validate_addr;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Config, CLAIM_PHASE, CONFIG, OWNERSHIP};

pub const CONTRACT_NAME: &str = "crates.io:presale-bonus";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let game_token = validate_addr(deps.api, &msg.game_token, "game token")?;
    let presale = validate_addr(deps.api, &msg.presale, "presale")?;
    if msg.bonus_ratio == 0 {
        return Err(ContractError::zero("bonus ratio"));
    }

    let config = Config {
        game_token,
        presale,
        bonus_ratio: msg.bonus_ratio,
    };
    CONFIG.save(deps.storage, &config)?;
    CLAIM_PHASE.save(deps.storage, &ClaimPhase::Locked)?;
    ownership::initialize(deps.storage, &OWNERSHIP, info.sender.clone())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender.to_string())
        .add_attribute("game_token", config.game_token.to_string())
        .add_attribute("presale", config.presale.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Receive(cw20_msg) => {
            crate::execute::fund::execute_receive(deps, info, cw20_msg)
        }
        ExecuteMsg::AllowClaimGame {} => {
            crate::execute::allow_claim::execute_allow_claim_game(deps, env, info)
        }
        ExecuteMsg::Claim {} => crate::execute::claim::execute_claim(deps, info),
        ExecuteMsg::TransferOwnership { new_owner } => {
            crate::execute::admin::execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::AcceptOwnership {} => {
            crate::execute::admin::execute_accept_ownership(deps, info)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&crate::query::query_config(deps)?),
        QueryMsg::Status {} => to_json_binary(&crate::query::query_status(deps, env)?),
        QueryMsg::Claimed { address } => {
            to_json_binary(&crate::query::query_claimed(deps, address)?)
        }
        QueryMsg::Entitlement { address } => {
            to_json_binary(&crate::query::query_entitlement(deps, address)?)
        }
        QueryMsg::Ownership {} => to_json_binary(&crate::query::query_ownership(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {
            contract: stored.contract,
        });
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
