use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute::validate_addr;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::ownership;
use crate::state::{ClaimPhase, Config, FundsStatus, Sale, CONFIG, OWNERSHIP, SALE};

pub const CONTRACT_NAME: &str = "crates.io:presale";
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
    let treasury = validate_addr(deps.api, &msg.treasury, "treasury")?;
    if msg.period == 0 {
        return Err(ContractError::zero("period"));
    }
    if msg.target.is_zero() {
        return Err(ContractError::zero("target"));
    }
    if msg.hard_cap.is_zero() {
        return Err(ContractError::zero("hard cap"));
    }
    if msg.claim_ratio == 0 {
        return Err(ContractError::zero("claim ratio"));
    }
    if msg.denom.is_empty() {
        return Err(ContractError::zero("denom"));
    }

    let config = Config {
        game_token,
        treasury,
        period: msg.period,
        denom: msg.denom,
        target: msg.target,
        hard_cap: msg.hard_cap,
        claim_ratio: msg.claim_ratio,
    };
    CONFIG.save(deps.storage, &config)?;
    SALE.save(
        deps.storage,
        &Sale {
            start_time: None,
            total_invested: Uint128::zero(),
            participants: 0,
            claim_phase: ClaimPhase::Locked,
            funds: FundsStatus::Held,
        },
    )?;
    ownership::initialize(deps.storage, &OWNERSHIP, info.sender.clone())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender.to_string())
        .add_attribute("game_token", config.game_token.to_string())
        .add_attribute("treasury", config.treasury.to_string())
        .add_attribute("period", config.period.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Invest {} => crate::execute::invest::execute_invest(deps, env, info),
        ExecuteMsg::Receive(cw20_msg) => {
            crate::execute::fund::execute_receive(deps, info, cw20_msg)
        }
        ExecuteMsg::ScheduleStart { start_time } => {
            crate::execute::schedule_start::execute_schedule_start(deps, env, info, start_time)
        }
        ExecuteMsg::AllowClaimGame {} => {
            crate::execute::allow_claim::execute_allow_claim_game(deps, env, info)
        }
        ExecuteMsg::Claim {} => crate::execute::claim::execute_claim(deps, info),
        ExecuteMsg::Withdraw {} => crate::execute::withdraw::execute_withdraw(deps, env, info),
        ExecuteMsg::SetTreasury { treasury } => {
            crate::execute::admin::execute_set_treasury(deps, info, treasury)
        }
        ExecuteMsg::SetPeriod { period } => {
            crate::execute::admin::execute_set_period(deps, env, info, period)
        }
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
        QueryMsg::Sale {} => to_json_binary(&crate::query::query_sale(deps, env)?),
        QueryMsg::Invested { address } => {
            to_json_binary(&crate::query::query_invested(deps, address)?)
        }
        QueryMsg::Claimed { address } => {
            to_json_binary(&crate::query::query_claimed(deps, address)?)
        }
        QueryMsg::IsFinished {} => to_json_binary(&crate::query::query_is_finished(deps, env)?),
        QueryMsg::Investors { start_after, limit } => {
            to_json_binary(&crate::query::query_investors(deps, start_after, limit)?)
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
