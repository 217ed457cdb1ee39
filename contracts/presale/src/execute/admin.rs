use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::execute::validate_addr;
use crate::ownership::{self, assert_owner};
use crate::state::{CONFIG, OWNERSHIP, SALE};

pub fn execute_set_treasury(
    deps: DepsMut,
    info: MessageInfo,
    treasury: String,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &OWNERSHIP, &info.sender)?;
    let treasury = validate_addr(deps.api, &treasury, "treasury")?;

    let mut config = CONFIG.load(deps.storage)?;
    config.treasury = treasury;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_treasury")
        .add_attribute("treasury", config.treasury.to_string()))
}

/// Owner: change the window length. A finished sale stays finished.
pub fn execute_set_period(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    period: u64,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &OWNERSHIP, &info.sender)?;
    if period == 0 {
        return Err(ContractError::zero("period"));
    }

    let mut config = CONFIG.load(deps.storage)?;
    let sale = SALE.load(deps.storage)?;
    if sale.is_finished(&config, env.block.time.seconds()) {
        return Err(ContractError::AlreadyFinished);
    }
    config.period = period;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_period")
        .add_attribute("period", period.to_string()))
}

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let cap = assert_owner(deps.storage, &OWNERSHIP, &info.sender)?;
    let new_owner = validate_addr(deps.api, &new_owner, "owner")?;
    ownership::propose(deps.storage, &OWNERSHIP, &cap, new_owner.clone())?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("pending_owner", new_owner.to_string()))
}

pub fn execute_accept_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let previous = ownership::accept(deps.storage, &OWNERSHIP, &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "accept_ownership")
        .add_attribute("previous_owner", previous.to_string())
        .add_attribute("owner", info.sender.to_string()))
}
