use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::ownership::assert_owner;
use crate::state::{OWNERSHIP, SALE};

pub fn execute_schedule_start(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    start_time: u64,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &OWNERSHIP, &info.sender)?;

    if start_time <= env.block.time.seconds() {
        return Err(ContractError::StartTimeInPast);
    }

    let mut sale = SALE.load(deps.storage)?;
    if sale.start_time.is_some() {
        return Err(ContractError::AlreadyScheduled);
    }
    sale.start_time = Some(start_time);
    SALE.save(deps.storage, &sale)?;

    Ok(Response::new()
        .add_attribute("action", "schedule_start")
        .add_attribute("start_time", start_time.to_string()))
}
