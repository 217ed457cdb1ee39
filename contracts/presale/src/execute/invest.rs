use cosmwasm_std::{
    DepsMut, Env, MessageInfo, OverflowError, OverflowOperation, Response, Uint128,
};
use cw_utils::must_pay;

use crate::error::ContractError;
use crate::state::{CONFIG, INVESTED, SALE};

/// Investor sends native funds during the sale window.
pub fn execute_invest(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut sale = SALE.load(deps.storage)?;
    let now = env.block.time.seconds();

    let start = match sale.start_time {
        Some(start) if now >= start => start,
        _ => return Err(ContractError::NotStarted),
    };

    let amount = must_pay(&info, &config.denom)?;

    let new_total = sale.total_invested.checked_add(amount)?;
    if new_total > config.target {
        return Err(ContractError::ReachedTarget);
    }
    if amount > config.hard_cap {
        return Err(ContractError::ExceedsHardCap {
            hard_cap: config.hard_cap.to_string(),
        });
    }
    if now >= start.saturating_add(config.period) || !sale.is_open() {
        return Err(ContractError::Ended);
    }

    // First contribution from this address makes it a participant
    let previous = INVESTED.may_load(deps.storage, &info.sender)?;
    if previous.is_none() {
        let participants = sale.participants;
        sale.participants = participants
            .checked_add(1)
            .ok_or_else(|| OverflowError::new(OverflowOperation::Add, participants, 1))?;
    }
    let invested = previous.unwrap_or_else(Uint128::zero).checked_add(amount)?;
    INVESTED.save(deps.storage, &info.sender, &invested)?;

    sale.total_invested = new_total;
    SALE.save(deps.storage, &sale)?;

    Ok(Response::new()
        .add_attribute("action", "invested")
        .add_attribute("investor", info.sender.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("total_invested", sale.total_invested.to_string()))
}
