use cosmwasm_std::{BankMsg, Coin, CosmosMsg, DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::ownership::assert_owner;
use crate::state::{FundsStatus, CONFIG, OWNERSHIP, SALE};

/// Owner: move every collected native coin to treasury. One-time.
pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &OWNERSHIP, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;
    let mut sale = SALE.load(deps.storage)?;

    if !sale.is_finished(&config, env.block.time.seconds()) {
        return Err(ContractError::NotFinished);
    }
    if sale.total_invested.is_zero() {
        return Err(ContractError::NoInvests);
    }
    if let FundsStatus::Withdrawn { .. } = sale.funds {
        return Err(ContractError::AlreadyWithdrawn);
    }

    let balance = deps
        .querier
        .query_balance(env.contract.address.to_string(), &config.denom)?;

    sale.funds = FundsStatus::Withdrawn {
        amount: balance.amount,
    };
    SALE.save(deps.storage, &sale)?;

    let send_msg = CosmosMsg::Bank(BankMsg::Send {
        to_address: config.treasury.to_string(),
        amount: vec![Coin {
            denom: config.denom.clone(),
            amount: balance.amount,
        }],
    });

    Ok(Response::new()
        .add_message(send_msg)
        .add_attribute("action", "withdrawn")
        .add_attribute("treasury", config.treasury.to_string())
        .add_attribute("amount", balance.amount.to_string()))
}
