use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{ClaimPhase, CLAIMED, CONFIG, INVESTED, SALE};
use crate::token;

pub fn execute_claim(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sale = SALE.load(deps.storage)?;

    if sale.claim_phase != ClaimPhase::Open {
        return Err(ContractError::ClaimNotAllowed);
    }

    let invested = INVESTED
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if invested.is_zero() {
        return Err(ContractError::NotInvested);
    }
    if CLAIMED.has(deps.storage, &info.sender) {
        return Err(ContractError::AlreadyClaimed);
    }

    let amount = invested.checked_div(Uint128::from(config.claim_ratio))?;
    CLAIMED.save(deps.storage, &info.sender, &amount)?;

    // Dust investments below one claim unit round down to nothing to send
    let mut res = Response::new();
    if !amount.is_zero() {
        res = res.add_message(token::transfer_msg(&config.game_token, &info.sender, amount)?);
    }

    Ok(res
        .add_attribute("action", "claimed")
        .add_attribute("investor", info.sender.to_string())
        .add_attribute("amount", amount.to_string()))
}
