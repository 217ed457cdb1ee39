use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};
use presale::state::ClaimPhase;
use presale::token;

use crate::error::ContractError;
use crate::presale_ledger;
use crate::state::{CLAIMED, CLAIM_PHASE, CONFIG};

pub fn execute_claim(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if CLAIM_PHASE.load(deps.storage)? != ClaimPhase::Open {
        return Err(ContractError::ClaimNotAllowed);
    }

    let invested = presale_ledger::invested(&deps.querier, &config.presale, &info.sender)?;
    if invested.is_zero() {
        return Err(ContractError::NotInvested);
    }
    if CLAIMED.has(deps.storage, &info.sender) {
        return Err(ContractError::AlreadyClaimed);
    }

    let amount = invested.checked_div(Uint128::from(config.bonus_ratio))?;
    CLAIMED.save(deps.storage, &info.sender, &amount)?;

    let mut res = Response::new();
    if !amount.is_zero() {
        res = res.add_message(token::transfer_msg(&config.game_token, &info.sender, amount)?);
    }

    Ok(res
        .add_attribute("action", "bonus_claimed")
        .add_attribute("investor", info.sender.to_string())
        .add_attribute("amount", amount.to_string()))
}
