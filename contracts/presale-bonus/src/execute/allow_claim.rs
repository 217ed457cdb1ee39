use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};
use presale::ownership::assert_owner;
use presale::state::ClaimPhase;
use presale::token;

use crate::error::ContractError;
use crate::presale_ledger;
use crate::state::{CLAIM_PHASE, CONFIG, OWNERSHIP};

/// Owner: open bonus claims. Requires the presale to be finished, but not the
/// presale's own claims to be open.
pub fn execute_allow_claim_game(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let owner = assert_owner(deps.storage, &OWNERSHIP, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;

    if CLAIM_PHASE.load(deps.storage)? == ClaimPhase::Open {
        return Err(ContractError::ClaimAlreadyAllowed);
    }

    let sale = presale_ledger::sale(&deps.querier, &config.presale)?;
    if !sale.is_finished {
        return Err(ContractError::NotFinished);
    }

    let required = sale
        .total_invested
        .checked_div(Uint128::from(config.bonus_ratio))?;
    let balance = token::query_balance(&deps.querier, &config.game_token, &env.contract.address)?;
    let surplus = token::surplus(balance, required).ok_or_else(|| ContractError::NotEnoughGame {
        required: required.to_string(),
        available: balance.to_string(),
    })?;

    CLAIM_PHASE.save(deps.storage, &ClaimPhase::Open)?;

    let mut res = Response::new();
    if !surplus.is_zero() {
        res = res.add_message(token::transfer_msg(&config.game_token, owner.addr(), surplus)?);
    }

    Ok(res
        .add_attribute("action", "allow_claim")
        .add_attribute("required", required.to_string())
        .add_attribute("surplus", surplus.to_string()))
}
