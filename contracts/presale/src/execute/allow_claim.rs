use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::ownership::assert_owner;
use crate::state::{ClaimPhase, CONFIG, OWNERSHIP, SALE};
use crate::token;

/// Owner: open claims once the sale is over and the contract holds enough GAME
/// for every investor. GAME above that amount goes back to the owner.
pub fn execute_allow_claim_game(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let owner = assert_owner(deps.storage, &OWNERSHIP, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;
    let mut sale = SALE.load(deps.storage)?;

    if !sale.is_finished(&config, env.block.time.seconds()) {
        return Err(ContractError::NotFinished);
    }
    if sale.claim_phase == ClaimPhase::Open {
        return Err(ContractError::ClaimAlreadyAllowed);
    }

    let required = sale
        .total_invested
        .checked_div(Uint128::from(config.claim_ratio))?;
    let balance = token::query_balance(&deps.querier, &config.game_token, &env.contract.address)?;
    let surplus = token::surplus(balance, required).ok_or_else(|| ContractError::NotEnoughGame {
        required: required.to_string(),
        available: balance.to_string(),
    })?;

    sale.claim_phase = ClaimPhase::Open;
    SALE.save(deps.storage, &sale)?;

    let mut res = Response::new();
    if !surplus.is_zero() {
        res = res.add_message(token::transfer_msg(&config.game_token, owner.addr(), surplus)?);
    }

    Ok(res
        .add_attribute("action", "allow_claim")
        .add_attribute("required", required.to_string())
        .add_attribute("surplus", surplus.to_string()))
}
