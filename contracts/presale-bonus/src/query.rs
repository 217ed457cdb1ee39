use cosmwasm_std::{Deps, Env, StdResult, Uint128};
use presale::state::ClaimPhase;
use presale::token;

use crate::msg::{
    ClaimedResponse, ConfigResponse, EntitlementResponse, OwnershipResponse, StatusResponse,
};
use crate::presale_ledger;
use crate::state::{CLAIMED, CLAIM_PHASE, CONFIG, OWNERSHIP};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        game_token: config.game_token,
        presale: config.presale,
        bonus_ratio: config.bonus_ratio,
    })
}

pub fn query_status(deps: Deps, env: Env) -> StdResult<StatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    let sale = presale_ledger::sale(&deps.querier, &config.presale)?;

    Ok(StatusResponse {
        can_claim_game: CLAIM_PHASE.load(deps.storage)? == ClaimPhase::Open,
        required: sale
            .total_invested
            .checked_div(Uint128::from(config.bonus_ratio))?,
        game_balance: token::query_balance(
            &deps.querier,
            &config.game_token,
            &env.contract.address,
        )?,
    })
}

pub fn query_claimed(deps: Deps, address: String) -> StdResult<ClaimedResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let claimed = CLAIMED.may_load(deps.storage, &addr)?;
    Ok(ClaimedResponse {
        address: addr,
        claimed: claimed.is_some(),
        amount: claimed.unwrap_or_default(),
    })
}

pub fn query_entitlement(deps: Deps, address: String) -> StdResult<EntitlementResponse> {
    let config = CONFIG.load(deps.storage)?;
    let addr = deps.api.addr_validate(&address)?;
    let invested = presale_ledger::invested(&deps.querier, &config.presale, &addr)?;

    Ok(EntitlementResponse {
        bonus: invested.checked_div(Uint128::from(config.bonus_ratio))?,
        claimed: CLAIMED.has(deps.storage, &addr),
        address: addr,
        invested,
    })
}

pub fn query_ownership(deps: Deps) -> StdResult<OwnershipResponse> {
    let ownership = OWNERSHIP.load(deps.storage)?;
    Ok(OwnershipResponse {
        owner: ownership.owner,
        pending_owner: ownership.pending_owner,
    })
}
