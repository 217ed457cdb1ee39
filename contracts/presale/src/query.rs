use cosmwasm_std::{Deps, Env, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{
    ClaimedResponse, ConfigResponse, InvestedResponse, InvestorsResponse, OwnershipResponse,
    SaleResponse, StatusResponse,
};
use crate::state::{ClaimPhase, FundsStatus, CLAIMED, CONFIG, INVESTED, OWNERSHIP, SALE};
use crate::token;

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        game_token: config.game_token,
        treasury: config.treasury,
        period: config.period,
        denom: config.denom,
        target: config.target,
        hard_cap: config.hard_cap,
        claim_ratio: config.claim_ratio,
    })
}

pub fn query_status(deps: Deps, env: Env) -> StdResult<StatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    let sale = SALE.load(deps.storage)?;

    let game_balance =
        token::query_balance(&deps.querier, &config.game_token, &env.contract.address)?;
    let native_balance = deps
        .querier
        .query_balance(env.contract.address.to_string(), &config.denom)?;

    Ok(StatusResponse {
        start_time: sale.start_time,
        end_time: sale.end_time(config.period),
        total_invested: sale.total_invested,
        participants: sale.participants,
        is_finished: sale.is_finished(&config, env.block.time.seconds()),
        can_claim_game: sale.claim_phase == ClaimPhase::Open,
        withdrawn: matches!(sale.funds, FundsStatus::Withdrawn { .. }),
        game_balance,
        native_balance: native_balance.amount,
    })
}

pub fn query_sale(deps: Deps, env: Env) -> StdResult<SaleResponse> {
    let config = CONFIG.load(deps.storage)?;
    let sale = SALE.load(deps.storage)?;

    Ok(SaleResponse {
        start_time: sale.start_time,
        end_time: sale.end_time(config.period),
        total_invested: sale.total_invested,
        participants: sale.participants,
        is_finished: sale.is_finished(&config, env.block.time.seconds()),
    })
}

pub fn query_invested(deps: Deps, address: String) -> StdResult<InvestedResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let amount = INVESTED.may_load(deps.storage, &addr)?.unwrap_or_default();
    Ok(InvestedResponse {
        address: addr,
        amount,
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

pub fn query_is_finished(deps: Deps, env: Env) -> StdResult<bool> {
    let config = CONFIG.load(deps.storage)?;
    let sale = SALE.load(deps.storage)?;
    Ok(sale.is_finished(&config, env.block.time.seconds()))
}

pub fn query_investors(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<InvestorsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;

    let investors = INVESTED
        .range(
            deps.storage,
            start.as_ref().map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|item| {
            let (address, amount) = item?;
            Ok(InvestedResponse { address, amount })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(InvestorsResponse { investors })
}

pub fn query_ownership(deps: Deps) -> StdResult<OwnershipResponse> {
    let ownership = OWNERSHIP.load(deps.storage)?;
    Ok(OwnershipResponse {
        owner: ownership.owner,
        pending_owner: ownership.pending_owner,
    })
}
