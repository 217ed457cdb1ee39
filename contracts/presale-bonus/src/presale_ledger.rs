//! Read-only view of the presale contract's investment ledger.

use cosmwasm_std::{Addr, QuerierWrapper, StdResult, Uint128};
use presale::msg::{InvestedResponse, QueryMsg as PresaleQueryMsg, SaleResponse};

/// Sale progress; served from presale storage without its balance lookups.
pub fn sale(querier: &QuerierWrapper, presale: &Addr) -> StdResult<SaleResponse> {
    querier.query_wasm_smart(presale.to_string(), &PresaleQueryMsg::Sale {})
}

pub fn invested(querier: &QuerierWrapper, presale: &Addr, investor: &Addr) -> StdResult<Uint128> {
    let res: InvestedResponse = querier.query_wasm_smart(
        presale.to_string(),
        &PresaleQueryMsg::Invested {
            address: investor.to_string(),
        },
    )?;
    Ok(res.amount)
}
