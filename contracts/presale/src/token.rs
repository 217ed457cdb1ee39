//! CW20 plumbing shared by the presale and bonus contracts.

use cosmwasm_std::{
    from_json, to_json_binary, Addr, CosmosMsg, QuerierWrapper, Response, StdError, StdResult,
    Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, Cw20ReceiveMsg};
use thiserror::Error;

use crate::msg::ReceiveMsg;

#[derive(Error, Debug)]
pub enum FundError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("PRESALE: invalid token, expected {expected}")]
    InvalidToken { expected: String },
}

/// CW20 balance of `holder` on `token`.
pub fn query_balance(querier: &QuerierWrapper, token: &Addr, holder: &Addr) -> StdResult<Uint128> {
    let res: BalanceResponse = querier.query_wasm_smart(
        token.to_string(),
        &Cw20QueryMsg::Balance {
            address: holder.to_string(),
        },
    )?;
    Ok(res.balance)
}

pub fn transfer_msg(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

/// Part of `balance` above `required`, or `None` when the balance does not cover it.
pub fn surplus(balance: Uint128, required: Uint128) -> Option<Uint128> {
    balance.checked_sub(required).ok()
}

/// CW20 receive hook funding the GAME pool. Only `game_token` may call it;
/// tokens stay on the contract balance and nothing is booked per sender.
pub fn receive_fund(
    game_token: &Addr,
    sender: &Addr,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, FundError> {
    if sender != game_token {
        return Err(FundError::InvalidToken {
            expected: game_token.to_string(),
        });
    }

    match from_json(&cw20_msg.msg)? {
        ReceiveMsg::Fund {} => Ok(Response::new()
            .add_attribute("action", "fund")
            .add_attribute("funder", cw20_msg.sender)
            .add_attribute("amount", cw20_msg.amount.to_string())),
    }
}
