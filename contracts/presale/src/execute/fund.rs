use cosmwasm_std::{DepsMut, MessageInfo, Response};
use cw20::Cw20ReceiveMsg;

use crate::error::ContractError;
use crate::state::CONFIG;
use crate::token;

pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(token::receive_fund(&config.game_token, &info.sender, cw20_msg)?)
}
