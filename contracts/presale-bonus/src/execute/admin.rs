use cosmwasm_std::{DepsMut, MessageInfo, Response};
use presale::ownership::{self, assert_owner};

use crate::error::ContractError;
use crate::execute::validate_addr;
use crate::state::OWNERSHIP;

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let cap = assert_owner(deps.storage, &OWNERSHIP, &info.sender)?;
    let new_owner = validate_addr(deps.api, &new_owner, "owner")?;
    ownership::propose(deps.storage, &OWNERSHIP, &cap, new_owner.clone())?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("pending_owner", new_owner.to_string()))
}

pub fn execute_accept_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let previous = ownership::accept(deps.storage, &OWNERSHIP, &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "accept_ownership")
        .add_attribute("previous_owner", previous.to_string())
        .add_attribute("owner", info.sender.to_string()))
}
