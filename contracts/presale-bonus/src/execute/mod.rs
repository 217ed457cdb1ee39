use cosmwasm_std::{Addr, Api};

use crate::error::ContractError;

pub mod admin;
pub mod allow_claim;
pub mod claim;
pub mod fund;

/// Empty input is the "zero address" of this chain.
pub fn validate_addr(api: &dyn Api, addr: &str, field: &str) -> Result<Addr, ContractError> {
    if addr.is_empty() {
        return Err(ContractError::zero(field));
    }
    Ok(api.addr_validate(addr)?)
}
