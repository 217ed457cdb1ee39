use cosmwasm_std::{DivideByZeroError, OverflowError, StdError};
use presale::ownership::OwnershipError;
use presale::token::FundError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("{0}")]
    Ownership(#[from] OwnershipError),

    #[error("PRESALE: {field} cannot be zero")]
    ZeroValue { field: String },

    #[error("PRESALE: not finished")]
    NotFinished,

    #[error("PRESALE: No enough GAME. Required: {required}, available: {available}")]
    NotEnoughGame { required: String, available: String },

    #[error("PRESALE: claim already allowed")]
    ClaimAlreadyAllowed,

    #[error("PRESALE: not allowed")]
    ClaimNotAllowed,

    #[error("PRESALE: not invested")]
    NotInvested,

    #[error("PRESALE: already claimed")]
    AlreadyClaimed,

    #[error("{0}")]
    Fund(#[from] FundError),

    #[error("PRESALE: cannot migrate from {contract}")]
    InvalidMigration { contract: String },
}

impl ContractError {
    pub fn zero(field: &str) -> Self {
        ContractError::ZeroValue {
            field: field.to_string(),
        }
    }
}
