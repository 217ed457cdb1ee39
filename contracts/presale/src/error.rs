use cosmwasm_std::{DivideByZeroError, OverflowError, StdError};
use cw_utils::PaymentError;
use thiserror::Error;

use crate::ownership::OwnershipError;
use crate::token::FundError;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("{0}")]
    Payment(PaymentError),

    #[error("{0}")]
    Ownership(#[from] OwnershipError),

    #[error("PRESALE: {field} cannot be zero")]
    ZeroValue { field: String },

    #[error("PRESALE: must be greater than block time")]
    StartTimeInPast,

    #[error("PRESALE: already scheduled")]
    AlreadyScheduled,

    #[error("PRESALE: not started")]
    NotStarted,

    #[error("PRESALE: reached to target")]
    ReachedTarget,

    #[error("PRESALE: amount exceeds hard cap of {hard_cap}")]
    ExceedsHardCap { hard_cap: String },

    #[error("PRESALE: ended")]
    Ended,

    #[error("PRESALE: not finished")]
    NotFinished,

    #[error("PRESALE: already finished")]
    AlreadyFinished,

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

    #[error("PRESALE: no invests")]
    NoInvests,

    #[error("PRESALE: already withdrawn")]
    AlreadyWithdrawn,

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

impl From<PaymentError> for ContractError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::NoFunds {} => ContractError::zero("amount"),
            other => ContractError::Payment(other),
        }
    }
}
