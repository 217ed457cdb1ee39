use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw20::Cw20ReceiveMsg;

#[cw_serde]
pub struct InstantiateMsg {
    /// CW20 GAME token contract address
    pub game_token: String,
    /// Destination of withdrawn native funds
    pub treasury: String,
    /// Sale window length in seconds
    pub period: u64,
    /// Accepted native denom. Default: uaxm
    #[serde(default = "crate::state::default_denom")]
    pub denom: String,
    /// Aggregate contribution ceiling. Default: 10M AXM
    #[serde(default = "crate::state::default_target")]
    pub target: Uint128,
    /// Per-contribution ceiling. Default: 50k AXM
    #[serde(default = "crate::state::default_hard_cap")]
    pub hard_cap: Uint128,
    /// uaxm per micro-GAME on claim. Default: 10
    #[serde(default = "crate::state::default_claim_ratio")]
    pub claim_ratio: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Invest native funds. Attach `denom` funds to this message.
    Invest {},

    /// CW20 receive hook — used to fund the GAME pool.
    /// Only accepts tokens from the configured game_token contract.
    Receive(Cw20ReceiveMsg),

    /// Owner: set the sale start (unix seconds). One-time.
    ScheduleStart { start_time: u64 },

    /// Owner: unlock claims once the sale is finished and funded
    AllowClaimGame {},

    /// Investor: redeem GAME for the recorded investment
    Claim {},

    /// Owner: send the collected native funds to treasury
    Withdraw {},

    /// Owner: change treasury
    SetTreasury { treasury: String },

    /// Owner: change sale window length
    SetPeriod { period: u64 },

    /// Owner: propose a new owner (step 1 of 2-step transfer)
    TransferOwnership { new_owner: String },

    /// Pending owner: accept ownership (step 2 of 2-step transfer)
    AcceptOwnership {},
}

/// CW20 receive sub-message
#[cw_serde]
pub enum ReceiveMsg {
    /// Fund the GAME pool
    Fund {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Sale progress and balances
    #[returns(StatusResponse)]
    Status {},

    /// Sale progress from storage only, without balance lookups
    #[returns(SaleResponse)]
    Sale {},

    #[returns(InvestedResponse)]
    Invested { address: String },

    #[returns(ClaimedResponse)]
    Claimed { address: String },

    #[returns(bool)]
    IsFinished {},

    #[returns(InvestorsResponse)]
    Investors {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(OwnershipResponse)]
    Ownership {},
}

// ---- Response types ----

#[cw_serde]
pub struct ConfigResponse {
    pub game_token: Addr,
    pub treasury: Addr,
    pub period: u64,
    pub denom: String,
    pub target: Uint128,
    pub hard_cap: Uint128,
    pub claim_ratio: u64,
}

#[cw_serde]
pub struct StatusResponse {
    pub start_time: Option<u64>,
    pub end_time: Option<u64>,
    pub total_invested: Uint128,
    pub participants: u64,
    pub is_finished: bool,
    pub can_claim_game: bool,
    pub withdrawn: bool,
    /// GAME held by the contract
    pub game_balance: Uint128,
    /// Native funds held by the contract
    pub native_balance: Uint128,
}

#[cw_serde]
pub struct SaleResponse {
    pub start_time: Option<u64>,
    pub end_time: Option<u64>,
    pub total_invested: Uint128,
    pub participants: u64,
    pub is_finished: bool,
}

#[cw_serde]
pub struct InvestedResponse {
    pub address: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct ClaimedResponse {
    pub address: Addr,
    pub claimed: bool,
    pub amount: Uint128,
}

#[cw_serde]
pub struct InvestorsResponse {
    pub investors: Vec<InvestedResponse>,
}

#[cw_serde]
pub struct OwnershipResponse {
    pub owner: Addr,
    pub pending_owner: Option<Addr>,
}
