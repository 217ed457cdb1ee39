use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw20::Cw20ReceiveMsg;

pub use presale::msg::{ClaimedResponse, OwnershipResponse, ReceiveMsg};

#[cw_serde]
pub struct InstantiateMsg {
    /// CW20 GAME token contract address
    pub game_token: String,
    /// Presale contract address
    pub presale: String,
    /// uaxm invested per micro-GAME of bonus. Default: 20
    #[serde(default = "crate::state::default_bonus_ratio")]
    pub bonus_ratio: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// CW20 receive hook — used to fund the bonus pool.
    /// Only accepts tokens from the configured game_token contract.
    Receive(Cw20ReceiveMsg),

    /// Owner: unlock bonus claims once the presale is finished and this
    /// contract is funded
    AllowClaimGame {},

    /// Investor: redeem the bonus for the investment recorded by the presale
    Claim {},

    /// Owner: propose a new owner (step 1 of 2-step transfer)
    TransferOwnership { new_owner: String },

    /// Pending owner: accept ownership (step 2 of 2-step transfer)
    AcceptOwnership {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(StatusResponse)]
    Status {},

    #[returns(ClaimedResponse)]
    Claimed { address: String },

    /// Bonus the address receives (or received) on claim
    #[returns(EntitlementResponse)]
    Entitlement { address: String },

    #[returns(OwnershipResponse)]
    Ownership {},
}

// ---- Response types ----

#[cw_serde]
pub struct ConfigResponse {
    pub game_token: Addr,
    pub presale: Addr,
    pub bonus_ratio: u64,
}

#[cw_serde]
pub struct StatusResponse {
    pub can_claim_game: bool,
    /// GAME required to pay every investor's bonus
    pub required: Uint128,
    /// GAME held by the contract
    pub game_balance: Uint128,
}

#[cw_serde]
pub struct EntitlementResponse {
    pub address: Addr,
    pub invested: Uint128,
    pub bonus: Uint128,
    pub claimed: bool,
}
