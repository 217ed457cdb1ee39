use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use presale::ownership::Ownership;
use presale::state::ClaimPhase;

/// 20 uaxm invested = 1 micro-GAME of bonus.
pub fn default_bonus_ratio() -> u64 {
    20
}

#[cw_serde]
pub struct Config {
    /// CW20 token paid as bonus (GAME)
    pub game_token: Addr,
    /// Presale contract whose investment ledger drives the bonus
    pub presale: Addr,
    /// GAME paid on claim = invested / bonus_ratio
    pub bonus_ratio: u64,
}

// ---- Storage keys ----

pub const CONFIG: Item<Config> = Item::new("config");
pub const CLAIM_PHASE: Item<ClaimPhase> = Item::new("claim_phase");
pub const OWNERSHIP: Item<Ownership> = Item::new("ownership");

/// investor -> bonus GAME paid out. Presence means the investor has claimed.
pub const CLAIMED: Map<&Addr, Uint128> = Map::new("claimed");
