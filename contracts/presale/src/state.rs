use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use crate::ownership::Ownership;

pub const DEFAULT_DENOM: &str = "uaxm";

/// 10,000,000 AXM (6 decimals).
pub fn default_target() -> Uint128 {
    Uint128::new(10_000_000_000_000)
}

/// 50,000 AXM (6 decimals) per single contribution.
pub fn default_hard_cap() -> Uint128 {
    Uint128::new(50_000_000_000)
}

/// 10 uaxm invested = 1 micro-GAME.
pub fn default_claim_ratio() -> u64 {
    10
}

pub fn default_denom() -> String {
    DEFAULT_DENOM.to_string()
}

#[cw_serde]
pub struct Config {
    /// CW20 token redeemed by investors (GAME)
    pub game_token: Addr,
    /// Receives the collected native funds on withdraw
    pub treasury: Addr,
    /// Length of the sale window in seconds
    pub period: u64,
    /// Native denom accepted as investment
    pub denom: String,
    /// Aggregate ceiling; reaching it finishes the sale early
    pub target: Uint128,
    /// Ceiling for a single contribution
    pub hard_cap: Uint128,
    /// GAME paid on claim = invested / claim_ratio
    pub claim_ratio: u64,
}

#[cw_serde]
pub enum ClaimPhase {
    Locked,
    Open,
}

#[cw_serde]
pub enum FundsStatus {
    Held,
    Withdrawn { amount: Uint128 },
}

#[cw_serde]
pub struct Sale {
    /// Unix seconds; None until the owner schedules the start
    pub start_time: Option<u64>,
    pub total_invested: Uint128,
    pub participants: u64,
    pub claim_phase: ClaimPhase,
    pub funds: FundsStatus,
}

impl Sale {
    pub fn end_time(&self, period: u64) -> Option<u64> {
        self.start_time.map(|start| start.saturating_add(period))
    }

    /// Claims still locked and funds still held.
    pub fn is_open(&self) -> bool {
        self.claim_phase == ClaimPhase::Locked && self.funds == FundsStatus::Held
    }

    /// Started, and either the target is met or the window has closed.
    /// Sticky once claims are opened or funds withdrawn.
    pub fn is_finished(&self, config: &Config, now: u64) -> bool {
        if !self.is_open() {
            return true;
        }
        match self.start_time {
            Some(start) if now >= start => {
                self.total_invested >= config.target
                    || now >= start.saturating_add(config.period)
            }
            _ => false,
        }
    }
}

// ---- Storage keys ----

pub const CONFIG: Item<Config> = Item::new("config");
pub const SALE: Item<Sale> = Item::new("sale");
pub const OWNERSHIP: Item<Ownership> = Item::new("ownership");

/// investor -> cumulative uaxm invested
pub const INVESTED: Map<&Addr, Uint128> = Map::new("invested");

/// investor -> GAME paid out. Presence means the investor has claimed.
pub const CLAIMED: Map<&Addr, Uint128> = Map::new("claimed");
