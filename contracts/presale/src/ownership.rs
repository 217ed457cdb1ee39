//! Single-owner authorization with two-step transfer.
//!
//! Privileged handlers obtain an [`OwnerCap`] from [`assert_owner`] and take it
//! as an argument, so an owner-only code path cannot be reached without the
//! check having run for the current sender.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdError, Storage};
use cw_storage_plus::Item;
use thiserror::Error;

#[cw_serde]
pub struct Ownership {
    pub owner: Addr,
    pub pending_owner: Option<Addr>,
}

#[derive(Error, Debug)]
pub enum OwnershipError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Ownable: caller is not the owner")]
    NotOwner,

    #[error("Ownable: no pending owner")]
    NoPendingOwner,

    #[error("Ownable: caller is not the pending owner")]
    NotPendingOwner,
}

/// Proof that the sender of the message being handled is the owner.
#[derive(Debug)]
pub struct OwnerCap {
    owner: Addr,
}

impl OwnerCap {
    pub fn addr(&self) -> &Addr {
        &self.owner
    }
}

pub fn initialize(
    storage: &mut dyn Storage,
    item: &Item<Ownership>,
    owner: Addr,
) -> Result<(), OwnershipError> {
    item.save(
        storage,
        &Ownership {
            owner,
            pending_owner: None,
        },
    )?;
    Ok(())
}

pub fn assert_owner(
    storage: &dyn Storage,
    item: &Item<Ownership>,
    sender: &Addr,
) -> Result<OwnerCap, OwnershipError> {
    let ownership = item.load(storage)?;
    if ownership.owner != *sender {
        return Err(OwnershipError::NotOwner);
    }
    Ok(OwnerCap {
        owner: ownership.owner,
    })
}

/// Step 1: the owner nominates a successor. Replaces any earlier nomination.
pub fn propose(
    storage: &mut dyn Storage,
    item: &Item<Ownership>,
    _cap: &OwnerCap,
    new_owner: Addr,
) -> Result<(), OwnershipError> {
    let mut ownership = item.load(storage)?;
    ownership.pending_owner = Some(new_owner);
    item.save(storage, &ownership)?;
    Ok(())
}

/// Step 2: the nominee takes over. Returns the previous owner.
pub fn accept(
    storage: &mut dyn Storage,
    item: &Item<Ownership>,
    sender: &Addr,
) -> Result<Addr, OwnershipError> {
    let mut ownership = item.load(storage)?;
    let pending = ownership
        .pending_owner
        .take()
        .ok_or(OwnershipError::NoPendingOwner)?;
    if pending != *sender {
        return Err(OwnershipError::NotPendingOwner);
    }
    let previous = std::mem::replace(&mut ownership.owner, pending);
    item.save(storage, &ownership)?;
    Ok(previous)
}
