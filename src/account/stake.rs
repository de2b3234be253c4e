use serde::Serialize;

use super::record_reader;
use crate::{error::WireResult, pubkey::PublicKey, reader::WireReader};

const RECORD: &str = "stake account";

/// Smallest buffer holding the state tag and [`Meta`].
pub const STAKE_ACCOUNT_MIN_LEN: usize = 120;
/// Full allocation; delegation fields are only present at this size.
pub const STAKE_ACCOUNT_LEN: usize = 200;

const DELEGATION_OFFSET: usize = 124;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StakeState {
    Uninitialized,
    Initialized,
    Delegated,
    RewardsPool,
    Unknown(u32),
}

impl From<u32> for StakeState {
    fn from(tag: u32) -> Self {
        match tag {
            0 => StakeState::Uninitialized,
            1 => StakeState::Initialized,
            2 => StakeState::Delegated,
            3 => StakeState::RewardsPool,
            other => StakeState::Unknown(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Authorized {
    pub staker: PublicKey,
    pub withdrawer: PublicKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lockup {
    pub unix_timestamp: i64,
    pub epoch: u64,
    pub custodian: PublicKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub rent_exempt_reserve: u64,
    pub authorized: Authorized,
    pub lockup: Lockup,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delegation {
    pub voter_pubkey: PublicKey,
    pub stake: u64,
    pub activation_epoch: u64,
    pub deactivation_epoch: u64,
    pub warmup_cooldown_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stake {
    pub delegation: Delegation,
    pub credits_observed: u64,
    pub flags: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StakeAccount {
    pub state: StakeState,
    pub meta: Meta,
    pub stake: Option<Stake>,
}

impl StakeAccount {
    /// Decodes the meta section, plus the delegation when the buffer is a
    /// full [`STAKE_ACCOUNT_LEN`] allocation.
    pub fn decode(data: &[u8]) -> WireResult<Self> {
        let mut r = record_reader(data, RECORD, STAKE_ACCOUNT_MIN_LEN)?;
        let state = StakeState::from(r.read_u32_le()?);
        let meta = read_meta(&mut r)?;

        let stake = if data.len() >= STAKE_ACCOUNT_LEN {
            r.skip(DELEGATION_OFFSET - r.position())?;
            Some(read_stake(&mut r)?)
        } else {
            None
        };

        Ok(StakeAccount { state, meta, stake })
    }

    pub fn is_delegated(&self) -> bool {
        self.state == StakeState::Delegated && self.stake.is_some()
    }

    /// Vote account of a delegation that has not started deactivating.
    pub fn active_voter(&self) -> Option<&PublicKey> {
        if !self.is_delegated() {
            return None;
        }
        self.stake
            .as_ref()
            .filter(|s| s.delegation.deactivation_epoch == u64::MAX)
            .map(|s| &s.delegation.voter_pubkey)
    }
}

fn read_meta(r: &mut WireReader<'_>) -> WireResult<Meta> {
    let rent_exempt_reserve = r.read_u64_le()?;
    let authorized = Authorized {
        staker: PublicKey(r.read_array()?),
        withdrawer: PublicKey(r.read_array()?),
    };
    // timestamp is stored as 4 bytes in this layout
    let lockup = Lockup {
        unix_timestamp: r.read_u32_le()? as i64,
        epoch: r.read_u64_le()?,
        custodian: PublicKey(r.read_array()?),
    };
    Ok(Meta {
        rent_exempt_reserve,
        authorized,
        lockup,
    })
}

fn read_stake(r: &mut WireReader<'_>) -> WireResult<Stake> {
    let delegation = Delegation {
        voter_pubkey: PublicKey(r.read_array()?),
        stake: r.read_u64_le()?,
        activation_epoch: r.read_u64_le()?,
        deactivation_epoch: r.read_u64_le()?,
        warmup_cooldown_rate: r.read_f64_le()?,
    };
    Ok(Stake {
        delegation,
        credits_observed: r.read_u64_le()?,
        flags: r.read_u8()?,
    })
}
