use serde::Serialize;

use super::record_reader;
use crate::{
    error::{WireError, WireResult},
    pubkey::PublicKey,
    reader::WireReader,
};

const RECORD: &str = "vote account";

pub const VOTE_ACCOUNT_MIN_LEN: usize = 3762;

/// Prior-voters circular buffer: 32 entries of (pubkey, start epoch, end
/// epoch), the cursor and the is-empty flag. Never decoded.
pub const PRIOR_VOTERS_LEN: usize = 32 * (32 + 8 + 8) + 8 + 1;

const LOCKOUT_LEN: usize = 8 + 4;
const LANDED_VOTE_LEN: usize = 1 + LOCKOUT_LEN;
const AUTHORIZED_VOTER_LEN: usize = 8 + 32;
const EPOCH_CREDITS_LEN: usize = 3 * 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VoteStateVersion {
    V1_14_11,
    Current,
}

impl VoteStateVersion {
    fn from_tag(tag: u32) -> WireResult<Self> {
        match tag {
            1 => Ok(VoteStateVersion::V1_14_11),
            2 => Ok(VoteStateVersion::Current),
            version => Err(WireError::UnsupportedVersion {
                what: RECORD,
                version,
            }),
        }
    }

    fn vote_len(self) -> usize {
        match self {
            VoteStateVersion::V1_14_11 => LOCKOUT_LEN,
            VoteStateVersion::Current => LANDED_VOTE_LEN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lockout {
    pub slot: u64,
    pub confirmation_count: u32,
}

/// A vote with the slots it took to land. `V1_14_11` records carry no
/// latency; it reads as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LandedVote {
    pub latency: u8,
    pub lockout: Lockout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuthorizedVoter {
    pub epoch: u64,
    pub pubkey: PublicKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpochCredits {
    pub epoch: u64,
    pub credits: u64,
    pub previous_credits: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockTimestamp {
    pub slot: u64,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteAccount {
    pub version: VoteStateVersion,
    pub node_pubkey: PublicKey,
    pub authorized_withdrawer: PublicKey,
    pub commission: u8,
    pub votes: Vec<LandedVote>,
    pub root_slot: Option<u64>,
    pub authorized_voters: Vec<AuthorizedVoter>,
    pub epoch_credits: Vec<EpochCredits>,
    pub last_timestamp: BlockTimestamp,
}

impl VoteAccount {
    pub fn decode(data: &[u8]) -> WireResult<Self> {
        let mut r = record_reader(data, RECORD, VOTE_ACCOUNT_MIN_LEN)?;
        let version = VoteStateVersion::from_tag(r.read_u32_le()?)?;
        let node_pubkey = PublicKey(r.read_array()?);
        let authorized_withdrawer = PublicKey(r.read_array()?);
        let commission = r.read_u8()?;

        let n = r.read_u64_count(version.vote_len())?;
        let mut votes = Vec::with_capacity(n);
        for _ in 0..n {
            let latency = match version {
                VoteStateVersion::Current => r.read_u8()?,
                VoteStateVersion::V1_14_11 => 0,
            };
            let lockout = Lockout {
                slot: r.read_u64_le()?,
                confirmation_count: r.read_u32_le()?,
            };
            votes.push(LandedVote { latency, lockout });
        }

        let root_slot = read_option_u64(&mut r)?;

        let n = r.read_u64_count(AUTHORIZED_VOTER_LEN)?;
        let mut authorized_voters = Vec::with_capacity(n);
        for _ in 0..n {
            authorized_voters.push(AuthorizedVoter {
                epoch: r.read_u64_le()?,
                pubkey: PublicKey(r.read_array()?),
            });
        }

        r.skip(PRIOR_VOTERS_LEN)?;

        let n = r.read_u64_count(EPOCH_CREDITS_LEN)?;
        let mut epoch_credits = Vec::with_capacity(n);
        for _ in 0..n {
            epoch_credits.push(EpochCredits {
                epoch: r.read_u64_le()?,
                credits: r.read_u64_le()?,
                previous_credits: r.read_u64_le()?,
            });
        }

        let last_timestamp = BlockTimestamp {
            slot: r.read_u64_le()?,
            timestamp: r.read_i64_le()?,
        };

        Ok(VoteAccount {
            version,
            node_pubkey,
            authorized_withdrawer,
            commission,
            votes,
            root_slot,
            authorized_voters,
            epoch_credits,
            last_timestamp,
        })
    }

    pub fn last_voted_slot(&self) -> Option<u64> {
        self.votes.last().map(|v| v.lockout.slot)
    }

    /// Cumulative credits as of the latest recorded epoch.
    pub fn credits(&self) -> u64 {
        self.epoch_credits.last().map_or(0, |c| c.credits)
    }

    /// Voter authorized for `epoch`: the latest entry at or before it.
    pub fn authorized_voter(&self, epoch: u64) -> Option<&PublicKey> {
        self.authorized_voters
            .iter()
            .filter(|v| v.epoch <= epoch)
            .max_by_key(|v| v.epoch)
            .map(|v| &v.pubkey)
    }
}

fn read_option_u64(r: &mut WireReader<'_>) -> WireResult<Option<u64>> {
    let offset = r.position();
    match r.read_u8()? {
        0 => Ok(None),
        1 => Ok(Some(r.read_u64_le()?)),
        tag => Err(WireError::InvalidEncoding {
            kind: RECORD,
            reason: format!("option tag {tag} at offset {offset}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    struct Record {
        version: u32,
        votes: Vec<(u8, u64, u32)>,
        root: Option<u64>,
        voters: Vec<(u64, u8)>,
        credits: Vec<(u64, u64, u64)>,
    }

    impl Record {
        fn sample(version: u32) -> Self {
            Record {
                version,
                votes: vec![(1, 250_000_100, 31), (2, 250_000_101, 30), (1, 250_000_102, 1)],
                root: Some(250_000_069),
                voters: vec![(600, 7), (602, 8)],
                credits: vec![(600, 1_000, 0), (601, 2_500, 1_000)],
            }
        }

        fn encode(&self) -> Vec<u8> {
            let mut b = Vec::with_capacity(VOTE_ACCOUNT_MIN_LEN);
            b.extend_from_slice(&self.version.to_le_bytes());
            b.extend_from_slice(&[0xaa; 32]);
            b.extend_from_slice(&[0xbb; 32]);
            b.push(10);
            b.extend_from_slice(&(self.votes.len() as u64).to_le_bytes());
            for &(latency, slot, conf) in &self.votes {
                if self.version == 2 {
                    b.push(latency);
                }
                b.extend_from_slice(&slot.to_le_bytes());
                b.extend_from_slice(&conf.to_le_bytes());
            }
            match self.root {
                Some(slot) => {
                    b.push(1);
                    b.extend_from_slice(&slot.to_le_bytes());
                }
                None => b.push(0),
            }
            b.extend_from_slice(&(self.voters.len() as u64).to_le_bytes());
            for &(epoch, fill) in &self.voters {
                b.extend_from_slice(&epoch.to_le_bytes());
                b.extend_from_slice(&[fill; 32]);
            }
            b.extend_from_slice(&[0x55; PRIOR_VOTERS_LEN]);
            b.extend_from_slice(&(self.credits.len() as u64).to_le_bytes());
            for &(epoch, credits, prev) in &self.credits {
                b.extend_from_slice(&epoch.to_le_bytes());
                b.extend_from_slice(&credits.to_le_bytes());
                b.extend_from_slice(&prev.to_le_bytes());
            }
            b.extend_from_slice(&250_000_102u64.to_le_bytes());
            b.extend_from_slice(&(-3i64).to_le_bytes());
            b.resize(VOTE_ACCOUNT_MIN_LEN, 0);
            b
        }
    }

    #[test]
    fn prior_voters_region_size() {
        assert_eq!(PRIOR_VOTERS_LEN, 1545);
    }

    #[test]
    fn decodes_current_record() {
        let acct = VoteAccount::decode(&Record::sample(2).encode()).unwrap();
        assert_eq!(acct.version, VoteStateVersion::Current);
        assert_eq!(acct.node_pubkey, PublicKey([0xaa; 32]));
        assert_eq!(acct.authorized_withdrawer, PublicKey([0xbb; 32]));
        assert_eq!(acct.commission, 10);
        assert_eq!(acct.votes.len(), 3);
        assert_eq!(
            acct.votes[1],
            LandedVote {
                latency: 2,
                lockout: Lockout {
                    slot: 250_000_101,
                    confirmation_count: 30
                }
            }
        );
        assert_eq!(acct.root_slot, Some(250_000_069));
        assert_eq!(acct.authorized_voters.len(), 2);
        assert_eq!(acct.epoch_credits[1].previous_credits, 1_000);
        assert_eq!(
            acct.last_timestamp,
            BlockTimestamp {
                slot: 250_000_102,
                timestamp: -3
            }
        );
        assert_eq!(acct.last_voted_slot(), Some(250_000_102));
        assert_eq!(acct.credits(), 2_500);
        assert_eq!(acct.authorized_voter(601), Some(&PublicKey([7; 32])));
        assert_eq!(acct.authorized_voter(700), Some(&PublicKey([8; 32])));
        assert_eq!(acct.authorized_voter(10), None);
    }

    #[test]
    fn decodes_v1_14_11_record() {
        let acct = VoteAccount::decode(&Record::sample(1).encode()).unwrap();
        assert_eq!(acct.version, VoteStateVersion::V1_14_11);
        assert!(acct.votes.iter().all(|v| v.latency == 0));
        assert_eq!(acct.votes[0].lockout.confirmation_count, 31);
        assert_eq!(acct.last_timestamp.timestamp, -3);
        assert_eq!(acct.credits(), 2_500);
    }

    #[test]
    fn empty_record() {
        let rec = Record {
            version: 2,
            votes: vec![],
            root: None,
            voters: vec![],
            credits: vec![],
        };
        let acct = VoteAccount::decode(&rec.encode()).unwrap();
        assert!(acct.votes.is_empty());
        assert_eq!(acct.root_slot, None);
        assert_eq!(acct.last_voted_slot(), None);
        assert_eq!(acct.credits(), 0);
    }

    #[test]
    fn short_buffer_is_rejected_before_reading() {
        let b = Record::sample(2).encode();
        assert_eq!(
            VoteAccount::decode(&b[..VOTE_ACCOUNT_MIN_LEN - 1]).unwrap_err(),
            WireError::BufferTooSmall {
                record: "vote account",
                offset: 0,
                needed: VOTE_ACCOUNT_MIN_LEN,
                len: VOTE_ACCOUNT_MIN_LEN - 1
            }
        );
    }

    #[test_case(0)]
    #[test_case(3)]
    fn unsupported_versions(version: u32) {
        let mut b = Record::sample(2).encode();
        b[..4].copy_from_slice(&version.to_le_bytes());
        assert_eq!(
            VoteAccount::decode(&b).unwrap_err(),
            WireError::UnsupportedVersion {
                what: "vote account",
                version
            }
        );
    }

    #[test]
    fn vote_count_overrun() {
        let mut b = Record::sample(2).encode();
        // count sits right after version, keys and commission
        b[69..77].copy_from_slice(&1_000u64.to_le_bytes());
        assert!(matches!(
            VoteAccount::decode(&b),
            Err(WireError::BufferTooSmall {
                record: "vote account",
                offset: 77,
                needed: 13_000,
                ..
            })
        ));
    }

    #[test]
    fn epoch_credits_overrun() {
        let rec = Record::sample(2);
        let mut b = rec.encode();
        let at = 4 + 32 + 32 + 1 + 8 + 3 * 13 + 9 + 8 + 2 * 40 + PRIOR_VOTERS_LEN;
        assert_eq!(b[at..at + 8], 2u64.to_le_bytes());
        b[at..at + 8].copy_from_slice(&u64::MAX.to_le_bytes());
        assert!(matches!(
            VoteAccount::decode(&b),
            Err(WireError::BufferTooSmall { offset, .. }) if offset == at + 8
        ));
    }

    #[test]
    fn bad_root_slot_tag() {
        let mut b = Record::sample(1).encode();
        let at = 4 + 32 + 32 + 1 + 8 + 3 * 12;
        assert_eq!(b[at], 1);
        b[at] = 7;
        assert!(matches!(
            VoteAccount::decode(&b),
            Err(WireError::InvalidEncoding {
                kind: "vote account",
                ..
            })
        ));
    }
}
