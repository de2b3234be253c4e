//! Fixed-layout decoders for on-chain account data.
//!
//! Each decoder checks the record's minimum size before reading any field
//! and then walks the buffer with a [`WireReader`] that reports overruns as
//! [`WireError::BufferTooSmall`].

mod stake;
mod vote;

pub use stake::{
    Authorized, Delegation, Lockup, Meta, STAKE_ACCOUNT_LEN, STAKE_ACCOUNT_MIN_LEN, Stake,
    StakeAccount, StakeState,
};
pub use vote::{
    AuthorizedVoter, BlockTimestamp, EpochCredits, LandedVote, Lockout, PRIOR_VOTERS_LEN,
    VOTE_ACCOUNT_MIN_LEN, VoteAccount, VoteStateVersion,
};

use crate::{
    error::{WireError, WireResult},
    reader::WireReader,
};

fn record_reader<'a>(
    data: &'a [u8],
    record: &'static str,
    min_len: usize,
) -> WireResult<WireReader<'a>> {
    if data.len() < min_len {
        return Err(WireError::BufferTooSmall {
            record,
            offset: 0,
            needed: min_len,
            len: data.len(),
        });
    }
    Ok(WireReader::for_record(data, record))
}
