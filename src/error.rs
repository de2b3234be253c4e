use thiserror::Error;

use crate::pubkey::PublicKey;

pub type WireResult<T> = Result<T, WireError>;

/// Failures of the wire codec, the builder and the account decoders.
///
/// None of these are transient: every variant points at malformed input or a
/// caller mistake, and carries enough position/length context to diagnose the
/// offending buffer without re-running it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("compact length {value} exceeds the 3-byte range (max {max})")]
    EncodingRange { value: usize, max: usize },

    #[error("truncated input at offset {offset}: need {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("index {index} out of range for table of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid {kind} encoding: {reason}")]
    InvalidEncoding { kind: &'static str, reason: String },

    #[error("{record} buffer too small: need {needed} bytes at offset {offset}, have {len}")]
    BufferTooSmall {
        record: &'static str,
        offset: usize,
        needed: usize,
        len: usize,
    },

    #[error("signer {0} is not a required signer of the message")]
    UnknownSigner(PublicKey),

    #[error("missing signature for {key} at slot {index}")]
    MissingSigner { index: usize, key: PublicKey },

    #[error("inconsistent message header: {0}")]
    InvalidHeader(String),

    #[error("account {key} appears again at index {index}")]
    DuplicateAccount { index: usize, key: PublicKey },

    #[error("unsupported {what} version {version}")]
    UnsupportedVersion { what: &'static str, version: u32 },

    #[error("{remaining} trailing bytes after offset {offset}")]
    TrailingBytes { offset: usize, remaining: usize },

    #[error("signer {key} failed: {reason}")]
    Signing { key: PublicKey, reason: String },

    #[error("signature at slot {index} does not verify for {key}")]
    InvalidSignature { index: usize, key: PublicKey },
}
