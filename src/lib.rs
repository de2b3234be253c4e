//! Legacy transaction wire codec, transaction builder and fixed-layout
//! stake/vote account decoders for a Solana-style ledger.
//!
//! Everything here is synchronous and pure: bytes in, typed values out, or the
//! reverse. Network transport and key storage belong to the caller.

pub mod account;
pub mod builder;
pub mod error;
pub mod instruction;
pub mod message;
pub mod program_ids;
pub mod pubkey;
pub mod reader;
pub mod shortvec;
pub mod signer;
pub mod system;
pub mod transaction;

#[cfg(test)]
mod fixtures;

pub use account::{StakeAccount, VoteAccount};
pub use builder::{build, compile_message};
pub use error::{WireError, WireResult};
pub use instruction::{AccountMeta, Instruction};
pub use message::{CompiledInstruction, Message, MessageHeader};
pub use program_ids::{PROGRAM_IDS, ProgramIds};
pub use pubkey::{Hash, PublicKey, Signature};
pub use signer::{Keypair, Signer};
pub use transaction::Transaction;
