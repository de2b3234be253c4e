//! System program instructions: u32 LE discriminant followed by the fields.

use crate::{
    instruction::{AccountMeta, Instruction},
    program_ids::PROGRAM_IDS,
    pubkey::PublicKey,
};

const TRANSFER: u32 = 2;
const ADVANCE_NONCE_ACCOUNT: u32 = 4;

pub fn transfer(from: &PublicKey, to: &PublicKey, lamports: u64) -> Instruction {
    let mut data = Vec::with_capacity(12);
    data.extend_from_slice(&TRANSFER.to_le_bytes());
    data.extend_from_slice(&lamports.to_le_bytes());
    Instruction::new(
        PROGRAM_IDS.system,
        vec![AccountMeta::new(*from, true), AccountMeta::new(*to, false)],
        data,
    )
}

/// Must be the first instruction of a durable-nonce transaction.
pub fn advance_nonce_account(nonce: &PublicKey, authority: &PublicKey) -> Instruction {
    Instruction::new(
        PROGRAM_IDS.system,
        vec![
            AccountMeta::new(*nonce, false),
            AccountMeta::new_readonly(PROGRAM_IDS.sysvar_recent_blockhashes, false),
            AccountMeta::new_readonly(*authority, true),
        ],
        ADVANCE_NONCE_ACCOUNT.to_le_bytes().to_vec(),
    )
}
