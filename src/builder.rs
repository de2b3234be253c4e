use ahash::AHashMap;
use smallvec::SmallVec;

use crate::{
    error::{WireError, WireResult},
    instruction::Instruction,
    message::{CompiledInstruction, Message, MessageHeader},
    pubkey::{Hash, PublicKey},
    signer::Signer,
    transaction::Transaction,
};

/// Account indices are a single byte on the wire.
pub const MAX_ACCOUNT_KEYS: usize = 256;

#[derive(Clone, Copy)]
struct KeyEntry {
    key: PublicKey,
    is_signer: bool,
    is_writable: bool,
}

impl KeyEntry {
    #[inline]
    fn class(&self) -> u8 {
        match (self.is_signer, self.is_writable) {
            (true, true) => 0,
            (true, false) => 1,
            (false, true) => 2,
            (false, false) => 3,
        }
    }
}

/// Key table in first-seen order with privileges merged per key.
#[derive(Default)]
struct KeyCollector {
    entries: SmallVec<[KeyEntry; 32]>,
    index: AHashMap<PublicKey, usize>,
}

impl KeyCollector {
    fn add(&mut self, key: PublicKey, is_signer: bool, is_writable: bool) {
        match self.index.get(&key) {
            Some(&i) => {
                let e = &mut self.entries[i];
                e.is_signer |= is_signer;
                e.is_writable |= is_writable;
            }
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(KeyEntry {
                    key,
                    is_signer,
                    is_writable,
                });
            }
        }
    }

    /// Stable partition into the four privilege classes.
    fn into_ordered(self) -> SmallVec<[KeyEntry; 32]> {
        let mut ordered = self.entries;
        ordered.sort_by_key(KeyEntry::class);
        ordered
    }
}

/// Builds the key table, header and index-based instructions.
///
/// The fee payer always lands at index 0 as a writable signer. Every other key
/// keeps its first-seen position inside its privilege class; a key seen more
/// than once takes the union of the privileges it was given. Program ids are
/// collected after all instruction accounts, as read-only non-signers unless an
/// instruction already asked for more.
pub fn compile_message(
    instructions: &[Instruction],
    fee_payer: &PublicKey,
    recent_blockhash: Hash,
) -> WireResult<Message> {
    let mut keys = KeyCollector::default();
    keys.add(*fee_payer, true, true);
    for ix in instructions {
        for meta in &ix.accounts {
            keys.add(meta.pubkey, meta.is_signer, meta.is_writable);
        }
    }
    for ix in instructions {
        keys.add(ix.program_id, false, false);
    }

    let ordered = keys.into_ordered();
    if ordered.len() > MAX_ACCOUNT_KEYS {
        return Err(WireError::IndexOutOfRange {
            index: ordered.len() - 1,
            len: MAX_ACCOUNT_KEYS,
        });
    }

    let count = |signer: bool, writable: bool| {
        ordered
            .iter()
            .filter(|e| e.is_signer == signer && (writable || !e.is_writable))
            .count()
    };
    let required = count(true, true);
    let header = MessageHeader {
        num_required_signatures: header_count(required)?,
        num_readonly_signed_accounts: header_count(count(true, false))?,
        num_readonly_unsigned_accounts: header_count(count(false, false))?,
    };

    let position: AHashMap<PublicKey, u8> = ordered
        .iter()
        .enumerate()
        .map(|(i, e)| (e.key, i as u8))
        .collect();
    let index_of = |key: &PublicKey| {
        position
            .get(key)
            .copied()
            .ok_or(WireError::IndexOutOfRange {
                index: ordered.len(),
                len: ordered.len(),
            })
    };
    let compiled = instructions
        .iter()
        .map(|ix| {
            Ok(CompiledInstruction {
                program_id_index: index_of(&ix.program_id)?,
                accounts: ix
                    .accounts
                    .iter()
                    .map(|m| index_of(&m.pubkey))
                    .collect::<WireResult<_>>()?,
                data: ix.data.clone(),
            })
        })
        .collect::<WireResult<Vec<_>>>()?;

    Ok(Message {
        header,
        account_keys: ordered.iter().map(|e| e.key).collect(),
        recent_blockhash,
        instructions: compiled,
    })
}

fn header_count(n: usize) -> WireResult<u8> {
    u8::try_from(n).map_err(|_| {
        WireError::InvalidHeader(format!("{n} accounts in one header class, at most 255 fit"))
    })
}

/// Compiles, serializes once and signs with every supplied signer.
///
/// Each signer must own one of the message's signature slots, and every slot
/// must end up filled.
pub fn build(
    instructions: &[Instruction],
    fee_payer: &PublicKey,
    recent_blockhash: Hash,
    signers: &[&dyn Signer],
) -> WireResult<Transaction> {
    let message = compile_message(instructions, fee_payer, recent_blockhash)?;
    let mut tx = Transaction::new_unsigned(message);
    tx.sign(signers)?;
    Ok(tx)
}
