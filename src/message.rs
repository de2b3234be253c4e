use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::{
    error::{WireError, WireResult},
    instruction::{AccountMeta, Instruction, hex_bytes},
    program_ids::ProgramIds,
    pubkey::{HASH_BYTES, Hash, PUBKEY_BYTES, PublicKey},
    reader::WireReader,
    shortvec,
};

/// High bit of the first message byte marks a versioned (v0+) message.
pub const MESSAGE_VERSION_PREFIX: u8 = 0x80;

const ADVANCE_NONCE_DISCRIMINANT: u32 = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageHeader {
    pub num_required_signatures: u8,
    pub num_readonly_signed_accounts: u8,
    pub num_readonly_unsigned_accounts: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledInstruction {
    pub program_id_index: u8,
    pub accounts: Vec<u8>,
    #[serde(with = "hex_bytes")]
    pub data: Vec<u8>,
}

/// Signable body of a legacy transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub header: MessageHeader,
    pub account_keys: Vec<PublicKey>,
    pub recent_blockhash: Hash,
    pub instructions: Vec<CompiledInstruction>,
}

impl Message {
    /// Compiles `instructions` into a message paid for by `fee_payer`.
    ///
    /// See [`crate::builder::compile_message`] for the key ordering rules.
    pub fn new(
        instructions: &[Instruction],
        fee_payer: &PublicKey,
        recent_blockhash: Hash,
    ) -> WireResult<Self> {
        crate::builder::compile_message(instructions, fee_payer, recent_blockhash)
    }

    #[inline]
    pub fn num_required_signatures(&self) -> usize {
        self.header.num_required_signatures as usize
    }

    pub fn fee_payer(&self) -> Option<&PublicKey> {
        self.signer_keys().first()
    }

    /// Keys whose signature slots the transaction carries, in slot order.
    pub fn signer_keys(&self) -> &[PublicKey] {
        let n = self.num_required_signatures().min(self.account_keys.len());
        &self.account_keys[..n]
    }

    #[inline]
    pub fn is_signer(&self, index: usize) -> bool {
        index < self.num_required_signatures()
    }

    pub fn is_writable(&self, index: usize) -> bool {
        let required = self.num_required_signatures();
        let len = self.account_keys.len();
        if index >= len {
            return false;
        }
        if index < required {
            index < required.saturating_sub(self.header.num_readonly_signed_accounts as usize)
        } else {
            index < len.saturating_sub(self.header.num_readonly_unsigned_accounts as usize)
        }
    }

    /// Durable nonce reuse swaps the anchor without recompiling anything.
    pub fn set_recent_blockhash(&mut self, recent_blockhash: Hash) {
        self.recent_blockhash = recent_blockhash;
    }

    /// True when the first instruction advances a system nonce account, i.e.
    /// the blockhash field carries a durable nonce value.
    pub fn uses_durable_nonce(&self, programs: &ProgramIds) -> bool {
        let Some(ix) = self.instructions.first() else {
            return false;
        };
        let is_system = self
            .account_keys
            .get(ix.program_id_index as usize)
            .is_some_and(|k| *k == programs.system);
        is_system
            && ix.data.len() >= 4
            && ix.data[..4] == ADVANCE_NONCE_DISCRIMINANT.to_le_bytes()
    }

    /// Expands index-based instructions back into inline account lists,
    /// with privileges recovered from the header partition.
    pub fn decompile_instructions(&self) -> WireResult<Vec<Instruction>> {
        self.instructions
            .iter()
            .map(|ix| {
                let program_id = *self.key_at(ix.program_id_index)?;
                let accounts = ix
                    .accounts
                    .iter()
                    .map(|&i| {
                        let pubkey = *self.key_at(i)?;
                        Ok(AccountMeta {
                            pubkey,
                            is_signer: self.is_signer(i as usize),
                            is_writable: self.is_writable(i as usize),
                        })
                    })
                    .collect::<WireResult<Vec<_>>>()?;
                Ok(Instruction {
                    program_id,
                    accounts,
                    data: ix.data.clone(),
                })
            })
            .collect()
    }

    #[inline]
    fn key_at(&self, index: u8) -> WireResult<&PublicKey> {
        self.account_keys
            .get(index as usize)
            .ok_or(WireError::IndexOutOfRange {
                index: index as usize,
                len: self.account_keys.len(),
            })
    }

    /// Structural checks every decoded message must pass.
    pub fn sanitize(&self) -> WireResult<()> {
        let h = &self.header;
        if h.num_readonly_signed_accounts > h.num_required_signatures {
            return Err(WireError::InvalidHeader(format!(
                "{} read-only signed accounts but only {} signers",
                h.num_readonly_signed_accounts, h.num_required_signatures
            )));
        }
        let partitioned =
            h.num_required_signatures as usize + h.num_readonly_unsigned_accounts as usize;
        if partitioned > self.account_keys.len() {
            return Err(WireError::InvalidHeader(format!(
                "header covers {partitioned} accounts, table has {}",
                self.account_keys.len()
            )));
        }

        let mut seen = AHashSet::with_capacity(self.account_keys.len());
        for (index, key) in self.account_keys.iter().enumerate() {
            if !seen.insert(key) {
                return Err(WireError::DuplicateAccount { index, key: *key });
            }
        }

        for ix in &self.instructions {
            self.key_at(ix.program_id_index)?;
            for &i in &ix.accounts {
                self.key_at(i)?;
            }
        }
        Ok(())
    }

    pub fn serialized_size(&self) -> usize {
        let instructions: usize = self
            .instructions
            .iter()
            .map(|ix| {
                1 + shortvec::encoded_len(ix.accounts.len())
                    + ix.accounts.len()
                    + shortvec::encoded_len(ix.data.len())
                    + ix.data.len()
            })
            .sum();
        3 + shortvec::encoded_len(self.account_keys.len())
            + self.account_keys.len() * PUBKEY_BYTES
            + HASH_BYTES
            + shortvec::encoded_len(self.instructions.len())
            + instructions
    }

    /// Exact bytes that signers sign and that follow the signatures on the wire.
    pub fn serialize(&self) -> WireResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.serialized_size());
        self.write_into(&mut out)?;
        Ok(out)
    }

    pub(crate) fn write_into(&self, out: &mut Vec<u8>) -> WireResult<()> {
        out.extend_from_slice(&[
            self.header.num_required_signatures,
            self.header.num_readonly_signed_accounts,
            self.header.num_readonly_unsigned_accounts,
        ]);

        shortvec::encode_len(self.account_keys.len(), out)?;
        for key in &self.account_keys {
            out.extend_from_slice(key.as_ref());
        }

        out.extend_from_slice(self.recent_blockhash.as_ref());

        shortvec::encode_len(self.instructions.len(), out)?;
        for ix in &self.instructions {
            out.push(ix.program_id_index);
            shortvec::encode_len(ix.accounts.len(), out)?;
            out.extend_from_slice(&ix.accounts);
            shortvec::encode_len(ix.data.len(), out)?;
            out.extend_from_slice(&ix.data);
        }
        Ok(())
    }

    /// Decodes a standalone message; the buffer must hold nothing else.
    pub fn deserialize(bytes: &[u8]) -> WireResult<Self> {
        let mut reader = WireReader::new(bytes);
        let message = Self::read_from(&mut reader)?;
        reader.finish()?;
        Ok(message)
    }

    pub(crate) fn read_from(r: &mut WireReader<'_>) -> WireResult<Self> {
        let first = r.read_u8()?;
        if first & MESSAGE_VERSION_PREFIX != 0 {
            return Err(WireError::UnsupportedVersion {
                what: "message",
                version: (first & !MESSAGE_VERSION_PREFIX) as u32,
            });
        }
        let header = MessageHeader {
            num_required_signatures: first,
            num_readonly_signed_accounts: r.read_u8()?,
            num_readonly_unsigned_accounts: r.read_u8()?,
        };

        let n_keys = r.read_compact_len()?;
        let mut account_keys = Vec::with_capacity(n_keys.min(r.remaining() / PUBKEY_BYTES));
        for _ in 0..n_keys {
            account_keys.push(PublicKey(r.read_array()?));
        }

        let recent_blockhash = Hash(r.read_array()?);

        let n_ix = r.read_compact_len()?;
        // every instruction needs at least three bytes
        let mut instructions = Vec::with_capacity(n_ix.min(r.remaining() / 3));
        for _ in 0..n_ix {
            let program_id_index = r.read_u8()?;
            let n_accounts = r.read_compact_len()?;
            let accounts = r.read_bytes(n_accounts)?.to_vec();
            let n_data = r.read_compact_len()?;
            let data = r.read_bytes(n_data)?.to_vec();
            instructions.push(CompiledInstruction {
                program_id_index,
                accounts,
                data,
            });
        }

        let message = Message {
            header,
            account_keys,
            recent_blockhash,
            instructions,
        };
        message.sanitize()?;
        Ok(message)
    }
}
