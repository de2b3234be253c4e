use serde::{Deserialize, Serialize};

use crate::{
    error::{WireError, WireResult},
    message::Message,
    pubkey::{PublicKey, SIGNATURE_BYTES, Signature},
    reader::WireReader,
    shortvec,
    signer::{Signer, verify_signature},
};

/// Signatures aligned with the message's first `num_required_signatures` keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub signatures: Vec<Signature>,
    pub message: Message,
}

impl Transaction {
    /// Every required slot starts as a placeholder.
    pub fn new_unsigned(message: Message) -> Self {
        let signatures = vec![Signature::default(); message.num_required_signatures()];
        Self {
            signatures,
            message,
        }
    }

    /// Places pre-computed signatures (hardware wallet, remote signer) by key.
    pub fn from_signatures<'a, I>(message: Message, signatures: I) -> WireResult<Self>
    where
        I: IntoIterator<Item = (&'a PublicKey, &'a Signature)>,
    {
        let mut tx = Self::new_unsigned(message);
        for (key, sig) in signatures {
            let slot = tx.slot_of(key)?;
            tx.signatures[slot] = *sig;
        }
        tx.check_complete()?;
        Ok(tx)
    }

    /// Transaction id: the fee payer's signature.
    pub fn signature(&self) -> Option<&Signature> {
        self.signatures.first()
    }

    pub fn is_fully_signed(&self) -> bool {
        self.signatures.len() == self.message.num_required_signatures()
            && self.signatures.iter().all(|s| !s.is_placeholder())
    }

    /// Signs with every signer and requires all slots filled afterwards.
    pub fn sign(&mut self, signers: &[&dyn Signer]) -> WireResult<()> {
        self.partial_sign(signers)?;
        self.check_complete()
    }

    /// Signs with the given signers only. Slots owned by absent signers keep
    /// whatever they held.
    ///
    /// Nothing is written unless every signer owns a slot and signs.
    pub fn partial_sign(&mut self, signers: &[&dyn Signer]) -> WireResult<()> {
        let slots = signers
            .iter()
            .map(|s| self.slot_of(&s.pubkey()))
            .collect::<WireResult<Vec<_>>>()?;

        let message = self.message.serialize()?;
        let signed = signers
            .iter()
            .map(|s| s.try_sign_message(&message))
            .collect::<WireResult<Vec<_>>>()?;

        self.signatures
            .resize(self.message.num_required_signatures(), Signature::default());
        for (slot, sig) in slots.into_iter().zip(signed) {
            self.signatures[slot] = sig;
        }
        Ok(())
    }

    /// Checks every filled slot against the serialized message.
    pub fn verify(&self) -> WireResult<()> {
        let message = self.message.serialize()?;
        for (index, (sig, key)) in self
            .signatures
            .iter()
            .zip(self.message.signer_keys())
            .enumerate()
        {
            if sig.is_placeholder() {
                continue;
            }
            if !verify_signature(key, &message, sig) {
                return Err(WireError::InvalidSignature { index, key: *key });
            }
        }
        Ok(())
    }

    fn slot_of(&self, key: &PublicKey) -> WireResult<usize> {
        self.message
            .signer_keys()
            .iter()
            .position(|k| k == key)
            .ok_or(WireError::UnknownSigner(*key))
    }

    fn check_complete(&self) -> WireResult<()> {
        let keys = self.message.signer_keys();
        for (index, key) in keys.iter().enumerate() {
            let filled = self
                .signatures
                .get(index)
                .is_some_and(|s| !s.is_placeholder());
            if !filled {
                return Err(WireError::MissingSigner { index, key: *key });
            }
        }
        Ok(())
    }

    pub fn serialized_size(&self) -> usize {
        shortvec::encoded_len(self.signatures.len())
            + self.signatures.len() * SIGNATURE_BYTES
            + self.message.serialized_size()
    }

    pub fn serialize(&self) -> WireResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.serialized_size());
        shortvec::encode_len(self.signatures.len(), &mut out)?;
        for sig in &self.signatures {
            out.extend_from_slice(sig.as_ref());
        }
        self.message.write_into(&mut out)?;
        Ok(out)
    }

    pub fn deserialize(bytes: &[u8]) -> WireResult<Self> {
        let mut r = WireReader::new(bytes);
        let n_sigs = r.read_compact_len()?;
        let mut signatures = Vec::with_capacity(n_sigs.min(r.remaining() / SIGNATURE_BYTES));
        for _ in 0..n_sigs {
            signatures.push(Signature(r.read_array()?));
        }

        let message = Message::read_from(&mut r)?;
        r.finish()?;

        if signatures.len() > message.num_required_signatures() {
            return Err(WireError::InvalidHeader(format!(
                "{} signatures for {} required signers",
                signatures.len(),
                message.num_required_signatures()
            )));
        }
        Ok(Self {
            signatures,
            message,
        })
    }
}
