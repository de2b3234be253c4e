use std::fmt;

use ed25519_dalek::{Signer as _, SigningKey};

use crate::{
    error::{WireError, WireResult},
    pubkey::{PublicKey, Signature},
};

/// Anything that can produce an ed25519 signature for a public key.
///
/// Hardware wallets and remote signers may fail, so signing is fallible.
pub trait Signer {
    fn pubkey(&self) -> PublicKey;

    fn try_sign_message(&self, message: &[u8]) -> WireResult<Signature>;
}

/// In-memory ed25519 keypair.
#[derive(Clone)]
pub struct Keypair(SigningKey);

impl Keypair {
    /// Secret seed followed by the public key.
    pub const KEYPAIR_LENGTH: usize = Self::SECRET_KEY_LENGTH + Self::PUBLIC_KEY_LENGTH;
    pub const PUBLIC_KEY_LENGTH: usize = 32;
    pub const SECRET_KEY_LENGTH: usize = 32;

    pub fn from_seed(seed: &[u8; Self::SECRET_KEY_LENGTH]) -> Self {
        Keypair(SigningKey::from_bytes(seed))
    }

    /// 64-byte keypair file form. The embedded public key must match the seed.
    pub fn from_bytes(bytes: &[u8]) -> WireResult<Self> {
        let arr: &[u8; Self::KEYPAIR_LENGTH] =
            bytes.try_into().map_err(|_| WireError::InvalidEncoding {
                kind: "keypair",
                reason: format!("expected {} bytes, got {}", Self::KEYPAIR_LENGTH, bytes.len()),
            })?;
        let key = SigningKey::from_keypair_bytes(arr).map_err(|e| WireError::InvalidEncoding {
            kind: "keypair",
            reason: e.to_string(),
        })?;
        Ok(Keypair(key))
    }

    pub fn from_base58(s: &str) -> WireResult<Self> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| WireError::InvalidEncoding {
                kind: "keypair",
                reason: e.to_string(),
            })?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> [u8; Self::KEYPAIR_LENGTH] {
        self.0.to_keypair_bytes()
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // never print the secret half
        write!(f, "Keypair({})", self.pubkey())
    }
}

impl Signer for Keypair {
    fn pubkey(&self) -> PublicKey {
        PublicKey(self.0.verifying_key().to_bytes())
    }

    fn try_sign_message(&self, message: &[u8]) -> WireResult<Signature> {
        Ok(Signature(self.0.sign(message).to_bytes()))
    }
}

impl<T: Signer + ?Sized> Signer for &T {
    fn pubkey(&self) -> PublicKey {
        (**self).pubkey()
    }

    fn try_sign_message(&self, message: &[u8]) -> WireResult<Signature> {
        (**self).try_sign_message(message)
    }
}

/// Checks `signature` over `message` against `key` with strict ed25519 rules.
pub fn verify_signature(key: &PublicKey, message: &[u8], signature: &Signature) -> bool {
    let Ok(vk) = ed25519_dalek::VerifyingKey::from_bytes(key.as_array()) else {
        return false;
    };
    let sig = ed25519_dalek::Signature::from_bytes(signature.as_array());
    vk.verify_strict(message, &sig).is_ok()
}
