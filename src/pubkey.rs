use std::{fmt, str::FromStr};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error as DeError, Visitor},
};

use crate::error::{WireError, WireResult};

pub const PUBKEY_BYTES: usize = 32;
pub const HASH_BYTES: usize = 32;
pub const SIGNATURE_BYTES: usize = 64;

/// Fixed-size byte newtypes with base58 text form.
///
/// The raw bytes are the wire representation; text is only ever base58.
macro_rules! base58_bytes {
    ($(#[$meta:meta])* $name:ident, $len:expr, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            pub const LEN: usize = $len;

            #[inline]
            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Copies a slice that must be exactly `LEN` bytes long.
            pub fn from_bytes(bytes: &[u8]) -> WireResult<Self> {
                let arr: [u8; $len] = bytes.try_into().map_err(|_| WireError::InvalidEncoding {
                    kind: $kind,
                    reason: format!("expected {} bytes, got {}", $len, bytes.len()),
                })?;
                Ok(Self(arr))
            }

            #[inline]
            pub const fn to_bytes(self) -> [u8; $len] {
                self.0
            }

            #[inline]
            pub const fn as_array(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self([0u8; $len])
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = WireError;

            fn from_str(s: &str) -> WireResult<Self> {
                let bytes = bs58::decode(s).into_vec().map_err(|e| WireError::InvalidEncoding {
                    kind: $kind,
                    reason: e.to_string(),
                })?;
                Self::from_bytes(&bytes)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&bs58::encode(&self.0).into_string())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct Base58Visitor;

                impl<'de> Visitor<'de> for Base58Visitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        write!(f, "a base58 {}", $kind)
                    }

                    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                    where
                        E: DeError,
                    {
                        v.parse().map_err(E::custom)
                    }
                }

                deserializer.deserialize_str(Base58Visitor)
            }
        }
    };
}

base58_bytes!(
    /// Ed25519 public key / account address.
    PublicKey,
    PUBKEY_BYTES,
    "public key"
);

base58_bytes!(
    /// Recent blockhash or durable nonce value anchoring a message.
    Hash,
    HASH_BYTES,
    "hash"
);

base58_bytes!(
    /// Ed25519 signature. All zeroes marks an unfilled slot.
    Signature,
    SIGNATURE_BYTES,
    "signature"
);

impl Signature {
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "EvN4kgKmCmYzdbd5kL8Q8YgkUW5RoqMTpBczrfLExtx7";

    #[test]
    fn parses_and_prints_base58() {
        let key: PublicKey = ALICE.parse().unwrap();
        assert_eq!(&key.0[..4], &[206, 211, 135, 230]);
        assert_eq!(key.to_string(), ALICE);
        assert_eq!(format!("{key:?}"), format!("PublicKey({ALICE})"));
    }

    #[test]
    fn system_program_is_all_ones() {
        let key: PublicKey = "11111111111111111111111111111111".parse().unwrap();
        assert_eq!(key, PublicKey::default());
    }

    #[test]
    fn wrong_length_is_invalid_encoding() {
        // 64-byte signature text is not a key
        let sig = Signature([7u8; 64]).to_string();
        let err = sig.parse::<PublicKey>().unwrap_err();
        assert!(matches!(err, WireError::InvalidEncoding { kind: "public key", .. }));

        let err = ALICE.parse::<Signature>().unwrap_err();
        assert!(matches!(err, WireError::InvalidEncoding { kind: "signature", .. }));

        assert!(PublicKey::from_bytes(&[0u8; 31]).is_err());
        assert!(Hash::from_bytes(&[0u8; 33]).is_err());
    }

    #[test]
    fn non_base58_text_is_invalid_encoding() {
        // '0', 'O', 'I' and 'l' are outside the alphabet
        assert!(matches!(
            "0OIl".parse::<Hash>(),
            Err(WireError::InvalidEncoding { kind: "hash", .. })
        ));
    }

    #[test]
    fn usable_as_map_key() {
        let mut map = ahash::AHashMap::new();
        let a: PublicKey = ALICE.parse().unwrap();
        map.insert(a, Signature([1u8; 64]));
        assert_eq!(map.get(&PublicKey::new(a.to_bytes())), Some(&Signature([1u8; 64])));
    }

    #[test]
    fn placeholder_detection() {
        assert!(Signature::default().is_placeholder());
        let mut sig = [0u8; 64];
        sig[63] = 1;
        assert!(!Signature(sig).is_placeholder());
    }

    #[test]
    fn serde_uses_base58_strings() {
        let key: PublicKey = ALICE.parse().unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{ALICE}\""));
        let back: PublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<PublicKey>("\"abc\"").is_err());
    }
}
