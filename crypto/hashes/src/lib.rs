mod hashers;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{Debug, Display, Formatter};
use std::str::{self, FromStr};

pub use hashers::*;

pub const HASH_SIZE: usize = 32;

/// A 256-bit hash stored in internal (little-endian) byte order.
///
/// The textual form follows the Bitcoin convention of printing the bytes in
/// reverse, so that a proof-of-work hash reads with its leading zeros first.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Default, PartialOrd, Ord)]
pub struct Hash([u8; HASH_SIZE]);

pub const ZERO_HASH: Hash = Hash([0; HASH_SIZE]);

impl Hash {
    #[inline(always)]
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    /// Builds a hash from bytes written in display order (most significant byte first),
    /// e.g. `Hash::from_display_bytes(hex!("00000b72..."))`.
    pub const fn from_display_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        let mut out = [0u8; HASH_SIZE];
        let mut i = 0;
        while i < HASH_SIZE {
            out[i] = bytes[HASH_SIZE - 1 - i];
            i += 1;
        }
        Hash(out)
    }

    #[inline(always)]
    pub const fn as_bytes(self) -> [u8; HASH_SIZE] {
        self.0
    }

    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.0 == ZERO_HASH.0
    }
}

impl AsRef<[u8]> for Hash {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Hash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        let mut hex = [0u8; HASH_SIZE * 2];
        let encoded = faster_hex::hex_encode(&reversed, &mut hex).map_err(|_| std::fmt::Error)?;
        f.write_str(encoded)
    }
}

impl Debug for Hash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for Hash {
    type Err = faster_hex::Error;

    /// Parses the display form. An optional `0x` prefix is accepted, but the
    /// digits must cover all 32 bytes.
    fn from_str(hash_str: &str) -> Result<Self, Self::Err> {
        let hash_str = hash_str.strip_prefix("0x").unwrap_or(hash_str);
        if hash_str.len() != HASH_SIZE * 2 {
            return Err(faster_hex::Error::InvalidLength(hash_str.len()));
        }
        let mut bytes = [0u8; HASH_SIZE];
        faster_hex::hex_decode(hash_str.as_bytes(), &mut bytes)?;
        Ok(Hash::from_display_bytes(bytes))
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Hash::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_hash_basics() {
        let hash_str = "00000b72cc1c26003ab8060e62a8eb98684c275d1cd989a2c9af3f9676a3f621";
        let hash = Hash::from_str(hash_str).unwrap();
        assert_eq!(hash_str, hash.to_string());
        assert_eq!(hash.as_bytes()[31], 0x00);
        assert_eq!(hash.as_bytes()[0], 0x21);
        assert_eq!(hash, Hash::from_str(&format!("0x{hash_str}")).unwrap());

        let hash2 = Hash::from_str("00000b72cc1c26003ab8060e62a8eb98684c275d1cd989a2c9af3f9676a3f622").unwrap();
        assert_ne!(hash, hash2);

        let odd_str = "00000b72cc1c26003ab8060e62a8eb98684c275d1cd989a2c9af3f9676a3f62";
        assert_eq!(Hash::from_str(odd_str), Err(faster_hex::Error::InvalidLength(63)));
        assert!(Hash::from_str("0x00").is_err());
        assert!(Hash::from_str(&"g".repeat(64)).is_err());
    }

    #[test]
    fn test_display_bytes_const() {
        const GENESIS: Hash = Hash::from_display_bytes(hex!("1d1426e15dffce0c064cabb5227013b3a200feb0416114ff5cf8600f0a95ad43"));
        assert_eq!(GENESIS.to_string(), "1d1426e15dffce0c064cabb5227013b3a200feb0416114ff5cf8600f0a95ad43");
        assert!(ZERO_HASH.is_zero());
        assert!(!GENESIS.is_zero());
    }

    #[test]
    fn test_serde_uses_display_form() {
        let hash = Hash::from_str("2a99a8553e97400c92e45dfd3bff779f83ae2f9cf51c7287d2dbd8fa4a2101ab").unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, "\"2a99a8553e97400c92e45dfd3bff779f83ae2f9cf51c7287d2dbd8fa4a2101ab\"");
        assert_eq!(serde_json::from_str::<Hash>(&json).unwrap(), hash);
    }
}
