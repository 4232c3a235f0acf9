use super::{HasherExtensions, Serializer};
use crate::header::Header;
use npscoin_hashes::{Hash, Hasher, HasherBase};

/// Returns the header hash under `H` using the provided nonce+time instead of those in the header.
#[inline]
pub fn hash_override_nonce_time<H: Hasher>(header: &Header, nonce: u32, time: u32) -> Hash {
    let mut hasher = H::default();
    write_header(&mut hasher, header, nonce, time);
    hasher.finalize()
}

/// Returns the header hash under `H`.
pub fn hash<H: Hasher>(header: &Header) -> Hash {
    hash_override_nonce_time::<H>(header, header.nonce, header.time)
}

/// Returns the 80-byte header serialization
pub fn serialize(header: &Header) -> Vec<u8> {
    let mut serializer = Serializer::default();
    write_header(&mut serializer, header, header.nonce, header.time);
    serializer.into_bytes()
}

fn write_header<T: HasherBase>(hasher: &mut T, header: &Header, nonce: u32, time: u32) {
    hasher
        .write_i32(header.version)
        .update(header.hash_prev_block)
        .update(header.hash_merkle_root)
        .write_u32(time)
        .write_u32(header.bits)
        .write_u32(nonce);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{constants::consensus::BLOCK_HEADER_SIZE, genesis::MAINNET_GENESIS};
    use npscoin_hashes::{TransactionHash, ZERO_HASH};
    use std::str::FromStr;

    #[test]
    fn test_header_hashing() {
        let header = Header::new(1, ZERO_HASH, Hash::from_bytes([7; 32]), 234, 0x1e0ffff0, 567);
        assert_eq!(hash::<TransactionHash>(&header), TransactionHash::hash(serialize(&header)));
        assert_eq!(serialize(&header).len(), BLOCK_HEADER_SIZE);
    }

    #[test]
    fn test_double_sha256_of_genesis_header() {
        let header = MAINNET_GENESIS.build().header;
        let expected = Hash::from_str("e43930c68ec31307cfd9c906fcb9718200d9c4f046a02833162cbf1d030767da").unwrap();
        assert_eq!(hash::<TransactionHash>(&header), expected);

        let next_nonce = Hash::from_str("cb7417c1e8363814f307211c51867d07f45fe2aab9ec5c0274a9030242c0816d").unwrap();
        assert_eq!(hash_override_nonce_time::<TransactionHash>(&header, header.nonce + 1, header.time), next_nonce);
    }

    #[test]
    fn test_override_nonce_time() {
        let header = Header::new(1, ZERO_HASH, ZERO_HASH, 100, 0x207fffff, 1);
        let hash = hash::<TransactionHash>(&header);
        assert_eq!(hash_override_nonce_time::<TransactionHash>(&header, 1, 100), hash);
        assert_ne!(hash_override_nonce_time::<TransactionHash>(&header, 2, 100), hash);
        assert_ne!(hash_override_nonce_time::<TransactionHash>(&header, 1, 101), hash);
    }
}
