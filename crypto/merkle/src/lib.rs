use npscoin_hashes::{Hash, Hasher, MerkleBranchHash, ZERO_HASH};

/// Computes the Bitcoin-style merkle root of the given leaves.
///
/// An empty input yields [`ZERO_HASH`] and a single leaf is its own root. On every
/// level with an odd number of nodes the last node is paired with itself.
pub fn calc_merkle_root(hashes: impl ExactSizeIterator<Item = Hash>) -> Hash {
    calc_merkle_root_with_hasher::<MerkleBranchHash>(hashes)
}

pub fn merkle_hash(left: Hash, right: Hash) -> Hash {
    merkle_hash_with_hasher(left, right, MerkleBranchHash::new())
}

pub fn merkle_hash_with_hasher(left: Hash, right: Hash, mut hasher: impl Hasher) -> Hash {
    hasher.update(left).update(right);
    hasher.finalize()
}

pub fn calc_merkle_root_with_hasher<H: Hasher>(hashes: impl ExactSizeIterator<Item = Hash>) -> Hash {
    if hashes.len() == 0 {
        return cold_path_empty();
    }
    let mut level: Vec<Hash> = hashes.collect();
    while level.len() > 1 {
        if level.len() % 2 == 1 {
            level.push(level[level.len() - 1]);
        }
        level = level.chunks_exact(2).map(|pair| merkle_hash_with_hasher(pair[0], pair[1], H::default())).collect();
    }
    level[0]
}

#[inline(never)]
#[cold]
fn cold_path_empty() -> Hash {
    ZERO_HASH
}

#[cfg(test)]
mod tests {
    use super::*;
    use npscoin_hashes::TransactionHash;
    use std::iter;

    fn make_hash(data: &[u8]) -> Hash {
        TransactionHash::hash(data)
    }

    #[test]
    fn test_empty_returns_zero_hash() {
        assert_eq!(calc_merkle_root(iter::empty()), ZERO_HASH);
    }

    #[test]
    fn test_single_entry_is_its_own_root() {
        let entry = make_hash(b"single_entry");
        assert_eq!(calc_merkle_root(iter::once(entry)), entry);
    }

    #[test]
    fn test_two_entries() {
        let h1 = make_hash(b"entry1");
        let h2 = make_hash(b"entry2");
        assert_eq!(calc_merkle_root([h1, h2].into_iter()), merkle_hash(h1, h2));
    }

    #[test]
    fn test_odd_level_duplicates_last() {
        let h1 = make_hash(b"h1");
        let h2 = make_hash(b"h2");
        let h3 = make_hash(b"h3");

        let root = calc_merkle_root([h1, h2, h3].into_iter());
        let expected = merkle_hash(merkle_hash(h1, h2), merkle_hash(h3, h3));
        assert_eq!(root, expected);

        // Five leaves: the odd node is duplicated on the first and second levels
        let h4 = make_hash(b"h4");
        let h5 = make_hash(b"h5");
        let root = calc_merkle_root([h1, h2, h3, h4, h5].into_iter());
        let l1 = [merkle_hash(h1, h2), merkle_hash(h3, h4), merkle_hash(h5, h5)];
        let l2 = [merkle_hash(l1[0], l1[1]), merkle_hash(l1[2], l1[2])];
        assert_eq!(root, merkle_hash(l2[0], l2[1]));
    }

    #[test]
    fn test_order_matters() {
        let h1 = make_hash(b"h1");
        let h2 = make_hash(b"h2");
        assert_ne!(calc_merkle_root([h1, h2].into_iter()), calc_merkle_root([h2, h1].into_iter()));
    }
}
