use crate::Hash;
use sha2::{Digest, Sha256};

pub trait HasherBase {
    fn update<A: AsRef<[u8]>>(&mut self, data: A) -> &mut Self;
}

pub trait Hasher: HasherBase + Clone + Default {
    fn finalize(self) -> Hash;
    fn reset(&mut self);
    #[inline(always)]
    fn hash<A: AsRef<[u8]>>(data: A) -> Hash {
        let mut hasher = Self::default();
        hasher.update(data);
        hasher.finalize()
    }
}

/// Hashes `data` in one shot with the hasher `H`.
#[inline]
pub fn hash_once<H: Hasher>(data: impl AsRef<[u8]>) -> Hash {
    H::hash(data)
}

macro_rules! sha256d_hasher {
    ($(#[$meta:meta] $name:ident),+ $(,)?) => {$(
        #[$meta]
        #[derive(Clone, Default)]
        pub struct $name(Sha256);

        impl $name {
            #[inline]
            pub fn new() -> Self {
                Self(Sha256::new())
            }
        }

        impl HasherBase for $name {
            #[inline(always)]
            fn update<A: AsRef<[u8]>>(&mut self, data: A) -> &mut Self {
                self.0.update(data);
                self
            }
        }

        impl Hasher for $name {
            #[inline]
            fn finalize(self) -> Hash {
                let first = self.0.finalize();
                Hash::from_bytes(Sha256::digest(first).into())
            }

            #[inline]
            fn reset(&mut self) {
                self.0 = Sha256::new();
            }
        }
    )+};
}

sha256d_hasher! {
    /// Double SHA-256 over the legacy transaction serialization (the transaction id)
    TransactionHash,
    /// Double SHA-256 over two concatenated child nodes of the merkle tree
    MerkleBranchHash,
}
