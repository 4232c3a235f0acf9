use crate::{header::Header, merkle::calc_hash_merkle_root, tx::Transaction};
use npscoin_hashes::Hash;
use std::sync::Arc;

/// A block: a header committing to an ordered list of transactions
#[derive(Debug, Clone)]
pub struct Block {
    pub header: Header,
    pub transactions: Arc<Vec<Transaction>>,
}

impl Block {
    pub fn new(header: Header, transactions: Vec<Transaction>) -> Self {
        Self { header, transactions: Arc::new(transactions) }
    }

    /// Computes the merkle root over the transactions. Compare against
    /// `header.hash_merkle_root` to check the commitment.
    pub fn merkle_root(&self) -> Hash {
        calc_hash_merkle_root(self.transactions.iter())
    }
}
