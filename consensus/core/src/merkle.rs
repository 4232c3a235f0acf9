use crate::tx::Transaction;
use npscoin_hashes::Hash;
use npscoin_merkle::calc_merkle_root;

pub fn calc_hash_merkle_root<'a>(txs: impl ExactSizeIterator<Item = &'a Transaction>) -> Hash {
    calc_merkle_root(txs.map(|tx| tx.id()))
}
