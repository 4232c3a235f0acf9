use crate::config::constants::consensus::{NULL_OUTPOINT_INDEX, SEQUENCE_FINAL};
use crate::hashing;
use npscoin_hashes::{Hash, ZERO_HASH};
use std::fmt::{Display, Formatter};

/// Represents the ID of a transaction
pub type TransactionId = Hash;

/// Represents a transaction outpoint
#[derive(Eq, Hash, PartialEq, Debug, Copy, Clone)]
pub struct TransactionOutpoint {
    pub transaction_id: TransactionId,
    pub index: u32,
}

impl TransactionOutpoint {
    pub fn new(transaction_id: TransactionId, index: u32) -> Self {
        Self { transaction_id, index }
    }

    /// The outpoint referenced by coinbase inputs
    pub const fn null() -> Self {
        Self { transaction_id: ZERO_HASH, index: NULL_OUTPOINT_INDEX }
    }

    pub fn is_null(&self) -> bool {
        self.transaction_id.is_zero() && self.index == NULL_OUTPOINT_INDEX
    }
}

impl Display for TransactionOutpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.transaction_id, self.index)
    }
}

/// Represents a transaction input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionInput {
    pub previous_outpoint: TransactionOutpoint,
    pub signature_script: Vec<u8>,
    pub sequence: u32,
}

impl TransactionInput {
    pub fn new(previous_outpoint: TransactionOutpoint, signature_script: Vec<u8>, sequence: u32) -> Self {
        Self { previous_outpoint, signature_script, sequence }
    }

    /// Builds the single input of a coinbase transaction
    pub fn coinbase(signature_script: Vec<u8>) -> Self {
        Self::new(TransactionOutpoint::null(), signature_script, SEQUENCE_FINAL)
    }
}

/// Represents a transaction output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionOutput {
    pub value: u64,
    pub script_public_key: Vec<u8>,
}

impl TransactionOutput {
    pub fn new(value: u64, script_public_key: Vec<u8>) -> Self {
        Self { value, script_public_key }
    }
}

/// Represents a transaction in its legacy (pre-segwit) form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,

    // A field that is used to cache the transaction ID.
    // Always use the `id()` accessor instead of this field directly
    id: TransactionId,
}

impl Transaction {
    pub fn new(version: i32, inputs: Vec<TransactionInput>, outputs: Vec<TransactionOutput>, lock_time: u32) -> Self {
        let mut tx = Self { version, inputs, outputs, lock_time, id: Default::default() };
        tx.finalize();
        tx
    }

    /// Recompute and finalize the tx id based on updated tx fields
    pub fn finalize(&mut self) {
        self.id = hashing::tx::id(self);
    }

    /// Returns the transaction ID
    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// Determines whether or not a transaction is a coinbase transaction. A coinbase
    /// transaction is a special transaction created by miners that distributes fees and block subsidy
    /// to the previous blocks' miners, and specifies the script_pub_key that will be used to pay the current
    /// miner in future blocks. It has exactly one input which spends the null outpoint.
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_outpoint.is_null()
    }

    /// Sum of all output values
    pub fn total_output_value(&self) -> u64 {
        self.outputs.iter().map(|output| output.value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coinbase_detection() {
        let coinbase = Transaction::new(1, vec![TransactionInput::coinbase(vec![1, 2])], vec![TransactionOutput::new(5, vec![])], 0);
        assert!(coinbase.is_coinbase());
        assert_eq!(coinbase.inputs[0].sequence, u32::MAX);

        let spend_outpoint = TransactionOutpoint::new(coinbase.id(), 0);
        assert!(!spend_outpoint.is_null());
        let spend = Transaction::new(1, vec![TransactionInput::new(spend_outpoint, vec![], 0)], vec![], 0);
        assert!(!spend.is_coinbase());
    }

    #[test]
    fn test_finalize_refreshes_id() {
        let mut tx = Transaction::new(1, vec![TransactionInput::coinbase(vec![])], vec![TransactionOutput::new(5, vec![])], 0);
        let id = tx.id();
        tx.outputs[0].value = 6;
        assert_eq!(id, tx.id());
        tx.finalize();
        assert_ne!(id, tx.id());
        assert_eq!(tx.total_output_value(), 6);
    }
}
