use super::{HasherExtensions, Serializer};
use crate::tx::{Transaction, TransactionId, TransactionInput, TransactionOutput};
use npscoin_hashes::{Hasher, HasherBase, TransactionHash};

/// Returns the transaction ID, the double SHA-256 of its legacy serialization
pub fn id(tx: &Transaction) -> TransactionId {
    let mut hasher = TransactionHash::new();
    write_transaction(&mut hasher, tx);
    hasher.finalize()
}

/// Returns the legacy serialization of the transaction
pub fn serialize(tx: &Transaction) -> Vec<u8> {
    let mut serializer = Serializer::default();
    write_transaction(&mut serializer, tx);
    serializer.into_bytes()
}

fn write_transaction<T: HasherBase>(hasher: &mut T, tx: &Transaction) {
    hasher.write_i32(tx.version).write_var_int(tx.inputs.len() as u64);
    for input in tx.inputs.iter() {
        write_input(hasher, input);
    }

    hasher.write_var_int(tx.outputs.len() as u64);
    for output in tx.outputs.iter() {
        write_output(hasher, output);
    }

    hasher.write_u32(tx.lock_time);
}

#[inline(always)]
fn write_input<T: HasherBase>(hasher: &mut T, input: &TransactionInput) {
    hasher
        .update(input.previous_outpoint.transaction_id)
        .write_u32(input.previous_outpoint.index)
        .write_var_bytes(&input.signature_script)
        .write_u32(input.sequence);
}

#[inline(always)]
fn write_output<T: HasherBase>(hasher: &mut T, output: &TransactionOutput) {
    hasher.write_u64(output.value).write_var_bytes(&output.script_public_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::TransactionOutpoint;
    use npscoin_hashes::Hash;

    #[test]
    fn test_serialize_layout() {
        let tx = Transaction::new(
            2,
            vec![TransactionInput::new(TransactionOutpoint::new(Hash::from_bytes([1; 32]), 3), vec![0xab], 7)],
            vec![TransactionOutput::new(0x0102, vec![0xcd, 0xef])],
            9,
        );
        let mut expected = vec![2, 0, 0, 0, 1];
        expected.extend([1; 32]);
        expected.extend([3, 0, 0, 0, 1, 0xab, 7, 0, 0, 0, 1]);
        expected.extend([0x02, 0x01, 0, 0, 0, 0, 0, 0, 2, 0xcd, 0xef]);
        expected.extend([9, 0, 0, 0]);
        assert_eq!(serialize(&tx), expected);
    }

    #[test]
    fn test_id_is_double_sha256_of_serialization() {
        let tx = Transaction::new(1, vec![TransactionInput::coinbase(vec![0x51])], vec![TransactionOutput::new(50, vec![0x51])], 0);
        assert_eq!(tx.id(), TransactionHash::hash(serialize(&tx)));
        assert!(!tx.id().is_zero());
    }
}
