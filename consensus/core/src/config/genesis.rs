use crate::{
    block::Block,
    config::constants::consensus::COIN,
    errors::genesis::{GenesisError, GenesisResult},
    header::Header,
    merkle::calc_hash_merkle_root,
    script::{ScriptBuilder, ScriptNum, pay_to_pub_key},
    tx::{Transaction, TransactionInput, TransactionOutput},
};
use hex_literal::hex;
use npscoin_hashes::{Hash, Hasher, ZERO_HASH};

/// Message embedded in the coinbase of every genesis block
pub const GENESIS_TIMESTAMP_MESSAGE: &str = "Technological Infrastructure For Masternodes. NPSCoin was born on September 22, 2018.";

/// Public key the genesis reward is paid to. The output is never spendable.
pub const GENESIS_OUTPUT_PUB_KEY: [u8; 65] = hex!(
    "044a288d3c33fdd4df16325b6c6455604282487822f6b583b2b1ab461bcd4beb3ff99abd77af2a5eec906162408f1e19f4ecaf0a9a12317cfef5acec933d562739"
);

/// The bits literal pushed first in the genesis signature script (`0x1d00ffff`)
const GENESIS_SCRIPT_BITS: i64 = 486604799;

/// The small integer pushed after the bits literal
const GENESIS_SCRIPT_TAG: i64 = 4;

/// The inputs a network's genesis block is built from, along with the commitments
/// the built block must carry. `hash` is the recorded header hash, the identity
/// of the network's chain.
#[derive(Clone, Copy, Debug)]
pub struct GenesisBlock {
    pub hash: Hash,
    pub hash_merkle_root: Hash,
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    pub reward: u64,
    pub timestamp_message: &'static str,
    pub output_pub_key: &'static [u8],
}

impl GenesisBlock {
    /// Builds the genesis block from its inputs, without checking the outcome
    pub fn build(&self) -> Block {
        create_genesis_block(
            self.timestamp_message.as_bytes(),
            &pay_to_pub_key(self.output_pub_key),
            self.time,
            self.nonce,
            self.bits,
            self.version,
            self.reward,
        )
    }

    /// Checks that `block` commits to the expected merkle root and that the recorded
    /// genesis hash satisfies the target of the genesis bits
    pub fn verify(&self, block: &Block) -> GenesisResult<()> {
        let merkle_root = block.merkle_root();
        if merkle_root != self.hash_merkle_root || block.header.hash_merkle_root != self.hash_merkle_root {
            return Err(GenesisError::MerkleRootMismatch { expected: self.hash_merkle_root, computed: merkle_root });
        }
        if block.header.target().is_none() {
            return Err(GenesisError::InvalidBits(block.header.bits));
        }
        if !block.header.meets_target(self.hash) {
            return Err(GenesisError::HashAboveTarget { hash: self.hash, bits: block.header.bits });
        }
        Ok(())
    }

    /// Checks that the header of `block` hashes to the recorded genesis hash under the
    /// network's header commitment hasher `H`
    pub fn verify_hash<H: Hasher>(&self, block: &Block) -> GenesisResult<()> {
        let computed = block.header.hash::<H>();
        if computed != self.hash {
            return Err(GenesisError::HashMismatch { expected: self.hash, computed });
        }
        Ok(())
    }

    pub fn build_verified(&self) -> GenesisResult<Block> {
        let block = self.build();
        self.verify(&block)?;
        Ok(block)
    }
}

/// Builds the signature script of the genesis coinbase: the bits literal, a small
/// tag and the raw message bytes, each pushed as data.
pub fn genesis_signature_script(message: &[u8]) -> Vec<u8> {
    ScriptBuilder::new().add_i64(GENESIS_SCRIPT_BITS).add_script_num(ScriptNum(GENESIS_SCRIPT_TAG)).add_data(message).drain()
}

/// Builds a genesis block: a single coinbase paying `reward` to `output_script`, under a
/// header with an all-zero previous hash which commits to the coinbase through the merkle root.
pub fn create_genesis_block(message: &[u8], output_script: &[u8], time: u32, nonce: u32, bits: u32, version: i32, reward: u64) -> Block {
    let coinbase = Transaction::new(
        1,
        vec![TransactionInput::coinbase(genesis_signature_script(message))],
        vec![TransactionOutput::new(reward, output_script.to_vec())],
        0,
    );
    let transactions = vec![coinbase];
    let hash_merkle_root = calc_hash_merkle_root(transactions.iter());
    let header = Header::new(version, ZERO_HASH, hash_merkle_root, time, bits, nonce);
    Block::new(header, transactions)
}

const GENESIS_MERKLE_ROOT: Hash = Hash::from_display_bytes(hex!("2a99a8553e97400c92e45dfd3bff779f83ae2f9cf51c7287d2dbd8fa4a2101ab"));

pub const GENESIS_REWARD: u64 = 16 * COIN;

pub const MAINNET_GENESIS: GenesisBlock = GenesisBlock {
    hash: Hash::from_display_bytes(hex!("00000b72cc1c26003ab8060e62a8eb98684c275d1cd989a2c9af3f9676a3f621")),
    hash_merkle_root: GENESIS_MERKLE_ROOT,
    version: 1,
    time: 1537628400,
    bits: 0x1e0ffff0,
    nonce: 1941285,
    reward: GENESIS_REWARD,
    timestamp_message: GENESIS_TIMESTAMP_MESSAGE,
    output_pub_key: &GENESIS_OUTPUT_PUB_KEY,
};

pub const TESTNET_GENESIS: GenesisBlock = GenesisBlock {
    hash: Hash::from_display_bytes(hex!("00000b16ae2f29669c91460e5b5f6f2e9d4228afa1169e54f3df2ff48158c578")),
    hash_merkle_root: GENESIS_MERKLE_ROOT,
    version: 1,
    time: 1537452900,
    bits: 0x1e0ffff0,
    nonce: 4639,
    reward: GENESIS_REWARD,
    timestamp_message: GENESIS_TIMESTAMP_MESSAGE,
    output_pub_key: &GENESIS_OUTPUT_PUB_KEY,
};

pub const REGTEST_GENESIS: GenesisBlock = GenesisBlock {
    hash: Hash::from_display_bytes(hex!("1d1426e15dffce0c064cabb5227013b3a200feb0416114ff5cf8600f0a95ad43")),
    hash_merkle_root: GENESIS_MERKLE_ROOT,
    version: 1,
    time: 1537428490,
    bits: 0x207fffff,
    nonce: 0,
    reward: GENESIS_REWARD,
    timestamp_message: GENESIS_TIMESTAMP_MESSAGE,
    output_pub_key: &GENESIS_OUTPUT_PUB_KEY,
};
