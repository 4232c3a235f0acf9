pub use super::{
    checkpoints::{Checkpoint, CheckpointData},
    constants::consensus::*,
    deployments::{Deployment, DeploymentId, DeploymentTable},
    genesis::{GenesisBlock, MAINNET_GENESIS, REGTEST_GENESIS, TESTNET_GENESIS},
};
use crate::{
    errors::config::{ConfigError, ConfigResult},
    network::NetworkType,
};
use hex_literal::hex;
use npscoin_hashes::{Hash, ZERO_HASH};
use npscoin_math::Uint256;

/// Consensus parameters. Contains settings and configurations which are consensus-sensitive.
/// Changing one of these on a network node would exclude and prevent it from reaching consensus
/// with the other unmodified nodes.
///
/// Every network specifies every field: there is no inheritance between networks.
#[derive(Clone, Debug)]
pub struct Params {
    pub net: NetworkType,
    pub genesis: GenesisBlock,
    pub dns_seeders: &'static [&'static str],

    //
    // Proof of work
    //
    /// Highest target a block hash may have
    pub pow_limit: Uint256,
    /// Difficulty retarget timespan in seconds
    pub target_timespan: u64,
    /// Desired interval between blocks in seconds
    pub target_spacing: u64,
    pub allow_min_difficulty_blocks: bool,
    pub no_retargeting: bool,

    //
    // Version bits
    //
    /// Minimum blocks including miner confirmation of the total of `miner_confirmation_window` blocks
    /// in a retargeting period, required to change a rule
    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,
    pub deployments: DeploymentTable,

    //
    // Chain anchors
    //
    /// Height at which BIP34 became active. `None` on networks where it is not necessarily activated
    pub bip34_height: Option<u64>,
    pub bip34_hash: Hash,
    /// The best chain should have at least this much work
    pub minimum_chain_work: Uint256,
    /// By default assume that the signatures in ancestors of this block are valid
    pub default_assume_valid: Hash,
    pub checkpoints: CheckpointData,

    //
    // Subsidy, masternodes, budgets and governance
    //
    pub subsidy_halving_interval: u64,
    pub masternode_payments_start_block: u64,
    pub masternode_payments_increase_block: u64,
    pub masternode_payments_increase_period: u64,
    pub masternode_minimum_confirmations: u32,
    pub instant_send_keep_lock: u32,
    pub budget_payments_start_block: u64,
    pub budget_payments_cycle_blocks: u64,
    pub budget_payments_window_blocks: u64,
    /// Seconds a proposal must exist before it can be voted on
    pub budget_proposal_establishing_time: u64,
    pub superblock_start_block: u64,
    pub superblock_cycle: u64,
    pub governance_min_quorum: u32,
    pub governance_filter_elements: u32,
    pub majority_enforce_block_upgrade: u32,
    pub majority_reject_block_outdated: u32,
    pub majority_window: u32,
    pub founder_address: &'static str,

    //
    // Node policy
    //
    pub alert_pub_key: Option<&'static [u8]>,
    pub spork_pub_key: Option<&'static [u8]>,
    /// Seconds after which the chain tip is considered stale
    pub max_tip_age: u64,
    pub delay_get_headers_time: u64,
    pub prune_after_height: u64,
    pub mining_requires_peers: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub pool_max_transactions: u32,
    /// Seconds after which a fulfilled network request is forgotten
    pub fulfilled_request_expire_time: u64,
}

impl Params {
    /// Number of blocks between difficulty retargets
    pub fn difficulty_adjustment_interval(&self) -> u64 {
        self.target_timespan / self.target_spacing
    }

    /// The target encoded by the genesis bits, `None` if the encoding is invalid
    pub fn genesis_target(&self) -> Option<Uint256> {
        Uint256::try_from_compact_target_bits(self.genesis.bits)
    }

    pub fn deployment(&self, id: DeploymentId) -> Option<&Deployment> {
        self.deployments.get(id)
    }

    /// Checks the internal consistency of the parameters against the verified genesis hash
    pub fn validate(&self, genesis_hash: Hash) -> ConfigResult<()> {
        if self.rule_change_activation_threshold > self.miner_confirmation_window {
            return Err(ConfigError::ThresholdExceedsWindow {
                threshold: self.rule_change_activation_threshold,
                window: self.miner_confirmation_window,
            });
        }
        match self.genesis_target() {
            None => return Err(ConfigError::InvalidGenesisBits(self.genesis.bits)),
            Some(target) if target > self.pow_limit => return Err(ConfigError::GenesisTargetAbovePowLimit(self.genesis.bits)),
            Some(_) => {}
        }
        self.deployments.validate(self.miner_confirmation_window, self.rule_change_activation_threshold)?;
        self.checkpoints.validate(genesis_hash)
    }
}

impl From<NetworkType> for Params {
    fn from(value: NetworkType) -> Self {
        match value {
            NetworkType::Mainnet => MAINNET_PARAMS,
            NetworkType::Testnet => TESTNET_PARAMS,
            NetworkType::Regtest => REGTEST_PARAMS,
        }
    }
}

const POW_LIMIT: Uint256 = Uint256::from_be_bytes(hex!("00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"));

const REGTEST_POW_LIMIT: Uint256 = Uint256::from_be_bytes(hex!("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"));

/// One day
const TARGET_TIMESPAN: u64 = 24 * 60 * 60;

/// Two minutes
const TARGET_SPACING: u64 = 2 * 60;

const TEST_DUMMY_DEPLOYMENT: Deployment = Deployment::new(28, 1199145601, 1230767999); // January 1, 2008 - December 31, 2008

const MAINNET_CHECKPOINTS: [Checkpoint; 5] = [
    Checkpoint::new(0, MAINNET_GENESIS.hash),
    Checkpoint::new(1, Hash::from_display_bytes(hex!("0000047777a943ad3805816e64a490155857dc2d5d41224b235dbdc9d6d2c5b7"))),
    Checkpoint::new(5, Hash::from_display_bytes(hex!("00000fc575143cab481d8f8d6373bfecbf2346b7fafefa998e82193ea1513a79"))),
    Checkpoint::new(10, Hash::from_display_bytes(hex!("00000f848c751fc4f82ce6a70aa7b284c914394497133960767d3941367dc92e"))),
    Checkpoint::new(15, Hash::from_display_bytes(hex!("000009aa4059143f307a2670a8d2093dff1e1d35d64d55a3e817c23efa43b04e"))),
];

const TESTNET_CHECKPOINTS: [Checkpoint; 1] = [Checkpoint::new(0, TESTNET_GENESIS.hash)];

const REGTEST_CHECKPOINTS: [Checkpoint; 1] = [Checkpoint::new(0, REGTEST_GENESIS.hash)];

pub const MAINNET_PARAMS: Params = Params {
    net: NetworkType::Mainnet,
    genesis: MAINNET_GENESIS,
    dns_seeders: &["seed1.npscoin.io", "seed2.npscoin.io", "seed3.npscoin.io"],

    pow_limit: POW_LIMIT,
    target_timespan: TARGET_TIMESPAN,
    target_spacing: TARGET_SPACING,
    allow_min_difficulty_blocks: false,
    no_retargeting: false,

    // 95% of 2016
    rule_change_activation_threshold: 1916,
    miner_confirmation_window: 2016,
    deployments: DeploymentTable::new(
        Some(TEST_DUMMY_DEPLOYMENT),
        // Sept 22nd, 2018 - Dec 15th, 2018
        Some(Deployment::new(0, 1537628400, 1544857200)),
        // 80% of 4032
        Some(Deployment::new(1, 1537628400, 1544857200).with_window(4032, 3226)),
    ),

    bip34_height: Some(1),
    bip34_hash: MAINNET_CHECKPOINTS[1].hash,
    // Chain work at block 15
    minimum_chain_work: Uint256::from_u64(0x0100001f),
    default_assume_valid: MAINNET_CHECKPOINTS[4].hash,
    checkpoints: CheckpointData {
        checkpoints: &MAINNET_CHECKPOINTS,
        last_checkpoint_time: 1537629502,
        total_transactions: 16,
        transactions_per_day: 3000.0,
    },

    // Roughly the number of blocks per year
    subsidy_halving_interval: 262800,
    masternode_payments_start_block: 720,
    // Not used
    masternode_payments_increase_block: 99999999,
    masternode_payments_increase_period: 99999999,
    masternode_minimum_confirmations: 15,
    instant_send_keep_lock: 24,
    budget_payments_start_block: 1051200,
    budget_payments_cycle_blocks: 21600,
    budget_payments_window_blocks: 100,
    budget_proposal_establishing_time: 24 * 60 * 60,
    superblock_start_block: 1072800,
    superblock_cycle: 21600,
    governance_min_quorum: 10,
    governance_filter_elements: 20000,
    majority_enforce_block_upgrade: 750,
    majority_reject_block_outdated: 950,
    majority_window: 1000,
    founder_address: "NXvE1dQrhP5fDwiLniX1DihEQWMyk9cvfT",

    alert_pub_key: Some(&hex!(
        "04916f291064ea1599b8a82490d8ed4bb0288af7f92a1a8f5afd4b3dbca6a625107e97023f208f4f26ccc8c172be2914edd8602f89f31017d6ec22337cb3d2d1df"
    )),
    spork_pub_key: Some(&hex!(
        "046a90132630a8f7c6c65e029d1a721882df13c30c4f6f4a70c9f3123ce6c1afa4aa5ab23fe62cfc551c1155cba2c78d78207bc3ca33c57c7e542d84ddb0852643"
    )),
    // About 144 blocks behind
    max_tip_age: 6 * 60 * 60,
    delay_get_headers_time: 24 * 60 * 60,
    prune_after_height: 100000,
    mining_requires_peers: true,
    default_consistency_checks: false,
    require_standard: true,
    mine_blocks_on_demand: false,
    testnet_to_be_deprecated_field_rpc: false,
    pool_max_transactions: 3,
    fulfilled_request_expire_time: 60 * 60,
};

pub const TESTNET_PARAMS: Params = Params {
    net: NetworkType::Testnet,
    genesis: TESTNET_GENESIS,
    dns_seeders: &["testnet-seed.npscoin.io"],

    pow_limit: POW_LIMIT,
    target_timespan: TARGET_TIMESPAN,
    target_spacing: TARGET_SPACING,
    allow_min_difficulty_blocks: true,
    no_retargeting: false,

    // 75% of 2016
    rule_change_activation_threshold: 1512,
    miner_confirmation_window: 2016,
    deployments: DeploymentTable::new(
        Some(TEST_DUMMY_DEPLOYMENT),
        Some(Deployment::new(0, 1537452900, 1544857200)),
        // 50% of 100
        Some(Deployment::new(1, 1537452900, 1544857200).with_window(100, 50)),
    ),

    bip34_height: Some(0),
    bip34_hash: TESTNET_GENESIS.hash,
    minimum_chain_work: Uint256::ZERO,
    default_assume_valid: ZERO_HASH,
    checkpoints: CheckpointData {
        checkpoints: &TESTNET_CHECKPOINTS,
        last_checkpoint_time: 1537452900,
        total_transactions: 1,
        transactions_per_day: 0.01,
    },

    subsidy_halving_interval: 64800,
    masternode_payments_start_block: 120,
    masternode_payments_increase_block: 99999999,
    masternode_payments_increase_period: 99999999,
    masternode_minimum_confirmations: 1,
    instant_send_keep_lock: 6,
    budget_payments_start_block: 1051200,
    budget_payments_cycle_blocks: 50,
    budget_payments_window_blocks: 10,
    budget_proposal_establishing_time: 60 * 20,
    superblock_start_block: 1072800,
    superblock_cycle: 24,
    governance_min_quorum: 1,
    governance_filter_elements: 500,
    majority_enforce_block_upgrade: 51,
    majority_reject_block_outdated: 75,
    majority_window: 100,
    founder_address: "n7ja8wiFruqRGbXJqqbUNSHwp884t6RUZk",

    alert_pub_key: Some(&hex!(
        "04b85a1b23efb8a18a406590f99febf2d4c78215b4184bc3e0c63f4bcb0970055bf5cc825dde6ac53c785ee2c9f1f2460bb97448be9619f676720492fcb0f47e80"
    )),
    spork_pub_key: Some(&hex!(
        "04f6906a6bae28442d91c92f614364d93c65ac0b01dbd89659128f346fb4dc9ef4054077a404acd1cb8c6be74bb6ecb212c848d9cc08eee16919ce0881e850eeee"
    )),
    // Allow mining on top of old blocks
    max_tip_age: 0x7fffffff,
    delay_get_headers_time: 24 * 60 * 60,
    prune_after_height: 1000,
    mining_requires_peers: true,
    default_consistency_checks: false,
    require_standard: false,
    mine_blocks_on_demand: true,
    testnet_to_be_deprecated_field_rpc: true,
    pool_max_transactions: 3,
    fulfilled_request_expire_time: 5 * 60,
};

pub const REGTEST_PARAMS: Params = Params {
    net: NetworkType::Regtest,
    genesis: REGTEST_GENESIS,
    dns_seeders: &[],

    pow_limit: REGTEST_POW_LIMIT,
    target_timespan: TARGET_TIMESPAN,
    target_spacing: TARGET_SPACING,
    allow_min_difficulty_blocks: true,
    no_retargeting: true,

    // 75% for testchains
    rule_change_activation_threshold: 108,
    // Faster than normal for regtest (144 instead of 2016)
    miner_confirmation_window: 144,
    deployments: DeploymentTable::new(
        Some(Deployment::always_active(28)),
        Some(Deployment::always_active(0)),
        Some(Deployment::always_active(1)),
    ),

    bip34_height: None,
    bip34_hash: ZERO_HASH,
    minimum_chain_work: Uint256::ZERO,
    default_assume_valid: ZERO_HASH,
    checkpoints: CheckpointData {
        checkpoints: &REGTEST_CHECKPOINTS,
        last_checkpoint_time: 0,
        total_transactions: 0,
        transactions_per_day: 0.0,
    },

    subsidy_halving_interval: 20,
    masternode_payments_start_block: 60,
    masternode_payments_increase_block: 99999999,
    masternode_payments_increase_period: 99999999,
    masternode_minimum_confirmations: 1,
    instant_send_keep_lock: 6,
    budget_payments_start_block: 1051200,
    budget_payments_cycle_blocks: 50,
    budget_payments_window_blocks: 10,
    budget_proposal_establishing_time: 60 * 20,
    superblock_start_block: 1072800,
    superblock_cycle: 10,
    governance_min_quorum: 1,
    governance_filter_elements: 100,
    majority_enforce_block_upgrade: 750,
    majority_reject_block_outdated: 950,
    majority_window: 1000,
    founder_address: "n7ja8wiFruqRGbXJqqbUNSHwp884t6RUZk",

    alert_pub_key: None,
    spork_pub_key: None,
    max_tip_age: 6 * 60 * 60,
    // Never delay GETHEADERS
    delay_get_headers_time: 0,
    prune_after_height: 1000,
    mining_requires_peers: false,
    default_consistency_checks: true,
    require_standard: false,
    mine_blocks_on_demand: true,
    testnet_to_be_deprecated_field_rpc: false,
    pool_max_transactions: 3,
    fulfilled_request_expire_time: 5 * 60,
};
