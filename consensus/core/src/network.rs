use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

#[derive(thiserror::Error, PartialEq, Eq, Debug, Clone)]
pub enum NetworkTypeError {
    #[error("Invalid network type: {0}")]
    InvalidNetworkType(String),
}

/// The closed set of networks known to this build
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NetworkType {
    #[serde(rename = "main")]
    Mainnet,
    #[serde(rename = "test")]
    Testnet,
    #[serde(rename = "regtest")]
    Regtest,
}

/// Version bytes used by the base58 address encoding of a network
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Base58Prefixes {
    pub pubkey_address: u8,
    pub script_address: u8,
    pub secret_key: u8,
    pub ext_public_key: [u8; 4],
    pub ext_secret_key: [u8; 4],
}

const MAINNET_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes {
    // Addresses start with 'N'
    pubkey_address: 53,
    script_address: 12,
    secret_key: 181,
    // BIP32 xpub / xprv
    ext_public_key: [0x04, 0x88, 0xB2, 0x1E],
    ext_secret_key: [0x04, 0x88, 0xAD, 0xE4],
};

const TESTNET_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes {
    // Addresses start with 'n'
    pubkey_address: 112,
    script_address: 12,
    secret_key: 240,
    // BIP32 tpub / tprv
    ext_public_key: [0x04, 0x35, 0x87, 0xCF],
    ext_secret_key: [0x04, 0x35, 0x83, 0x94],
};

impl NetworkType {
    pub const COUNT: usize = 3;

    /// The configuration name of the network
    pub const fn name(&self) -> &'static str {
        match self {
            NetworkType::Mainnet => "main",
            NetworkType::Testnet => "test",
            NetworkType::Regtest => "regtest",
        }
    }

    /// Position of the network in [`NetworkType::iter`]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// The 4 bytes prepended to every wire message
    pub const fn magic(&self) -> [u8; 4] {
        match self {
            NetworkType::Mainnet => [0xd3, 0xc1, 0x2a, 0xda],
            NetworkType::Testnet => [0xf5, 0x82, 0xac, 0xd2],
            NetworkType::Regtest => [0xc3, 0x7b, 0xc9, 0xea],
        }
    }

    pub const fn default_p2p_port(&self) -> u16 {
        match self {
            NetworkType::Mainnet => 9855,
            NetworkType::Testnet => 19855,
            NetworkType::Regtest => 29855,
        }
    }

    pub const fn base58_prefixes(&self) -> Base58Prefixes {
        match self {
            NetworkType::Mainnet => MAINNET_BASE58_PREFIXES,
            NetworkType::Testnet | NetworkType::Regtest => TESTNET_BASE58_PREFIXES,
        }
    }

    /// BIP44 coin type
    pub const fn coin_type(&self) -> u32 {
        match self {
            NetworkType::Mainnet => 5,
            NetworkType::Testnet | NetworkType::Regtest => 1,
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        static NETWORK_TYPES: [NetworkType; NetworkType::COUNT] = [NetworkType::Mainnet, NetworkType::Testnet, NetworkType::Regtest];
        NETWORK_TYPES.iter().copied()
    }
}

impl FromStr for NetworkType {
    type Err = NetworkTypeError;
    fn from_str(network_type: &str) -> Result<Self, Self::Err> {
        match network_type {
            "main" => Ok(NetworkType::Mainnet),
            "test" => Ok(NetworkType::Testnet),
            "regtest" => Ok(NetworkType::Regtest),
            _ => Err(NetworkTypeError::InvalidNetworkType(network_type.to_string())),
        }
    }
}

impl Display for NetworkType {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_network_type_parse_and_display() {
        for network_type in NetworkType::iter() {
            assert_eq!(NetworkType::from_str(&network_type.to_string()).unwrap(), network_type);
        }
        assert_eq!(NetworkType::iter().map(|n| n.index()).collect::<Vec<_>>(), vec![0, 1, 2]);

        for garbage in ["", "mainnet", "Main", "testnet", " main", "regtest\n", "devnet", "\u{1F600}"] {
            assert_eq!(NetworkType::from_str(garbage), Err(NetworkTypeError::InvalidNetworkType(garbage.to_string())));
        }
        let err = NetworkType::from_str("simnet").unwrap_err();
        assert_eq!(err.to_string(), "Invalid network type: simnet");
    }

    #[test]
    fn test_network_exports_are_distinct() {
        let magics: HashSet<_> = NetworkType::iter().map(|n| n.magic()).collect();
        let ports: HashSet<_> = NetworkType::iter().map(|n| n.default_p2p_port()).collect();
        assert_eq!(magics.len(), NetworkType::COUNT);
        assert_eq!(ports.len(), NetworkType::COUNT);

        assert_eq!(NetworkType::Mainnet.magic(), [0xd3, 0xc1, 0x2a, 0xda]);
        assert_eq!(NetworkType::Mainnet.base58_prefixes().pubkey_address, 53);
        assert_eq!(NetworkType::Testnet.base58_prefixes(), NetworkType::Regtest.base58_prefixes());
        assert_eq!(NetworkType::Regtest.coin_type(), 1);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&NetworkType::Testnet).unwrap(), "\"test\"");
        assert_eq!(serde_json::from_str::<NetworkType>("\"regtest\"").unwrap(), NetworkType::Regtest);
        assert!(serde_json::from_str::<NetworkType>("\"testnet\"").is_err());
    }
}
