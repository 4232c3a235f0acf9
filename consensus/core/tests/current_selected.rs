use npscoin_consensus_core::{errors::registry::RegistryError, network::NetworkType, params, select_params};

#[test]
fn test_select_params_is_process_wide() {
    assert!(matches!(select_params("testnet"), Err(RegistryError::UnknownNetwork(name)) if name == "testnet"));
    assert_eq!(params().unwrap_err(), RegistryError::NotSelected);

    let selected = select_params("test").unwrap();
    assert_eq!(selected.net, NetworkType::Testnet);
    assert_eq!(selected.genesis_hash().to_string(), "00000b16ae2f29669c91460e5b5f6f2e9d4228afa1169e54f3df2ff48158c578");

    let current = params().unwrap();
    assert!(std::ptr::eq(selected, current));
    assert_eq!(current.net.to_string(), "test");
    assert_eq!(current.net.default_p2p_port(), 19855);

    // Same network again is a no-op, another one is refused
    assert!(select_params("test").is_ok());
    assert_eq!(
        select_params("main").unwrap_err(),
        RegistryError::AlreadySelected { current: NetworkType::Testnet, requested: NetworkType::Mainnet }
    );
    assert_eq!(params().unwrap().net, NetworkType::Testnet);
}
