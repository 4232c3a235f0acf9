use npscoin_consensus_core::{errors::registry::RegistryError, init_registry, params};

#[test]
fn test_params_before_selection_fails() {
    // Neither built nor selected
    assert_eq!(params().unwrap_err(), RegistryError::NotSelected);

    // Built but not selected
    let registry = init_registry().unwrap();
    assert_eq!(registry.selected(), None);
    assert_eq!(params().unwrap_err(), RegistryError::NotSelected);
}
