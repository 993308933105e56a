use ads_ui::{BootstrapConfig, ConfigError, Network};

/// `canister_ids.json` at the workspace root, as last written by `dfx deploy`.
pub const CANISTER_IDS: &str = include_str!("../../../canister_ids.json");

/// Config for the bundled ids, on the network this Wasm was built for
/// (`ic` unless `DFX_NETWORK` says otherwise).
pub fn config() -> Result<BootstrapConfig, ConfigError> {
    let network = Network::build().unwrap_or_default();

    Ok(BootstrapConfig::from_json(CANISTER_IDS)?.with_network(network))
}

///
/// TESTS
///
