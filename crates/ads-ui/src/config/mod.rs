mod network;

pub use network::Network;

use crate::{log, log::Topic, page::PageMarkers};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error as ThisError;

/// Canister the page is built for unless told otherwise.
pub const DEFAULT_CANISTER: &str = "ads_ledger";

/// Errors related to loading and reading `canister_ids.json`.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("Ensure canister_ids.json specifies an `{canister}` canister ID on the {network} network")]
    MissingCanisterId { canister: String, network: Network },

    /// JSON could not be parsed into the expected structure.
    #[error("json error: {0}")]
    CannotParseJson(String),
}

///
/// CanisterIds
///
/// `canister_ids.json` as written by dfx: canister name → network → id.
/// Values are kept loosely typed; only non-empty strings count as present.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(transparent)]
pub struct CanisterIds(Map<String, Value>);

impl CanisterIds {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::CannotParseJson(e.to_string()))
    }

    /// Identifier text for `canister` on `network`, if present and non-empty.
    #[must_use]
    pub fn get(&self, canister: &str, network: Network) -> Option<&str> {
        self.0
            .get(canister)?
            .get(network.as_str())?
            .as_str()
            .filter(|id| !id.is_empty())
    }

    #[must_use]
    pub fn canisters(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

///
/// BootstrapConfig
///
/// Everything the bootstrap needs that is not a collaborator.
/// Built once and passed in; never stored globally.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BootstrapConfig {
    pub ids: CanisterIds,
    pub canister: String,
    pub network: Network,
    pub markers: PageMarkers,
}

impl BootstrapConfig {
    #[must_use]
    pub fn new(ids: CanisterIds) -> Self {
        Self {
            ids,
            canister: DEFAULT_CANISTER.to_string(),
            network: Network::default(),
            markers: PageMarkers::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let ids = CanisterIds::from_json(json)?;
        log!(Topic::Config, Debug, "canister_ids.json lists {:?}", ids.canisters());

        Ok(Self::new(ids))
    }

    #[must_use]
    pub fn with_canister(mut self, canister: impl Into<String>) -> Self {
        self.canister = canister.into();
        self
    }

    #[must_use]
    pub const fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    #[must_use]
    pub fn with_markers(mut self, markers: PageMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Configured identifier text for the target canister and network.
    pub fn canister_id_text(&self) -> Result<&str, ConfigError> {
        self.ids
            .get(&self.canister, self.network)
            .ok_or_else(|| ConfigError::MissingCanisterId {
                canister: self.canister.clone(),
                network: self.network,
            })
    }
}

///
/// TESTS
///
