use std::fmt::{self, Display};

///
/// Network
/// Identifies which `canister_ids.json` network column the page reads.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Network {
    #[default]
    Ic,
    Local,
}

impl Network {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ic => "ic",
            Self::Local => "local",
        }
    }

    ///
    /// build
    /// Network inferred at *build time* from `DFX_NETWORK`.
    /// Baked into the Wasm; it does not reflect where the page is served from.
    ///

    #[must_use]
    pub fn build() -> Option<Self> {
        Self::from_dfx_network(option_env!("DFX_NETWORK"))
    }

    #[must_use]
    pub fn from_dfx_network(dfx_network: Option<&str>) -> Option<Self> {
        match dfx_network {
            Some("local") => Some(Self::Local),
            Some("ic") => Some(Self::Ic),

            _ => None,
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// TESTS
///
