//! Browser bootstrap for the `ads_ledger` Candid UI.
//!
//! The wasm entry crate (`ads-ui-www`) depends on this crate and supplies the
//! browser-specific pieces; everything here also builds and tests on the host.
//!
//! ## Layering
//!
//! - `config/` turns `canister_ids.json` into an injected [`BootstrapConfig`].
//! - `page/` is the DOM seam: markers, error notices, and the [`Page`] trait.
//! - `collab/` holds the actor-resolution and rendering seams.
//! - `bootstrap/` sequences config → principal → actor → render → reveal,
//!   and owns the single failure-reporting path.
//!
//! The default flow is: entry point → bootstrap → (config, collab, page).

pub mod bootstrap;
pub mod collab;
pub mod config;
pub mod error;
pub mod log;
pub mod page;

pub use {
    bootstrap::{Bootstrap, Session, report},
    collab::{ActorResolver, ExternalError, Renderer},
    config::{BootstrapConfig, CanisterIds, ConfigError, Network},
    error::{BootstrapError, ErrorKind},
    page::{Display, ErrorNotice, Page, PageError, PageMarkers},
};

pub use ::candid::Principal;

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
