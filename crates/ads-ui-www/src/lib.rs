//! Browser entry point for the `ads_ledger` Candid UI.
//!
//! Compiled to WebAssembly and loaded by the host page, which must provide:
//!
//! - `#app` (hidden) and `#progress` (the loading indicator) in its markup;
//! - a global `candidUi` object exposing `fetchActor(canisterId)` and
//!   `render(canisterId, actor)` from the Candid UI bundle.
//!
//! # Modules
//!
//! - **[`bundled`]**: the `canister_ids.json` compiled into the Wasm.
//! - **`dom`**: [`ads_ui::Page`] over `web_sys::Document`.
//! - **`bridge`**: actor resolution and rendering via `candidUi`.
//! - **`start`**: the `#[wasm_bindgen(start)]` entry.

pub mod bundled;

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
pub mod bridge;

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
pub mod dom;

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
pub mod start;

// the dom tests need a real document
#[cfg(all(test, target_arch = "wasm32", target_os = "unknown"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
