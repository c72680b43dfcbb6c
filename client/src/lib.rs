//! # client
//!
//! Leptos frontend for the fee portal. Rendered on the server by
//! `feeportal` (`ssr` feature) and hydrated in the browser (`hydrate`
//! feature).
//!
//! The crate holds the route table and layouts, the auth/theme/settings
//! contexts, the generic [`components::data_table::DataTable`] built on the
//! `grid` engine, the feature pages, and the REST client for the server's
//! JSON API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the console logger and panic hook, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
