//! # client
//!
//! Leptos + WASM frontend for the Mergington activity signup board.
//!
//! This crate contains the page, components, application state, and the
//! HTTP client for the activity API. The wire contract itself lives in the
//! `contract` crate and is shared with `server` and `cli`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
