//! # splitter-client
//!
//! Leptos + WASM frontend for Splitter: the home, login, and register pages
//! plus the form submission flow that posts to the users API.
//!
//! Built with `hydrate` for the browser bundle and with `ssr` when linked
//! into the `splitter` server for server-side rendering.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach event handlers to the server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(app::App);
}
