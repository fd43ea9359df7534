//! # intranet-portal
//!
//! Leptos + WASM presentation layer for the community portal: chat, events
//! listing, news preview and the upcoming-events dashboard widget.
//!
//! Components are pure functions of their props. Pages own the mutable state
//! (draft text, search query, appended messages) and pass snapshots down.
//! Data arrives already fetched; nothing in this crate talks to a backend.

pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod model;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
