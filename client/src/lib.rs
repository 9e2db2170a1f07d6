//! # icebreaker-client
//!
//! Leptos + WASM frontend for the email icebreaker generator.
//!
//! This crate contains the page, components, form state, and the webhook
//! client. The server crate renders it with SSR; the browser build hydrates
//! it with the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrates the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
