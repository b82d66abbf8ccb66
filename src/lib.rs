//! # portal-client
//!
//! Leptos + WASM frontend module for an auth-gated user portal.
//!
//! This crate contains the authentication and user-profile state
//! containers, the service facades over them, the guarded route table, and
//! the pages wired to those services. Every navigation is checked against
//! live auth state; nothing is persisted beyond the process lifetime.

pub mod app;
pub mod components;
pub mod pages;
pub mod router;
pub mod services;
pub mod state;

/// WASM entry point: install panic/log forwarding and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
