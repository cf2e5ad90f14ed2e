//! # admin-login
//!
//! Leptos + WASM administrator login page. Checks the tab's session storage
//! for an existing admin token, otherwise collects email/password, posts them
//! to `/api/admin/login`, stores the returned session and redirects to
//! `/admin`.
//!
//! Browser concerns (storage, navigation, HTTP, toasts) sit behind small
//! traits so the login flow in `flow` runs unchanged in native tests.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod flow;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
