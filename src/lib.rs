//! # monitor-ui
//!
//! Leptos + WASM frontend for the retail monitoring platform. Replaces the
//! React dashboard with a Rust-native UI layer.
//!
//! The interesting machinery lives in `net`: a persisted token store, an
//! HTTP pipeline that authorizes every request and invalidates the session
//! on 401, and typed clients for the auth/events/alerts/rules REST
//! surface. Pages and components are thin views over that layer; `guard`
//! decides per navigation whether a protected view may render.

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: hydrate the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
