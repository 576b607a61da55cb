//! # client
//!
//! Leptos storefront for Desi Classics, a vintage Indian car dealership.
//! Rendered on the server by `server` (feature `ssr`) and hydrated in the
//! browser (feature `hydrate`).
//!
//! State lives in `state` as plain structs with pure reducers, provided to
//! components through Leptos context. `util` holds the math behind the
//! pointer trail and the scroll-driven showroom.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"console logger already initialised".into());
    }
    log::info!("hydrating storefront");
    leptos::mount::hydrate_body(app::App);
}
