// lib.rs - Root module for the inventory_web library
//
// The model, workflows and fixtures compile without any feature so their
// logic can be tested on its own. Everything that needs Leptos sits behind
// the `ssr` / `hydrate` features inside `web_app`.
#![recursion_limit = "256"]

/// The fixtures module contains sample catalog data and an in-memory API
pub mod fixtures;

pub mod web_app;

/// Entry point of the WASM bundle
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
