//! # client
//!
//! Leptos + WASM frontend for the meme generator.
//!
//! This crate contains the page, components, application state and REST
//! helpers. It drives the `canvas` crate through the `CanvasHost` bridge
//! component, which owns the compositing engine on hydration.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the server-rendered app to the live DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Errors only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
