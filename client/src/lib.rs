//! # portfolio-client
//!
//! Leptos frontend for the personal portfolio page. Rendered on the server
//! by the `portfolio` binary (`ssr` feature) and hydrated in the browser from
//! the WASM build of this crate (`hydrate` feature).
//!
//! This crate contains the page, its section components, the display data
//! they render, the UI state flags, and the browser helpers for theme
//! persistence and in-page scrolling.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
