//! Diix Academy - landing site
//!
//! The marketing page of an online academy, built with Leptos and WebAssembly:
//! an animated particle hero, the course catalogue and a login / multi-step
//! signup wizard backed by a small submission API.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
