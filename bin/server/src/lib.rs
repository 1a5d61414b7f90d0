//! waypost web server and UI.
//!
//! This crate provides the Leptos application: the root layout with its
//! navigation chrome, the pages nested under it, and the server functions
//! those pages call.

#![allow(non_snake_case)]

pub mod app;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod error;
pub mod layout;
pub mod pages;
pub mod preload;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
