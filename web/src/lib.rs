//! # web
//!
//! Leptos + WASM front-end for ProvisionHub: a landing page and a light/dark
//! theme toggle whose preference survives reloads.
//!
//! The crate is split the same way as any Leptos client here: `state` holds
//! the theme store, `util` the palette resolver and browser glue,
//! `components` the provider and toggle, `pages` the landing route.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
