#![allow(non_snake_case)]

//! Browser client for the resume assistant: chat with the backend, compile
//! the resume and preview the resulting PDF side by side.

pub mod bindings;
pub mod components;
pub mod config;
pub mod error;
pub mod services;

mod app;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::ClientConfig;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!(version = VERSION, "Starting Resume Assistant frontend");

    let config = ClientConfig::load();

    // Remove loading spinner
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(loader) = document.get_element_by_id("app-loading") {
                loader.remove();
            }
        }
    }

    leptos::mount::mount_to_body(move || view! { <App config /> });
}
