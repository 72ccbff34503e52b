//! # feeddesk-ui
//!
//! Browser-side presentation helpers for the feed reader pages: flash
//! message lifecycle, toast notifications, the JSON fetch wrapper, date and
//! text formatting, debouncing, `localStorage` persistence, and fade/slide
//! animations.
//!
//! Browser bindings are compiled only with the `hydrate` feature. Without it
//! every DOM/network entry point degrades to a no-op so the pure helpers can
//! be used (and tested) natively and during server rendering.

pub mod dom;
pub mod net;
pub mod notify;
pub mod util;

/// WASM entry point: installs logging and the page-level flash handlers.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    dom::flash::install();
}
