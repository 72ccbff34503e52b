//! Imperative DOM glue for server-rendered pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are rendered by the backend; these modules attach behavior to the
//! markup it emits (`.alert`, `.flash-container`, `#loadingOverlay`). All
//! browser calls are gated behind `hydrate`; native builds keep the pure
//! decision helpers and turn the rest into no-ops.

pub mod animate;
pub mod flash;
pub mod loading;

#[cfg(feature = "hydrate")]
pub(crate) fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(feature = "hydrate")]
pub(crate) fn set_style(el: &web_sys::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        leptos::logging::warn!("failed to set style {property}={value}: {e:?}");
    }
}
