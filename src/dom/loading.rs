//! Full-page loading overlay toggle.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

pub const LOADING_OVERLAY_ID: &str = "loadingOverlay";

/// CSS `display` value for the overlay.
pub fn overlay_display(show: bool) -> &'static str {
    if show { "flex" } else { "none" }
}

/// Show or hide `#loadingOverlay`. Pages without the overlay are left alone.
pub fn toggle_loading(show: bool) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(overlay) = super::document()
            .and_then(|doc| doc.get_element_by_id(LOADING_OVERLAY_ID))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        super::set_style(&overlay, "display", overlay_display(show));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = show;
    }
}
