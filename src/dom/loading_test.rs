#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn overlay_display_values() {
    assert_eq!(overlay_display(true), "flex");
    assert_eq!(overlay_display(false), "none");
}

#[test]
fn toggle_loading_is_noop_but_callable() {
    toggle_loading(true);
    toggle_loading(false);
}
