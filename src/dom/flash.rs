//! Flash message lifecycle: auto-dismiss and close buttons.
//!
//! Success and info banners fade out on their own after a few seconds;
//! every banner can be closed through its `.alert-close` button. A single
//! delegated click listener on the document covers banners added later by
//! `notify::show_notification`.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use crate::notify::Severity;
#[cfg(feature = "hydrate")]
use crate::util::timer::BrowserScheduler;
use crate::util::timer::{Scheduler, TimerHandle};

/// Delay before success/info banners start fading out.
pub const AUTO_DISMISS_MS: u32 = 5_000;
/// Fade-out length before the banner is removed from the tree.
pub const FADE_OUT_MS: u32 = 300;

pub const ALERT_SELECTOR: &str = ".alert";
pub const CLOSE_SELECTOR: &str = ".alert-close";

/// Whether a banner with these classes dismisses itself.
pub fn should_auto_dismiss<'a>(classes: impl IntoIterator<Item = &'a str>) -> bool {
    classes.into_iter().any(|class| {
        class
            .strip_prefix("alert-")
            .and_then(Severity::parse_tag)
            .is_some_and(Severity::auto_dismiss)
    })
}

/// Run `fade` now and `remove` once the fade-out has played.
pub fn fade_then_remove<S: Scheduler>(
    scheduler: &S,
    fade: impl FnOnce(),
    remove: impl FnOnce() + 'static,
) -> TimerHandle {
    fade();
    scheduler.schedule(FADE_OUT_MS, Box::new(remove))
}

/// [`fade_then_remove`] after `delay_ms`. The returned handle cancels the
/// dismissal while it is still waiting.
pub fn fade_then_remove_after<S>(
    scheduler: &S,
    delay_ms: u32,
    fade: impl FnOnce() + 'static,
    remove: impl FnOnce() + 'static,
) -> TimerHandle
where
    S: Scheduler + Clone + 'static,
{
    let later = scheduler.clone();
    scheduler.schedule(
        delay_ms,
        Box::new(move || {
            fade_then_remove(&later, fade, remove);
        }),
    )
}

/// Attach flash behavior once the document has loaded.
pub fn install() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(document) = super::document() else {
            return;
        };
        if document.ready_state() != "loading" {
            on_ready(&document);
            return;
        }

        let ready = Closure::once(move || {
            if let Some(document) = super::document() {
                on_ready(&document);
            }
        });
        if let Err(e) =
            document.add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref())
        {
            leptos::logging::warn!("failed to wait for DOMContentLoaded: {e:?}");
            return;
        }
        ready.forget();
    }
}

#[cfg(feature = "hydrate")]
fn on_ready(document: &web_sys::Document) {
    schedule_auto_dismiss(document);
    install_close_handler(document);
}

#[cfg(feature = "hydrate")]
fn schedule_auto_dismiss(document: &web_sys::Document) {
    use wasm_bindgen::JsCast;

    let Ok(alerts) = document.query_selector_all(ALERT_SELECTOR) else {
        return;
    };
    for idx in 0..alerts.length() {
        let Some(alert) = alerts
            .item(idx)
            .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        if should_auto_dismiss(alert.class_name().split_whitespace()) {
            dismiss_after(alert, AUTO_DISMISS_MS);
        }
    }
}

#[cfg(feature = "hydrate")]
fn install_close_handler(document: &web_sys::Document) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let handler = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let Some(target) = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        if !matches!(target.closest(CLOSE_SELECTOR), Ok(Some(_))) {
            return;
        }
        if let Ok(Some(alert)) = target.closest(ALERT_SELECTOR) {
            if let Ok(alert) = alert.dyn_into::<web_sys::HtmlElement>() {
                dismiss(&alert);
            }
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    if let Err(e) = document.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref()) {
        leptos::logging::warn!("failed to install alert close handler: {e:?}");
        return;
    }
    handler.forget();
}

/// Dismiss `alert` after `delay_ms`.
#[cfg(feature = "hydrate")]
pub fn dismiss_after(alert: web_sys::HtmlElement, delay_ms: u32) {
    let faded = alert.clone();
    fade_then_remove_after(
        &BrowserScheduler::new(),
        delay_ms,
        move || super::set_style(&faded, "opacity", "0"),
        move || alert.remove(),
    );
}

/// Fade `alert` out, then detach it.
#[cfg(feature = "hydrate")]
pub fn dismiss(alert: &web_sys::HtmlElement) {
    let removed = alert.clone();
    fade_then_remove(
        &BrowserScheduler::new(),
        || super::set_style(alert, "opacity", "0"),
        move || removed.remove(),
    );
}
