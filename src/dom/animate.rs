//! `requestAnimationFrame` drivers for fade-in and slide-in.
//!
//! Each driver primes the element's inline style, then samples
//! `util::animation` once per frame until the transition completes. The frame
//! closure owns itself through an `Rc<RefCell<Option<Closure>>>` holder and
//! releases it on the last frame.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
use super::set_style;
pub use crate::util::animation::{DEFAULT_DURATION_MS, SlideDirection};
#[cfg(feature = "hydrate")]
use crate::util::animation::{FadeFrame, SlideFrame};
#[cfg(feature = "hydrate")]
use crate::util::clock;

/// Fade `element` from transparent to opaque over `duration_ms`.
#[cfg(feature = "hydrate")]
pub fn fade_in(element: &web_sys::HtmlElement, duration_ms: f64) {
    set_style(element, "opacity", "0");
    set_style(element, "display", "block");

    let element = element.clone();
    run_frames(move |elapsed_ms| {
        let frame = FadeFrame::at(elapsed_ms, duration_ms);
        set_style(&element, "opacity", &frame.opacity.to_string());
        frame.done
    });
}

/// Slide `element` in from `direction` with an ease-out curve.
#[cfg(feature = "hydrate")]
pub fn slide_in(element: &web_sys::HtmlElement, direction: SlideDirection, duration_ms: f64) {
    set_style(element, "transform", &direction.start_transform());
    set_style(element, "opacity", "0");
    set_style(element, "display", "block");

    let element = element.clone();
    run_frames(move |elapsed_ms| {
        let frame = SlideFrame::at(direction, elapsed_ms, duration_ms);
        set_style(&element, "transform", &frame.transform);
        set_style(&element, "opacity", &frame.opacity.to_string());
        frame.done
    });
}

/// Call `step` with elapsed milliseconds each frame until it returns `true`.
///
/// Without a window (or if scheduling fails) the final frame is applied
/// immediately.
#[cfg(feature = "hydrate")]
fn run_frames<F>(step: F)
where
    F: FnMut(f64) -> bool + 'static,
{
    let step = Rc::new(RefCell::new(step));
    let Some(window) = web_sys::window() else {
        apply(&step, f64::INFINITY);
        return;
    };

    let started_ms = clock::now_ms();
    let holder: FrameHolder = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let step_for_cb = Rc::clone(&step);

    let cb = Closure::wrap(Box::new(move |ts: f64| {
        if apply(&step_for_cb, ts - started_ms) {
            holder_for_cb.borrow_mut().take();
        } else if !request_frame(&window_for_cb, &holder_for_cb) {
            apply(&step_for_cb, f64::INFINITY);
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);
    *holder.borrow_mut() = Some(cb);

    if !request_frame(&window, &holder) {
        holder.borrow_mut().take();
        apply(&step, f64::INFINITY);
    }
}

#[cfg(feature = "hydrate")]
type FrameHolder = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[cfg(feature = "hydrate")]
fn apply<F: FnMut(f64) -> bool>(step: &RefCell<F>, elapsed_ms: f64) -> bool {
    let mut step = step.borrow_mut();
    (*step)(elapsed_ms)
}

#[cfg(feature = "hydrate")]
fn request_frame(window: &web_sys::Window, holder: &FrameHolder) -> bool {
    holder.borrow().as_ref().is_some_and(|cb| {
        window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .is_ok()
    })
}
