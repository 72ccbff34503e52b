use super::*;
use crate::util::timer::ManualScheduler;
use std::cell::RefCell;
use std::rc::Rc;

fn steps() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let log_for_step = Rc::clone(&log);
    let step = move |label: &'static str| -> Box<dyn FnOnce()> {
        let log = Rc::clone(&log_for_step);
        Box::new(move || log.borrow_mut().push(label))
    };
    (log, step)
}

#[test]
fn success_and_info_banners_auto_dismiss() {
    assert!(should_auto_dismiss(["alert", "alert-success"]));
    assert!(should_auto_dismiss("alert alert-info".split_whitespace()));
}

#[test]
fn error_and_warning_banners_stay() {
    assert!(!should_auto_dismiss(["alert", "alert-error"]));
    assert!(!should_auto_dismiss(["alert", "alert-warning"]));
}

#[test]
fn unrelated_classes_do_not_auto_dismiss() {
    assert!(!should_auto_dismiss(["alert"]));
    assert!(!should_auto_dismiss(["success", "info"]));
    assert!(!should_auto_dismiss(Vec::<&str>::new()));
}

#[test]
fn dismissal_timings() {
    assert_eq!(AUTO_DISMISS_MS, 5_000);
    assert_eq!(FADE_OUT_MS, 300);
}

#[test]
fn dismiss_fades_now_and_removes_after_fade_out() {
    let scheduler = ManualScheduler::new();
    let (log, step) = steps();
    fade_then_remove(&scheduler, step("fade"), step("remove"));
    assert_eq!(*log.borrow(), vec!["fade"]);

    scheduler.advance(u64::from(FADE_OUT_MS) - 1);
    assert_eq!(*log.borrow(), vec!["fade"]);
    scheduler.advance(1);
    assert_eq!(*log.borrow(), vec!["fade", "remove"]);
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn delayed_dismissal_waits_then_fades_then_removes() {
    let scheduler = ManualScheduler::new();
    let (log, step) = steps();
    fade_then_remove_after(&scheduler, AUTO_DISMISS_MS, step("fade"), step("remove"));

    scheduler.advance(u64::from(AUTO_DISMISS_MS) - 1);
    assert!(log.borrow().is_empty());
    scheduler.advance(1);
    assert_eq!(*log.borrow(), vec!["fade"]);
    scheduler.advance(u64::from(FADE_OUT_MS));
    assert_eq!(*log.borrow(), vec!["fade", "remove"]);
    assert_eq!(scheduler.now_ms(), u64::from(AUTO_DISMISS_MS + FADE_OUT_MS));
}

#[test]
fn cancelled_dismissal_never_fades() {
    let scheduler = ManualScheduler::new();
    let (log, step) = steps();
    let handle = fade_then_remove_after(&scheduler, AUTO_DISMISS_MS, step("fade"), step("remove"));

    scheduler.advance(1_000);
    scheduler.cancel(handle);
    scheduler.advance(u64::from(AUTO_DISMISS_MS + FADE_OUT_MS));
    assert!(log.borrow().is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn install_is_noop_outside_the_browser() {
    install();
}
