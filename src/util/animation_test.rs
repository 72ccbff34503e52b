use super::*;

#[test]
fn progress_is_clamped_linear() {
    assert_eq!(progress(0.0, 300.0), 0.0);
    assert_eq!(progress(150.0, 300.0), 0.5);
    assert_eq!(progress(450.0, 300.0), 1.0);
    assert_eq!(progress(-20.0, 300.0), 0.0);
}

#[test]
fn zero_duration_completes_immediately() {
    assert_eq!(progress(0.0, 0.0), 1.0);
    assert!(FadeFrame::at(0.0, 0.0).done);
}

#[test]
fn ease_out_cubic_hits_endpoints_and_front_loads() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_out_cubic(0.5), 0.875);
    assert!(ease_out_cubic(0.25) > 0.25);
}

#[test]
fn start_transforms_match_direction() {
    assert_eq!(SlideDirection::Left.start_transform(), "translateX(-100%)");
    assert_eq!(SlideDirection::Right.start_transform(), "translateX(100%)");
    assert_eq!(SlideDirection::Up.start_transform(), "translateY(-100%)");
    assert_eq!(SlideDirection::Down.start_transform(), "translateY(100%)");
}

#[test]
fn direction_parses_lowercase_names() {
    assert_eq!("up".parse::<SlideDirection>(), Ok(SlideDirection::Up));
    assert_eq!("right".parse::<SlideDirection>(), Ok(SlideDirection::Right));
    assert!("sideways".parse::<SlideDirection>().is_err());
    assert_eq!(SlideDirection::Down.to_string(), "down");
    assert_eq!(SlideDirection::default(), SlideDirection::Left);
}

#[test]
fn fade_frames_track_linear_progress() {
    let mid = FadeFrame::at(75.0, 300.0);
    assert_eq!(mid.opacity, 0.25);
    assert!(!mid.done);

    let end = FadeFrame::at(300.0, 300.0);
    assert_eq!(end.opacity, 1.0);
    assert!(end.done);
}

#[test]
fn slide_frames_ease_toward_rest() {
    let first = SlideFrame::at(SlideDirection::Left, 0.0, 300.0);
    assert_eq!(first.transform, "translateX(-100%)");
    assert_eq!(first.opacity, 0.0);
    assert!(!first.done);

    let mid = SlideFrame::at(SlideDirection::Down, 150.0, 300.0);
    assert_eq!(mid.transform, "translateY(12.5%)");
    assert_eq!(mid.opacity, 0.875);
}

#[test]
fn final_slide_frame_clears_transform() {
    let last = SlideFrame::at(SlideDirection::Up, 400.0, 300.0);
    assert_eq!(last.transform, "none");
    assert_eq!(last.opacity, 1.0);
    assert!(last.done);
}
