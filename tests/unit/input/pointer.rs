use super::*;

fn bounds() -> Rect {
    Rect::new(100.0, 50.0, 300.0, 150.0)
}

#[test]
fn samples_without_bounds_are_dropped() {
    let mut mapper = PointerMapper::new(1.0);
    assert!(mapper.sample(150.0, 100.0).is_none());
    assert!(mapper.sample(160.0, 100.0).is_none());
}

#[test]
fn first_sample_anchors_and_the_second_yields_a_segment() {
    let mut mapper = PointerMapper::new(1.0);
    mapper.set_bounds(bounds());

    assert!(mapper.sample(100.0, 50.0).is_none());
    let seg = mapper.sample(200.0, 100.0).unwrap();
    assert_eq!(seg.from, (0.0, 0.0));
    assert!((seg.to.0 - 0.5).abs() < 1e-6);
    assert!((seg.to.1 - 0.5).abs() < 1e-6);
}

#[test]
fn zero_motion_yields_no_segment() {
    let mut mapper = PointerMapper::new(1.0);
    mapper.set_bounds(bounds());
    mapper.sample(150.0, 100.0);
    assert!(mapper.sample(150.0, 100.0).is_none());
    // Sub-epsilon jitter is treated the same way.
    assert!(mapper.sample(150.001, 100.0).is_none());
}

#[test]
fn out_of_rect_samples_clamp_to_the_edge() {
    let mut mapper = PointerMapper::new(1.0);
    mapper.set_bounds(bounds());
    mapper.sample(150.0, 100.0);
    let seg = mapper.sample(1000.0, -500.0).unwrap();
    assert_eq!(seg.to, (1.0, 0.0));
}

#[test]
fn responsiveness_scales_the_delivered_motion() {
    let mut mapper = PointerMapper::new(0.5);
    mapper.set_bounds(bounds());
    mapper.sample(100.0, 50.0);
    let seg = mapper.sample(300.0, 50.0).unwrap();
    assert_eq!(seg.from, (0.0, 0.0));
    assert!((seg.to.0 - 0.5).abs() < 1e-6);

    // Zero responsiveness mutes motion entirely.
    let mut muted = PointerMapper::new(0.0);
    muted.set_bounds(bounds());
    muted.sample(100.0, 50.0);
    assert!(muted.sample(300.0, 150.0).is_none());
}

#[test]
fn tracking_continues_from_the_true_position() {
    // The scaled segment shortens what the engine sees, but tracking itself never lags.
    let mut mapper = PointerMapper::new(0.5);
    mapper.set_bounds(bounds());
    mapper.sample(100.0, 50.0);
    mapper.sample(200.0, 50.0);
    let seg = mapper.sample(300.0, 50.0).unwrap();
    assert!((seg.from.0 - 0.5).abs() < 1e-6);
    assert!((seg.to.0 - 0.75).abs() < 1e-6);
}

#[test]
fn reset_forgets_the_anchor() {
    let mut mapper = PointerMapper::new(1.0);
    mapper.set_bounds(bounds());
    mapper.sample(150.0, 100.0);
    mapper.reset();
    assert!(mapper.sample(250.0, 100.0).is_none());
    assert!(mapper.sample(260.0, 100.0).is_some());
}

#[test]
fn degenerate_bounds_are_ignored() {
    let mut mapper = PointerMapper::new(1.0);
    mapper.set_bounds(Rect::new(10.0, 10.0, 10.0, 40.0));
    assert!(mapper.sample(10.0, 20.0).is_none());
    assert!(mapper.sample(10.0, 30.0).is_none());
}
