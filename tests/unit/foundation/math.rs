use super::*;

#[test]
fn lerp_endpoints_and_midpoint() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
}

#[test]
fn smoothstep_clamps_and_is_monotonic() {
    assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    let mut prev = 0.0;
    for i in 0..=20 {
        let v = smoothstep(0.0, 1.0, i as f32 / 20.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn decay_compounds_like_a_single_step() {
    // keep^a * keep^b == keep^(a+b): many small ticks decay exactly like one large tick.
    let combined = decay_factor(0.9, 3.5) * decay_factor(0.9, 2.5);
    let single = decay_factor(0.9, 6.0);
    assert!((combined - single).abs() < 1e-6);
}

#[test]
fn decay_edge_rates() {
    assert_eq!(decay_factor(1.0, 10.0), 1.0);
    assert_eq!(decay_factor(0.0, 1.0), 0.0);
    // Out-of-range inputs clamp instead of exploding.
    assert_eq!(decay_factor(2.0, 1.0), 1.0);
    assert_eq!(decay_factor(0.9, -5.0), 1.0);
}
