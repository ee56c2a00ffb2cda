use super::*;

#[test]
fn bake_rejects_bad_stop_sets() {
    assert!(GradientStamp::bake(&[1.0]).is_err());
    assert!(GradientStamp::bake(&[0.5, 1.0, 0.0]).is_err());
    assert!(GradientStamp::bake(&[1.2, 0.5, 0.0]).is_err());
    assert!(GradientStamp::bake(&[1.0, 0.5, -0.1]).is_err());
    assert!(GradientStamp::bake(&[1.0, 0.5, 0.0]).is_ok());
}

#[test]
fn center_is_brightest_and_corners_are_empty() {
    let stamp = GradientStamp::bake(&[1.0, 0.5, 0.0]).unwrap();
    let mid = stamp.resolution() / 2;
    assert!(stamp.texel(mid, mid) > 0.9);
    assert_eq!(stamp.texel(0, 0), 0.0);
    assert_eq!(stamp.texel(stamp.resolution() - 1, stamp.resolution() - 1), 0.0);
}

#[test]
fn falloff_is_radially_non_increasing() {
    let stamp = GradientStamp::bake(&[1.0, 0.8, 0.55, 0.3, 0.12, 0.0]).unwrap();
    let mid = stamp.resolution() / 2;
    let mut prev = f32::INFINITY;
    for x in mid..stamp.resolution() {
        let v = stamp.texel(x, mid);
        assert!(v <= prev + 1e-6);
        prev = v;
    }
}

#[test]
fn out_of_raster_reads_are_zero() {
    let stamp = GradientStamp::bake(&[1.0, 0.0]).unwrap();
    assert_eq!(stamp.texel(stamp.resolution(), 0), 0.0);
    assert_eq!(stamp.texel(0, stamp.resolution() + 7), 0.0);
}

#[test]
fn quality_presets_bake_for_every_tier() {
    use crate::quality::settings::{QualitySettings, Tier};
    for tier in [Tier::Low, Tier::Medium, Tier::High] {
        let stamp = GradientStamp::for_quality(&QualitySettings::preset(tier)).unwrap();
        let mid = stamp.resolution() / 2;
        assert!(stamp.texel(mid, mid) > 0.9);
    }
}

#[test]
fn stop_sampling_interpolates_between_stops() {
    let stops = [1.0, 0.5, 0.0];
    assert!((sample_stops(&stops, 0.0) - 1.0).abs() < 1e-6);
    assert!((sample_stops(&stops, 0.25) - 0.75).abs() < 1e-6);
    assert!((sample_stops(&stops, 0.5) - 0.5).abs() < 1e-6);
    assert_eq!(sample_stops(&stops, 1.0), 0.0);
    assert_eq!(sample_stops(&stops, 3.0), 0.0);
}
