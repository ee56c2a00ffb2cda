use super::*;

#[test]
fn surface_size_rejects_zero_and_oversize() {
    assert!(SurfaceSize::new(0, 10).is_err());
    assert!(SurfaceSize::new(10, 0).is_err());
    assert!(SurfaceSize::new(MAX_SURFACE_DIM + 1, 10).is_err());
    assert!(SurfaceSize::new(MAX_SURFACE_DIM, MAX_SURFACE_DIM).is_ok());
}

#[test]
fn surface_size_texel_count() {
    let s = SurfaceSize::new(16, 9).unwrap();
    assert_eq!(s.texel_count(), 144);
    assert_eq!(SurfaceSize::square(8).unwrap().texel_count(), 64);
}

#[test]
fn tiling_mode_serde_is_lowercase() {
    assert_eq!(
        serde_json::to_string(&TilingMode::Repeat).unwrap(),
        "\"repeat\""
    );
    let parsed: TilingMode = serde_json::from_str("\"clamp\"").unwrap();
    assert_eq!(parsed, TilingMode::Clamp);
}
