use super::*;

#[test]
fn constructor_helpers_map_to_variants() {
    assert!(matches!(
        SmudgeError::validation("x"),
        SmudgeError::Validation(_)
    ));
    assert!(matches!(SmudgeError::surface("x"), SmudgeError::Surface(_)));
    assert!(matches!(
        SmudgeError::resource("x"),
        SmudgeError::Resource(_)
    ));
}

#[test]
fn display_includes_category_and_message() {
    let err = SmudgeError::validation("fade_speed must be in (0, 1]");
    assert_eq!(
        err.to_string(),
        "validation error: fade_speed must be in (0, 1]"
    );
}

#[test]
fn anyhow_errors_wrap_transparently() {
    let inner = anyhow::anyhow!("disk on fire");
    let err: SmudgeError = inner.into();
    assert_eq!(err.to_string(), "disk on fire");
}
