use super::*;

#[test]
fn validate_accepts_normal_brush() {
    Brush::new(10.0, -4.0, 8.0, 12.0).validate().unwrap();
}

#[test]
fn validate_rejects_non_positive_radius_and_intensity() {
    assert!(Brush::new(0.0, 0.0, 0.0, 4.0).validate().is_err());
    assert!(Brush::new(0.0, 0.0, -3.0, 4.0).validate().is_err());
    assert!(Brush::new(0.0, 0.0, 3.0, 0.0).validate().is_err());
    assert!(Brush::new(f64::NAN, 0.0, 3.0, 1.0).validate().is_err());
}

#[test]
fn degenerate_only_depends_on_geometry() {
    assert!(Brush::new(1.0, 1.0, 0.0, 4.0).is_degenerate());
    assert!(Brush::new(1.0, 1.0, f64::INFINITY, 4.0).is_degenerate());
    assert!(!Brush::new(1.0, 1.0, 2.0, 0.0).is_degenerate());
}

#[test]
fn canvas_len_overflow_is_reported() {
    assert_eq!(
        Canvas {
            width: 3,
            height: 2
        }
        .rgba8_len(),
        Some(24)
    );
}
