use super::*;

#[test]
fn floor_div_rounds_toward_negative_infinity() {
    assert_eq!(floor_div(7, 4), 1);
    assert_eq!(floor_div(8, 4), 2);
    assert_eq!(floor_div(0, 4), 0);
    assert_eq!(floor_div(-1, 4), -1);
    assert_eq!(floor_div(-4, 4), -1);
    assert_eq!(floor_div(-5, 4), -2);
    assert_eq!(floor_div(-13, 4), -4);
}

#[test]
fn floor_and_ceil_px_handle_negatives() {
    assert_eq!(floor_px(-0.5), -1);
    assert_eq!(ceil_px(-0.5), 0);
    assert_eq!(floor_px(2.0), 2);
    assert_eq!(ceil_px(2.0), 2);
    assert_eq!(ceil_px(2.1), 3);
}

#[test]
fn clamp_channel_saturates_and_rounds() {
    assert_eq!(clamp_channel(-12.0), 0);
    assert_eq!(clamp_channel(300.0), 255);
    assert_eq!(clamp_channel(127.5), 128);
    assert_eq!(clamp_channel(f64::INFINITY), 255);
    assert_eq!(clamp_channel(f64::NEG_INFINITY), 0);
    assert_eq!(clamp_channel(f64::NAN), 0);
}
