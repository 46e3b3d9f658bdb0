/// Floor division for signed integers.
///
/// `/` truncates toward zero, which misplaces grid boundaries for negative
/// coordinates (`-1 / 4 == 0`). This always rounds toward negative infinity.
pub(crate) fn floor_div(a: i64, b: i64) -> i64 {
    debug_assert!(b > 0, "floor_div divisor must be positive");
    let q = a / b;
    if (a % b != 0) && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

/// `floor(v)` as an integer pixel coordinate, saturating at the `i64` range.
pub(crate) fn floor_px(v: f64) -> i64 {
    // `as` saturates for out-of-range floats and maps NaN to 0.
    v.floor() as i64
}

/// `ceil(v)` as an integer pixel coordinate, saturating at the `i64` range.
pub(crate) fn ceil_px(v: f64) -> i64 {
    v.ceil() as i64
}

/// Round to nearest and clamp into an 8-bit channel.
pub(crate) fn clamp_channel(v: f64) -> u8 {
    if !v.is_finite() {
        return if v > 0.0 { 255 } else { 0 };
    }
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
