use crate::{
    foundation::core::Brush,
    foundation::error::BrushResult,
    foundation::math::clamp_channel,
    geometry::region::{bounding_box, clip, pixel_in_circle},
    random::UniformSource,
    raster::store::{PixelStore, read_exact},
};

/// Noise spread for a brush intensity: `intensity * 1.5`, never negative.
pub fn variance_for(intensity: f64) -> f64 {
    if !intensity.is_finite() || intensity <= 0.0 {
        return 0.0;
    }
    intensity * 1.5
}

/// Apply one noise dab.
///
/// Each in-circle pixel gets an independent offset in
/// `[-variance / 2, variance / 2]` per color channel, clamped to `[0, 255]`.
/// Alpha and out-of-circle pixels are left byte-identical.
#[tracing::instrument(level = "trace", skip(store, rng))]
pub fn apply_noise<S, R>(store: &mut S, brush: &Brush, rng: &mut R)
where
    S: PixelStore + ?Sized,
    R: UniformSource + ?Sized,
{
    if let Err(err) = noise_dab(store, brush, rng) {
        tracing::debug!(%err, "noise dab skipped");
    }
}

fn noise_dab<S, R>(store: &mut S, brush: &Brush, rng: &mut R) -> BrushResult<()>
where
    S: PixelStore + ?Sized,
    R: UniformSource + ?Sized,
{
    if brush.is_degenerate() {
        return Ok(());
    }
    let canvas = store.dimensions();
    let visible = clip(
        bounding_box(brush.center, brush.radius),
        canvas.width,
        canvas.height,
    );
    if visible.is_empty() {
        return Ok(());
    }

    let half = variance_for(brush.intensity) / 2.0;
    let mut px = read_exact(store, visible)?;

    for y in visible.min_y..visible.max_y {
        for x in visible.min_x..visible.max_x {
            if !pixel_in_circle(x, y, brush.center, brush.radius) {
                continue;
            }
            let p = px.rgba(x, y);
            let mut rgb = [p[0], p[1], p[2]];
            for c in &mut rgb {
                let offset = unit_sample(rng.next_signed()) * half;
                *c = clamp_channel(f64::from(*c) + offset);
            }
            px.set_rgb(x, y, rgb);
        }
    }

    store.write_region(&px)
}

/// Clamp a draw into `[-1, 1]`; NaN counts as no offset.
fn unit_sample(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/noise.rs"]
mod tests;
