use crate::{
    foundation::core::Brush,
    foundation::error::{BrushError, BrushResult},
    foundation::math::{ceil_px, floor_px},
    geometry::region::{Region, bounding_box, clip, pixel_in_circle},
    raster::store::{PixelStore, RegionPixels, read_exact},
};

/// Widest kernel reach, in taps per side.
pub const MAX_KERNEL_RADIUS: u32 = 256;

/// Gaussian sigma for a brush intensity: `max(1, intensity / 4)`.
pub fn blur_strength_for(intensity: f64) -> f64 {
    if !intensity.is_finite() {
        return 1.0;
    }
    (intensity / 4.0).max(1.0)
}

/// Padded source rectangle for a blur dab, before clipping to the surface.
///
/// The square extends `2 * strength` past the brush circle on every side so
/// the convolution sees real neighbors at the circle edge. Its origin is
/// clamped to zero while the side length is kept.
pub fn padded_rect(brush: &Brush, strength: f64) -> Region {
    let pad = strength * 2.0;
    let side = (brush.radius + pad) * 2.0;
    let ox = (brush.center.x - brush.radius - pad).max(0.0);
    let oy = (brush.center.y - brush.radius - pad).max(0.0);
    Region::new(
        floor_px(ox),
        floor_px(oy),
        ceil_px(ox + side),
        ceil_px(oy + side),
    )
}

/// Apply one blur dab.
///
/// Reads the padded neighborhood from the whole surface, blurs it, and
/// commits only the RGB of pixels inside the brush circle.
#[tracing::instrument(level = "trace", skip(surface))]
pub fn apply_blur<S: PixelStore + ?Sized>(surface: &mut S, brush: &Brush) {
    if let Err(err) = blur_dab(surface, brush) {
        tracing::debug!(%err, "blur dab skipped");
    }
}

fn blur_dab<S: PixelStore + ?Sized>(surface: &mut S, brush: &Brush) -> BrushResult<()> {
    if brush.is_degenerate() {
        return Ok(());
    }
    let canvas = surface.dimensions();
    let target = clip(
        bounding_box(brush.center, brush.radius),
        canvas.width,
        canvas.height,
    );
    if target.is_empty() {
        return Ok(());
    }

    let strength = blur_strength_for(brush.intensity);
    let src = clip(padded_rect(brush, strength), canvas.width, canvas.height);
    if src.is_empty() {
        return Ok(());
    }

    let mut px = read_exact(surface, src)?;
    let kernel_radius = ceil_px(strength * 2.0).clamp(1, i64::from(MAX_KERNEL_RADIUS)) as u32;
    let kernel = GaussianKernel::new(kernel_radius, strength)?;

    let commit = target.intersect(src);
    let blurred = blur_window(&px, commit, &kernel);
    let row = commit.width() as usize;
    for y in commit.min_y..commit.max_y {
        for x in commit.min_x..commit.max_x {
            if pixel_in_circle(x, y, brush.center, brush.radius) {
                let i = (y - commit.min_y) as usize * row + (x - commit.min_x) as usize;
                px.set_rgb(x, y, blurred[i]);
            }
        }
    }

    surface.write_region(&px)
}

const ONE_Q16: u32 = 1 << 16;

/// Normalized Gaussian taps in Q16 fixed point.
///
/// Holds `2 * radius + 1` weights that sum to exactly `65536`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GaussianKernel {
    taps: Vec<u32>,
}

impl GaussianKernel {
    /// Build a kernel reaching `radius` taps per side.
    ///
    /// A zero radius is the identity kernel regardless of `sigma`.
    pub fn new(radius: u32, sigma: f64) -> BrushResult<Self> {
        if radius == 0 {
            return Ok(Self { taps: vec![ONE_Q16] });
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(BrushError::validation("blur sigma must be finite and > 0"));
        }

        let r = i64::from(radius);
        let falloff = |i: i64| {
            let d = i as f64 / sigma;
            (-0.5 * d * d).exp()
        };
        let total: f64 = (-r..=r).map(falloff).sum();
        let mut taps: Vec<u32> = (-r..=r)
            .map(|i| (falloff(i) / total * f64::from(ONE_Q16)).round() as u32)
            .collect();

        // Rounding drift lands on the center tap.
        let drift = i64::from(ONE_Q16) - taps.iter().map(|&t| i64::from(t)).sum::<i64>();
        let center = &mut taps[radius as usize];
        *center = (i64::from(*center) + drift).clamp(0, i64::from(ONE_Q16)) as u32;

        Ok(Self { taps })
    }

    /// Taps per side.
    pub fn radius(&self) -> usize {
        self.taps.len() / 2
    }

    /// Weights from leftmost to rightmost tap.
    pub fn taps(&self) -> &[u32] {
        &self.taps
    }
}

/// Gaussian-blurred RGB for every pixel of `window`, row-major.
///
/// Every pixel of `src` may feed the kernel; samples past its edges repeat the
/// nearest edge pixel. `window` is intersected with the sample's region first,
/// and alpha never enters the convolution.
pub fn blur_window(src: &RegionPixels, window: Region, kernel: &GaussianKernel) -> Vec<[u8; 3]> {
    let bounds = src.region();
    let window = window.intersect(bounds);
    if window.is_empty() {
        return Vec::new();
    }
    let r = kernel.radius() as i64;
    let cols = window.width() as usize;

    // Horizontal pass over the rows the vertical taps can reach.
    let row_lo = (window.min_y - r).max(bounds.min_y);
    let row_hi = (window.max_y + r).min(bounds.max_y);
    let mut rows = Vec::with_capacity((row_hi - row_lo) as usize * cols);
    for y in row_lo..row_hi {
        for x in window.min_x..window.max_x {
            rows.push(convolve(kernel, |k| {
                let sx = (x + k - r).clamp(bounds.min_x, bounds.max_x - 1);
                let p = src.rgba(sx, y);
                [p[0], p[1], p[2]]
            }));
        }
    }

    // Vertical pass only over the window itself.
    let mut out = Vec::with_capacity(window.area() as usize);
    for y in window.min_y..window.max_y {
        for col in 0..cols {
            out.push(convolve(kernel, |k| {
                let sy = (y + k - r).clamp(row_lo, row_hi - 1);
                rows[(sy - row_lo) as usize * cols + col]
            }));
        }
    }
    out
}

fn convolve(kernel: &GaussianKernel, mut sample: impl FnMut(i64) -> [u8; 3]) -> [u8; 3] {
    let mut acc = [0u64; 3];
    for (k, &w) in kernel.taps().iter().enumerate() {
        let rgb = sample(k as i64);
        for (a, v) in acc.iter_mut().zip(rgb) {
            *a += u64::from(w) * u64::from(v);
        }
    }
    acc.map(|a| ((a + (1 << 15)) >> 16).min(255) as u8)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
