use crate::foundation::error::{BrushError, BrushResult};

pub use kurbo::Point;

/// One brush dab in buffer pixel space.
///
/// Built fresh per dab by the caller. The center may lie outside the buffer;
/// the engine clips. Display/DPI scaling is the caller's concern.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Brush {
    /// Dab center in canvas pixel coordinates.
    pub center: Point,
    /// Brush radius in pixels, expected `> 0`.
    pub radius: f64,
    /// Effect-specific strength, expected `> 0`.
    ///
    /// Drives mosaic block size for pixelate, variance for noise, and kernel
    /// size for blur.
    pub intensity: f64,
}

impl Brush {
    /// Build a brush from raw coordinates.
    pub fn new(x: f64, y: f64, radius: f64, intensity: f64) -> Self {
        Self {
            center: Point::new(x, y),
            radius,
            intensity,
        }
    }

    /// Reject brushes a UI boundary should never emit.
    ///
    /// Effects never call this; they clamp instead so a stroke does not drop
    /// dabs mid-gesture.
    pub fn validate(&self) -> BrushResult<()> {
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(BrushError::validation("brush center must be finite"));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(BrushError::validation("brush radius must be finite and > 0"));
        }
        if !self.intensity.is_finite() || self.intensity <= 0.0 {
            return Err(BrushError::validation(
                "brush intensity must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// `true` when no pixel can be inside the brush circle.
    pub fn is_degenerate(&self) -> bool {
        !self.center.x.is_finite()
            || !self.center.y.is_finite()
            || !self.radius.is_finite()
            || self.radius <= 0.0
    }
}

/// Raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Number of bytes an RGBA8 buffer of this size occupies.
    pub fn rgba8_len(self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
