use crate::{
    effects::EffectKind,
    foundation::core::{Brush, Point},
    foundation::error::{BrushError, BrushResult},
};

/// Current brush UI state: one radius plus a remembered intensity per effect.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    /// Brush radius in buffer pixels.
    pub radius: f64,
    /// Mosaic block size driver.
    pub pixelate_intensity: f64,
    /// Noise variance driver.
    pub noise_intensity: f64,
    /// Blur kernel driver.
    pub blur_intensity: f64,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            radius: 24.0,
            pixelate_intensity: 12.0,
            noise_intensity: 40.0,
            blur_intensity: 8.0,
        }
    }
}

impl BrushSettings {
    /// Intensity remembered for `kind`.
    pub fn intensity_for(&self, kind: EffectKind) -> f64 {
        match kind {
            EffectKind::Pixelate => self.pixelate_intensity,
            EffectKind::Noise => self.noise_intensity,
            EffectKind::Blur => self.blur_intensity,
        }
    }

    /// Replace the intensity remembered for `kind`.
    pub fn set_intensity(&mut self, kind: EffectKind, value: f64) {
        match kind {
            EffectKind::Pixelate => self.pixelate_intensity = value,
            EffectKind::Noise => self.noise_intensity = value,
            EffectKind::Blur => self.blur_intensity = value,
        }
    }

    /// Brush descriptor for one dab of `kind` at `at`.
    pub fn brush_at(&self, kind: EffectKind, at: Point) -> Brush {
        Brush {
            center: at,
            radius: self.radius,
            intensity: self.intensity_for(kind),
        }
    }

    /// Reject settings a UI boundary should never produce.
    pub fn validate(&self) -> BrushResult<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(BrushError::validation("radius must be finite and > 0"));
        }
        for kind in EffectKind::ALL {
            let v = self.intensity_for(kind);
            if !v.is_finite() || v <= 0.0 {
                return Err(BrushError::validation(format!(
                    "{kind} intensity must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}

/// Replayable list of strokes, loaded from JSON.
///
/// ```json
/// {
///   "effect": "pixelate",
///   "settings": { "radius": 16 },
///   "seed": 7,
///   "strokes": [
///     { "points": [[10, 10], [14, 12], [18, 15]] },
///     { "effect": "blur", "intensity": 12, "points": [[40, 40]] }
///   ]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeScript {
    /// Effect used by strokes that do not name one.
    #[serde(default)]
    pub effect: EffectKind,
    /// Base brush settings.
    #[serde(default)]
    pub settings: BrushSettings,
    /// Seed for the noise source.
    #[serde(default)]
    pub seed: u64,
    /// Strokes in replay order.
    pub strokes: Vec<ScriptStroke>,
}

/// One stroke of a [`StrokeScript`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptStroke {
    /// Effect override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<EffectKind>,
    /// Radius override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Intensity override for this stroke's effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    /// Dab centers; the first starts the stroke.
    pub points: Vec<[f64; 2]>,
}

impl StrokeScript {
    /// Parse and validate a script from JSON text.
    pub fn from_json(text: &str) -> BrushResult<Self> {
        let script: StrokeScript =
            serde_json::from_str(text).map_err(|e| BrushError::serde(e.to_string()))?;
        script.validate()?;
        Ok(script)
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> BrushResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BrushError::serde(e.to_string()))
    }

    /// Check settings and every stroke override.
    pub fn validate(&self) -> BrushResult<()> {
        self.settings.validate()?;
        for (i, stroke) in self.strokes.iter().enumerate() {
            if stroke.points.is_empty() {
                return Err(BrushError::validation(format!(
                    "stroke {i} must have at least one point"
                )));
            }
            if stroke.points.iter().flatten().any(|v| !v.is_finite()) {
                return Err(BrushError::validation(format!(
                    "stroke {i} has a non-finite point"
                )));
            }
            let settings = self.settings_for(stroke);
            settings
                .validate()
                .map_err(|e| BrushError::validation(format!("stroke {i}: {e}")))?;
        }
        Ok(())
    }

    /// Effect a stroke paints with.
    pub fn effect_for(&self, stroke: &ScriptStroke) -> EffectKind {
        stroke.effect.unwrap_or(self.effect)
    }

    /// Base settings with a stroke's overrides applied.
    pub fn settings_for(&self, stroke: &ScriptStroke) -> BrushSettings {
        let mut settings = self.settings;
        if let Some(radius) = stroke.radius {
            settings.radius = radius;
        }
        if let Some(intensity) = stroke.intensity {
            settings.set_intensity(self.effect_for(stroke), intensity);
        }
        settings
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
