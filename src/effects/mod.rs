pub(crate) mod blur;
pub(crate) mod noise;
pub(crate) mod pixelate;

use std::str::FromStr;

use crate::{
    foundation::core::Brush,
    foundation::error::{BrushError, BrushResult},
    random::UniformSource,
    raster::store::PixelStore,
};

/// Brush effect selector.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Grid-anchored mosaic.
    #[default]
    Pixelate,
    /// Per-channel uniform noise.
    Noise,
    /// Localized Gaussian blur.
    Blur,
}

impl EffectKind {
    /// Every effect, in menu order.
    pub const ALL: [EffectKind; 3] = [EffectKind::Pixelate, EffectKind::Noise, EffectKind::Blur];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            EffectKind::Pixelate => "pixelate",
            EffectKind::Noise => "noise",
            EffectKind::Blur => "blur",
        }
    }
}

impl FromStr for EffectKind {
    type Err = BrushError;

    fn from_str(s: &str) -> BrushResult<Self> {
        let kind = s.trim().to_ascii_lowercase();
        if kind.is_empty() {
            return Err(BrushError::validation("effect kind must be non-empty"));
        }
        match kind.as_str() {
            "pixelate" | "mosaic" => Ok(EffectKind::Pixelate),
            "noise" => Ok(EffectKind::Noise),
            "blur" => Ok(EffectKind::Blur),
            _ => Err(BrushError::validation(format!(
                "unknown effect kind '{kind}'"
            ))),
        }
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply one dab of `kind`. The random source is only consulted by noise.
pub fn apply_dab<S, R>(kind: EffectKind, store: &mut S, brush: &Brush, rng: &mut R)
where
    S: PixelStore + ?Sized,
    R: UniformSource + ?Sized,
{
    match kind {
        EffectKind::Pixelate => pixelate::apply_pixelate(store, brush),
        EffectKind::Noise => noise::apply_noise(store, brush, rng),
        EffectKind::Blur => blur::apply_blur(store, brush),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/kind.rs"]
mod tests;
