//! brushfx paints privacy and stylistic effects onto raster images with a
//! circular brush.
//!
//! The engine works on straight-alpha RGBA8 buffers through the [`PixelStore`]
//! trait and offers three effects, each applied one dab at a time:
//!
//! - [`apply_pixelate`]: mosaic with cells anchored to the global origin, so
//!   overlapping strokes with the same block size never disagree on seams
//! - [`apply_noise`]: per-channel uniform noise from an injected
//!   [`UniformSource`]
//! - [`apply_blur`]: Gaussian blur that reads a padded neighborhood from the
//!   whole surface and commits only inside the brush circle
//!
//! Around the engine sit thin collaborators: [`StrokeSession`] turns
//! start/dab/end events into dabs, [`SnapshotHistory`] keeps one full-buffer
//! snapshot per completed stroke, and [`StrokeScript`] replays strokes from
//! JSON.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Best-effort dabs**: a refused read/write or a degenerate brush skips
//!   the dab; effect entry points never return errors.
//! - **Alpha is never modified** by any effect.
//! - **Region-local cost**: each dab touches only its clipped bounding box
//!   (pixelate, noise) or padded rectangle (blur).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod effects;
mod foundation;
mod geometry;
mod random;
mod raster;
mod stroke;

pub use assets::decode::{decode_image, encode_png, load_raster, save_png};
pub use config::{BrushSettings, ScriptStroke, StrokeScript};
pub use effects::blur::{
    GaussianKernel, MAX_KERNEL_RADIUS, apply_blur, blur_strength_for, blur_window, padded_rect,
};
pub use effects::noise::{apply_noise, variance_for};
pub use effects::pixelate::{MIN_BLOCK_SIZE, apply_pixelate, block_size_for};
pub use effects::{EffectKind, apply_dab};
pub use foundation::core::{Brush, Canvas, Point};
pub use foundation::error::{BrushError, BrushResult};
pub use geometry::region::{
    GridCells, Region, align_to_grid, bounding_box, clip, grid_cells, in_circle, pixel_in_circle,
};
pub use random::{FixedUniform, SeededUniform, UniformSource};
pub use raster::buffer::RasterBuffer;
pub use raster::store::{PixelStore, RegionPixels};
pub use stroke::history::SnapshotHistory;
pub use stroke::replay::{ReplayStats, replay};
pub use stroke::session::{StrokeEvent, StrokeOutcome, StrokeSession, StrokeState};
