use crate::{
    foundation::core::Brush,
    foundation::error::BrushResult,
    geometry::region::{Region, align_to_grid, bounding_box, clip, grid_cells, pixel_in_circle},
    raster::store::{PixelStore, read_exact},
};

/// Smallest mosaic block the engine will draw.
pub const MIN_BLOCK_SIZE: i64 = 2;

/// Mosaic block size for a brush intensity: `max(2, floor(intensity))`.
pub fn block_size_for(intensity: f64) -> i64 {
    if !intensity.is_finite() {
        return MIN_BLOCK_SIZE;
    }
    (intensity.floor() as i64).max(MIN_BLOCK_SIZE)
}

/// Apply one mosaic dab.
///
/// Cells are anchored to the global origin, so overlapping dabs with the same
/// block size always agree on cell extents. Every cell averages over its full
/// visible extent, but only pixels inside the brush circle are repainted.
/// A refused read or write skips the dab without touching the store.
#[tracing::instrument(level = "trace", skip(store))]
pub fn apply_pixelate<S: PixelStore + ?Sized>(store: &mut S, brush: &Brush) {
    if let Err(err) = pixelate_dab(store, brush) {
        tracing::debug!(%err, "pixelate dab skipped");
    }
}

fn pixelate_dab<S: PixelStore + ?Sized>(store: &mut S, brush: &Brush) -> BrushResult<()> {
    if brush.is_degenerate() {
        return Ok(());
    }
    let bs = block_size_for(brush.intensity);
    let canvas = store.dimensions();

    // One cell of margin around the canvas keeps every visible cell whole.
    let reach = Region::new(
        -bs,
        -bs,
        i64::from(canvas.width) + bs,
        i64::from(canvas.height) + bs,
    );
    let grid_box = align_to_grid(bounding_box(brush.center, brush.radius).intersect(reach), bs);
    let visible = clip(grid_box, canvas.width, canvas.height);
    if visible.is_empty() {
        return Ok(());
    }

    let mut px = read_exact(store, visible)?;

    for cell in grid_cells(visible, bs) {
        let cell = cell.intersect(visible);
        if cell.is_empty() {
            continue;
        }

        let mut sum = [0u64; 3];
        for y in cell.min_y..cell.max_y {
            for x in cell.min_x..cell.max_x {
                let p = px.rgba(x, y);
                sum[0] += u64::from(p[0]);
                sum[1] += u64::from(p[1]);
                sum[2] += u64::from(p[2]);
            }
        }
        let n = cell.area() as u64;
        let avg = [
            (sum[0] / n) as u8,
            (sum[1] / n) as u8,
            (sum[2] / n) as u8,
        ];

        for y in cell.min_y..cell.max_y {
            for x in cell.min_x..cell.max_x {
                if pixel_in_circle(x, y, brush.center, brush.radius) {
                    px.set_rgb(x, y, avg);
                }
            }
        }
    }

    store.write_region(&px)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pixelate.rs"]
mod tests;
