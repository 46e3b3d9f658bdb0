use crate::foundation::{
    core::Point,
    math::{ceil_px, floor_div, floor_px},
};

/// Integer half-open box `[min_x, max_x) × [min_y, max_y)` in buffer pixels.
///
/// Zero area is a valid "nothing to do" value, never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    /// Inclusive left edge.
    pub min_x: i64,
    /// Inclusive top edge.
    pub min_y: i64,
    /// Exclusive right edge.
    pub max_x: i64,
    /// Exclusive bottom edge.
    pub max_y: i64,
}

impl Region {
    /// Build a region, collapsing inverted extents to zero area.
    pub fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Self {
            min_x,
            min_y,
            max_x: max_x.max(min_x),
            max_y: max_y.max(min_y),
        }
    }

    /// Region anchored at `(x, y)` with the given size.
    pub fn from_origin_size(x: i64, y: i64, w: i64, h: i64) -> Self {
        Self::new(x, y, x.saturating_add(w), y.saturating_add(h))
    }

    /// Width in pixels, saturating at `i64::MAX`.
    pub fn width(self) -> i64 {
        self.max_x.saturating_sub(self.min_x)
    }

    /// Height in pixels, saturating at `i64::MAX`.
    pub fn height(self) -> i64 {
        self.max_y.saturating_sub(self.min_y)
    }

    /// Pixel count, saturating.
    pub fn area(self) -> i64 {
        self.width().saturating_mul(self.height())
    }

    /// Return `true` when the region covers no pixel.
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Overlap of two regions; empty when they are disjoint.
    pub fn intersect(self, other: Region) -> Region {
        Region::new(
            self.min_x.max(other.min_x),
            self.min_y.max(other.min_y),
            self.max_x.min(other.max_x),
            self.max_y.min(other.max_y),
        )
    }

    /// Return `true` when `(x, y)` lies inside the half-open box.
    pub fn contains(self, x: i64, y: i64) -> bool {
        self.min_x <= x && x < self.max_x && self.min_y <= y && y < self.max_y
    }

    /// Return `true` when `other` lies fully inside `self`.
    pub fn contains_region(self, other: Region) -> bool {
        other.is_empty()
            || (self.min_x <= other.min_x
                && self.min_y <= other.min_y
                && other.max_x <= self.max_x
                && other.max_y <= self.max_y)
    }
}

/// Smallest integer box holding the circle, using true floor/ceil.
pub fn bounding_box(center: Point, radius: f64) -> Region {
    Region::new(
        floor_px(center.x - radius),
        floor_px(center.y - radius),
        ceil_px(center.x + radius),
        ceil_px(center.y + radius),
    )
}

/// Intersect with the raster bounds `[0, width) × [0, height)`.
pub fn clip(region: Region, width: u32, height: u32) -> Region {
    region.intersect(Region::new(0, 0, i64::from(width), i64::from(height)))
}

/// Expand outward to whole grid cells anchored at the global origin.
///
/// `block_size` values below 1 are treated as 1. Extents near the `i64`
/// limits saturate instead of wrapping.
pub fn align_to_grid(region: Region, block_size: i64) -> Region {
    let bs = block_size.max(1);
    if region.is_empty() {
        return region;
    }
    let down = |v: i64| floor_div(v, bs).saturating_mul(bs);
    let up = |v: i64| {
        v.checked_add(bs - 1)
            .map_or(i64::MAX, |v| floor_div(v, bs).saturating_mul(bs))
    };
    Region::new(
        down(region.min_x),
        down(region.min_y),
        up(region.max_x),
        up(region.max_y),
    )
}

/// Euclidean distance from `(px, py)` to `center` is `<= radius`.
pub fn in_circle(px: f64, py: f64, center: Point, radius: f64) -> bool {
    let dx = px - center.x;
    let dy = py - center.y;
    dx * dx + dy * dy <= radius * radius
}

/// Circle test for the pixel at integer index `(x, y)`, sampled at its center.
pub fn pixel_in_circle(x: i64, y: i64, center: Point, radius: f64) -> bool {
    in_circle(x as f64 + 0.5, y as f64 + 0.5, center, radius)
}

/// Iterate the origin-anchored grid cells of side `block_size` that intersect
/// `region`, row by row. Each yielded cell is the full cell, not the overlap.
pub fn grid_cells(region: Region, block_size: i64) -> GridCells {
    let bs = block_size.max(1);
    let aligned = align_to_grid(region, bs);
    GridCells {
        aligned,
        block_size: bs,
        x: aligned.min_x,
        y: aligned.min_y,
    }
}

/// Iterator returned by [`grid_cells`].
#[derive(Clone, Debug)]
pub struct GridCells {
    aligned: Region,
    block_size: i64,
    x: i64,
    y: i64,
}

impl Iterator for GridCells {
    type Item = Region;

    fn next(&mut self) -> Option<Region> {
        if self.aligned.is_empty() || self.y >= self.aligned.max_y {
            return None;
        }
        let cell = Region::from_origin_size(self.x, self.y, self.block_size, self.block_size);
        self.x += self.block_size;
        if self.x >= self.aligned.max_x {
            self.x = self.aligned.min_x;
            self.y += self.block_size;
        }
        Some(cell)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/region.rs"]
mod tests;
