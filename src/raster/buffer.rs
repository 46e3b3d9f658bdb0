use crate::{
    foundation::core::Canvas,
    foundation::error::{BrushError, BrushResult},
    geometry::region::Region,
    raster::store::{PixelStore, RegionPixels},
};

/// In-memory straight-alpha RGBA8 raster, row-major, top-left origin.
///
/// The byte length always equals `width * height * 4`; effects mutate it in
/// place and never reallocate it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Allocate a buffer filled with one RGBA color.
    pub fn new(width: u32, height: u32, fill: [u8; 4]) -> BrushResult<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: fill.repeat(len / 4),
        })
    }

    /// Adopt existing RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> BrushResult<Self> {
        let len = checked_len(width, height)?;
        if data.len() != len {
            return Err(BrushError::validation(format!(
                "raster expects {len} bytes for {width}x{height}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw interleaved bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// RGBA at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Overwrite one pixel. Out-of-bounds writes are ignored.
    pub fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data[i..i + 4].copy_from_slice(&rgba);
    }

    /// Overwrite every byte from a snapshot of identical dimensions.
    pub fn restore_from(&mut self, snapshot: &RasterBuffer) -> BrushResult<()> {
        if snapshot.width != self.width || snapshot.height != self.height {
            return Err(BrushError::state(format!(
                "snapshot is {}x{}, buffer is {}x{}",
                snapshot.width, snapshot.height, self.width, self.height
            )));
        }
        self.data.copy_from_slice(&snapshot.data);
        Ok(())
    }

    fn bounds(&self) -> Region {
        Region::new(0, 0, i64::from(self.width), i64::from(self.height))
    }
}

impl PixelStore for RasterBuffer {
    fn dimensions(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    fn read_region(&self, region: Region) -> BrushResult<RegionPixels> {
        if region.is_empty() || !self.bounds().contains_region(region) {
            return Ok(RegionPixels::empty(region));
        }

        let stride = self.width as usize * 4;
        let row_len = region.width() as usize * 4;
        let mut out = Vec::with_capacity(row_len * region.height() as usize);
        for y in region.min_y..region.max_y {
            let start = y as usize * stride + region.min_x as usize * 4;
            out.extend_from_slice(&self.data[start..start + row_len]);
        }
        RegionPixels::new(region, out)
    }

    fn write_region(&mut self, pixels: &RegionPixels) -> BrushResult<()> {
        let region = pixels.region();
        if region.is_empty() || pixels.is_empty() || !self.bounds().contains_region(region) {
            return Ok(());
        }

        let stride = self.width as usize * 4;
        let row_len = region.width() as usize * 4;
        for (row, src) in pixels.as_bytes().chunks_exact(row_len).enumerate() {
            let start = (region.min_y as usize + row) * stride + region.min_x as usize * 4;
            self.data[start..start + row_len].copy_from_slice(src);
        }
        Ok(())
    }
}

fn checked_len(width: u32, height: u32) -> BrushResult<usize> {
    if width == 0 || height == 0 {
        return Err(BrushError::validation("raster width/height must be > 0"));
    }
    Canvas { width, height }
        .rgba8_len()
        .ok_or_else(|| BrushError::validation("raster buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
