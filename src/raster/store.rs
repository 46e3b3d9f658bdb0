use crate::{
    foundation::core::Canvas,
    foundation::error::{BrushError, BrushResult},
    geometry::region::Region,
};

/// Backing store for brush effects.
///
/// Effects touch pixels only through this trait, one region read and one region
/// write per dab. Zero-area and out-of-bounds requests are tolerated as no-ops:
/// the read hands back an empty sample and the write changes nothing. Content
/// the store refuses to expose returns [`BrushError::Access`]; effects treat
/// that as a skipped dab.
pub trait PixelStore {
    /// Store dimensions in pixels.
    fn dimensions(&self) -> Canvas;

    /// Copy out the RGBA8 pixels of `region`.
    fn read_region(&self, region: Region) -> BrushResult<RegionPixels>;

    /// Copy `pixels` back at `pixels.region()`.
    fn write_region(&mut self, pixels: &RegionPixels) -> BrushResult<()>;
}

/// Interleaved RGBA8 copy of a buffer sub-region.
///
/// Accessors take absolute buffer coordinates so callers never juggle two
/// coordinate systems.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionPixels {
    region: Region,
    data: Vec<u8>,
}

impl RegionPixels {
    /// Wrap bytes read for `region`. `data` must hold `area * 4` bytes.
    pub fn new(region: Region, data: Vec<u8>) -> BrushResult<Self> {
        let expected = usize::try_from(region.area())
            .ok()
            .and_then(|a| a.checked_mul(4))
            .ok_or_else(|| BrushError::access("region size overflow"))?;
        if data.len() != expected {
            return Err(BrushError::access(format!(
                "region pixels expect {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self { region, data })
    }

    /// Zero-area sample.
    pub fn empty(region: Region) -> Self {
        Self {
            region: Region::new(region.min_x, region.min_y, region.min_x, region.min_y),
            data: Vec::new(),
        }
    }

    /// Region these pixels were read from.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Return `true` when no pixel is held.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw interleaved bytes, row-major within the region.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn offset(&self, x: i64, y: i64) -> usize {
        debug_assert!(self.region.contains(x, y));
        let row = (y - self.region.min_y) as usize;
        let col = (x - self.region.min_x) as usize;
        (row * self.region.width() as usize + col) * 4
    }

    /// RGBA at absolute `(x, y)`. Panics when outside the region.
    pub fn rgba(&self, x: i64, y: i64) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Overwrite R, G, B at absolute `(x, y)`; alpha is left alone.
    pub fn set_rgb(&mut self, x: i64, y: i64, rgb: [u8; 3]) {
        let i = self.offset(x, y);
        self.data[i..i + 3].copy_from_slice(&rgb);
    }
}

/// Read `region` and insist the store hands back exactly that region.
///
/// An empty sample for a non-empty request becomes [`BrushError::Access`], so
/// the calling effect skips the dab instead of indexing missing pixels.
pub(crate) fn read_exact<S: PixelStore + ?Sized>(
    store: &S,
    region: Region,
) -> BrushResult<RegionPixels> {
    let px = store.read_region(region)?;
    if px.region() != region {
        return Err(BrushError::access(format!(
            "store returned {:?} for requested {region:?}",
            px.region()
        )));
    }
    Ok(px)
}
