use std::{io::Cursor, path::Path};

use anyhow::Context;

use crate::{foundation::error::BrushResult, raster::buffer::RasterBuffer};

/// Decode encoded image bytes into a straight-alpha RGBA8 raster.
pub fn decode_image(bytes: &[u8]) -> BrushResult<RasterBuffer> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    RasterBuffer::from_rgba8(width, height, rgba.into_raw())
}

/// Read and decode an image file.
pub fn load_raster(path: &Path) -> BrushResult<RasterBuffer> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_image(&bytes)
}

/// Encode a raster as PNG bytes.
pub fn encode_png(raster: &RasterBuffer) -> BrushResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(raster.width(), raster.height(), raster.as_bytes().to_vec())
        .context("raster bytes do not match dimensions")?;
    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(out)
}

/// Write a raster as a PNG file, creating parent directories.
pub fn save_png(path: &Path, raster: &RasterBuffer) -> BrushResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        raster.as_bytes(),
        raster.width(),
        raster.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
