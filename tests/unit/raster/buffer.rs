use super::*;
use crate::raster::store::read_exact;

fn gradient(w: u32, h: u32) -> RasterBuffer {
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            data.extend_from_slice(&[x as u8, y as u8, (x + y) as u8, 255]);
        }
    }
    RasterBuffer::from_rgba8(w, h, data).unwrap()
}

#[test]
fn new_rejects_zero_dimensions() {
    assert!(RasterBuffer::new(0, 4, [0, 0, 0, 255]).is_err());
    assert!(RasterBuffer::new(4, 0, [0, 0, 0, 255]).is_err());
}

#[test]
fn from_rgba8_checks_length() {
    assert!(RasterBuffer::from_rgba8(2, 2, vec![0; 15]).is_err());
    let buf = RasterBuffer::from_rgba8(2, 2, vec![7; 16]).unwrap();
    assert_eq!(buf.as_bytes().len(), 16);
}

#[test]
fn read_region_copies_rows_in_order() {
    let buf = gradient(5, 4);
    let px = buf.read_region(Region::new(1, 2, 4, 4)).unwrap();
    assert_eq!(px.as_bytes().len(), 3 * 2 * 4);
    assert_eq!(px.rgba(1, 2), [1, 2, 3, 255]);
    assert_eq!(px.rgba(3, 3), [3, 3, 6, 255]);
}

#[test]
fn write_region_round_trips_at_origin() {
    let mut buf = gradient(5, 4);
    let mut px = buf.read_region(Region::new(2, 1, 4, 3)).unwrap();
    px.set_rgb(3, 2, [200, 201, 202]);
    buf.write_region(&px).unwrap();

    assert_eq!(buf.pixel(3, 2), Some([200, 201, 202, 255]));
    assert_eq!(buf.pixel(2, 1), Some([2, 1, 3, 255]));
    assert_eq!(buf.pixel(4, 2), Some([4, 2, 6, 255]));
}

#[test]
fn zero_area_requests_are_noops() {
    let mut buf = gradient(3, 3);
    let before = buf.clone();
    let px = buf.read_region(Region::new(1, 1, 1, 3)).unwrap();
    assert!(px.is_empty());
    buf.write_region(&px).unwrap();
    assert_eq!(buf, before);
}

#[test]
fn out_of_bounds_requests_are_noops() {
    let mut buf = gradient(3, 3);
    let before = buf.clone();

    let px = buf.read_region(Region::new(-1, 0, 2, 2)).unwrap();
    assert!(px.is_empty());

    let outside = RegionPixels::new(Region::new(2, 2, 4, 4), vec![255; 16]).unwrap();
    buf.write_region(&outside).unwrap();
    assert_eq!(buf, before);
}

#[test]
fn read_exact_rejects_a_short_sample() {
    let buf = gradient(3, 3);
    let err = read_exact(&buf, Region::new(1, 1, 5, 2)).unwrap_err();
    assert!(matches!(err, BrushError::Access(_)));

    let px = read_exact(&buf, Region::new(1, 1, 3, 2)).unwrap();
    assert_eq!(px.region(), Region::new(1, 1, 3, 2));
}

#[test]
fn restore_from_requires_matching_size() {
    let mut buf = gradient(3, 3);
    let snap = buf.clone();
    buf.put_pixel(0, 0, [9, 9, 9, 9]);
    buf.restore_from(&snap).unwrap();
    assert_eq!(buf, snap);

    let other = gradient(2, 3);
    assert!(matches!(
        buf.restore_from(&other),
        Err(BrushError::State(_))
    ));
}
