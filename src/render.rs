use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};

use crate::{error::Result, landscape::Landscape};

const GRAY_LEVELS: f64 = 256.0;

/// Maps `value` onto the gray ramp spanned by `min..=max`.
/// Flat ranges and non-finite values map to black.
pub fn gray_level(value: f64, min: f64, max: f64) -> u8 {
    if !value.is_finite() || !(max > min) {
        return 0;
    }
    let t = ((value - min) / (max - min)).clamp(0.0, 1.0);
    (t * GRAY_LEVELS).min(GRAY_LEVELS - 1.0) as u8
}

/// Lowest value black, highest white; row 0 of the landscape is the top row.
pub fn to_gray_image(landscape: &Landscape) -> GrayImage {
    let (min, max) = landscape.value_range().unwrap_or((0.0, 0.0));
    let mut image_buf = GrayImage::new(landscape.width() as u32, landscape.height() as u32);

    for (iy, row) in landscape.rows().enumerate() {
        for (ix, value) in row.iter().enumerate() {
            let v = gray_level(*value, min, max);
            image_buf.put_pixel(ix as u32, iy as u32, Luma([v]));
        }
    }

    image_buf
}

pub fn save_jpeg(landscape: &Landscape, path: &Path) -> Result<()> {
    to_gray_image(landscape).save_with_format(path, ImageFormat::Jpeg)?;
    Ok(())
}
