use std::path::Path;

use anyhow::{Context, Result};
use image::RgbImage;

/// Guards against division by zero on black pixels.
const EPSILON: f64 = 1e-6;

/// Decode an image file and return its mean saturation in [0, 1].
pub fn image_saturation(path: &Path) -> Result<f64> {
    let img = image::open(path)
        .with_context(|| format!("decoding image {}", path.display()))?
        .to_rgb8();
    Ok(mean_saturation(&img))
}

/// Mean per-pixel saturation of an RGB image.
///
/// Channels are normalized to [0, 1]; per-pixel saturation is
/// `(max − min) / (max + ε)` across the three channels, averaged over all
/// pixels.  An image with zero pixels yields 0.
pub fn mean_saturation(img: &RgbImage) -> f64 {
    let pixel_count = img.width() as u64 * img.height() as u64;
    if pixel_count == 0 {
        return 0.0;
    }

    let total: f64 = img
        .pixels()
        .map(|pixel| {
            let [r, g, b] = pixel.0;
            let max = r.max(g).max(b) as f64 / 255.0;
            let min = r.min(g).min(b) as f64 / 255.0;
            (max - min) / (max + EPSILON)
        })
        .sum();

    total / pixel_count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn gray_image_has_zero_saturation() {
        let img = RgbImage::from_pixel(8, 8, Rgb([128, 128, 128]));
        assert_eq!(mean_saturation(&img), 0.0);
    }

    #[test]
    fn pure_red_is_nearly_fully_saturated() {
        let img = RgbImage::from_pixel(8, 8, Rgb([255, 0, 0]));
        let sat = mean_saturation(&img);
        assert!(sat > 0.999 && sat <= 1.0);
    }

    #[test]
    fn saturation_stays_within_unit_interval() {
        let img = RgbImage::from_fn(16, 16, |x, y| {
            Rgb([
                (x * 16) as u8,
                (y * 16) as u8,
                ((x + y) * 8) as u8,
            ])
        });
        let sat = mean_saturation(&img);
        assert!((0.0..=1.0).contains(&sat));
    }

    #[test]
    fn empty_image_yields_zero() {
        let img = RgbImage::new(0, 0);
        assert_eq!(mean_saturation(&img), 0.0);
    }
}
