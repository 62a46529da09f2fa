use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn series_palette(n: usize) -> Vec<RGBColor> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            RGBColor(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_palette_for_zero_series() {
        assert!(series_palette(0).is_empty());
    }

    #[test]
    fn palette_has_requested_length() {
        assert_eq!(series_palette(5).len(), 5);
    }

    #[test]
    fn colors_are_distinct() {
        let palette = series_palette(2);
        let a = (palette[0].0, palette[0].1, palette[0].2);
        let b = (palette[1].0, palette[1].1, palette[1].2);
        assert_ne!(a, b);
    }
}
