//! Spine synthesis: vertical gradient, accent bands, rotated lettering.

use super::canvas::{Canvas, Rgba, TextOrientation};
use super::SurfaceImage;
use crate::error::SceneError;
use crate::options::PaletteOptions;

/// Number of evenly spaced accent bands on the spine.
const ACCENT_BANDS: u32 = 4;

/// Vertical positions (rows) of the accent bands for a given height.
pub(crate) fn band_rows(height: u32) -> Vec<u32> {
    (1..=ACCENT_BANDS)
        .map(|i| height * i / (ACCENT_BANDS + 1))
        .collect()
}

/// Synthesize the spine artwork: a vertical gradient, evenly spaced foil
/// accent bands, and the label run rotated to the long axis.
pub fn synthesize_spine(
    width: u32,
    height: u32,
    palette: &PaletteOptions,
    label: &str,
) -> Result<SurfaceImage, SceneError> {
    let mut canvas = Canvas::new(width, height)?;

    let leather = Rgba::from_rgb_f32(palette.leather);
    let leather_dark = Rgba::from_rgb_f32(palette.leather_dark);
    let foil = Rgba::from_rgb_f32(palette.foil);

    canvas.vertical_gradient(leather_dark, leather.scaled(0.9));

    let band_h = (height / 128).max(2);
    for row in band_rows(height) {
        canvas.fill_rect(0, row as i32, width, band_h, foil);
        canvas.fill_rect(
            0,
            (row + 2 * band_h) as i32,
            width,
            (band_h / 2).max(1),
            foil.scaled(0.7),
        );
    }

    // Rotated label, centered between the middle bands.
    if !label.is_empty() {
        let scale = (width / 12).max(1);
        let run = Canvas::text_width(label, scale);
        let glyph_h = 7 * scale;
        let x = (width as i32 - glyph_h as i32) / 2;
        let y = (height as i32 - run as i32) / 2;
        canvas.draw_text(
            label,
            x + scale as i32 / 2,
            y + scale as i32 / 2,
            scale,
            Rgba::new(0, 0, 0, 170),
            TextOrientation::Vertical,
        );
        canvas.draw_text(label, x, y, scale, foil, TextOrientation::Vertical);
    }

    Ok(canvas.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spine_dimensions() {
        let img =
            synthesize_spine(24, 256, &PaletteOptions::default(), "ARCANA")
                .unwrap();
        assert_eq!(img.width(), 24);
        assert_eq!(img.height(), 256);
    }

    #[test]
    fn test_spine_bands_are_evenly_spaced_foil() {
        let pal = PaletteOptions::default();
        let img = synthesize_spine(24, 256, &pal, "").unwrap();
        let foil = Rgba::from_rgb_f32(pal.foil);
        let rows = band_rows(256);
        assert_eq!(rows.len(), ACCENT_BANDS as usize);
        // Even spacing.
        let gap = rows[1] - rows[0];
        for pair in rows.windows(2) {
            assert_eq!(pair[1] - pair[0], gap);
        }
        // Bands are opaque foil, drawn over the gradient.
        for row in rows {
            assert_eq!(img.pixel(2, row), [foil.r, foil.g, foil.b, 255]);
        }
    }

    #[test]
    fn test_spine_rejects_degenerate_size() {
        let r = synthesize_spine(24, 0, &PaletteOptions::default(), "A");
        assert!(r.is_err());
    }
}
