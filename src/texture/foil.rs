//! Foil trim tile: radial sheen with sparse bright speckle.

use super::canvas::{Canvas, Rgba};
use super::SurfaceImage;
use crate::error::SceneError;
use crate::options::PaletteOptions;

/// Synthesize the foil trim tile.
///
/// A radial gradient (bright center, dark edge) with a sparse overlay of
/// bright speckles. The gradient clamps to its outer color at every border
/// pixel, so one tile repeats across multiple trim elements without seams.
pub fn synthesize_foil(
    width: u32,
    height: u32,
    palette: &PaletteOptions,
) -> Result<SurfaceImage, SceneError> {
    let mut canvas = Canvas::new(width, height)?;

    let foil = Rgba::from_rgb_f32(palette.foil);
    canvas.radial_gradient(foil.scaled(1.35), foil.scaled(0.45));

    let area = width as usize * height as usize;
    canvas.speckle(area / 64, Rgba::opaque(255, 250, 220), 90);

    Ok(canvas.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foil_dimensions() {
        let img = synthesize_foil(64, 64, &PaletteOptions::default()).unwrap();
        assert_eq!(img.width(), 64);
        assert_eq!(img.height(), 64);
    }

    #[test]
    fn test_foil_center_brighter_than_edge() {
        // Structural property robust to the cosmetic speckle: the radial
        // sheen peaks at the center and falls off toward the border.
        let img = synthesize_foil(64, 64, &PaletteOptions::default()).unwrap();
        let center = img.pixel(32, 32);
        let corner = img.pixel(0, 0);
        assert!(
            center[0] > corner[0] && center[1] > corner[1],
            "center {center:?} should outshine corner {corner:?}"
        );
    }

    #[test]
    fn test_foil_same_size_same_dims() {
        let a = synthesize_foil(48, 48, &PaletteOptions::default()).unwrap();
        let b = synthesize_foil(48, 48, &PaletteOptions::default()).unwrap();
        assert_eq!((a.width(), a.height()), (b.width(), b.height()));
    }
}
