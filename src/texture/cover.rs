//! Front-cover synthesis: aged leather, foil borders, emblem, title.

use super::canvas::{Canvas, Rgba, TextOrientation};
use super::SurfaceImage;
use crate::error::SceneError;
use crate::options::PaletteOptions;

/// Deterministic layout metrics derived purely from the cover size.
///
/// Everything structural (borders, emblem, text baselines) comes from
/// here; only the speckle pass is stochastic.
pub(crate) struct CoverLayout {
    /// Border inset from the cover edge, in pixels.
    pub inset: u32,
    /// Outer border thickness.
    pub thickness: u32,
    /// Emblem center.
    pub emblem_center: (f32, f32),
    /// Emblem ring radius.
    pub emblem_radius: f32,
    /// Title baseline y.
    pub title_y: u32,
    /// Subtitle baseline y.
    pub subtitle_y: u32,
}

impl CoverLayout {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        let min_dim = width.min(height);
        let w = width as f32;
        let h = height as f32;
        Self {
            inset: (min_dim as f32 * 0.05) as u32,
            thickness: (min_dim / 96).max(2),
            emblem_center: (w * 0.5, h * 0.38),
            emblem_radius: w * 0.14,
            title_y: (h * 0.60) as u32,
            subtitle_y: (h * 0.72) as u32,
        }
    }
}

/// Synthesize the front-cover artwork.
///
/// Compositing order is strict — later layers overlay earlier ones:
/// layered background gradient, stochastic speckle (aged leather), nested
/// foil border rectangles, the emblem built from primitive shapes at fixed
/// relative coordinates, layered title text with a shadow pass, and trim
/// dots. Same size in, same structural layout out; only the speckle
/// placement varies between runs.
pub fn synthesize_cover(
    width: u32,
    height: u32,
    palette: &PaletteOptions,
    title: &str,
    subtitle: &str,
) -> Result<SurfaceImage, SceneError> {
    let mut canvas = Canvas::new(width, height)?;
    let layout = CoverLayout::new(width, height);

    let leather = Rgba::from_rgb_f32(palette.leather);
    let leather_dark = Rgba::from_rgb_f32(palette.leather_dark);
    let parchment = Rgba::from_rgb_f32(palette.parchment);
    let foil = Rgba::from_rgb_f32(palette.foil);

    // 1. Layered background: base gradient plus a translucent top sheen.
    canvas.vertical_gradient(leather.scaled(1.12), leather_dark);
    canvas.vertical_gradient_rect(
        0,
        0,
        width,
        (height as f32 * 0.35) as u32,
        Rgba::new(255, 255, 255, 28),
        Rgba::new(255, 255, 255, 0),
    );

    // 2. Speckle noise, dark then light, for the aged-leather grain.
    let area = width as usize * height as usize;
    canvas.speckle(area / 24, Rgba::opaque(0, 0, 0), 30);
    canvas.speckle(area / 40, parchment, 22);

    // 3. Nested decorative borders.
    let t = layout.thickness;
    let inset = layout.inset as i32;
    canvas.stroke_rect(
        inset,
        inset,
        width - 2 * layout.inset,
        height - 2 * layout.inset,
        t,
        foil,
    );
    let inner_inset = inset + (3 * t) as i32;
    let inner_t = (t / 2).max(1);
    if width > 2 * inner_inset as u32 && height > 2 * inner_inset as u32 {
        canvas.stroke_rect(
            inner_inset,
            inner_inset,
            width - 2 * inner_inset as u32,
            height - 2 * inner_inset as u32,
            inner_t,
            foil.scaled(0.8),
        );
    }

    // 4. Emblem: ring, diamond, center dot.
    let (ex, ey) = layout.emblem_center;
    canvas.stroke_circle(ex, ey, layout.emblem_radius, t as f32 * 1.5, foil);
    canvas.fill_diamond(
        ex,
        ey,
        layout.emblem_radius * 0.62,
        layout.emblem_radius * 0.62,
        foil.scaled(0.75),
    );
    canvas.fill_circle(ex, ey, layout.emblem_radius * 0.18, parchment);

    // 5. Title and subtitle, shadow pass first.
    draw_label(
        &mut canvas,
        title,
        layout.title_y,
        (width as f32 * 0.6) as u32,
        foil,
    );
    draw_label(
        &mut canvas,
        subtitle,
        layout.subtitle_y,
        (width as f32 * 0.42) as u32,
        parchment,
    );

    // 6. Corner trim dots inside the outer border.
    let dot_r = width as f32 * 0.014;
    let margin = (layout.inset + 4 * t) as f32;
    for &dx in &[margin, width as f32 - margin] {
        for &dy in &[margin, height as f32 - margin] {
            canvas.fill_circle(dx, dy, dot_r, foil);
        }
    }

    Ok(canvas.finish())
}

/// Center a text run at `y`, scaled to roughly `target_width`, with a
/// one-cell shadow offset underneath.
fn draw_label(
    canvas: &mut Canvas,
    text: &str,
    y: u32,
    target_width: u32,
    color: Rgba,
) {
    if text.is_empty() {
        return;
    }
    let base_width = Canvas::text_width(text, 1);
    if base_width == 0 {
        return;
    }
    let scale = (target_width / base_width).max(1);
    let run = Canvas::text_width(text, scale);
    let x = (canvas.width() as i32 - run as i32) / 2;
    let shadow = scale as i32;
    canvas.draw_text(
        text,
        x + shadow,
        y as i32 + shadow,
        scale,
        Rgba::new(0, 0, 0, 170),
        TextOrientation::Horizontal,
    );
    canvas.draw_text(
        text,
        x,
        y as i32,
        scale,
        color,
        TextOrientation::Horizontal,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> PaletteOptions {
        PaletteOptions::default()
    }

    #[test]
    fn test_cover_dimensions_match_request() {
        let img =
            synthesize_cover(128, 192, &palette(), "ARCANA", "VOL I").unwrap();
        assert_eq!(img.width(), 128);
        assert_eq!(img.height(), 192);
    }

    #[test]
    fn test_cover_structural_layout_is_deterministic() {
        // Two runs share every structural probe: the border line and the
        // emblem center dot are drawn opaque after the speckle pass.
        let a = synthesize_cover(128, 192, &palette(), "ARCANA", "").unwrap();
        let b = synthesize_cover(128, 192, &palette(), "ARCANA", "").unwrap();
        assert_eq!(a.width(), b.width());
        assert_eq!(a.height(), b.height());

        let layout = CoverLayout::new(128, 192);
        let border_probe = (64, layout.inset + layout.thickness / 2);
        assert_eq!(
            a.pixel(border_probe.0, border_probe.1),
            b.pixel(border_probe.0, border_probe.1)
        );

        let (ex, ey) = layout.emblem_center;
        assert_eq!(
            a.pixel(ex as u32, ey as u32),
            b.pixel(ex as u32, ey as u32)
        );
    }

    #[test]
    fn test_cover_border_is_foil() {
        let pal = palette();
        let img = synthesize_cover(128, 192, &pal, "ARCANA", "").unwrap();
        let layout = CoverLayout::new(128, 192);
        let foil = Rgba::from_rgb_f32(pal.foil);
        let px = img.pixel(64, layout.inset + layout.thickness / 2);
        assert_eq!(px, [foil.r, foil.g, foil.b, 255]);
    }

    #[test]
    fn test_cover_rejects_degenerate_size() {
        assert!(synthesize_cover(0, 192, &palette(), "A", "").is_err());
    }
}
