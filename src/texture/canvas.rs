//! CPU raster drawing surface for procedural texture synthesis.
//!
//! `Canvas` owns an RGBA8 pixel buffer (one little-endian `u32` word per
//! pixel) and provides the drawing primitives the synthesizers compose:
//! solid and gradient fills, rect/circle/diamond shapes, stochastic
//! speckle, and pixel-font text runs. All drawing blends source-over;
//! fully opaque colors overwrite.

use rand::Rng;

use super::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};
use super::SurfaceImage;
use crate::error::SceneError;

/// Largest accepted canvas edge, in pixels.
const MAX_DIMENSION: u32 = 4096;

// ---------------------------------------------------------------------------
// Rgba
// ---------------------------------------------------------------------------

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba {
    /// Construct from channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from RGB channels.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Convert a normalized `[f32; 3]` palette entry to an opaque color.
    #[must_use]
    pub fn from_rgb_f32(rgb: [f32; 3]) -> Self {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::opaque(to_u8(rgb[0]), to_u8(rgb[1]), to_u8(rgb[2]))
    }

    /// Same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Channel-wise scale of the RGB components (alpha untouched).
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        let scale = |c: u8| ((f32::from(c) * factor).clamp(0.0, 255.0)) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b), self.a)
    }

    /// Linear interpolation between two colors (all four channels).
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| {
            (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
        };
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Pack into the canvas pixel word (little-endian byte order).
    #[inline]
    #[must_use]
    pub const fn to_word(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }

    /// Unpack from a canvas pixel word.
    #[inline]
    #[must_use]
    pub const fn from_word(word: u32) -> Self {
        let [r, g, b, a] = word.to_le_bytes();
        Self::new(r, g, b, a)
    }

    /// Source-over composite of `src` onto `self`.
    #[must_use]
    fn over(self, src: Self) -> Self {
        match src.a {
            255 => src,
            0 => self,
            sa => {
                let sa = u32::from(sa);
                let ia = 255 - sa;
                let mix = |s: u8, d: u8| {
                    ((u32::from(s) * sa + u32::from(d) * ia + 127) / 255) as u8
                };
                let a_out =
                    (sa + (u32::from(self.a) * ia + 127) / 255).min(255) as u8;
                Self::new(
                    mix(src.r, self.r),
                    mix(src.g, self.g),
                    mix(src.b, self.b),
                    a_out,
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// Glyph orientation for text runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOrientation {
    /// Left-to-right baseline.
    Horizontal,
    /// Rotated a quarter turn clockwise, running top-to-bottom (spine
    /// lettering).
    Vertical,
}

/// A mutable RGBA8 drawing surface.
pub struct Canvas {
    width: u32,
    height: u32,
    /// One little-endian RGBA word per pixel, row-major.
    data: Vec<u32>,
}

impl Canvas {
    /// Create a canvas filled with transparent black.
    ///
    /// Fails fast for degenerate or oversized dimensions — a silently
    /// blank material would be much harder to diagnose downstream.
    pub fn new(width: u32, height: u32) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::Synthesis(format!(
                "degenerate canvas size {width}x{height}"
            )));
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(SceneError::Synthesis(format!(
                "canvas size {width}x{height} exceeds {MAX_DIMENSION} limit"
            )));
        }
        Ok(Self {
            width,
            height,
            data: vec![0_u32; width as usize * height as usize],
        })
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read one pixel. Out-of-bounds reads return transparent black.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        if x >= self.width || y >= self.height {
            return Rgba::new(0, 0, 0, 0);
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.data.get(idx).copied().map_or(Rgba::new(0, 0, 0, 0), Rgba::from_word)
    }

    /// Blend one pixel source-over. Out-of-bounds writes are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        if let Some(px) = self.data.get_mut(idx) {
            *px = Rgba::from_word(*px).over(color).to_word();
        }
    }

    /// Fill the whole canvas with a solid color (overwrites, no blending).
    pub fn fill(&mut self, color: Rgba) {
        self.data.fill(color.to_word());
    }

    /// Fill an axis-aligned rect, clipped to the canvas.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba) {
        let Some((x0, y0, x1, y1)) = self.clip_rect(x, y, w, h) else {
            return;
        };
        if color.a == 255 {
            let word = color.to_word();
            for row in y0..y1 {
                let start = row * self.width as usize + x0;
                if let Some(span) = self.data.get_mut(start..start + (x1 - x0))
                {
                    span.fill(word);
                }
            }
        } else {
            for row in y0..y1 {
                for col in x0..x1 {
                    let idx = row * self.width as usize + col;
                    if let Some(px) = self.data.get_mut(idx) {
                        *px = Rgba::from_word(*px).over(color).to_word();
                    }
                }
            }
        }
    }

    /// Stroke the outline of an axis-aligned rect with the given edge
    /// thickness.
    pub fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        thickness: u32,
        color: Rgba,
    ) {
        if w == 0 || h == 0 {
            return;
        }
        let t = thickness.clamp(1, (w.min(h) / 2).max(1));
        // Top, bottom, left, right edges.
        self.fill_rect(x, y, w, t, color);
        self.fill_rect(x, y + (h - t) as i32, w, t, color);
        if h > 2 * t {
            self.fill_rect(x, y + t as i32, t, h - 2 * t, color);
            self.fill_rect(
                x + (w - t) as i32,
                y + t as i32,
                t,
                h - 2 * t,
                color,
            );
        }
    }

    /// Fill a circle via per-row spans.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        let y_min = (cy - radius).floor() as i32;
        let y_max = (cy + radius).ceil() as i32;
        for row in y_min..=y_max {
            let dy = row as f32 + 0.5 - cy;
            let span_sq = radius * radius - dy * dy;
            if span_sq <= 0.0 {
                continue;
            }
            let half = span_sq.sqrt();
            let x0 = (cx - half).round() as i32;
            let width = ((cx + half).round() as i32 - x0).max(0) as u32;
            self.fill_rect(x0, row, width, 1, color);
        }
    }

    /// Stroke a circle outline of the given radial thickness.
    pub fn stroke_circle(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        thickness: f32,
        color: Rgba,
    ) {
        if radius <= 0.0 || thickness <= 0.0 {
            return;
        }
        let outer = radius + thickness * 0.5;
        let inner = (radius - thickness * 0.5).max(0.0);
        let y_min = (cy - outer).floor() as i32;
        let y_max = (cy + outer).ceil() as i32;
        let x_min = (cx - outer).floor() as i32;
        let x_max = (cx + outer).ceil() as i32;
        for row in y_min..=y_max {
            for col in x_min..=x_max {
                let dx = col as f32 + 0.5 - cx;
                let dy = row as f32 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist <= outer && dist >= inner {
                    self.blend_pixel(col, row, color);
                }
            }
        }
    }

    /// Fill a diamond (rotated square) centered at `(cx, cy)`.
    pub fn fill_diamond(
        &mut self,
        cx: f32,
        cy: f32,
        half_w: f32,
        half_h: f32,
        color: Rgba,
    ) {
        if half_w <= 0.0 || half_h <= 0.0 {
            return;
        }
        let y_min = (cy - half_h).floor() as i32;
        let y_max = (cy + half_h).ceil() as i32;
        for row in y_min..=y_max {
            let dy = ((row as f32 + 0.5 - cy) / half_h).abs();
            if dy > 1.0 {
                continue;
            }
            let half = half_w * (1.0 - dy);
            let x0 = (cx - half).round() as i32;
            let width = ((cx + half).round() as i32 - x0).max(0) as u32;
            self.fill_rect(x0, row, width, 1, color);
        }
    }

    /// Vertical gradient over a rect, `top` color at its first row.
    pub fn vertical_gradient_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        top: Rgba,
        bottom: Rgba,
    ) {
        if h == 0 {
            return;
        }
        let denom = (h - 1).max(1) as f32;
        for row in 0..h {
            let t = row as f32 / denom;
            self.fill_rect(x, y + row as i32, w, 1, top.lerp(bottom, t));
        }
    }

    /// Vertical gradient over the whole canvas.
    pub fn vertical_gradient(&mut self, top: Rgba, bottom: Rgba) {
        self.vertical_gradient_rect(0, 0, self.width, self.height, top, bottom);
    }

    /// Radial gradient over the whole canvas, centered, normalized to half
    /// the shorter edge and clamped beyond it.
    ///
    /// Every border pixel lands on `outer`, so the result tiles without
    /// visible seams.
    pub fn radial_gradient(&mut self, inner: Rgba, outer: Rgba) {
        let cx = self.width as f32 * 0.5;
        let cy = self.height as f32 * 0.5;
        let radius = (self.width.min(self.height) as f32) * 0.5;
        for row in 0..self.height {
            for col in 0..self.width {
                let dx = col as f32 + 0.5 - cx;
                let dy = row as f32 + 0.5 - cy;
                let t = ((dx * dx + dy * dy).sqrt() / radius).min(1.0);
                let idx = row as usize * self.width as usize + col as usize;
                if let Some(px) = self.data.get_mut(idx) {
                    *px = Rgba::from_word(*px)
                        .over(inner.lerp(outer, t))
                        .to_word();
                }
            }
        }
    }

    /// Scatter `count` single-pixel speckles of `color` at random
    /// positions, each with a random alpha up to `max_alpha`.
    ///
    /// Positions and alphas are unseeded — the noise is cosmetic and
    /// carries no structural meaning.
    pub fn speckle(&mut self, count: usize, color: Rgba, max_alpha: u8) {
        if max_alpha == 0 {
            return;
        }
        let mut rng = rand::rng();
        for _ in 0..count {
            let x = rng.random_range(0..self.width) as i32;
            let y = rng.random_range(0..self.height) as i32;
            let alpha = rng.random_range(1..=max_alpha);
            self.blend_pixel(x, y, color.with_alpha(alpha));
        }
    }

    /// Draw a text run in the built-in 5x7 uppercase font.
    ///
    /// `scale` is the integer pixel size of one glyph cell unit; unknown
    /// characters advance without drawing (so spacing survives).
    pub fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        scale: u32,
        color: Rgba,
        orientation: TextOrientation,
    ) {
        let scale = scale.max(1);
        let advance = ((GLYPH_WIDTH + 1) * scale) as i32;
        let mut pen = 0_i32;
        for ch in text.chars() {
            if let Some(rows) = font::glyph(ch) {
                self.draw_glyph(rows, x, y, pen, scale, color, orientation);
            }
            pen += advance;
        }
    }

    /// Width in pixels of a horizontal text run at the given scale.
    #[must_use]
    pub fn text_width(text: &str, scale: u32) -> u32 {
        let scale = scale.max(1);
        let n = text.chars().count() as u32;
        if n == 0 {
            return 0;
        }
        n * (GLYPH_WIDTH + 1) * scale - scale
    }

    /// Consume the canvas into an immutable surface image.
    #[must_use]
    pub fn finish(self) -> SurfaceImage {
        SurfaceImage::from_words(self.width, self.height, self.data)
    }

    // -- internals --

    /// Plot one glyph. `pen` is the run offset along the text direction.
    #[allow(clippy::too_many_arguments)] // internal plotting helper
    fn draw_glyph(
        &mut self,
        rows: &[u8; GLYPH_HEIGHT as usize],
        x: i32,
        y: i32,
        pen: i32,
        scale: u32,
        color: Rgba,
        orientation: TextOrientation,
    ) {
        for (gy, row_bits) in rows.iter().enumerate() {
            for gx in 0..GLYPH_WIDTH {
                if row_bits & (1 << (GLYPH_WIDTH - 1 - gx)) == 0 {
                    continue;
                }
                let (px, py) = match orientation {
                    TextOrientation::Horizontal => (
                        x + pen + (gx * scale) as i32,
                        y + (gy as u32 * scale) as i32,
                    ),
                    // Quarter turn clockwise: glyph column becomes screen
                    // row, glyph row mirrors onto screen column.
                    TextOrientation::Vertical => (
                        x + ((GLYPH_HEIGHT - 1 - gy as u32) * scale) as i32,
                        y + pen + (gx * scale) as i32,
                    ),
                };
                self.fill_rect(px, py, scale, scale, color);
            }
        }
    }

    /// Clip a rect to the canvas. Returns `(x0, y0, x1, y1)` as usize
    /// bounds, or `None` when fully outside.
    fn clip_rect(
        &self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
    ) -> Option<(usize, usize, usize, usize)> {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w as i32).min(self.width as i32);
        let y1 = (y + h as i32).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
