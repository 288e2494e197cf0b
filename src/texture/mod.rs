//! Procedural raster synthesis for the book's decorative surfaces.
//!
//! No image assets are loaded from disk: every surface (cover, spine, foil
//! trim) is composed at runtime from drawing primitives on a CPU
//! [`Canvas`](canvas::Canvas) and frozen into an immutable
//! [`SurfaceImage`]. Synthesis runs synchronously at mount, once per
//! surface — the [`TextureCache`] guarantees repeated lookups never redraw
//! within a mounted lifetime.

pub mod canvas;
mod cover;
mod foil;
pub mod font;
mod spine;

use std::sync::Arc;

pub use cover::synthesize_cover;
pub use foil::synthesize_foil;
use rustc_hash::FxHashMap;
pub use spine::synthesize_spine;

use crate::error::SceneError;

// ---------------------------------------------------------------------------
// SurfaceImage
// ---------------------------------------------------------------------------

/// An immutable RGBA8 raster produced by texture synthesis.
///
/// Owned behind an `Arc` by the material that displays it; never mutated
/// after creation. Pixel words are little-endian RGBA, row-major.
pub struct SurfaceImage {
    width: u32,
    height: u32,
    words: Vec<u32>,
}

impl SurfaceImage {
    /// Freeze a canvas buffer. Internal — images only come from synthesis.
    pub(crate) fn from_words(width: u32, height: u32, words: Vec<u32>) -> Self {
        Self {
            width,
            height,
            words,
        }
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major, for upload by the host renderer.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.words)
    }

    /// Read one pixel as `[r, g, b, a]`. Out-of-bounds reads return
    /// transparent black.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return [0; 4];
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.words.get(idx).copied().unwrap_or(0).to_le_bytes()
    }
}

impl std::fmt::Debug for SurfaceImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// TextureCache
// ---------------------------------------------------------------------------

/// Identifies one of the scene's synthesized surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    /// Front cover artwork.
    Cover,
    /// Spine artwork.
    Spine,
    /// Foil trim tile, shared by trim elements.
    Foil,
}

/// Memoizes synthesized surfaces for the mounted lifetime of a scene.
///
/// Re-running synthesis per frame (or per mount of the same scene) is a
/// performance defect, not a feature; the cache makes the "exactly once
/// per material" invariant structural.
#[derive(Debug, Default)]
pub struct TextureCache {
    entries: FxHashMap<TextureKind, Arc<SurfaceImage>>,
}

impl TextureCache {
    /// Empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Fetch the cached surface for `kind`, running `synthesize` only on
    /// the first request. A failed synthesis is not cached, so a later
    /// mount may retry.
    pub fn get_or_synthesize(
        &mut self,
        kind: TextureKind,
        synthesize: impl FnOnce() -> Result<SurfaceImage, SceneError>,
    ) -> Result<Arc<SurfaceImage>, SceneError> {
        if let Some(image) = self.entries.get(&kind) {
            return Ok(Arc::clone(image));
        }
        let image = Arc::new(synthesize()?);
        let _ = self.entries.insert(kind, Arc::clone(&image));
        Ok(image)
    }

    /// Drop all retained surfaces (unmount path).
    pub fn release(&mut self) {
        self.entries.clear();
    }

    /// Number of cached surfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_image() -> Result<SurfaceImage, SceneError> {
        Ok(SurfaceImage::from_words(2, 2, vec![0; 4]))
    }

    #[test]
    fn test_cache_synthesizes_once() {
        let mut cache = TextureCache::new();
        let mut calls = 0;
        let first = cache
            .get_or_synthesize(TextureKind::Foil, || {
                calls += 1;
                tiny_image()
            })
            .unwrap();
        let second = cache
            .get_or_synthesize(TextureKind::Foil, || {
                calls += 1;
                tiny_image()
            })
            .unwrap();
        assert_eq!(calls, 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_cache_failure_is_not_cached() {
        let mut cache = TextureCache::new();
        let err = cache.get_or_synthesize(TextureKind::Cover, || {
            Err(SceneError::Synthesis("no surface".into()))
        });
        assert!(err.is_err());
        assert!(cache.is_empty());

        // A later attempt may succeed.
        let ok = cache.get_or_synthesize(TextureKind::Cover, tiny_image);
        assert!(ok.is_ok());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_release_drops_entries() {
        let mut cache = TextureCache::new();
        let _img = cache
            .get_or_synthesize(TextureKind::Spine, tiny_image)
            .unwrap();
        assert!(!cache.is_empty());
        cache.release();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_surface_image_accessors() {
        let img = SurfaceImage::from_words(
            2,
            1,
            vec![
                u32::from_le_bytes([1, 2, 3, 4]),
                u32::from_le_bytes([5, 6, 7, 8]),
            ],
        );
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 1);
        assert_eq!(img.pixel(0, 0), [1, 2, 3, 4]);
        assert_eq!(img.pixel(1, 0), [5, 6, 7, 8]);
        assert_eq!(img.pixel(2, 0), [0; 4]);
        assert_eq!(img.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
