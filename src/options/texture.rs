//! Synthesized surface dimensions.

use serde::{Deserialize, Serialize};

/// Pixel dimensions of the synthesized surfaces.
///
/// These are raster sizes, independent of the book's scene-unit
/// dimensions; the host samples them onto geometry however it likes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TextureOptions {
    /// Cover artwork width in pixels.
    pub cover_width: u32,
    /// Cover artwork height in pixels.
    pub cover_height: u32,
    /// Spine artwork width in pixels.
    pub spine_width: u32,
    /// Spine artwork height in pixels.
    pub spine_height: u32,
    /// Edge length of the square foil trim tile.
    pub foil_size: u32,
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            cover_width: 512,
            cover_height: 680,
            spine_width: 96,
            spine_height: 680,
            foil_size: 128,
        }
    }
}
