//! Color palette for surface synthesis and glow.

use serde::{Deserialize, Serialize};

/// Normalized RGB palette entries consumed by texture synthesis and the
/// hover glow. Supplied by the host; the scene applies no color theory of
/// its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PaletteOptions {
    /// Base leather tone for the cover.
    pub leather: [f32; 3],
    /// Shadowed leather tone (gradient low end).
    pub leather_dark: [f32; 3],
    /// Parchment tone for pages and secondary text.
    pub parchment: [f32; 3],
    /// Gold foil tone for borders, emblem and trim.
    pub foil: [f32; 3],
    /// Hover glow tint.
    pub glow: [f32; 3],
    /// Particle tint.
    pub particle: [f32; 3],
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            leather: [0.42, 0.26, 0.15],
            leather_dark: [0.24, 0.13, 0.08],
            parchment: [0.91, 0.85, 0.70],
            foil: [0.85, 0.68, 0.28],
            glow: [1.0, 0.85, 0.45],
            particle: [1.0, 0.9, 0.6],
        }
    }
}
