//! Centralized scene options with TOML preset support.
//!
//! All tweakable settings (book dimensions, palette, smoothing rates,
//! particles, pointer reactivity, texture sizes) are consolidated here.
//! Options serialize to/from TOML for presets; the host supplies them as
//! plain parameters — the scene persists nothing itself.

mod animation;
mod book;
mod palette;
mod particles;
mod pointer;
mod texture;

use std::path::Path;

pub use animation::AnimationOptions;
pub use book::BookOptions;
pub use palette::PaletteOptions;
pub use particles::ParticleOptions;
pub use pointer::PointerOptions;
use serde::{Deserialize, Serialize};
pub use texture::TextureOptions;

use crate::error::SceneError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[palette]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Book geometry, pose targets and label text.
    pub book: BookOptions,
    /// Color palette for synthesis and glow.
    pub palette: PaletteOptions,
    /// Smoothing rates, epsilon and settle delay.
    pub animation: AnimationOptions,
    /// Particle overlay parameters.
    pub particles: ParticleOptions,
    /// Pointer tilt and glow reactivity parameters.
    pub pointer: PointerOptions,
    /// Synthesized surface dimensions.
    pub texture: TextureOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path).map_err(SceneError::Io)?;
        toml::from_str(&content)
            .map_err(|e| SceneError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SceneError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SceneError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SceneError::Io)?;
        }
        std::fs::write(path, content).map_err(SceneError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[book]
title = "GRIMOIRE"

[animation]
settle_delay = 1.5
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.book.title, "GRIMOIRE");
        assert_eq!(opts.animation.settle_delay, 1.5);
        // Everything else should be default
        assert_eq!(opts.book.open_angle_deg, 150.0);
        assert_eq!(opts.particles.count, 48);
        assert_eq!(opts.palette.foil, PaletteOptions::default().foil);
    }

    #[test]
    fn rotation_smooths_slower_than_scale_by_default() {
        let anim = AnimationOptions::default();
        assert!(anim.rotation_rate < anim.scale_rate);
    }
}
