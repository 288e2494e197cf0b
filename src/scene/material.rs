//! Appearance descriptors for scene objects.

use std::sync::Arc;

use crate::texture::SurfaceImage;

/// Appearance of one scene object: an optional synthesized surface plus
/// the physical parameters the host's shader consumes.
///
/// When synthesis fails the surface stays `None` and the host renders the
/// fallback color instead — the degraded scene still draws.
#[derive(Debug, Clone)]
pub struct Material {
    surface: Option<Arc<SurfaceImage>>,
    /// Solid color used when no surface is present, normalized RGB.
    pub fallback_color: [f32; 3],
    /// Microfacet roughness in `[0, 1]`.
    pub roughness: f32,
    /// Reflectivity in `[0, 1]`.
    pub reflectivity: f32,
    /// Emissive intensity (the glow channel writes this every frame).
    pub emissive: f32,
}

impl Material {
    /// Surface-less material showing a solid color.
    #[must_use]
    pub fn solid(fallback_color: [f32; 3]) -> Self {
        Self {
            surface: None,
            fallback_color,
            roughness: 0.75,
            reflectivity: 0.08,
            emissive: 0.0,
        }
    }

    /// Builder-style roughness override.
    #[must_use]
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness.clamp(0.0, 1.0);
        self
    }

    /// Builder-style reflectivity override.
    #[must_use]
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity.clamp(0.0, 1.0);
        self
    }

    /// Attach a synthesized surface.
    pub fn set_surface(&mut self, surface: Arc<SurfaceImage>) {
        self.surface = Some(surface);
    }

    /// Release the surface (unmount path).
    pub fn clear_surface(&mut self) {
        self.surface = None;
    }

    /// The attached surface, if synthesis succeeded.
    #[must_use]
    pub fn surface(&self) -> Option<&Arc<SurfaceImage>> {
        self.surface.as_ref()
    }

    /// Whether this material currently shows its fallback color.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.surface.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::SurfaceImage;

    #[test]
    fn test_solid_material_is_fallback() {
        let m = Material::solid([0.4, 0.2, 0.1]);
        assert!(m.is_fallback());
        assert!(m.surface().is_none());
    }

    #[test]
    fn test_surface_attach_release() {
        let mut m = Material::solid([0.0; 3]);
        m.set_surface(Arc::new(SurfaceImage::from_words(1, 1, vec![0])));
        assert!(!m.is_fallback());
        m.clear_surface();
        assert!(m.is_fallback());
    }

    #[test]
    fn test_builder_clamps() {
        let m = Material::solid([0.0; 3])
            .with_roughness(2.0)
            .with_reflectivity(-1.0);
        assert_eq!(m.roughness, 1.0);
        assert_eq!(m.reflectivity, 0.0);
    }
}
