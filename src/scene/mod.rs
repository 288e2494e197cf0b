//! Scene data model: flat object storage with material handles.
//!
//! The scene owns every renderable part and its appearance; the
//! [`book`](crate::book) orchestrator mutates poses and visibility, and
//! the host reads them back out for drawing.

mod material;
mod object;

pub use material::Material;
pub use object::{SceneObject, Transform};

/// Handle to a material owned by the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialId(pub(crate) usize);

/// Flat storage for scene objects and their materials.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    materials: Vec<Material>,
}

impl Scene {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            materials: Vec::new(),
        }
    }

    /// Add a material, returning its handle.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    /// Add an object. Names are expected to be unique; lookups return the
    /// first match.
    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Immutable object lookup by name.
    #[must_use]
    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Mutable object lookup by name.
    pub fn object_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.name == name)
    }

    /// All objects in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Mutable access to all objects (per-frame pose application).
    pub fn objects_mut(&mut self) -> &mut [SceneObject] {
        &mut self.objects
    }

    /// Material behind a handle.
    #[must_use]
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0)
    }

    /// Mutable material access.
    pub fn material_mut(&mut self, id: MaterialId) -> Option<&mut Material> {
        self.materials.get_mut(id.0)
    }

    /// All materials.
    #[must_use]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Mutable access to all materials.
    pub fn materials_mut(&mut self) -> &mut [Material] {
        &mut self.materials
    }

    /// Set an object's visibility by name. Unknown names are ignored.
    pub fn set_visible(&mut self, name: &str, visible: bool) {
        if let Some(obj) = self.object_mut(name) {
            obj.visible = visible;
        }
    }

    /// Release every material's retained surface (unmount path).
    pub fn release_surfaces(&mut self) {
        for material in &mut self.materials {
            material.clear_surface();
        }
    }

    /// Clear all per-object fault flags.
    pub fn clear_faults(&mut self) {
        for object in &mut self.objects {
            object.clear_fault();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with_two_objects() -> Scene {
        let mut scene = Scene::new();
        let mat = scene.add_material(Material::solid([0.5, 0.5, 0.5]));
        scene.add_object(SceneObject::new("cover", mat));
        scene.add_object(SceneObject::new("overlay", mat));
        scene
    }

    #[test]
    fn test_lookup_by_name() {
        let scene = scene_with_two_objects();
        assert!(scene.object("cover").is_some());
        assert!(scene.object("spine").is_none());
        assert_eq!(scene.objects().len(), 2);
    }

    #[test]
    fn test_visibility_toggle() {
        let mut scene = scene_with_two_objects();
        scene.set_visible("overlay", false);
        assert!(!scene.object("overlay").unwrap().visible);
        scene.set_visible("overlay", true);
        assert!(scene.object("overlay").unwrap().visible);
        // Unknown names are a no-op, not a panic.
        scene.set_visible("ghost", false);
    }

    #[test]
    fn test_material_handles_resolve() {
        let scene = scene_with_two_objects();
        let cover = scene.object("cover").unwrap();
        assert!(scene.material(cover.material).is_some());
    }

    #[test]
    fn test_release_surfaces_degrades_materials() {
        use std::sync::Arc;

        use crate::texture::SurfaceImage;

        let mut scene = scene_with_two_objects();
        let id = scene.objects()[0].material;
        scene
            .material_mut(id)
            .unwrap()
            .set_surface(Arc::new(SurfaceImage::from_words(1, 1, vec![0])));
        assert!(!scene.material(id).unwrap().is_fallback());
        scene.release_surfaces();
        assert!(scene.material(id).unwrap().is_fallback());
    }
}
