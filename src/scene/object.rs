//! Scene objects: renderable parts with transform, material and
//! visibility metadata.

use glam::{Quat, Vec3};

use super::MaterialId;

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// Position, rotation and scale of one scene object.
///
/// Rotation is stored as Euler angles in degrees (XYZ order) because every
/// animated quantity in the scene is a plain scalar channel; hosts wanting
/// a quaternion use [`rotation_quat`](Self::rotation_quat).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World position.
    pub position: Vec3,
    /// Euler rotation in degrees, applied in XYZ order.
    pub rotation_deg: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Transform {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation_deg: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Rotation as a quaternion.
    #[must_use]
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            glam::EulerRot::XYZ,
            self.rotation_deg.x.to_radians(),
            self.rotation_deg.y.to_radians(),
            self.rotation_deg.z.to_radians(),
        )
    }

    /// Whether every component is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.rotation_deg.is_finite()
            && self.scale.is_finite()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ---------------------------------------------------------------------------
// SceneObject
// ---------------------------------------------------------------------------

/// A renderable part of the scene (cover, page block, spine, overlay).
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Stable name used for lookups ("cover", "overlay", ...).
    pub name: String,
    /// Current pose, updated each frame from the animator.
    pub transform: Transform,
    /// Material displayed on this object.
    pub material: MaterialId,
    /// Whether the host should draw this object.
    pub visible: bool,
    /// Set when a per-frame update produced an invalid pose; cleared on
    /// the next close. A faulted object keeps its last good pose.
    faulted: bool,
}

impl SceneObject {
    /// Visible object at identity with the given material.
    #[must_use]
    pub fn new(name: impl Into<String>, material: MaterialId) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            material,
            visible: true,
            faulted: false,
        }
    }

    /// Apply a new pose computed for this frame.
    ///
    /// A non-finite pose is rejected: the object keeps its previous pose,
    /// is marked faulted, and the error is reported to the caller — one
    /// object's bad math must not halt the others.
    pub fn apply_pose(&mut self, pose: Transform) -> Result<(), String> {
        if !pose.is_finite() {
            self.faulted = true;
            return Err(format!("non-finite pose for object '{}'", self.name));
        }
        self.transform = pose;
        Ok(())
    }

    /// Whether a previous update faulted this object.
    #[must_use]
    pub fn is_faulted(&self) -> bool {
        self.faulted
    }

    /// Clear the fault flag (close resets error state).
    pub fn clear_fault(&mut self) {
        self.faulted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_default() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.scale, Vec3::ONE);
        assert!(t.is_finite());
    }

    #[test]
    fn test_apply_pose_rejects_non_finite() {
        let mut obj = SceneObject::new("cover", MaterialId(0));
        let good = Transform {
            position: Vec3::new(0.0, 1.0, 0.0),
            ..Transform::IDENTITY
        };
        assert!(obj.apply_pose(good).is_ok());

        let bad = Transform {
            rotation_deg: Vec3::new(f32::NAN, 0.0, 0.0),
            ..Transform::IDENTITY
        };
        assert!(obj.apply_pose(bad).is_err());
        assert!(obj.is_faulted());
        // Last good pose survives.
        assert_eq!(obj.transform.position, Vec3::new(0.0, 1.0, 0.0));

        obj.clear_fault();
        assert!(!obj.is_faulted());
    }

    #[test]
    fn test_rotation_quat_roundtrip_zero() {
        let t = Transform::IDENTITY;
        assert_eq!(t.rotation_quat(), Quat::IDENTITY);
    }
}
