//! Book geometry, pose targets and label text.

use serde::{Deserialize, Serialize};

/// Dimensions and pose parameters for the book object.
///
/// Lengths are in scene units (the host decides what a unit means);
/// angles are degrees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BookOptions {
    /// Cover width.
    pub width: f32,
    /// Cover height.
    pub height: f32,
    /// Closed-book depth (page block plus covers).
    pub depth: f32,
    /// Thickness of one cover board.
    pub cover_thickness: f32,
    /// Cover hinge rotation when fully open, degrees from closed.
    pub open_angle_deg: f32,
    /// Vertical lift applied to the whole book while open.
    pub open_lift: f32,
    /// Uniform scale applied to the whole book while open.
    pub open_scale: f32,
    /// Cover title text (uppercase pixel font).
    pub title: String,
    /// Cover subtitle text.
    pub subtitle: String,
    /// Spine label text, rendered along the long axis.
    pub spine_label: String,
}

impl Default for BookOptions {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.4,
            depth: 0.22,
            cover_thickness: 0.03,
            open_angle_deg: 150.0,
            open_lift: 0.25,
            open_scale: 1.08,
            title: "ARCANA".to_owned(),
            subtitle: "FIELD NOTES".to_owned(),
            spine_label: "ARCANA".to_owned(),
        }
    }
}
