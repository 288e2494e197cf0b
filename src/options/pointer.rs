//! Pointer tilt and glow reactivity parameters.

use serde::{Deserialize, Serialize};

/// Pointer reactivity configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PointerOptions {
    /// Maximum whole-object tilt toward the pointer, degrees per axis.
    pub max_tilt_deg: f32,
    /// Emissive glow intensity with no hover.
    pub glow_base: f32,
    /// Emissive glow intensity target while hovered.
    pub glow_hover: f32,
    /// Glow pulse frequency while hovered, radians per second.
    pub pulse_frequency: f32,
    /// Glow pulse amplitude as a fraction of the current intensity.
    pub pulse_amplitude: f32,
}

impl Default for PointerOptions {
    fn default() -> Self {
        Self {
            max_tilt_deg: 6.0,
            glow_base: 0.15,
            glow_hover: 0.8,
            pulse_frequency: 2.2,
            pulse_amplitude: 0.25,
        }
    }
}
