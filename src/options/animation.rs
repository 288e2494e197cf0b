//! Smoothing rates, convergence epsilon and the settle delay.

use serde::{Deserialize, Serialize};

/// Animation parameters.
///
/// Rates are the fraction of remaining distance covered per 60 Hz
/// reference frame and must sit in `(0, 1)`; the animator renormalizes
/// them to the actual frame delta. Rotation defaults slower than scale so
/// the cover swing reads heavier than the size change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationOptions {
    /// Smoothing rate for rotation channels (cover hinge, tilt).
    pub rotation_rate: f32,
    /// Smoothing rate for scale and lift channels.
    pub scale_rate: f32,
    /// Smoothing rate for pointer tilt channels.
    pub pointer_rate: f32,
    /// Smoothing rate for the glow intensity channel.
    pub glow_rate: f32,
    /// Convergence epsilon: channels snap onto targets inside this.
    pub epsilon: f32,
    /// Settle delay in seconds — the fixed wait that stands in for
    /// "the open/close animation has visually finished".
    pub settle_delay: f32,
    /// Stall guard: updates a channel may spend unconverged after a
    /// target change before being snapped.
    pub stall_limit: u32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            rotation_rate: 0.08,
            scale_rate: 0.16,
            pointer_rate: 0.12,
            glow_rate: 0.10,
            epsilon: 1e-3,
            settle_delay: 0.9,
            stall_limit: 600,
        }
    }
}
