//! Particle overlay parameters.

use serde::{Deserialize, Serialize};

/// Particle pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleOptions {
    /// Pool size — fixed for the lifetime of a spawn.
    pub count: usize,
    /// Seconds a particle lives before being recycled.
    pub max_lifetime: f32,
    /// Base upward drift speed, scene units per second.
    pub drift_speed: f32,
    /// Lateral sway amplitude, scene units per second.
    pub sway_amplitude: f32,
    /// Horizontal padding of the spawn volume around the open book.
    pub volume_padding: f32,
    /// Height of the spawn volume above the book.
    pub volume_height: f32,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            count: 48,
            max_lifetime: 2.5,
            drift_speed: 0.3,
            sway_amplitude: 0.15,
            volume_padding: 0.3,
            volume_height: 1.2,
        }
    }
}
