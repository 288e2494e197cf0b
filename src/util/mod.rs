//! Shared utilities for the scene.
//!
//! Helpers for frame timing and the exponential-smoothing math used by the
//! transform animator and pointer reactivity.

pub mod frame_timing;
pub mod smoothing;
