//! Input handling: pointer region tracking for tilt/glow reactivity.

/// Region-normalized pointer offsets and hover state.
pub mod pointer;

pub use pointer::{PointerRegion, PointerState, PointerTracker};
