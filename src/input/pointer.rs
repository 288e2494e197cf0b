//! Converts raw pointer coordinates into a normalized offset and hover
//! flag.
//!
//! The tracker is the single writer of [`PointerState`]; the per-frame
//! update is its single reader, turning the raw offset into animator
//! targets. Event handlers therefore never touch render state directly,
//! and the return to center after pointer-leave flows through the same
//! smoothing as every other motion — never an instant jump.

use glam::Vec2;

/// The scene's bounding region in host pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerRegion {
    /// Top-left corner.
    pub min: Vec2,
    /// Width/height extent.
    pub size: Vec2,
}

impl PointerRegion {
    /// Construct from a top-left corner and extent.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Region center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Whether a point lies inside (inclusive of edges).
    #[must_use]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x
            && p.y >= self.min.y
            && p.x <= self.min.x + self.size.x
            && p.y <= self.min.y + self.size.y
    }

    /// Whether the region can normalize offsets at all.
    #[must_use]
    fn is_degenerate(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }
}

/// Normalized pointer offset and hover flag.
///
/// Written only by the [`PointerTracker`]; read by the per-frame update.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    /// Offset from the region center, each axis in `[-1, 1]`.
    pub offset: Vec2,
    /// Whether the pointer is currently over the region.
    pub hover: bool,
}

/// Tracks the pointer relative to the scene's bounding region.
#[derive(Debug)]
pub struct PointerTracker {
    region: PointerRegion,
    state: PointerState,
}

impl PointerTracker {
    /// Tracker for the given region, starting centered and unhovered.
    #[must_use]
    pub fn new(region: PointerRegion) -> Self {
        Self {
            region,
            state: PointerState::default(),
        }
    }

    /// Replace the bounding region (layout change); keeps current state.
    pub fn set_region(&mut self, region: PointerRegion) {
        self.region = region;
    }

    /// Current normalized state.
    #[must_use]
    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Handle a pointer-move in host pixel coordinates.
    ///
    /// Inside the region the normalized offset is recomputed immediately;
    /// a position outside behaves like a leave.
    pub fn pointer_moved(&mut self, position: Vec2) {
        if self.region.is_degenerate() || !self.region.contains(position) {
            self.pointer_left();
            return;
        }
        let half = self.region.size * 0.5;
        let raw = (position - self.region.center()) / half;
        self.state.offset = raw.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
        self.state.hover = true;
    }

    /// Handle pointer-leave: drop hover and zero the raw offset target.
    ///
    /// The visible tilt eases back through the animator — this only moves
    /// the target.
    pub fn pointer_left(&mut self) {
        self.state.offset = Vec2::ZERO;
        self.state.hover = false;
    }

    /// Clear state (unmount path).
    pub fn reset(&mut self) {
        self.pointer_left();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> PointerTracker {
        PointerTracker::new(PointerRegion::new(100.0, 50.0, 200.0, 100.0))
    }

    #[test]
    fn test_center_maps_to_zero_offset() {
        let mut t = tracker();
        t.pointer_moved(Vec2::new(200.0, 100.0));
        let s = t.state();
        assert!(s.hover);
        assert_eq!(s.offset, Vec2::ZERO);
    }

    #[test]
    fn test_corners_map_to_unit_offsets() {
        let mut t = tracker();
        t.pointer_moved(Vec2::new(100.0, 50.0));
        assert_eq!(t.state().offset, Vec2::new(-1.0, -1.0));
        t.pointer_moved(Vec2::new(300.0, 150.0));
        assert_eq!(t.state().offset, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_leave_zeroes_raw_state() {
        let mut t = tracker();
        t.pointer_moved(Vec2::new(150.0, 75.0));
        assert!(t.state().hover);
        t.pointer_left();
        assert!(!t.state().hover);
        assert_eq!(t.state().offset, Vec2::ZERO);
    }

    #[test]
    fn test_outside_move_behaves_like_leave() {
        let mut t = tracker();
        t.pointer_moved(Vec2::new(150.0, 75.0));
        t.pointer_moved(Vec2::new(0.0, 0.0));
        assert!(!t.state().hover);
        assert_eq!(t.state().offset, Vec2::ZERO);
    }

    #[test]
    fn test_degenerate_region_never_produces_nan() {
        let mut t = PointerTracker::new(PointerRegion::new(0.0, 0.0, 0.0, 0.0));
        t.pointer_moved(Vec2::new(0.0, 0.0));
        let s = t.state();
        assert!(!s.hover);
        assert!(s.offset.x.is_finite() && s.offset.y.is_finite());
    }
}
