//! Per-instance transform animator.
//!
//! Tracks named scalar parameters as current/target pairs and converges
//! current toward target every tick via frame-rate-normalized exponential
//! smoothing. Owning the full set of animated parameters in one place
//! keeps update ordering deterministic and the lifecycle scoped — there is
//! no shared global timeline.

use rustc_hash::FxHashMap;

use crate::util::smoothing::{lerp, smoothing_alpha};

/// Updates a channel may spend unconverged after a target change before
/// the stall guard snaps it (ten seconds at the reference frame rate).
const DEFAULT_STALL_LIMIT: u32 = 600;

/// Per-channel smoothing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelParams {
    /// Fraction of the remaining distance covered per reference frame
    /// (60 Hz). Must sit in `(0, 1)` for convergence; values outside are
    /// clamped by the smoothing math.
    pub rate: f32,
    /// Distance below which the channel snaps to its target, terminating
    /// asymptotic drift.
    pub epsilon: f32,
}

impl ChannelParams {
    /// Construct channel parameters.
    #[must_use]
    pub const fn new(rate: f32, epsilon: f32) -> Self {
        Self { rate, epsilon }
    }
}

impl Default for ChannelParams {
    fn default() -> Self {
        Self::new(0.12, 1e-3)
    }
}

/// One tracked parameter.
#[derive(Debug)]
struct Channel {
    current: f32,
    target: f32,
    params: ChannelParams,
    converged: bool,
    /// Updates since the last target change, for the stall guard.
    updates_since_target: u32,
}

/// Smooths named scalar parameters toward their targets.
///
/// `update(dt)` advances every channel once per frame. Values approach a
/// stationary target monotonically and never overshoot; once within
/// epsilon they snap exactly onto it. A misconfigured channel that never
/// reaches epsilon is snapped by the stall guard instead of drifting
/// forever.
pub struct TransformAnimator {
    channels: FxHashMap<String, Channel>,
    stall_limit: u32,
}

impl TransformAnimator {
    /// Animator with the default stall guard.
    #[must_use]
    pub fn new() -> Self {
        Self {
            channels: FxHashMap::default(),
            stall_limit: DEFAULT_STALL_LIMIT,
        }
    }

    /// Override the stall guard (updates per target change).
    #[must_use]
    pub fn with_stall_limit(mut self, limit: u32) -> Self {
        self.stall_limit = limit.max(1);
        self
    }

    /// Register a channel at an initial value. The target starts equal to
    /// the value, so a fresh channel is already converged. Re-tracking an
    /// existing name resets it.
    pub fn track(&mut self, name: &str, initial: f32, params: ChannelParams) {
        let _ = self.channels.insert(
            name.to_owned(),
            Channel {
                current: initial,
                target: initial,
                params,
                converged: true,
                updates_since_target: 0,
            },
        );
    }

    /// Change a channel's endpoint. The current value is untouched, so
    /// there is never a discontinuity; the channel resumes converging from
    /// wherever it is. Unknown names are ignored (logged at debug).
    pub fn set_target(&mut self, name: &str, value: f32) {
        let Some(channel) = self.channels.get_mut(name) else {
            log::debug!("set_target on untracked channel '{name}'");
            return;
        };
        if channel.target == value {
            return;
        }
        channel.target = value;
        channel.updates_since_target = 0;
        channel.converged =
            (channel.current - value).abs() < channel.params.epsilon;
        if channel.converged {
            channel.current = value;
        }
    }

    /// Current value of a channel (0.0 for unknown names).
    #[must_use]
    pub fn value(&self, name: &str) -> f32 {
        self.channels.get(name).map_or(0.0, |c| c.current)
    }

    /// Target value of a channel (0.0 for unknown names).
    #[must_use]
    pub fn target(&self, name: &str) -> f32 {
        self.channels.get(name).map_or(0.0, |c| c.target)
    }

    /// Whether a channel has reached its target. Unknown names report
    /// converged (there is nothing left to move).
    #[must_use]
    pub fn is_converged(&self, name: &str) -> bool {
        self.channels.get(name).is_none_or(|c| c.converged)
    }

    /// Whether every tracked channel has reached its target.
    ///
    /// Hosts that want to gate on real settle rather than the fixed
    /// settle delay can poll this.
    #[must_use]
    pub fn all_converged(&self) -> bool {
        self.channels.values().all(|c| c.converged)
    }

    /// Advance all channels once by `dt` seconds. Returns `true` while any
    /// channel is still moving.
    pub fn update(&mut self, dt: f32) -> bool {
        let mut any_active = false;
        for (name, channel) in &mut self.channels {
            if channel.converged {
                continue;
            }
            let alpha = smoothing_alpha(channel.params.rate, dt);
            channel.current = lerp(channel.current, channel.target, alpha);
            channel.updates_since_target =
                channel.updates_since_target.saturating_add(1);

            if (channel.current - channel.target).abs()
                < channel.params.epsilon
            {
                channel.current = channel.target;
                channel.converged = true;
            } else if channel.updates_since_target >= self.stall_limit {
                log::warn!(
                    "channel '{name}' stalled after {} updates; snapping",
                    channel.updates_since_target
                );
                channel.current = channel.target;
                channel.converged = true;
            } else {
                any_active = true;
            }
        }
        any_active
    }

    /// Snap every channel onto its target immediately.
    pub fn snap_all(&mut self) {
        for channel in self.channels.values_mut() {
            channel.current = channel.target;
            channel.converged = true;
        }
    }

    /// Number of tracked channels.
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}

impl Default for TransformAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TransformAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformAnimator")
            .field("channels", &self.channels.len())
            .field("all_converged", &self.all_converged())
            .finish_non_exhaustive()
    }
}
