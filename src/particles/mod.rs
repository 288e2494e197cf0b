//! Fixed-capacity pool of recyclable drift particles.
//!
//! Particles are emitted when the book reaches `Open` and live in a pool
//! that never grows or shrinks after `spawn` — expired particles are
//! recycled in place (age reset, position re-randomized) so the per-frame
//! update allocates nothing.

use glam::Vec3;
use rand::Rng;

use crate::options::ParticleOptions;

// ---------------------------------------------------------------------------
// BoundingVolume
// ---------------------------------------------------------------------------

/// Axis-aligned volume particles are born into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingVolume {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl BoundingVolume {
    /// Construct from two corners, normalizing the ordering per axis.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Whether a point lies inside (inclusive).
    #[must_use]
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Uniformly random point inside the volume.
    fn random_point(&self, rng: &mut impl Rng) -> Vec3 {
        Vec3::new(
            rng.random_range(self.min.x..=self.max.x),
            rng.random_range(self.min.y..=self.max.y),
            rng.random_range(self.min.z..=self.max.z),
        )
    }
}

// ---------------------------------------------------------------------------
// Particle
// ---------------------------------------------------------------------------

/// One ephemeral drift marker. Owned by the pool; never constructed
/// directly by hosts.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// World position.
    pub position: Vec3,
    /// Velocity, dominated by upward drift.
    pub velocity: Vec3,
    /// Seconds since birth or last recycle. Never negative.
    pub age: f32,
    /// Lifetime after which the particle is recycled.
    pub max_lifetime: f32,
}

impl Particle {
    /// Opacity as a pure function of age: a linear fade from 1 at birth
    /// to 0 at `max_lifetime`.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        if self.max_lifetime <= 0.0 {
            return 0.0;
        }
        (1.0 - self.age / self.max_lifetime).clamp(0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// ParticlePool
// ---------------------------------------------------------------------------

/// Fixed-size pool of recyclable particles.
pub struct ParticlePool {
    particles: Vec<Particle>,
    volume: BoundingVolume,
    /// Base upward drift speed, units per second.
    drift_speed: f32,
    /// Lateral sway amplitude, units per second.
    sway_amplitude: f32,
    max_lifetime: f32,
}

impl ParticlePool {
    /// Empty pool configured from options. Nothing is allocated until
    /// [`spawn`](Self::spawn).
    #[must_use]
    pub fn new(options: &ParticleOptions) -> Self {
        Self {
            particles: Vec::new(),
            volume: BoundingVolume::new(Vec3::ZERO, Vec3::ZERO),
            drift_speed: options.drift_speed.max(0.0),
            sway_amplitude: options.sway_amplitude.max(0.0),
            max_lifetime: options.max_lifetime.max(0.01),
        }
    }

    /// Populate the pool with `count` particles at randomized positions
    /// inside `volume`. Ages are staggered so the overlay does not fade
    /// in lockstep. Replaces any previous population.
    pub fn spawn(&mut self, count: usize, volume: BoundingVolume) {
        self.volume = volume;
        let mut rng = rand::rng();
        self.particles.clear();
        self.particles.reserve_exact(count);
        for _ in 0..count {
            let position = volume.random_point(&mut rng);
            let velocity = Self::random_velocity(
                &mut rng,
                self.drift_speed,
                self.sway_amplitude,
            );
            self.particles.push(Particle {
                position,
                velocity,
                age: rng.random_range(0.0..self.max_lifetime),
                max_lifetime: self.max_lifetime,
            });
        }
    }

    /// Advance ages and positions; recycle expired particles in place.
    ///
    /// Recycling resets age to exactly 0 and re-randomizes position and
    /// velocity — the pool length never changes.
    pub fn update(&mut self, dt: f32) {
        if self.particles.is_empty() || dt <= 0.0 {
            return;
        }
        let mut rng = rand::rng();
        for particle in &mut self.particles {
            particle.age += dt;
            if particle.age >= particle.max_lifetime {
                particle.age = 0.0;
                particle.position = self.volume.random_point(&mut rng);
                particle.velocity = Self::random_velocity(
                    &mut rng,
                    self.drift_speed,
                    self.sway_amplitude,
                );
            } else {
                particle.position += particle.velocity * dt;
                // Gentle lateral sway on top of the straight drift.
                particle.position.x +=
                    (particle.age * 2.1).sin() * self.sway_amplitude * dt;
            }
        }
    }

    /// Drop all particles (book closed or scene unmounted).
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Number of pooled particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the pool holds no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Iterate the live particles for rendering.
    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    fn random_velocity(
        rng: &mut impl Rng,
        drift_speed: f32,
        sway_amplitude: f32,
    ) -> Vec3 {
        Vec3::new(
            rng.random_range(-0.5..=0.5) * sway_amplitude,
            drift_speed * rng.random_range(0.6..=1.4),
            rng.random_range(-0.5..=0.5) * sway_amplitude,
        )
    }
}

impl<'a> IntoIterator for &'a ParticlePool {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for ParticlePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticlePool")
            .field("len", &self.particles.len())
            .field("volume", &self.volume)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_volume() -> BoundingVolume {
        BoundingVolume::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 2.0, 1.0))
    }

    fn test_pool() -> ParticlePool {
        let mut pool = ParticlePool::new(&ParticleOptions::default());
        pool.spawn(24, test_volume());
        pool
    }

    #[test]
    fn test_spawn_fills_pool_inside_volume() {
        let pool = test_pool();
        assert_eq!(pool.len(), 24);
        for p in &pool {
            assert!(test_volume().contains(p.position), "{:?}", p.position);
            assert!(p.age >= 0.0);
            assert!(p.age < p.max_lifetime);
        }
    }

    #[test]
    fn test_pool_length_invariant_over_many_ticks() {
        let mut pool = test_pool();
        for _ in 0..10_000 {
            pool.update(1.0 / 60.0);
            assert_eq!(pool.len(), 24);
        }
        // Ages stay within bounds no matter how many recycles happened.
        for p in &pool {
            assert!(p.age >= 0.0);
            assert!(p.age < p.max_lifetime);
        }
    }

    #[test]
    fn test_recycle_resets_age_to_exactly_zero() {
        let mut pool = test_pool();
        let lifetime = ParticleOptions::default().max_lifetime;
        // A single oversized step expires every particle at once.
        pool.update(lifetime + 1.0);
        for p in &pool {
            assert_eq!(p.age, 0.0);
            assert!(test_volume().contains(p.position));
        }
    }

    #[test]
    fn test_opacity_fades_linearly_with_age() {
        let p = Particle {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            age: 0.0,
            max_lifetime: 2.0,
        };
        assert_eq!(p.opacity(), 1.0);
        let mid = Particle { age: 1.0, ..p };
        assert!((mid.opacity() - 0.5).abs() < 1e-6);
        let dead = Particle { age: 2.0, ..p };
        assert_eq!(dead.opacity(), 0.0);
    }

    #[test]
    fn test_particles_drift_upward() {
        let mut pool = test_pool();
        let before: f32 = pool.iter().map(|p| p.position.y).sum();
        for _ in 0..30 {
            pool.update(1.0 / 60.0);
        }
        // Recycles can teleport a few back down, but the net motion of the
        // population is upward drift.
        let after: f32 = pool.iter().map(|p| p.position.y).sum();
        assert!(after > before - 1.0);
    }

    #[test]
    fn test_clear_empties_pool() {
        let mut pool = test_pool();
        pool.clear();
        assert!(pool.is_empty());
    }
}
