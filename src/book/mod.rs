//! The book scene orchestrator.
//!
//! `BookScene` wires the leaves together: texture synthesis feeds the
//! materials, the state machine drives animator targets and particle
//! spawning, the pointer tracker feeds tilt/glow targets, and one
//! `update(dt)` call per frame advances everything in a deterministic
//! order. The host's render loop is the only caller; nothing here blocks
//! or spawns.

use glam::{Vec2, Vec3};

use crate::animation::{
    BookState, BookStateMachine, ChannelParams, StateEvent, TransformAnimator,
};
use crate::input::{PointerRegion, PointerState, PointerTracker};
use crate::options::Options;
use crate::particles::{BoundingVolume, ParticlePool};
use crate::scene::{Material, MaterialId, Scene, SceneObject, Transform};
use crate::texture::{
    synthesize_cover, synthesize_foil, synthesize_spine, TextureCache,
    TextureKind,
};
use crate::util::frame_timing::DeltaClock;

// Animator channel names.
const CH_COVER_ANGLE: &str = "cover_angle";
const CH_LIFT: &str = "lift";
const CH_SCALE: &str = "scale";
const CH_TILT_X: &str = "tilt_x";
const CH_TILT_Y: &str = "tilt_y";
const CH_GLOW: &str = "glow";

// Object names.
const OBJ_COVER: &str = "cover";
const OBJ_PAGE_BLOCK: &str = "page_block";
const OBJ_SPINE: &str = "spine";
const OBJ_OVERLAY: &str = "overlay";
const OBJ_TRIM: &str = "trim";

/// The interactive book scene.
///
/// Construct with [`new`](Self::new), then [`mount`](Self::mount) inside a
/// host region, call [`update`](Self::update) every frame, and
/// [`activate`](Self::activate) to toggle the book open and closed.
/// [`unmount`](Self::unmount) synchronously cancels timers and releases
/// retained surfaces.
pub struct BookScene {
    options: Options,
    scene: Scene,
    cover_material: MaterialId,
    spine_material: MaterialId,
    trim_material: MaterialId,
    animator: TransformAnimator,
    machine: BookStateMachine,
    particles: ParticlePool,
    pointer: PointerTracker,
    textures: TextureCache,
    clock: DeltaClock,
    mounted: bool,
    /// Seconds of mounted update time, for the glow pulse phase.
    elapsed: f32,
    /// Set when any surface fell back to its solid color.
    degraded: bool,
    on_opened: Option<Box<dyn FnMut()>>,
}

impl BookScene {
    /// Build the scene graph, animator channels and state machine.
    ///
    /// No synthesis happens yet — surfaces are drawn at [`mount`] so a
    /// constructed-but-unmounted scene holds no raster data.
    ///
    /// [`mount`]: Self::mount
    #[must_use]
    pub fn new(options: Options) -> Self {
        let mut scene = Scene::new();

        let cover_material = scene.add_material(
            Material::solid(options.palette.leather).with_roughness(0.6),
        );
        let spine_material = scene.add_material(
            Material::solid(options.palette.leather_dark).with_roughness(0.65),
        );
        let trim_material = scene.add_material(
            Material::solid(options.palette.foil)
                .with_roughness(0.25)
                .with_reflectivity(0.6),
        );
        let page_material =
            scene.add_material(Material::solid(options.palette.parchment));

        scene.add_object(SceneObject::new(OBJ_COVER, cover_material));
        scene.add_object(SceneObject::new(OBJ_PAGE_BLOCK, page_material));
        scene.add_object(SceneObject::new(OBJ_SPINE, spine_material));
        scene.add_object(SceneObject::new(OBJ_TRIM, trim_material));
        let mut overlay = SceneObject::new(OBJ_OVERLAY, page_material);
        overlay.visible = false; // revealed when fully open
        scene.add_object(overlay);

        let anim = &options.animation;
        let mut animator =
            TransformAnimator::new().with_stall_limit(anim.stall_limit);
        let rot = ChannelParams::new(anim.rotation_rate, anim.epsilon);
        let scl = ChannelParams::new(anim.scale_rate, anim.epsilon);
        let ptr = ChannelParams::new(anim.pointer_rate, anim.epsilon);
        let glow = ChannelParams::new(anim.glow_rate, anim.epsilon);
        animator.track(CH_COVER_ANGLE, 0.0, rot);
        animator.track(CH_LIFT, 0.0, scl);
        animator.track(CH_SCALE, 1.0, scl);
        animator.track(CH_TILT_X, 0.0, ptr);
        animator.track(CH_TILT_Y, 0.0, ptr);
        animator.track(CH_GLOW, options.pointer.glow_base, glow);

        let machine = BookStateMachine::new(anim.settle_delay);
        let particles = ParticlePool::new(&options.particles);
        let pointer =
            PointerTracker::new(PointerRegion::new(0.0, 0.0, 0.0, 0.0));

        Self {
            options,
            scene,
            cover_material,
            spine_material,
            trim_material,
            animator,
            machine,
            particles,
            pointer,
            textures: TextureCache::new(),
            clock: DeltaClock::new(),
            mounted: false,
            elapsed: 0.0,
            degraded: false,
            on_opened: None,
        }
    }

    // -- Lifecycle --

    /// Mount the scene inside a host region: synthesize surfaces (cached,
    /// synchronous, before the first frame) and wire the pointer region.
    ///
    /// A synthesis failure degrades the affected material to its fallback
    /// color and is logged — the scene still mounts and animates.
    pub fn mount(&mut self, region: PointerRegion) {
        if self.mounted {
            log::debug!("mount called while mounted; re-wiring region");
            self.pointer.set_region(region);
            return;
        }

        self.synthesize_surfaces();
        self.pointer.set_region(region);
        self.pointer.reset();
        self.clock = DeltaClock::new();
        self.mounted = true;
        log::info!(
            "book scene mounted ({} surfaces cached{})",
            self.textures.len(),
            if self.degraded { ", degraded" } else { "" }
        );
    }

    /// Unmount: synchronously cancel the settle timer, clear the opened
    /// callback, drop particles and release retained surfaces.
    ///
    /// An in-flight transition has nothing to roll back beyond these
    /// in-memory flags; after this call no timer or callback can fire.
    pub fn unmount(&mut self) {
        if !self.mounted {
            log::debug!("unmount called while not mounted");
            return;
        }
        self.machine.cancel_settle();
        self.machine.reset();
        self.apply_closed_targets();
        self.animator.snap_all();
        self.particles.clear();
        self.pointer.reset();
        self.scene.set_visible(OBJ_OVERLAY, false);
        self.scene.clear_faults();
        self.scene.release_surfaces();
        self.textures.release();
        self.on_opened = None;
        self.elapsed = 0.0;
        self.mounted = false;
        log::info!("book scene unmounted");
    }

    /// Whether the scene is currently mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // -- Activation & queries --

    /// Toggle the book between closed and open.
    ///
    /// Callers see none of the internal timing: from rest this starts the
    /// matching transition, mid-transition it is ignored. Unmounted scenes
    /// drop the call.
    pub fn activate(&mut self) {
        if !self.mounted {
            log::debug!("activate ignored: scene not mounted");
            return;
        }
        match self.machine.activate() {
            Some(StateEvent::OpeningStarted) => {
                self.scene.set_visible(OBJ_OVERLAY, false);
                self.apply_open_targets();
                log::debug!("opening started");
            }
            Some(StateEvent::ClosingStarted) => {
                // Hide content immediately and reset error state before
                // the swing back.
                self.scene.set_visible(OBJ_OVERLAY, false);
                self.scene.clear_faults();
                self.apply_closed_targets();
                log::debug!("closing started");
            }
            _ => {}
        }
    }

    /// Current animation state.
    #[must_use]
    pub fn state(&self) -> BookState {
        self.machine.state()
    }

    /// Whether the state machine has confirmed `Open` (settle delay
    /// included). External collaborators should only render dependent
    /// content once this is true.
    #[must_use]
    pub fn is_fully_open(&self) -> bool {
        self.machine.is_fully_open()
    }

    /// Whether any surface fell back to its solid color.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Register a callback fired once each time the book reaches `Open`.
    pub fn on_opened(&mut self, callback: impl FnMut() + 'static) {
        self.on_opened = Some(Box::new(callback));
    }

    // -- Pointer events (host input dispatch) --

    /// Forward a pointer-move in host pixel coordinates.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if !self.mounted {
            return;
        }
        self.pointer.pointer_moved(Vec2::new(x, y));
    }

    /// Forward a pointer-leave.
    pub fn pointer_left(&mut self) {
        if !self.mounted {
            return;
        }
        self.pointer.pointer_left();
    }

    // -- Per-frame update --

    /// Advance the scene by `dt` seconds.
    ///
    /// Runs, in order: pointer-target propagation, the state machine,
    /// the animator, particles, pose application (isolated per object)
    /// and material glow. A no-op while unmounted.
    pub fn update(&mut self, dt: f32) {
        if !self.mounted {
            return;
        }
        self.elapsed += dt.max(0.0);

        self.propagate_pointer_targets();

        if let Some(event) = self.machine.update(dt) {
            self.handle_state_event(event);
        }

        let _ = self.animator.update(dt);
        self.particles.update(dt);
        self.apply_poses();
        self.apply_glow();
    }

    /// Derive `dt` from the scene's own clock and update. Convenience for
    /// hosts whose render callback provides no timing.
    pub fn tick(&mut self) {
        let dt = self.clock.tick();
        self.update(dt);
    }

    /// Smoothed frames-per-second over recent `tick()` calls.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }

    // -- Read access for the host renderer --

    /// All scene objects with their current poses and visibility.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        self.scene.objects()
    }

    /// Material behind a handle.
    #[must_use]
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.scene.material(id)
    }

    /// The particle pool for overlay rendering.
    #[must_use]
    pub fn particles(&self) -> &ParticlePool {
        &self.particles
    }

    /// The current normalized pointer state.
    #[must_use]
    pub fn pointer_state(&self) -> PointerState {
        self.pointer.state()
    }

    /// Read-only animator access, e.g. to gate on
    /// [`all_converged`](TransformAnimator::all_converged) instead of the
    /// settle delay.
    #[must_use]
    pub fn animator(&self) -> &TransformAnimator {
        &self.animator
    }

    // -- Internals --

    /// Synthesize all surfaces through the cache and attach them.
    fn synthesize_surfaces(&mut self) {
        let tex = &self.options.texture;
        let palette = self.options.palette.clone();
        let book = self.options.book.clone();

        let cover = self.textures.get_or_synthesize(TextureKind::Cover, || {
            synthesize_cover(
                tex.cover_width,
                tex.cover_height,
                &palette,
                &book.title,
                &book.subtitle,
            )
        });
        let spine = self.textures.get_or_synthesize(TextureKind::Spine, || {
            synthesize_spine(
                tex.spine_width,
                tex.spine_height,
                &palette,
                &book.spine_label,
            )
        });
        let foil = self.textures.get_or_synthesize(TextureKind::Foil, || {
            synthesize_foil(tex.foil_size, tex.foil_size, &palette)
        });

        for (id, result) in [
            (self.cover_material, cover),
            (self.spine_material, spine),
            (self.trim_material, foil),
        ] {
            match result {
                Ok(surface) => {
                    if let Some(material) = self.scene.material_mut(id) {
                        material.set_surface(surface);
                    }
                }
                Err(e) => {
                    log::error!("surface synthesis failed: {e}; using fallback color");
                    self.degraded = true;
                }
            }
        }
    }

    /// Turn raw pointer state into animator targets for the next tick.
    fn propagate_pointer_targets(&mut self) {
        let state = self.pointer.state();
        let ptr = &self.options.pointer;
        self.animator
            .set_target(CH_TILT_X, state.offset.y * ptr.max_tilt_deg);
        self.animator
            .set_target(CH_TILT_Y, -state.offset.x * ptr.max_tilt_deg);
        let glow_target =
            if state.hover { ptr.glow_hover } else { ptr.glow_base };
        self.animator.set_target(CH_GLOW, glow_target);
    }

    fn handle_state_event(&mut self, event: StateEvent) {
        match event {
            StateEvent::Opened => {
                self.scene.set_visible(OBJ_OVERLAY, true);
                let volume = self.spawn_volume();
                self.particles.spawn(self.options.particles.count, volume);
                log::debug!(
                    "book open; spawned {} particles",
                    self.particles.len()
                );
                if let Some(callback) = self.on_opened.as_mut() {
                    callback();
                }
            }
            StateEvent::Closed => {
                self.particles.clear();
                log::debug!("book closed");
            }
            // Start events are produced by activate(), not by update().
            StateEvent::OpeningStarted | StateEvent::ClosingStarted => {}
        }
    }

    fn apply_open_targets(&mut self) {
        let book = &self.options.book;
        self.animator.set_target(CH_COVER_ANGLE, book.open_angle_deg);
        self.animator.set_target(CH_LIFT, book.open_lift);
        self.animator.set_target(CH_SCALE, book.open_scale);
    }

    fn apply_closed_targets(&mut self) {
        self.animator.set_target(CH_COVER_ANGLE, 0.0);
        self.animator.set_target(CH_LIFT, 0.0);
        self.animator.set_target(CH_SCALE, 1.0);
    }

    /// Particle spawn volume above the open book.
    fn spawn_volume(&self) -> BoundingVolume {
        let book = &self.options.book;
        let particles = &self.options.particles;
        let half_w = book.width * 0.5 + particles.volume_padding;
        let half_d = book.depth * 0.5 + particles.volume_padding;
        let base = self.animator.value(CH_LIFT);
        BoundingVolume::new(
            Vec3::new(-half_w, base, -half_d),
            Vec3::new(half_w, base + particles.volume_height, half_d),
        )
    }

    /// Compute and apply this frame's pose per object, isolating failures:
    /// one object's invalid pose is logged and skipped without halting the
    /// rest.
    fn apply_poses(&mut self) {
        let book = &self.options.book;
        let lift = self.animator.value(CH_LIFT);
        let scale = self.animator.value(CH_SCALE);
        let tilt = Vec3::new(
            self.animator.value(CH_TILT_X),
            self.animator.value(CH_TILT_Y),
            0.0,
        );
        let cover_angle = self.animator.value(CH_COVER_ANGLE);

        let base = Transform {
            position: Vec3::new(0.0, lift, 0.0),
            rotation_deg: tilt,
            scale: Vec3::splat(scale),
        };
        let half_depth = book.depth * 0.5;

        for object in self.scene.objects_mut() {
            let mut pose = base;
            match object.name.as_str() {
                // Hinge swing on top of the whole-object tilt.
                OBJ_COVER => {
                    pose.position.z = half_depth;
                    pose.rotation_deg.y -= cover_angle;
                }
                OBJ_SPINE => pose.position.x = -book.width * 0.5,
                OBJ_TRIM => pose.position.z = -half_depth,
                // Overlay floats just above the page block.
                OBJ_OVERLAY => pose.position.y = lift + book.cover_thickness,
                _ => {}
            }

            let was_faulted = object.is_faulted();
            if let Err(msg) = object.apply_pose(pose) {
                if !was_faulted {
                    log::warn!("{msg}; keeping last good pose");
                }
            }
        }
    }

    /// Write the glow channel into the emissive materials, with a hover
    /// pulse on top.
    fn apply_glow(&mut self) {
        let glow = self.animator.value(CH_GLOW);
        let ptr = &self.options.pointer;
        let pulse = if self.pointer.state().hover {
            1.0 + ptr.pulse_amplitude
                * (self.elapsed * ptr.pulse_frequency).sin()
        } else {
            1.0
        };
        let emissive = (glow * pulse).max(0.0);
        for id in [self.cover_material, self.trim_material] {
            if let Some(material) = self.scene.material_mut(id) {
                material.emissive = emissive;
            }
        }
    }
}

impl std::fmt::Debug for BookScene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookScene")
            .field("state", &self.machine.state())
            .field("mounted", &self.mounted)
            .field("degraded", &self.degraded)
            .field("objects", &self.scene.objects().len())
            .field("particles", &self.particles.len())
            .finish_non_exhaustive()
    }
}
