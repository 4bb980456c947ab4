//! Scene engine: owns the registry, resolver and interpreter, and runs the
//! per-frame pipeline gesture → mode → choreography → integration.
//!
//! The driver calls [`SceneEngine::observe_hand`] whenever a fresh video
//! frame was analyzed, then [`SceneEngine::step`] once per display refresh,
//! then hands `objects()` and `container()` to the render collaborator.

use crate::choreography::{self, FrameCtx};
use crate::constants::{DUST_COUNT, STRUCTURAL_COUNT};
use crate::gesture::GestureInterpreter;
use crate::integrator::{integrate_container, integrate_object, ContainerOrientation};
use crate::mode::{Mode, ModeResolver};
use crate::scene::{ObjectKind, SceneRegistry, VisualObject};
use glam::Vec2;
use instant::Duration;
use rand::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct SceneParams {
    pub structural_count: usize,
    pub dust_count: usize,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            structural_count: STRUCTURAL_COUNT,
            dust_count: DUST_COUNT,
        }
    }
}

pub struct SceneEngine {
    registry: SceneRegistry,
    resolver: ModeResolver,
    interpreter: GestureInterpreter,
    container: ContainerOrientation,
    time: f32,
    rng: StdRng,
}

impl SceneEngine {
    pub fn new(params: SceneParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut registry = SceneRegistry::new();
        registry.create_batch(params.structural_count, ObjectKind::Structural, &mut rng);
        registry.create_batch(params.dust_count, ObjectKind::AmbientDust, &mut rng);
        log::info!(
            "[engine] populated {} structural + {} dust objects",
            params.structural_count,
            params.dust_count
        );
        Self {
            registry,
            resolver: ModeResolver::new(),
            interpreter: GestureInterpreter::new(),
            container: ContainerOrientation::default(),
            time: 0.0,
            rng,
        }
    }

    pub fn mode(&self) -> Mode {
        self.resolver.mode()
    }

    pub fn focused(&self) -> Option<usize> {
        self.resolver.focused()
    }

    pub fn pointer(&self) -> Vec2 {
        self.interpreter.pointer()
    }

    pub fn container(&self) -> ContainerOrientation {
        self.container
    }

    pub fn objects(&self) -> &[VisualObject] {
        self.registry.objects()
    }

    pub fn object_count(&self) -> usize {
        self.registry.len()
    }

    /// Feeds one frame of hand detection output (or `None` for a frame with
    /// no hand). Returns the new mode if the gesture caused a transition.
    pub fn observe_hand(
        &mut self,
        landmarks: Option<&[Vec2]>,
        video_time: f64,
    ) -> Option<Mode> {
        let class = self.interpreter.observe(landmarks, video_time);
        let changed = self.resolver.apply(class, &self.registry, &mut self.rng);
        if let Some(mode) = changed {
            log::info!("[engine] mode -> {}", mode.label());
        }
        changed
    }

    /// Explicit transition request (UI buttons). Same edge semantics as a
    /// gesture-driven transition.
    pub fn request_mode(&mut self, mode: Mode) -> Option<Mode> {
        self.resolver.request(mode, &self.registry, &mut self.rng)
    }

    /// Adds one photo ornament. Safe in any mode, including mid-focus; the
    /// new object only becomes a focus candidate on the next focus entry.
    pub fn add_photo(&mut self, aspect: f32) -> usize {
        let idx = self
            .registry
            .create_single(ObjectKind::Photo, aspect, &mut self.rng);
        log::info!("[engine] photo ornament added at index {idx}");
        idx
    }

    /// Advances the simulation one display frame: recompute every object's
    /// target under the current mode, then ease actual transforms toward
    /// them. `dt` only advances the global clock; easing is per-frame.
    pub fn step(&mut self, dt: Duration) {
        self.time += dt.as_secs_f32();
        let mode = self.resolver.mode();
        let chor = choreography::for_mode(mode);
        let mut ctx = FrameCtx {
            time: self.time,
            focused: self.resolver.focused(),
            rng: &mut self.rng,
        };
        for (index, obj) in self.registry.objects_mut().iter_mut().enumerate() {
            chor.target_for(index, obj, &mut ctx);
            integrate_object(obj, mode);
        }
        integrate_container(&mut self.container, self.interpreter.pointer());
    }
}
