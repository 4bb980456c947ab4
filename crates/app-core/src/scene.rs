//! Object registry: the set of visual objects and their animation state.
//!
//! Objects are appended in bulk batches at startup and one at a time on
//! photo upload; nothing is ever removed, and iteration order equals
//! creation order. Deterministic per-object placement math depends on the
//! batch-relative index staying stable for an object's lifetime.

use crate::constants::*;
use glam::{Quat, Vec3};
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Structural,
    AmbientDust,
    Photo,
}

/// Position/rotation/scale triple. `current` is the only state the renderer
/// reads; targets live alongside it on [`VisualObject`].
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

/// One decorative or photo element.
///
/// `origin`, `velocity`, `angular_velocity`, `batch_index` and `batch_len`
/// are fixed at creation. Targets are rewritten every frame by the
/// choreography engine (scatter advances the position target incrementally
/// instead of rewriting it).
#[derive(Clone, Debug)]
pub struct VisualObject {
    pub kind: ObjectKind,
    pub origin: Vec3,
    pub current: Transform,
    pub target_position: Vec3,
    /// Euler XYZ angles; converted to a quaternion when eased.
    pub target_rotation: Vec3,
    pub target_scale: Vec3,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    pub batch_index: usize,
    pub batch_len: usize,
    pub aspect: f32,
}

impl VisualObject {
    /// Normalized position within the creation batch, in [0, 1).
    #[inline]
    pub fn batch_t(&self) -> f32 {
        self.batch_index as f32 / self.batch_len.max(1) as f32
    }
}

/// Uniform random direction on the unit sphere.
pub fn random_direction(rng: &mut StdRng) -> Vec3 {
    let z: f32 = rng.gen_range(-1.0..=1.0);
    let azimuth: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * azimuth.cos(), z, r * azimuth.sin())
}

fn random_drift(rng: &mut StdRng, speed: f32) -> Vec3 {
    Vec3::new(
        rng.gen::<f32>() - 0.5,
        rng.gen::<f32>() - 0.5,
        rng.gen::<f32>() - 0.5,
    ) * speed
}

fn random_spin(rng: &mut StdRng, max: f32) -> Vec3 {
    Vec3::new(
        rng.gen::<f32>() * max,
        rng.gen::<f32>() * max,
        rng.gen::<f32>() * max,
    )
}

fn random_euler(rng: &mut StdRng) -> Vec3 {
    Vec3::new(
        rng.gen::<f32>() * std::f32::consts::PI,
        rng.gen::<f32>() * std::f32::consts::PI,
        rng.gen::<f32>() * std::f32::consts::PI,
    )
}

/// Holds every visual object, in creation order.
#[derive(Default)]
pub struct SceneRegistry {
    objects: Vec<VisualObject>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[VisualObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [VisualObject] {
        &mut self.objects
    }

    pub fn get(&self, index: usize) -> Option<&VisualObject> {
        self.objects.get(index)
    }

    /// Registry indices of all photo objects, in creation order.
    pub fn photo_indices(&self) -> Vec<usize> {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, o)| o.kind == ObjectKind::Photo)
            .map(|(i, _)| i)
            .collect()
    }

    /// Appends `count` objects of `kind` with dense batch-relative indices.
    pub fn create_batch(&mut self, count: usize, kind: ObjectKind, rng: &mut StdRng) {
        self.objects.reserve(count);
        for i in 0..count {
            let base_scale = match kind {
                ObjectKind::AmbientDust => DUST_SCALE_MIN + rng.gen::<f32>() * DUST_SCALE_SPAN,
                _ => 1.0,
            };
            self.objects.push(VisualObject {
                kind,
                origin: random_direction(rng) * BATCH_SPAWN_RADIUS,
                current: Transform::default(),
                target_position: Vec3::ZERO,
                target_rotation: random_euler(rng),
                target_scale: Vec3::splat(base_scale),
                velocity: random_drift(rng, BATCH_DRIFT_SPEED),
                angular_velocity: random_spin(rng, BATCH_SPIN_MAX),
                batch_index: i,
                batch_len: count,
                aspect: 1.0,
            });
        }
    }

    /// Appends exactly one object (photo uploads). The origin sits far out
    /// so the object visibly animates in; the initial target lands inside a
    /// nearer shell. Returns the new object's registry index.
    pub fn create_single(&mut self, kind: ObjectKind, aspect: f32, rng: &mut StdRng) -> usize {
        let aspect = sanitize_aspect(aspect);
        let origin = random_direction(rng) * PHOTO_SPAWN_RADIUS;
        let mut current = Transform::default();
        current.position = origin;
        self.objects.push(VisualObject {
            kind,
            origin,
            current,
            target_position: random_direction(rng) * PHOTO_ARRIVAL_RADIUS,
            target_rotation: random_euler(rng),
            target_scale: Vec3::ONE,
            velocity: random_drift(rng, PHOTO_DRIFT_SPEED),
            angular_velocity: random_spin(rng, PHOTO_SPIN_MAX),
            batch_index: 0,
            batch_len: 1,
            aspect,
        });
        self.objects.len() - 1
    }
}

/// Degenerate aspect ratios (NaN, infinite, non-positive) fall back to 1.
#[inline]
pub fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
