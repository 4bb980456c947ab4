//! Choreography and gesture tuning constants.
//!
//! These express intended behavior (shell radii, easing factors, gesture
//! thresholds) and keep magic numbers out of the per-frame math.

use glam::Vec3;

// Startup batch sizes
pub const STRUCTURAL_COUNT: usize = 1500;
pub const DUST_COUNT: usize = 2500;

// Spawn shells (origin directions are random on the unit sphere)
pub const BATCH_SPAWN_RADIUS: f32 = 40.0;
pub const PHOTO_SPAWN_RADIUS: f32 = 20.0;
pub const PHOTO_ARRIVAL_RADIUS: f32 = 15.0;

// Per-object constant drift, assigned at creation
pub const BATCH_DRIFT_SPEED: f32 = 0.05;
pub const PHOTO_DRIFT_SPEED: f32 = 0.08;
pub const BATCH_SPIN_MAX: f32 = 0.04; // radians per frame, per axis
pub const PHOTO_SPIN_MAX: f32 = 0.03;

// Ambient dust base scale range at creation
pub const DUST_SCALE_MIN: f32 = 0.5;
pub const DUST_SCALE_SPAN: f32 = 1.5;

// Formation helix: radius tapers to zero as t -> 1, y spans the full height
pub const TREE_MAX_RADIUS: f32 = 14.0;
pub const TREE_HEIGHT: f32 = 32.0;
pub const TREE_TURNS: f32 = 60.0; // helix angle = t * TREE_TURNS * PI

// Dust twinkle in formation
pub const DUST_PULSE_RATE: f32 = 2.0;
pub const DUST_PULSE_AMPL: f32 = 0.5;

// Scatter drift shell: soft boundary, reset into [MIN, MIN + SPAN)
pub const SCATTER_BOUND: f32 = 30.0;
pub const SCATTER_RESET_MIN: f32 = 5.0;
pub const SCATTER_RESET_SPAN: f32 = 5.0;

// Focus spotlight and the cleared-stage perimeter
pub const FOCUS_SPOTLIGHT_POS: Vec3 = Vec3::new(0.0, 2.0, 35.0);
pub const FOCUS_SPOTLIGHT_SCALE: f32 = 4.5;
pub const FOCUS_PERIMETER_RADIUS: f32 = 45.0;
pub const FOCUS_PERIMETER_SCALE: f32 = 0.3;

// Convergence easing, applied per frame (intentionally not dt-scaled)
pub const EASE_FACTOR: f32 = 0.06;
pub const CONTAINER_EASE: f32 = 0.05;
pub const CONTAINER_YAW_GAIN: f32 = 0.6;
pub const CONTAINER_PITCH_GAIN: f32 = 0.4;

// Gesture classification thresholds (normalized landmark space).
// The gap between FIST_MAX_EXTENSION and OPEN_MIN_EXTENSION is deliberate
// hysteresis: poses in between emit no signal.
pub const PINCH_MAX_DIST: f32 = 0.06;
pub const FIST_MAX_EXTENSION: f32 = 0.22;
pub const OPEN_MIN_EXTENSION: f32 = 0.38;
