//! Per-mode target computation.
//!
//! Each mode implements [`Choreography`]: given an object's static data and
//! the frame context, write this frame's target transform. The
//! implementation is selected once per frame from the mode tag; formation
//! and focus are pure functions of (object, time), scatter is integrative
//! and also advances the displayed rotation directly, bypassing the easing
//! path entirely.

use crate::constants::*;
use crate::mode::Mode;
use crate::scene::{ObjectKind, VisualObject};
use glam::{EulerRot, Quat, Vec3};
use rand::prelude::*;
use std::f32::consts::PI;

/// Global per-frame inputs shared by every object.
pub struct FrameCtx<'a> {
    /// Accumulated scene time in seconds (drives the dust twinkle).
    pub time: f32,
    /// Registry index of the spotlighted object, if any.
    pub focused: Option<usize>,
    pub rng: &'a mut StdRng,
}

pub trait Choreography {
    /// Computes the target transform for the object at registry `index`.
    fn target_for(&self, index: usize, obj: &mut VisualObject, ctx: &mut FrameCtx);
}

pub struct Formation;
pub struct Scatter;
pub struct Focus;

static FORMATION: Formation = Formation;
static SCATTER: Scatter = Scatter;
static FOCUS: Focus = Focus;

/// One choreography per mode, selected once per frame.
pub fn for_mode(mode: Mode) -> &'static dyn Choreography {
    match mode {
        Mode::Formation => &FORMATION,
        Mode::Scatter => &SCATTER,
        Mode::Focus => &FOCUS,
    }
}

impl Choreography for Formation {
    fn target_for(&self, _index: usize, obj: &mut VisualObject, ctx: &mut FrameCtx) {
        let t = obj.batch_t();
        let radius = TREE_MAX_RADIUS * (1.0 - t);
        let angle = t * TREE_TURNS * PI;
        obj.target_position = Vec3::new(
            radius * angle.cos(),
            t * TREE_HEIGHT - TREE_HEIGHT * 0.5,
            radius * angle.sin(),
        );
        let scale = match obj.kind {
            ObjectKind::AmbientDust => {
                1.0 + (ctx.time * DUST_PULSE_RATE + obj.batch_index as f32).sin() * DUST_PULSE_AMPL
            }
            _ => 1.0,
        };
        obj.target_scale = Vec3::splat(scale);
        // Face outward along the helix tangent.
        obj.target_rotation = Vec3::new(0.0, angle, 0.0);
    }
}

impl Choreography for Scatter {
    fn target_for(&self, _index: usize, obj: &mut VisualObject, ctx: &mut FrameCtx) {
        obj.target_position += obj.velocity;
        if obj.target_position.length() > SCATTER_BOUND {
            // Soft boundary: re-enter at a random shorter length rather
            // than clamping at the shell.
            let len = SCATTER_RESET_MIN + ctx.rng.gen::<f32>() * SCATTER_RESET_SPAN;
            obj.target_position = obj.target_position.normalize() * len;
        }
        obj.target_scale = Vec3::ONE;
        // Displayed rotation advances from the constant angular velocity;
        // the integrator skips the slerp path in this mode.
        let spin = Quat::from_euler(
            EulerRot::XYZ,
            obj.angular_velocity.x,
            obj.angular_velocity.y,
            obj.angular_velocity.z,
        );
        obj.current.rotation = (obj.current.rotation * spin).normalize();
    }
}

impl Choreography for Focus {
    fn target_for(&self, index: usize, obj: &mut VisualObject, ctx: &mut FrameCtx) {
        if Some(index) == ctx.focused {
            obj.target_position = FOCUS_SPOTLIGHT_POS;
            obj.target_rotation = Vec3::ZERO;
            obj.target_scale = Vec3::splat(FOCUS_SPOTLIGHT_SCALE);
        } else {
            // Clear the stage: push outward along the object's own current
            // direction from center. An object sitting exactly at the
            // origin falls back to its immutable origin direction.
            let dir = obj
                .current
                .position
                .try_normalize()
                .or_else(|| obj.origin.try_normalize())
                .unwrap_or(Vec3::Y);
            obj.target_position = dir * FOCUS_PERIMETER_RADIUS;
            obj.target_scale = Vec3::splat(FOCUS_PERIMETER_SCALE);
        }
    }
}
