//! Convergence integrator: eases every object's actual transform a fixed
//! fraction of the way toward its target each frame, plus the container
//! parallax tilt derived from the pointer.
//!
//! Easing factors are applied per frame, not scaled by elapsed time — the
//! motion is tied to the display refresh rate on purpose (see DESIGN.md).

use crate::constants::{CONTAINER_EASE, CONTAINER_PITCH_GAIN, CONTAINER_YAW_GAIN, EASE_FACTOR};
use crate::mode::Mode;
use crate::scene::VisualObject;
use glam::{EulerRot, Quat, Vec2};

/// Orientation of the whole object container, eased toward a yaw/pitch
/// derived from the pointer for a parallax effect.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContainerOrientation {
    pub yaw: f32,
    pub pitch: f32,
}

impl ContainerOrientation {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

#[inline]
fn lerp_f32(a: f32, b: f32, s: f32) -> f32 {
    a + (b - a) * s
}

/// One easing step for one object. In scatter the rotation was already
/// advanced directly by the choreography, so the slerp path is skipped.
pub fn integrate_object(obj: &mut VisualObject, mode: Mode) {
    obj.current.position = obj.current.position.lerp(obj.target_position, EASE_FACTOR);
    obj.current.scale = obj.current.scale.lerp(obj.target_scale, EASE_FACTOR);
    if mode != Mode::Scatter {
        let target = Quat::from_euler(
            EulerRot::XYZ,
            obj.target_rotation.x,
            obj.target_rotation.y,
            obj.target_rotation.z,
        );
        obj.current.rotation = obj.current.rotation.slerp(target, EASE_FACTOR);
    }
}

/// Eases the container tilt toward the pointer-derived yaw/pitch.
pub fn integrate_container(container: &mut ContainerOrientation, pointer: Vec2) {
    container.yaw = lerp_f32(container.yaw, pointer.x * CONTAINER_YAW_GAIN, CONTAINER_EASE);
    container.pitch = lerp_f32(
        container.pitch,
        pointer.y * CONTAINER_PITCH_GAIN,
        CONTAINER_EASE,
    );
}
