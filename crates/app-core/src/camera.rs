//! Camera description shared with the web frontend.
//!
//! Platform-independent; the frontend only needs the combined
//! view-projection matrix for the instanced scene pass.

use glam::{Mat4, Vec3};

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed scene camera: slightly above center, looking in from +Z.
    pub fn scene_default(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 2.0, 50.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: 75.0_f32.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
