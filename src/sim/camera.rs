//! Third-person follow camera
//!
//! Pure derivation from a target point and yaw/pitch; the camera keeps no
//! state of its own.

use glam::{Mat4, Vec3};

use crate::consts::*;

/// Eye placement and the matrices built from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl CameraView {
    /// Place the eye behind `target` on the horizontal projection of the
    /// yaw/pitch look direction, lifted by CAMERA_HEIGHT
    pub fn follow(target: Vec3, yaw: f32, pitch: f32, distance: f32) -> Self {
        let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
        let dir = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos());
        let flat = Vec3::new(dir.x, 0.0, dir.z).normalize_or_zero();

        Self {
            eye: target - flat * distance + Vec3::Y * CAMERA_HEIGHT,
            target,
            up: Vec3::Y,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Perspective projection for the window aspect ratio
pub fn projection(aspect: f32) -> Mat4 {
    Mat4::perspective_rh_gl(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR)
}

pub fn default_aspect() -> f32 {
    SCREEN_WIDTH as f32 / SCREEN_HEIGHT as f32
}
