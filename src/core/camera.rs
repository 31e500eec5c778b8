// Perspective camera used by the heart scene.
//
// Platform-free so both the frame loop and the host tests can drive it.

use crate::core::constants::{
    CAMERA_FOVY_DEG, CAMERA_SWAY_X, CAMERA_SWAY_X_FREQ, CAMERA_SWAY_Y, CAMERA_SWAY_Y_FREQ,
    CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR,
};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
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

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update aspect from a backing-store size; zero sizes are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Place the eye on its slow sway path and re-aim at the origin.
    pub fn sway_to(&mut self, time_ms: f64) {
        self.eye = sway_eye(time_ms, self.eye.z);
        self.target = Vec3::ZERO;
    }
}

/// Eye position at `time_ms`; a pure function of time on x/y, `z` kept as given.
#[inline]
pub fn sway_eye(time_ms: f64, z: f32) -> Vec3 {
    Vec3::new(
        ((time_ms * CAMERA_SWAY_X_FREQ).sin() as f32) * CAMERA_SWAY_X,
        ((time_ms * CAMERA_SWAY_Y_FREQ).cos() as f32) * CAMERA_SWAY_Y,
        z,
    )
}
