//! Pinhole camera with explicit orientation state.
//!
//! The camera keeps its orthonormal view basis together with the yaw/pitch
//! angles the basis was derived from. Interactive rotation accumulates on
//! those angles and rebuilds the basis, so repeated small rotations do not
//! drift and the view never flips over the vertical axis.

use std::f32::consts::FRAC_PI_2;

use glint_math::{Ray, Vec3};
use thiserror::Error;

/// Pitch is clamped to this many radians either side of level, just short
/// of straight up or down.
pub const PITCH_LIMIT: f32 = 1.5;

/// Errors from camera construction.
#[derive(Error, Debug)]
pub enum CameraError {
    #[error("camera target coincides with its position")]
    DegenerateTarget,

    #[error("camera up hint is parallel to the view direction")]
    DegenerateUp,

    #[error("vertical field of view must be inside (0, 180) degrees, got {0}")]
    InvalidFov(f32),
}

/// Pinhole camera.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    /// Position in world space. Public so embedders can move the camera
    /// between render passes.
    pub position: Vec3,

    forward: Vec3,
    right: Vec3,
    up: Vec3,
    fov: f32,
    yaw: f32,
    pitch: f32,
}

impl Camera {
    /// Create a camera at `position` looking at `target`.
    ///
    /// `up_hint` fixes the roll (conventionally `Vec3::Y`); it only needs to
    /// be non-parallel to the view direction, not orthogonal. `fov` is the
    /// vertical field of view in degrees.
    pub fn look_at(
        position: Vec3,
        target: Vec3,
        up_hint: Vec3,
        fov: f32,
    ) -> Result<Self, CameraError> {
        if !(fov > 0.0 && fov < 180.0) {
            return Err(CameraError::InvalidFov(fov));
        }

        let to_target = target - position;
        if to_target.length_squared() == 0.0 {
            return Err(CameraError::DegenerateTarget);
        }

        let forward = to_target.normalize();
        let right = forward.cross(up_hint);
        if right.length_squared() < 1e-12 {
            return Err(CameraError::DegenerateUp);
        }
        let right = right.normalize();
        let up = right.cross(forward);

        Ok(Self {
            position,
            forward,
            right,
            up,
            fov,
            yaw: forward.x.atan2(forward.z),
            pitch: forward.y.asin(),
        })
    }

    /// View direction (unit length).
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Screen-space right direction (unit length).
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Screen-space up direction (unit length).
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Vertical field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Accumulated yaw in radians.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Accumulated pitch in radians, always inside [-PITCH_LIMIT, PITCH_LIMIT].
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Rotate the view by yaw and pitch deltas in radians.
    ///
    /// Yaw accumulates freely; pitch is clamped to `PITCH_LIMIT` either way
    /// so the camera cannot flip over. The basis is rebuilt from the
    /// accumulated angles each call.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();

        self.forward = Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw);

        // Right stays level: derive it from yaw alone.
        let side = self.yaw - FRAC_PI_2;
        self.right = Vec3::new(side.sin(), 0.0, side.cos());
        self.up = self.right.cross(self.forward);
    }

    /// Primary ray through the center of pixel `(x, y)` in a `width` by
    /// `height` image. Pixel `(0, 0)` is the top-left corner.
    pub fn primary_ray(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let u = (x as f32 + 0.5) / width as f32;
        let v = (y as f32 + 0.5) / height as f32;

        let aspect = width as f32 / height as f32;
        let scale = (self.fov.to_radians() * 0.5).tan();

        let direction = self.forward
            + self.right * (2.0 * u - 1.0) * aspect * scale
            + self.up * (1.0 - 2.0 * v) * scale;

        Ray::new(self.position, direction)
    }
}
