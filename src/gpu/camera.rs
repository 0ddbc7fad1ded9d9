//! Orbit camera for viewing the galaxy.

use glam::{Mat4, Vec3};
use std::f32::consts::TAU;

/// Auto-rotation speed in radians per second (one orbit every two minutes).
const AUTO_ROTATE_SPEED: f32 = TAU / 120.0;

/// Orbit camera: yaw/pitch around a target at a fixed distance.
pub struct Camera {
    /// Horizontal rotation angle in radians.
    pub yaw: f32,
    /// Vertical rotation angle in radians.
    pub pitch: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera orbits around.
    pub target: Vec3,
    /// Whether the camera slowly orbits on its own.
    pub auto_rotate: bool,
}

impl Camera {
    /// Create a camera at the default galaxy vantage, slightly above the
    /// disk plane and well outside the outer radius.
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.19,
            distance: 21.4,
            target: Vec3::ZERO,
            auto_rotate: true,
        }
    }

    /// Advance the automatic orbit by one frame.
    pub fn update(&mut self, delta: f32) {
        if self.auto_rotate {
            self.yaw += AUTO_ROTATE_SPEED * delta;
        }
    }

    /// Calculate the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_rotate_advances_yaw() {
        let mut camera = Camera::new();
        let yaw = camera.yaw;
        camera.update(1.0);
        assert!(camera.yaw > yaw);

        camera.auto_rotate = false;
        let yaw = camera.yaw;
        camera.update(1.0);
        assert_eq!(camera.yaw, yaw);
    }

    #[test]
    fn test_position_respects_distance() {
        let camera = Camera::new();
        assert!((camera.position().length() - camera.distance).abs() < 1e-4);
    }
}
