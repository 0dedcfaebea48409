use std::f32::consts::FRAC_PI_4;

use serde::{Deserialize, Serialize};

/// Orbit camera projection and control parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Radians of rotation per pixel of horizontal drag.
    pub rotate_speed: f32,
    /// Distance units per unit of wheel delta.
    pub zoom_speed: f32,
    /// Closest allowed orbit distance.
    pub min_distance: f32,
    /// Farthest allowed orbit distance.
    pub max_distance: f32,
    /// Fixed eye height above the ground plane.
    pub height: f32,
    /// Starting azimuthal angle in radians.
    pub initial_angle: f32,
    /// Starting orbit distance.
    pub initial_distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
            rotate_speed: 0.005,
            zoom_speed: 0.05,
            min_distance: 15.0,
            max_distance: 80.0,
            height: 35.0,
            initial_angle: FRAC_PI_4,
            initial_distance: 35.0,
        }
    }
}
