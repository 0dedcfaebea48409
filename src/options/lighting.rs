use std::f32::consts::FRAC_PI_4;

use serde::{Deserialize, Serialize};

/// Night lighting rig and fog parameters.
///
/// Colors are sRGB triples in `[0, 1]` as authored; they are linearized
/// when packed into the GPU uniform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingOptions {
    /// Ambient light color.
    pub ambient_color: [f32; 3],
    /// Ambient light intensity.
    pub ambient_intensity: f32,

    /// World position the key (sky) light shines from, toward the origin.
    pub sun_position: [f32; 3],
    /// Key light color.
    pub sun_color: [f32; 3],
    /// Key light intensity.
    pub sun_intensity: f32,

    /// Moon point-light position (matches the moon sphere).
    pub moon_position: [f32; 3],
    /// Moon light color.
    pub moon_color: [f32; 3],
    /// Moon light intensity.
    pub moon_intensity: f32,
    /// Distance at which the moon light fades to nothing.
    pub moon_range: f32,

    /// Spot light position above the van.
    pub spot_position: [f32; 3],
    /// Point the spot light is aimed at.
    pub spot_target: [f32; 3],
    /// Spot light color.
    pub spot_color: [f32; 3],
    /// Spot light intensity.
    pub spot_intensity: f32,
    /// Distance at which the spot light fades to nothing.
    pub spot_range: f32,
    /// Half-angle of the spot cone in radians.
    pub spot_angle: f32,
    /// Fraction of the cone that falls off softly (0 = hard edge).
    pub spot_penumbra: f32,
    /// Physical-ish distance falloff exponent.
    pub spot_decay: f32,

    /// Fog and clear color.
    pub fog_color: [f32; 3],
    /// Exponential-squared fog density.
    pub fog_density: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            // Dim blue-grey ambient so nothing goes fully black
            ambient_color: [0.267, 0.267, 0.4],
            ambient_intensity: 0.3,
            sun_position: [20.0, 50.0, -30.0],
            sun_color: [0.690, 0.769, 0.871],
            sun_intensity: 0.5,
            moon_position: [20.0, 30.0, -35.0],
            moon_color: [0.690, 0.769, 0.871],
            moon_intensity: 0.6,
            moon_range: 150.0,
            spot_position: [5.0, 10.0, -9.0],
            spot_target: [-7.0, 1.0, -9.0],
            spot_color: [1.0, 1.0, 1.0],
            spot_intensity: 50.0,
            spot_range: 40.0,
            spot_angle: FRAC_PI_4,
            spot_penumbra: 0.5,
            spot_decay: 2.0,
            fog_color: [0.039, 0.059, 0.094],
            fog_density: 0.015,
        }
    }
}
