use serde::{Deserialize, Serialize};

/// Rain particle parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RainOptions {
    /// Number of particles, fixed at spawn.
    pub count: usize,
    /// Fall distance per rendered frame.
    pub velocity: f32,
    /// Half-extent of the spawn square in x and z.
    pub half_extent: f32,
    /// Height below which a particle is recycled.
    pub floor: f32,
    /// Height a recycled particle reappears at.
    pub ceiling: f32,
    /// Drop color (sRGB).
    pub color: [f32; 3],
    /// Billboard edge length in world units.
    pub size: f32,
    /// Drop opacity, blended additively.
    pub opacity: f32,
}

impl Default for RainOptions {
    fn default() -> Self {
        Self {
            count: 15_000,
            velocity: 2.0,
            half_extent: 100.0,
            floor: 0.0,
            ceiling: 100.0,
            color: [0.565, 0.627, 0.753],
            size: 0.2,
            opacity: 0.6,
        }
    }
}
