//! Rain particle animation.
//!
//! A fixed-size buffer of world-space positions is spawned once across the
//! scene volume; every frame each particle's `y` drops by a constant
//! velocity and wraps back to the ceiling when it passes the floor. `x`
//! and `z` never change after spawn, so each particle falls in its own
//! vertical column. The step is a plain function over the buffer — no
//! hidden state — which keeps it testable without a window or device.

use glam::Vec3;
use rand::Rng;

use crate::options::RainOptions;

/// Spawn volume for rain: a square column of air over the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainVolume {
    /// Half-extent of the spawn square in x and z, centered on the origin.
    pub half_extent: f32,
    /// Height at which a recycled particle reappears.
    pub ceiling: f32,
    /// Height below which a particle is recycled.
    pub floor: f32,
}

impl From<&RainOptions> for RainVolume {
    fn from(options: &RainOptions) -> Self {
        Self {
            half_extent: options.half_extent,
            ceiling: options.ceiling,
            floor: options.floor,
        }
    }
}

/// Spawn `count` particles uniformly across the volume.
///
/// `x` and `z` are drawn from `[-half_extent, half_extent]`; `y` from
/// `[floor, ceiling]` so the first frames already look like settled rain
/// rather than a single descending sheet.
#[must_use]
pub fn spawn(count: usize, volume: &RainVolume) -> Vec<Vec3> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.random_range(-volume.half_extent..=volume.half_extent),
                rng.random_range(volume.floor..=volume.ceiling),
                rng.random_range(-volume.half_extent..=volume.half_extent),
            )
        })
        .collect()
}

/// Advance every particle one frame: `y -= velocity`, wrapping to
/// `ceiling` when the result lands below `floor`. `x`/`z` are untouched.
pub fn fall_step(positions: &mut [Vec3], velocity: f32, floor: f32, ceiling: f32) {
    for p in positions {
        p.y -= velocity;
        if p.y < floor {
            p.y = ceiling;
        }
    }
}

/// Owns the particle buffer and its spawn volume.
///
/// The buffer is allocated once and never resized; after each
/// [`step`](Self::step) the renderer must re-upload
/// [`positions`](Self::positions) before the next draw.
pub struct RainParticles {
    positions: Vec<Vec3>,
    volume: RainVolume,
    velocity: f32,
}

impl RainParticles {
    /// Spawn a buffer from the rain options.
    #[must_use]
    pub fn new(options: &RainOptions) -> Self {
        let volume = RainVolume::from(options);
        Self {
            positions: spawn(options.count, &volume),
            volume,
            velocity: options.velocity,
        }
    }

    /// Advance the buffer one frame.
    pub fn step(&mut self) {
        fall_step(
            &mut self.positions,
            self.velocity,
            self.volume.floor,
            self.volume.ceiling,
        );
    }

    /// Read-only view of the particle positions for GPU upload.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Number of particles (fixed at spawn).
    #[must_use]
    pub fn count(&self) -> usize {
        self.positions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOLUME: RainVolume = RainVolume {
        half_extent: 100.0,
        ceiling: 100.0,
        floor: 0.0,
    };

    #[test]
    fn spawn_respects_volume() {
        let particles = spawn(500, &VOLUME);
        assert_eq!(particles.len(), 500);
        for p in &particles {
            assert!(p.x >= -100.0 && p.x <= 100.0);
            assert!(p.z >= -100.0 && p.z <= 100.0);
            assert!(p.y >= 0.0 && p.y <= 100.0);
        }
    }

    #[test]
    fn y_stays_in_range_over_many_steps() {
        let mut particles = spawn(200, &VOLUME);
        for _ in 0..1000 {
            fall_step(&mut particles, 2.0, VOLUME.floor, VOLUME.ceiling);
            for p in &particles {
                assert!(
                    p.y >= VOLUME.floor && p.y <= VOLUME.ceiling,
                    "y = {} escaped [0, 100]",
                    p.y
                );
            }
        }
    }

    #[test]
    fn crossing_floor_resets_to_ceiling() {
        let mut particles = vec![Vec3::new(3.5, 1.0, -7.25)];
        fall_step(&mut particles, 2.0, 0.0, 100.0);
        // 1 - 2 = -1 < floor, so the particle recycles to exactly ceiling
        assert_eq!(particles[0].y, 100.0);
        assert_eq!(particles[0].x, 3.5);
        assert_eq!(particles[0].z, -7.25);
    }

    #[test]
    fn landing_on_floor_is_not_recycled() {
        // y == floor after the step is in range; only y < floor wraps
        let mut particles = vec![Vec3::new(0.0, 2.0, 0.0)];
        fall_step(&mut particles, 2.0, 0.0, 100.0);
        assert_eq!(particles[0].y, 0.0);
    }

    #[test]
    fn columns_never_drift() {
        let mut particles = spawn(64, &VOLUME);
        let columns: Vec<(f32, f32)> =
            particles.iter().map(|p| (p.x, p.z)).collect();
        for _ in 0..300 {
            fall_step(&mut particles, 1.7, VOLUME.floor, VOLUME.ceiling);
        }
        for (p, (x, z)) in particles.iter().zip(&columns) {
            assert_eq!(p.x, *x);
            assert_eq!(p.z, *z);
        }
    }

    #[test]
    fn buffer_length_is_fixed() {
        let mut rain = RainParticles::new(&RainOptions {
            count: 1234,
            ..RainOptions::default()
        });
        for _ in 0..10 {
            rain.step();
        }
        assert_eq!(rain.count(), 1234);
    }
}
