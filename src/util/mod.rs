//! Small shared utilities.

/// sRGB to linear color conversion for clear colors and light uniforms.
pub mod color;
/// Frame limiter and smoothed FPS tracking.
pub mod frame_timing;
/// Night lighting rig uniform and bind group.
pub mod lighting;
