//! Camera system for the night scene.
//!
//! Provides a single-axis orbit camera: an angle/height/distance triple
//! converted to a Cartesian eye position, driven by pointer drags and the
//! scroll wheel. The math lives in [`controller`] with no GPU types so it
//! is unit-testable without a display; [`binding`] owns the uniform buffer
//! side.

/// GPU uniform buffer and bind group for the camera.
pub mod binding;
/// Orbit state machine: drag, zoom, and position derivation.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
