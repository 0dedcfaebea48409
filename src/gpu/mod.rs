//! GPU plumbing: device/surface ownership and texture upload helpers.

/// Owns the wgpu device, queue, surface, and configuration.
pub mod render_context;
/// Texture creation from image files, glTF payloads, and solid colors.
pub mod texture;
