//! Input handling: platform-agnostic event types consumed by the engine.

/// Platform-agnostic input events.
pub mod event;

pub use event::{InputEvent, MouseButton};
