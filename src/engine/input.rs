//! Input dispatch for SceneRenderEngine.

use super::SceneRenderEngine;
use crate::input::{InputEvent, MouseButton};

impl SceneRenderEngine {
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. Consumers forward raw window
    /// events as [`InputEvent`] variants; the engine dispatches them to
    /// the orbit controller: left press starts a drag at the last known
    /// cursor x, cursor motion rotates while dragging, release ends the
    /// drag, and scroll zooms.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::CursorMoved { x, y });
    /// engine.handle_input(InputEvent::Scroll { delta_y: 120.0 });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, .. } => {
                self.last_cursor_x = x;
                // No-op unless a drag is in progress
                self.camera.drag_move(x);
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                if pressed {
                    self.camera.drag_start(self.last_cursor_x);
                } else {
                    self.camera.drag_end();
                }
            }
            InputEvent::MouseButton { .. } => {}
            InputEvent::Scroll { delta_y } => {
                self.camera.scroll(delta_y);
            }
        }
    }
}
