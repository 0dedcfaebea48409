use glam::Vec3;

use crate::camera::core::Camera;
use crate::options::CameraOptions;

/// Pointer-drag state of the orbit controller.
///
/// Idle → Dragging on drag-start; Dragging → Idle on drag-end. Scroll and
/// position derivation are valid in either state.
enum DragState {
    /// No button held; pointer motion is ignored.
    Idle,
    /// Left button held; `last_x` is the pointer x of the previous event.
    Dragging {
        /// Horizontal pointer coordinate at the last drag-move.
        last_x: f32,
    },
}

/// Single-axis orbit camera controller.
///
/// Maintains an `(angle, height, distance)` triple and derives the eye
/// position by polar-to-Cartesian conversion on every drag-move or wheel
/// event. The camera is always aimed at the world origin. Holds no GPU
/// resources — see [`CameraBinding`](crate::camera::binding::CameraBinding)
/// for the uniform-buffer side.
pub struct OrbitController {
    /// Azimuthal angle in radians, unbounded (wraps via trigonometric
    /// periodicity).
    angle: f32,
    /// Fixed eye height above the ground plane.
    height: f32,
    /// Distance from the vertical axis, clamped to
    /// `[min_distance, max_distance]` after every update.
    distance: f32,
    drag: DragState,

    rotate_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,

    /// Derived camera exposed to the renderer.
    pub camera: Camera,
}

impl OrbitController {
    /// Controller at the configured starting angle and distance, looking
    /// at the origin.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let mut controller = Self {
            angle: options.initial_angle,
            height: options.height,
            distance: options
                .initial_distance
                .clamp(options.min_distance, options.max_distance),
            drag: DragState::Idle,
            rotate_speed: options.rotate_speed,
            zoom_speed: options.zoom_speed,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
            camera: Camera {
                eye: Vec3::ZERO,
                target: Vec3::ZERO,
                up: Vec3::Y,
                aspect,
                fovy: options.fovy,
                znear: options.znear,
                zfar: options.zfar,
            },
        };
        controller.update_camera_pos();
        controller
    }

    /// Current orbit position: `x = d·cos(a)`, `y = height`,
    /// `z = d·sin(a)`.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.angle.cos(),
            self.height,
            self.distance * self.angle.sin(),
        )
    }

    fn update_camera_pos(&mut self) {
        self.camera.eye = self.position();
        self.camera.target = Vec3::ZERO;
    }

    /// Record the starting pointer x and enter the dragging state.
    pub fn drag_start(&mut self, pointer_x: f32) {
        self.drag = DragState::Dragging { last_x: pointer_x };
    }

    /// Rotate by the horizontal pointer delta since the last event.
    /// No-op unless a drag is in progress.
    pub fn drag_move(&mut self, pointer_x: f32) {
        if let DragState::Dragging { last_x } = self.drag {
            let delta = pointer_x - last_x;
            self.angle -= delta * self.rotate_speed;
            self.drag = DragState::Dragging { last_x: pointer_x };
            self.update_camera_pos();
        }
    }

    /// Leave the dragging state. No-op when already idle.
    pub fn drag_end(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Zoom by a wheel delta (positive = away from the scene), clamping
    /// the distance into `[min_distance, max_distance]`.
    pub fn scroll(&mut self, delta_y: f32) {
        self.distance += delta_y * self.zoom_speed;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
        self.update_camera_pos();
    }

    /// Update the projection aspect ratio after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width as f32 / height as f32;
    }

    /// Current azimuthal angle in radians.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Current clamped orbit distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// `true` while a pointer drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> OrbitController {
        OrbitController::new(&CameraOptions::default(), 16.0 / 9.0)
    }

    #[test]
    fn position_stays_on_orbit_circle() {
        let mut c = controller();
        for i in 0..32 {
            c.drag_start(0.0);
            c.drag_move(i as f32 * 17.3);
            c.drag_end();
            let p = c.position();
            let planar_sq = p.x * p.x + p.z * p.z;
            let expected = c.distance() * c.distance();
            assert!(
                (planar_sq - expected).abs() < 1e-3,
                "x²+z² = {planar_sq} but distance² = {expected}"
            );
        }
    }

    #[test]
    fn scroll_always_clamped() {
        let mut c = controller();
        for delta in [2000.0, -9000.0, 1.0, 500.0, -500.0, 1e6, -1e6] {
            c.scroll(delta);
            assert!(c.distance() >= 15.0 && c.distance() <= 80.0);
        }
    }

    #[test]
    fn scroll_overshoot_clamps_to_max() {
        // distance 35 + 2000 * 0.05 = 135, clamped to 80
        let mut c = controller();
        c.scroll(2000.0);
        assert_eq!(c.distance(), 80.0);
    }

    #[test]
    fn zero_delta_drag_keeps_angle() {
        let mut c = controller();
        let before = c.angle();
        c.drag_start(120.0);
        c.drag_move(120.0);
        c.drag_end();
        assert_eq!(c.angle(), before);
    }

    #[test]
    fn opposite_drags_restore_angle() {
        let mut c = controller();
        let before = c.angle();
        c.drag_start(100.0);
        c.drag_move(260.0);
        c.drag_move(100.0);
        c.drag_end();
        assert_eq!(c.angle(), before);
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut c = controller();
        let before = c.angle();
        c.drag_move(400.0);
        assert_eq!(c.angle(), before);
        assert!(!c.is_dragging());
    }

    #[test]
    fn drag_end_when_idle_is_noop() {
        let mut c = controller();
        c.drag_end();
        assert!(!c.is_dragging());
    }

    #[test]
    fn position_at_angle_zero() {
        let opts = CameraOptions {
            initial_angle: 0.0,
            initial_distance: 35.0,
            height: 35.0,
            ..CameraOptions::default()
        };
        let c = OrbitController::new(&opts, 1.0);
        let p = c.position();
        assert!((p.x - 35.0).abs() < 1e-6);
        assert!((p.y - 35.0).abs() < 1e-6);
        assert!(p.z.abs() < 1e-6);
    }

    #[test]
    fn camera_always_targets_origin() {
        let mut c = controller();
        c.drag_start(0.0);
        c.drag_move(300.0);
        c.scroll(-100.0);
        assert_eq!(c.camera.target, Vec3::ZERO);
        assert_eq!(c.camera.eye, c.position());
    }
}
