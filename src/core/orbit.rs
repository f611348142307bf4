use super::camera::Camera;
use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, TAU};

pub const MIN_DISTANCE: f32 = 1.0;
pub const MAX_DISTANCE: f32 = 20.0;
/// Stops short of the poles, where a Y-up `look_at` degenerates.
pub const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.05;
/// Distance factor per 100 units of wheel delta.
pub const ZOOM_STEP: f32 = 0.95;
/// Screen pixels per arrow key press.
pub const KEY_PAN_PX: f32 = 7.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Orbit,
    Pan,
}

/// Right button, or a left drag with a modifier held, pans. Anything else orbits.
#[inline]
pub fn drag_mode_for(button: i16, modifier: bool) -> DragMode {
    if button == 2 || modifier {
        DragMode::Pan
    } else {
        DragMode::Orbit
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Drag {
    mode: DragMode,
    last: Vec2,
}

/// Orbit/pan/zoom camera rig around a target point.
///
/// The eye sits at `distance` from `target`, at `yaw` around the Y axis
/// (0 looks down -Z) and `pitch` above the target plane.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitControls {
    target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
    fovy_radians: f32,
    znear: f32,
    zfar: f32,
    drag: Option<Drag>,
}

impl OrbitControls {
    pub fn looking_at(eye: Vec3, target: Vec3, fovy_radians: f32, znear: f32, zfar: f32) -> Self {
        let offset = eye - target;
        let offset = if offset.length_squared() > f32::EPSILON {
            offset
        } else {
            Vec3::Z
        };
        let len = offset.length();
        Self {
            target,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / len).asin().clamp(-PITCH_LIMIT, PITCH_LIMIT),
            distance: len.clamp(MIN_DISTANCE, MAX_DISTANCE),
            fovy_radians,
            znear,
            zfar,
            drag: None,
        }
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(cp * sy, sp, cp * cy)
    }

    /// The camera currently on screen.
    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: self.fovy_radians,
            znear: self.znear,
            zfar: self.zfar,
        }
    }

    pub fn rotate(&mut self, d_yaw: f32, d_pitch: f32) {
        if !(d_yaw.is_finite() && d_pitch.is_finite()) {
            return;
        }
        self.yaw = (self.yaw + d_yaw).rem_euclid(TAU);
        self.pitch = (self.pitch + d_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Screen-space pan: the point under the pointer at the target distance
    /// follows the pointer. `delta_px` is y-down like DOM coordinates.
    pub fn pan(&mut self, delta_px: Vec2, viewport_height: f32) {
        if !delta_px.is_finite() {
            return;
        }
        let forward = (self.target - self.eye()).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        let world_per_px =
            2.0 * self.distance * (self.fovy_radians * 0.5).tan() / viewport_height.max(1.0);
        self.target += (up * delta_px.y - right * delta_px.x) * world_per_px;
    }

    /// Positive wheel delta moves the eye away from the target.
    pub fn zoom(&mut self, wheel_delta: f32) {
        if !wheel_delta.is_finite() {
            return;
        }
        let factor = ZOOM_STEP.powf(-wheel_delta * 0.01);
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Arrow keys pan the view. Returns whether `key` was one of them.
    pub fn pan_key(&mut self, key: &str, viewport_height: f32) -> bool {
        let delta = match key {
            "ArrowUp" => Vec2::new(0.0, KEY_PAN_PX),
            "ArrowDown" => Vec2::new(0.0, -KEY_PAN_PX),
            "ArrowLeft" => Vec2::new(KEY_PAN_PX, 0.0),
            "ArrowRight" => Vec2::new(-KEY_PAN_PX, 0.0),
            _ => return false,
        };
        self.pan(delta, viewport_height);
        true
    }

    pub fn begin_drag(&mut self, mode: DragMode, pos_px: Vec2) {
        self.drag = Some(Drag { mode, last: pos_px });
    }

    /// Feed a pointer position to the active drag. Returns whether the view moved.
    pub fn drag_to(&mut self, pos_px: Vec2, viewport_height: f32) -> bool {
        if !pos_px.is_finite() {
            return false;
        }
        let (mode, delta) = match self.drag.as_mut() {
            Some(drag) => {
                let delta = pos_px - drag.last;
                drag.last = pos_px;
                (drag.mode, delta)
            }
            None => return false,
        };
        let h = viewport_height.max(1.0);
        match mode {
            // Dragging right swings the eye left, dragging down raises it.
            DragMode::Orbit => self.rotate(-TAU * delta.x / h, TAU * delta.y / h),
            DragMode::Pan => self.pan(delta, h),
        }
        true
    }

    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
