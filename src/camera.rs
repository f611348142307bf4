use crate::constants::{CAMERA_EYE, CAMERA_FOVY_RAD, CAMERA_TARGET, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::core::{Camera, OrbitControls};
use crate::input;
use glam::Vec3;
use web_sys as web;

/// Orbit rig starting at the default viewpoint.
pub fn scene_orbit() -> OrbitControls {
    OrbitControls::looking_at(
        Vec3::from(CAMERA_EYE),
        Vec3::from(CAMERA_TARGET),
        CAMERA_FOVY_RAD,
        CAMERA_ZNEAR,
        CAMERA_ZFAR,
    )
}

/// Camera matching what is currently drawn on `canvas`.
#[inline]
pub fn canvas_camera(canvas: &web::HtmlCanvasElement, orbit: &OrbitControls) -> Camera {
    orbit.camera(input::canvas_aspect(canvas))
}
