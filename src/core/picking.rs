use super::camera::{Camera, Ray};
use super::layout::Keyboard;
use super::note::NoteId;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Index into `Keyboard::keys`.
    pub index: usize,
    pub note: NoteId,
    pub distance: f32,
}

/// Ray vs axis-aligned box (slab test). Returns the entry distance, or the
/// exit distance when the origin is inside the box.
#[inline]
pub fn ray_aabb(ray: &Ray, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = ray.dir.recip();
    let t0 = (min - ray.origin) * inv;
    let t1 = (max - ray.origin) * inv;
    let t_near = t0.min(t1).max_element();
    let t_far = t0.max(t1).min_element();
    // NaN from 0 * inf (origin on a slab plane, parallel ray) fails both checks.
    if !(t_near <= t_far) || t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

impl Keyboard {
    /// All keys hit by `ray`, nearest first.
    pub fn intersect(&self, ray: &Ray) -> SmallVec<[Hit; 4]> {
        let mut hits: SmallVec<[Hit; 4]> = self
            .keys()
            .iter()
            .enumerate()
            .filter_map(|(index, key)| {
                let (min, max) = key.bounds();
                ray_aabb(ray, min, max).map(|distance| Hit {
                    index,
                    note: key.note,
                    distance,
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

/// Nearest key under a normalized device coordinate.
pub fn pick_hit(keyboard: &Keyboard, camera: &Camera, ndc: Vec2) -> Option<Hit> {
    if !ndc.is_finite() {
        return None;
    }
    let ray = camera.ray_through(ndc);
    keyboard.intersect(&ray).first().copied()
}

#[inline]
pub fn pick(keyboard: &Keyboard, camera: &Camera, ndc: Vec2) -> Option<NoteId> {
    pick_hit(keyboard, camera, ndc).map(|h| h.note)
}

/// Resolve each point independently (multi-touch). Misses are dropped.
pub fn pick_all(keyboard: &Keyboard, camera: &Camera, points: &[Vec2]) -> SmallVec<[Hit; 4]> {
    points
        .iter()
        .filter_map(|p| pick_hit(keyboard, camera, *p))
        .collect()
}
