mod camera_basis;
mod ray;

#[cfg(feature = "multi_threaded")]
mod render_multi_thread;

#[cfg(not(feature = "multi_threaded"))]
mod render_single_thread;

pub use self::{camera_basis::CameraBasis, ray::Ray};

#[cfg(feature = "multi_threaded")]
pub use self::render_multi_thread::render;

#[cfg(not(feature = "multi_threaded"))]
pub use self::render_single_thread::render;

use crate::{figures::Colorable, scene::Scene, structs::Color};

/// Shoot a ray into the scene and return the color of the nearest figure
/// it strikes, or `None` for a miss.
///
/// `depth` is the reflection hook: the core never bounces, so any depth
/// above zero is an immediate no-op.
pub fn trace(ray: &Ray, scene: &Scene, depth: u32) -> Option<Color> {
    if depth > 0 {
        return None;
    }

    scene
        .trace_nearest_intersection(ray)
        .map(|intersection| intersection.object().surface_color())
}
