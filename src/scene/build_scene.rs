use log::debug;
use rand::Rng;

use crate::{
    error::RenderError,
    figures::{FiguresContainer, Sphere},
    structs::{Color, Vector3},
    traits::Normalizable,
};

use super::{camera::Camera, scene::Scene};

/// The occluding dark sphere at the scene center
pub const BASE_SPHERE_RADIUS: f64 = 0.5;

/// Shell radii for the surface spheres are drawn from
/// [SHELL_RADIUS_MIN, BASE_SPHERE_RADIUS)
pub const SHELL_RADIUS_MIN: f64 = 0.45;

pub const SURFACE_SPHERE_COUNT: usize = 50;

/// A surface sphere's own radius is its shell radius divided by this
const SHELL_TO_RADIUS: f64 = 10.0;

/// Place a sphere on the shell of radius `shell_radius`: draw a point
/// uniformly in the [-r, r] cube and project it onto the shell. The
/// sphere's own radius follows the shell it sits on.
pub fn random_sphere<R: Rng>(
    rng: &mut R,
    shell_radius: f64,
    color: Color,
) -> Result<Sphere, RenderError> {
    let x = rng.gen_range(-shell_radius..shell_radius);
    let y = rng.gen_range(-shell_radius..shell_radius);
    let z = rng.gen_range(-shell_radius..shell_radius);

    let center = Vector3::new(x, y, z).normalize() * shell_radius;

    Sphere::new(center, shell_radius / SHELL_TO_RADIUS, color)
}

/// One dark base sphere plus a crowd of small white spheres scattered just
/// under its surface, seen from a fixed camera on the space diagonal.
pub fn build_scene<R: Rng>(rng: &mut R) -> Result<Scene, RenderError> {
    let mut spheres = Vec::with_capacity(SURFACE_SPHERE_COUNT + 1);
    spheres.push(Sphere::new(
        Vector3::ZERO,
        BASE_SPHERE_RADIUS,
        Color::BLACK,
    )?);

    for _ in 0..SURFACE_SPHERE_COUNT {
        let shell_radius = rng.gen_range(SHELL_RADIUS_MIN..BASE_SPHERE_RADIUS);
        spheres.push(random_sphere(rng, shell_radius, Color::WHITE)?);
    }

    debug!("Scene built with {} figures", spheres.len());

    Ok(Scene {
        camera: Camera {
            point: Vector3::new(3.0, 3.0, 3.0),
            vector: Vector3::ZERO,
            field_of_view: 15.0,
        },
        objects: FiguresContainer { spheres },
    })
}
