mod build_scene;
mod camera;
mod intersection;
mod scene;

pub use self::{
    build_scene::{build_scene, random_sphere, BASE_SPHERE_RADIUS, SHELL_RADIUS_MIN, SURFACE_SPHERE_COUNT},
    camera::Camera,
    intersection::Intersection,
    scene::Scene,
};
