use crate::{
    error::RenderError,
    render::Ray,
    structs::{Color, Vector3},
    traits::Dotable,
};

use super::traits::{Colorable, Figure, Intersectable};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f64,
    pub color: Color,
}

impl Sphere {
    pub fn new(center: Vector3, radius: f64, color: Color) -> Result<Sphere, RenderError> {
        if radius <= 0.0 {
            return Err(RenderError::InvalidRadius(radius));
        }
        Ok(Sphere {
            center,
            radius,
            color,
        })
    }
}

impl Intersectable for Sphere {
    // Geometric form of the ray-sphere test: project the vector from the
    // ray origin to the sphere center onto the ray direction, then compare
    // the squared distances.
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let eye_to_center = self.center - ray.origin;
        let v = eye_to_center.dot(&ray.direction);
        let eo_dot = eye_to_center.dot(&eye_to_center);
        let discriminant = self.radius * self.radius - eo_dot + v * v;

        if discriminant < 0.0 {
            None
        } else {
            // Near root only; spheres are opaque so the far root is never
            // the first contact. Not filtered for negative values, hits
            // behind the origin come back as negative distances.
            Some(v - discriminant.sqrt())
        }
    }
}

impl Colorable for Sphere {
    fn surface_color(&self) -> Color {
        self.color
    }
}

impl Figure for Sphere {}
