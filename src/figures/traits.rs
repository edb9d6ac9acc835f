use crate::{render::Ray, structs::Color};

pub trait Intersectable {
    /// Distance along the ray direction to the nearest surface point,
    /// `None` when the ray's line misses the figure entirely.
    ///
    /// The distance is a raw comparable value and may be negative when the
    /// intersection lies behind the ray origin; callers doing closest-wins
    /// selection compare it as-is.
    fn intersect(&self, ray: &Ray) -> Option<f64>;
}

pub trait Colorable {
    fn surface_color(&self) -> Color;
}

// Figure is whatever can be hit by a ray and painted; new shape kinds
// (planes etc) plug in through the same contract
pub trait Figure: Intersectable + Colorable {}
