use crate::{figures::FiguresContainer, render::Ray};

use super::{camera::Camera, intersection::Intersection};

/// Read-only during a render pass; the render entry point borrows it and
/// never mutates it.
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    pub objects: FiguresContainer,
}

impl Scene {
    /// Linear scan over the figures in stored order, closest hit wins.
    /// Ties go to the earlier figure (strict less-than comparison), and
    /// NaN distances are dropped before the comparison.
    pub fn trace_nearest_intersection<'a>(&'a self, ray: &Ray) -> Option<Intersection<'a>> {
        self.objects
            .iter()
            .filter_map(|figure| {
                let distance = figure.intersect(ray)?;
                if distance.is_nan() {
                    return None;
                }
                Some(Intersection::new(distance, figure))
            })
            .min_by(|i1, i2| {
                // NaN was filtered above, partial_cmp cannot fail
                i1.distance().partial_cmp(&i2.distance()).unwrap()
            })
    }
}
