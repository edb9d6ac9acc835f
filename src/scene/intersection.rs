use crate::figures::Figure;

/// Nearest hit for one ray: the raw distance plus a borrow of the figure
/// that produced it.
pub struct Intersection<'a> {
    distance: f64,
    object: &'a dyn Figure,
}

impl<'a> Intersection<'a> {
    pub fn new(distance: f64, object: &'a dyn Figure) -> Intersection<'a> {
        Intersection { distance, object }
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn object(&self) -> &'a dyn Figure {
        self.object
    }
}
