use super::{sphere::Sphere, traits::Figure};

/// Keeps figures in plain per-kind vectors instead of `Vec<Box<dyn Figure>>`,
/// so iteration walks objects laid out next to each other. Future shape
/// kinds get their own vector chained into `iter`.
#[derive(Debug, Default, Clone)]
pub struct FiguresContainer {
    pub spheres: Vec<Sphere>,
}

impl FiguresContainer {
    /// Figures in stored order; the scene's closest-wins scan relies on
    /// this order for its tie-break.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Figure> {
        self.spheres.iter().map(|figure| {
            let figure: &dyn Figure = figure;
            figure
        })
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}
