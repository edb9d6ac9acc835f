mod figures_container;
mod sphere;
mod traits;

pub use self::{
    figures_container::FiguresContainer,
    sphere::Sphere,
    traits::{Colorable, Figure, Intersectable},
};
