mod color;
mod vector3;

pub use self::{color::Color, vector3::Vector3};
