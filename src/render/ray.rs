use crate::structs::Vector3;

/// Built fresh for every pixel, never retained
#[derive(Debug, Copy, Clone)]
pub struct Ray {
    pub origin: Vector3,
    /// Unit length
    pub direction: Vector3,
}
