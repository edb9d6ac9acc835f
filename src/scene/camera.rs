use crate::structs::Vector3;

/// Pinhole camera: a position, a look-at target and the full angular width
/// of the frame in degrees. Treated as an immutable snapshot for the
/// duration of a render pass; an animation driver may move it between
/// passes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub point: Vector3,
    pub vector: Vector3,
    pub field_of_view: f64,
}
