use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    /// Camera position and look target coincide, the eye direction
    /// cannot be normalized
    #[error("degenerate camera: look target coincides with camera position")]
    DegenerateCamera,

    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f64),
}
