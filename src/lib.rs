//! Ray-casting renderer for a single dark sphere crowded with small white
//! spheres on its surface. One primary ray per pixel, nearest hit wins,
//! no shading: a figure's stored color lands in the buffer untouched.

pub mod animation;
pub mod error;
pub mod figures;
pub mod render;
pub mod scene;
pub mod structs;
pub mod traits;
