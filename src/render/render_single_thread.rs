use image::RgbaImage;
use log::debug;

use crate::{error::RenderError, scene::Scene, structs::Color};

use super::{camera_basis::CameraBasis, trace};

/// Walk every pixel in raster order, one primary ray each, and write the
/// resulting color exactly once.
pub fn render(scene: &Scene, width: u32, height: u32) -> Result<RgbaImage, RenderError> {
    let basis = CameraBasis::for_frame(&scene.camera, width, height)?;
    debug!("Rendering {}x{} single threaded", width, height);

    let mut image = RgbaImage::new(width, height);

    for x in 0..width {
        for y in 0..height {
            let ray = basis.ray_for_pixel(x, y);

            let color = trace(&ray, scene, 0).unwrap_or(Color::DEFAULT);

            image.put_pixel(x, y, color.to_rgba());
        }
    }

    Ok(image)
}
