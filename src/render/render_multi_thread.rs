use image::RgbaImage;
use log::debug;
use rayon::prelude::*;

use crate::{error::RenderError, scene::Scene, structs::Color};

use super::{camera_basis::CameraBasis, trace};

/// Pixels have no cross dependencies, so the buffer is split across the
/// rayon pool with the scene shared read-only.
pub fn render(scene: &Scene, width: u32, height: u32) -> Result<RgbaImage, RenderError> {
    let basis = CameraBasis::for_frame(&scene.camera, width, height)?;
    debug!("Rendering {}x{} on the rayon pool", width, height);

    let background = Color::DEFAULT.to_rgba();

    let mut data = vec![background; (width * height) as usize];
    data.par_iter_mut().enumerate().for_each(|(index, pixel)| {
        let x = index as u32 % width;
        let y = index as u32 / width;

        let ray = basis.ray_for_pixel(x, y);

        if let Some(color) = trace(&ray, scene, 0) {
            *pixel = color.to_rgba();
        }
    });

    let mut image = RgbaImage::new(width, height);
    data.into_iter().enumerate().for_each(|(index, pixel)| {
        let x = index as u32 % width;
        let y = index as u32 / width;
        image.put_pixel(x, y, pixel);
    });

    Ok(image)
}
