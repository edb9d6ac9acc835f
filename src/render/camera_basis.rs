use crate::{
    error::RenderError,
    scene::Camera,
    structs::Vector3,
    traits::{Crossable, Length, Normalizable},
};

use super::ray::Ray;

/// Orthonormal camera frame plus the viewport extents, computed once per
/// frame and reused for every pixel.
#[derive(Debug, Copy, Clone)]
pub struct CameraBasis {
    origin: Vector3,
    eye: Vector3,
    right: Vector3,
    up: Vector3,
    half_width: f64,
    half_height: f64,
    pixel_width: f64,
    pixel_height: f64,
}

impl CameraBasis {
    pub fn for_frame(camera: &Camera, width: u32, height: u32) -> Result<CameraBasis, RenderError> {
        let look = camera.vector - camera.point;
        if look.length() == 0.0 {
            return Err(RenderError::DegenerateCamera);
        }

        let eye = look.normalize();
        let right = eye.cross(&Vector3::UP).normalize();
        let up = right.cross(&eye).normalize();

        // Full field of view covers the frame left to right
        let half_width = (camera.field_of_view.to_radians() / 2.0).tan();
        let half_height = half_width * (height as f64 / width as f64);

        let pixel_width = half_width * 2.0 / (width as f64 - 1.0);
        let pixel_height = half_height * 2.0 / (height as f64 - 1.0);

        Ok(CameraBasis {
            origin: camera.point,
            eye,
            right,
            up,
            half_width,
            half_height,
            pixel_width,
            pixel_height,
        })
    }

    /// Pixel coordinates mapped linearly across the viewport plane
    pub fn ray_for_pixel(&self, x: u32, y: u32) -> Ray {
        let x_comp = self.right * (x as f64 * self.pixel_width - self.half_width);
        let y_comp = self.up * (y as f64 * self.pixel_height - self.half_height);

        Ray {
            origin: self.origin,
            direction: Vector3::sum3(self.eye, x_comp, y_comp).normalize(),
        }
    }

    pub fn eye(&self) -> Vector3 {
        self.eye
    }

    pub fn right(&self) -> Vector3 {
        self.right
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Dotable;

    const EPSILON: f64 = 1e-9;

    fn default_camera() -> Camera {
        Camera {
            point: Vector3::new(3.0, 3.0, 3.0),
            vector: Vector3::ZERO,
            field_of_view: 15.0,
        }
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let basis = CameraBasis::for_frame(&default_camera(), 64, 64).unwrap();
        for v in [basis.eye(), basis.right(), basis.up()] {
            assert!((v.length() - 1.0).abs() < EPSILON);
        }
        assert!(basis.eye().dot(&basis.right()).abs() < EPSILON);
        assert!(basis.eye().dot(&basis.up()).abs() < EPSILON);
        assert!(basis.right().dot(&basis.up()).abs() < EPSILON);
    }

    #[test]
    fn test_eye_points_at_look_target() {
        let basis = CameraBasis::for_frame(&default_camera(), 64, 64).unwrap();
        let expected = (Vector3::ZERO - Vector3::new(3.0, 3.0, 3.0)).normalize();
        assert!((basis.eye() - expected).length() < EPSILON);
    }

    #[test]
    fn test_degenerate_camera_fails_fast() {
        let camera = Camera {
            point: Vector3::new(1.0, 2.0, 3.0),
            vector: Vector3::new(1.0, 2.0, 3.0),
            field_of_view: 45.0,
        };
        assert!(matches!(
            CameraBasis::for_frame(&camera, 64, 64),
            Err(RenderError::DegenerateCamera)
        ));
    }

    #[test]
    fn test_center_pixel_ray_follows_eye() {
        // Odd side so (n-1)/2 lands exactly on the viewport center
        let basis = CameraBasis::for_frame(&default_camera(), 11, 11).unwrap();
        let ray = basis.ray_for_pixel(5, 5);
        assert!((ray.direction - basis.eye()).length() < EPSILON);
        assert_eq!(ray.origin, Vector3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_pixel_rays_are_unit_length() {
        let basis = CameraBasis::for_frame(&default_camera(), 16, 16).unwrap();
        for (x, y) in [(0, 0), (15, 0), (0, 15), (15, 15), (7, 9)] {
            assert!((basis.ray_for_pixel(x, y).direction.length() - 1.0).abs() < EPSILON);
        }
    }
}
