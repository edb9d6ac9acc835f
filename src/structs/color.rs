use image::Rgba;

use crate::traits::Zero;

/// RGB color with channels in the 0-255 range
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };

    pub const WHITE: Color = Color {
        red: 255.0,
        green: 255.0,
        blue: 255.0,
    };

    pub const GRAY: Color = Color {
        red: 127.0,
        green: 127.0,
        blue: 127.0,
    };

    /// Background color for rays that hit nothing
    pub const DEFAULT: Color = Color::BLACK;

    pub fn new(red: f64, green: f64, blue: f64) -> Color {
        Color { red, green, blue }
    }

    /// Fully opaque pixel, alpha is always 255
    pub fn to_rgba(&self) -> Rgba<u8> {
        let r = self.red.clamp(0.0, 255.0) as u8;
        let g = self.green.clamp(0.0, 255.0) as u8;
        let b = self.blue.clamp(0.0, 255.0) as u8;
        Rgba([r, g, b, 255])
    }
}

impl Zero for Color {
    fn zero() -> Self {
        Color::BLACK
    }
}
