use std::ops::{Add, Mul, Neg, Sub};

use crate::traits::{Crossable, Dotable, Length, Normalizable, Zero};

#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// World up axis, used to derive the camera basis
    pub const UP: Vector3 = Vector3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    pub const ZERO: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3 { x, y, z }
    }

    /// Ternary sum, fixed arity on purpose: the per-pixel ray direction is
    /// always eye + right offset + up offset
    pub fn sum3(a: Vector3, b: Vector3, c: Vector3) -> Vector3 {
        Vector3 {
            x: a.x + b.x + c.x,
            y: a.y + b.y + c.y,
            z: a.z + b.z + c.z,
        }
    }
}

impl Zero for Vector3 {
    fn zero() -> Self {
        Vector3::ZERO
    }
}

impl Length for Vector3 {
    fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl Normalizable for Vector3 {
    fn normalize(&self) -> Self {
        let length = self.length();
        // Zero-length input is a caller precondition
        assert!(length != 0.0_f64);
        Vector3 {
            x: self.x / length,
            y: self.y / length,
            z: self.z / length,
        }
    }
}

impl Dotable for Vector3 {
    type Operand = Vector3;
    fn dot(&self, other: &Self::Operand) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Crossable for Vector3 {
    type Operand = Vector3;
    fn cross(&self, other: &Self::Operand) -> Self {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Self) -> Self::Output {
        Vector3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Self::Output {
        Vector3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f64) -> Self::Output {
        Vector3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_normalize_produces_unit_length() {
        let v = Vector3::new(3.0, -4.0, 12.0);
        assert!((v.normalize().length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_cross_is_orthogonal_to_both_operands() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-2.0, 0.5, 4.0);
        let c = a.cross(&b);
        assert!(c.dot(&a).abs() < EPSILON);
        assert!(c.dot(&b).abs() < EPSILON);
    }

    #[test]
    fn test_cross_of_axes() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_sum3_matches_chained_add() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        let c = Vector3::new(-1.0, -2.0, -3.0);
        assert_eq!(Vector3::sum3(a, b, c), a + b + c);
    }

    #[test]
    fn test_dot_and_length() {
        let v = Vector3::new(2.0, 3.0, 6.0);
        assert_eq!(v.dot(&v), 49.0);
        assert!((v.length() - 7.0).abs() < EPSILON);
    }

    #[test]
    fn test_scale_and_neg() {
        let v = Vector3::new(1.0, -2.0, 0.5);
        assert_eq!(v * 2.0, Vector3::new(2.0, -4.0, 1.0));
        assert_eq!(-v, Vector3::new(-1.0, 2.0, -0.5));
    }
}
