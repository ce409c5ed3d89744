use std::ops::{Add, Div, Mul, Sub};

use super::EPSILON;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ONE: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };
    pub const RIGHT: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    pub const UP: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    pub const FORWARD: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn magnitude(&self) -> f32 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    /// Returns this vector scaled to unit length.
    ///
    /// Vectors with magnitude below the near-zero threshold normalize to
    /// [`Vec3::ZERO`] instead of dividing by (almost) zero.
    pub fn normalize(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude < EPSILON {
            return Self::ZERO;
        }
        *self / magnitude
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of two vectors.
    /// The resulting vector is perpendicular to both input vectors.
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

/// Component-wise addition of two vectors.
impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// Component-wise subtraction of two vectors.
impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

/// Scalar multiplication of a vector.
impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

/// Scalar division of a vector.
impl Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normalize_scales_to_unit_length() {
        let v = Vec3::new(3.0, 4.0, 0.0).normalize();
        assert_relative_eq!(v.x, 0.6, epsilon = 1e-6);
        assert_relative_eq!(v.y, 0.8, epsilon = 1e-6);
        assert_relative_eq!(v.z, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn normalize_of_near_zero_vector_is_zero() {
        let v = Vec3::new(1e-8, -1e-8, 0.0).normalize();
        assert_eq!(v, Vec3::ZERO);
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    }

    #[test]
    fn magnitude_of_unit_diagonal() {
        assert_relative_eq!(Vec3::ONE.magnitude(), 3.0_f32.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn cross_of_basis_vectors() {
        assert_eq!(Vec3::RIGHT.cross(Vec3::UP), Vec3::FORWARD);
        assert_eq!(Vec3::UP.cross(Vec3::RIGHT), Vec3::FORWARD * -1.0);
    }

    #[test]
    fn dot_of_orthogonal_vectors_is_zero() {
        assert_relative_eq!(Vec3::RIGHT.dot(Vec3::UP), 0.0);
    }
}
