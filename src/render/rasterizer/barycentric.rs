//! Barycentric coordinate computation for triangle coverage testing.
//!
//! This module computes the barycentric weights of a 2D point with respect
//! to a triangle. The weights drive both the inside/outside test during
//! rasterization and the interpolation of per-vertex attributes (depth,
//! normals).
//!
//! # Algorithm Overview
//!
//! For triangle vertices `a`, `b`, `c` and a sample point `p`, build two
//! auxiliary vectors from the x and y components of the edge and point
//! differences, then take their cross product:
//!
//! ```text
//! s_x = (c.x - a.x,  b.x - a.x,  a.x - p.x)
//! s_y = (c.y - a.y,  b.y - a.y,  a.y - p.y)
//! u   = s_x × s_y
//! ```
//!
//! `u.z` is proportional to twice the signed area of the triangle. When it
//! is non-zero the barycentric weights are:
//!
//! ```text
//! (1 - (u.x + u.y) / u.z,  u.y / u.z,  u.x / u.z)
//! ```
//!
//! ordered to match vertices `a`, `b`, `c`. The weights always sum to 1;
//! a point is inside the triangle exactly when all three are non-negative.
//!
//! # Degenerate Triangles
//!
//! Collinear or coincident vertices enclose no area, so `|u.z|` falls
//! below the near-zero threshold and no weights exist. The computation
//! reports this as `None` rather than handing out meaningless values.
//!
//! # References
//!
//! - Scratchapixel: <https://www.scratchapixel.com/lessons/3d-basic-rendering/rasterization-practical-implementation>
//! - ssloy, tinyrenderer wiki, Lesson 2: Triangle rasterization

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::math::EPSILON;

/// Barycentric weights of a sample point, one per triangle vertex.
///
/// Produced by [`barycentric()`]; the three weights sum to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl Weights {
    /// True when the sampled point lies inside the triangle, meaning all
    /// three weights are non-negative. Points exactly on an edge count as
    /// inside.
    #[inline]
    pub fn is_inside(&self) -> bool {
        self.a >= 0.0 && self.b >= 0.0 && self.c >= 0.0
    }

    /// Blend a per-vertex scalar attribute at the sampled point.
    #[inline]
    pub fn interpolate(&self, values: [f32; 3]) -> f32 {
        values[0] * self.a + values[1] * self.b + values[2] * self.c
    }

    /// Blend a per-vertex vector attribute at the sampled point.
    #[inline]
    pub fn interpolate_vec3(&self, values: [Vec3; 3]) -> Vec3 {
        values[0] * self.a + values[1] * self.b + values[2] * self.c
    }
}

/// Computes the barycentric weights of point `p` in triangle `(a, b, c)`.
///
/// Returns `None` for degenerate triangles (collinear or coincident
/// vertices), whose enclosed area is below the near-zero threshold.
#[inline]
pub fn barycentric(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> Option<Weights> {
    let s_x = Vec3::new(c.x - a.x, b.x - a.x, a.x - p.x);
    let s_y = Vec3::new(c.y - a.y, b.y - a.y, a.y - p.y);
    let u = s_x.cross(s_y);

    if u.z.abs() < EPSILON {
        return None;
    }

    Some(Weights {
        a: 1.0 - (u.x + u.y) / u.z,
        b: u.y / u.z,
        c: u.x / u.z,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle() -> (Vec2, Vec2, Vec2) {
        (
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(0.0, 4.0),
        )
    }

    #[test]
    fn vertex_gets_full_weight() {
        let (a, b, c) = triangle();
        let weights = barycentric(a, b, c, a).unwrap();
        assert_relative_eq!(weights.a, 1.0, epsilon = 1e-4);
        assert_relative_eq!(weights.b, 0.0, epsilon = 1e-4);
        assert_relative_eq!(weights.c, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn interior_point_weights_are_positive_and_sum_to_one() {
        let (a, b, c) = triangle();
        let weights = barycentric(a, b, c, Vec2::new(1.0, 1.0)).unwrap();
        assert!(weights.is_inside());
        assert_relative_eq!(weights.a, 0.5, epsilon = 1e-4);
        assert_relative_eq!(weights.b, 0.25, epsilon = 1e-4);
        assert_relative_eq!(weights.c, 0.25, epsilon = 1e-4);
        assert_relative_eq!(weights.a + weights.b + weights.c, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn exterior_point_has_a_negative_weight() {
        let (a, b, c) = triangle();
        let weights = barycentric(a, b, c, Vec2::new(5.0, 5.0)).unwrap();
        assert!(!weights.is_inside());
        // Even outside the triangle the weights still sum to one
        assert_relative_eq!(weights.a + weights.b + weights.c, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn collinear_triangle_has_no_weights() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(1.0, 1.0);
        let c = Vec2::new(2.0, 2.0);
        assert!(barycentric(a, b, c, Vec2::new(1.0, 0.0)).is_none());
    }

    #[test]
    fn coincident_triangle_has_no_weights() {
        let p = Vec2::new(3.0, 3.0);
        assert!(barycentric(p, p, p, p).is_none());
    }

    #[test]
    fn interpolates_scalar_attributes() {
        let (a, b, c) = triangle();
        // Midpoint of edge bc
        let weights = barycentric(a, b, c, Vec2::new(2.0, 2.0)).unwrap();
        assert_relative_eq!(weights.interpolate([0.0, 1.0, 3.0]), 2.0, epsilon = 1e-4);
    }

    #[test]
    fn interpolates_vector_attributes() {
        let (a, b, c) = triangle();
        let weights = barycentric(a, b, c, Vec2::new(1.0, 1.0)).unwrap();
        let blended = weights.interpolate_vec3([Vec3::RIGHT, Vec3::UP, Vec3::FORWARD]);
        assert_relative_eq!(blended.x, 0.5, epsilon = 1e-4);
        assert_relative_eq!(blended.y, 0.25, epsilon = 1e-4);
        assert_relative_eq!(blended.z, 0.25, epsilon = 1e-4);
    }
}
