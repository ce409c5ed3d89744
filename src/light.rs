//! Lighting types for the renderer.

use crate::math::vec3::Vec3;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// Directional lights are ideal for simulating distant light sources like the sun,
/// where all rays are effectively parallel.
#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    /// Normalized direction pointing from the surface toward the light.
    pub direction: Vec3,
}

impl DirectionalLight {
    /// Create a new directional light shining from the given direction.
    /// The direction will be normalized automatically.
    pub fn new(direction: Vec3) -> Self {
        DirectionalLight {
            direction: direction.normalize(),
        }
    }

    /// Calculate the diffuse intensity for a unit-length surface normal.
    ///
    /// Returns the cosine of the angle between the normal and the light
    /// direction, clamped to the [0.0, 1.0] range. Surfaces facing away
    /// from the light receive zero.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        normal.dot(self.direction).clamp(0.0, 1.0)
    }
}

impl Default for DirectionalLight {
    /// Light shining from the upper right, in front of the scene.
    fn default() -> Self {
        Self::new(Vec3::ONE)
    }
}
