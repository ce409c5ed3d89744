pub mod vec2;
pub mod vec3;

/// Near-zero threshold shared by normalization and degeneracy checks.
pub const EPSILON: f32 = 1e-6;
