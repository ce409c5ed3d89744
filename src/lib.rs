//! A CPU-based software triangle rasterizer.
//!
//! This crate renders a triangle mesh into an RGB image entirely on the
//! CPU: orthographic projection, barycentric coverage testing, z-buffered
//! visibility, and diffuse shading from interpolated vertex normals.
//!
//! # Quick Start
//!
//! ```ignore
//! use rastly::prelude::*;
//!
//! let mut mesh = Mesh::from_obj("model.obj")?;
//! mesh.center_and_scale();
//!
//! let viewport = Viewport::new(512, 512);
//! let mut buffer = FrameBuffer::new(512, 512);
//! Rasterizer::default().render(&mesh, &viewport, &mut buffer);
//! buffer.into_image().save("render.png")?;
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod light;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;

// Re-export commonly needed types at crate root for convenience
pub use light::DirectionalLight;
pub use mesh::{Face, LoadError, Mesh};
pub use projection::Viewport;
pub use render::{FrameBuffer, Rasterizer};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use rastly::prelude::*;
/// ```
pub mod prelude {
    // Mesh
    pub use crate::mesh::{Face, LoadError, Mesh};

    // Lighting
    pub use crate::light::DirectionalLight;

    // Projection
    pub use crate::projection::Viewport;

    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Rendering
    pub use crate::render::{FrameBuffer, Rasterizer, Weights};
}
