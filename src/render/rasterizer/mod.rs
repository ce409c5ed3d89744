//! Triangle rasterization.
//!
//! The [`Rasterizer`] walks the faces of a mesh in submission order and
//! fills each one into the frame buffer: gather, project, cover,
//! depth-test, shade. Coverage and attribute interpolation are driven by
//! the [`barycentric()`] weights.

pub mod barycentric;

pub use barycentric::{barycentric, Weights};

use super::framebuffer::FrameBuffer;
use crate::colors;
use crate::light::DirectionalLight;
use crate::math::vec2::Vec2;
use crate::mesh::{Face, Mesh};
use crate::projection::Viewport;

/// Fixed-function triangle rasterizer.
///
/// Iterates over all pixels in each triangle's clamped bounding box and
/// uses barycentric weights to decide coverage. Pixels that survive the
/// depth test receive a diffuse-shaded color computed from the
/// interpolated vertex normals and the rasterizer's light.
///
/// Faces are processed strictly in order; overlapping geometry is
/// resolved per pixel by the frame buffer's depth test.
pub struct Rasterizer {
    light: DirectionalLight,
}

impl Rasterizer {
    /// Creates a rasterizer shading with the given light.
    pub fn new(light: DirectionalLight) -> Self {
        Self { light }
    }

    pub fn light(&self) -> DirectionalLight {
        self.light
    }

    /// Rasterize every face of the mesh into the frame buffer.
    ///
    /// A mesh with no faces logs a diagnostic and leaves the buffer
    /// untouched.
    pub fn render(&self, mesh: &Mesh, viewport: &Viewport, buffer: &mut FrameBuffer) {
        if mesh.is_empty() {
            log::warn!("Model is empty!");
            return;
        }

        for face in &mesh.faces {
            self.draw_face(mesh, face, viewport, buffer);
        }
    }

    fn draw_face(&self, mesh: &Mesh, face: &Face, viewport: &Viewport, buffer: &mut FrameBuffer) {
        // ─────────────────────────────────────────────────────────────────────
        // Step 1: Gather vertex positions and normals
        // ─────────────────────────────────────────────────────────────────────
        let vertices = [
            mesh.vertices[face.vertices[0]],
            mesh.vertices[face.vertices[1]],
            mesh.vertices[face.vertices[2]],
        ];
        let normals = [
            mesh.normal(face.normals[0]),
            mesh.normal(face.normals[1]),
            mesh.normal(face.normals[2]),
        ];

        // ─────────────────────────────────────────────────────────────────────
        // Step 2: Project to screen space (z stays in NDC for depth testing)
        // ─────────────────────────────────────────────────────────────────────
        let screen = [
            viewport.project(vertices[0]),
            viewport.project(vertices[1]),
            viewport.project(vertices[2]),
        ];

        // ─────────────────────────────────────────────────────────────────────
        // Step 3: Compute the bounding box, clamped to the frame buffer
        // ─────────────────────────────────────────────────────────────────────
        let min_x = screen[0].x.min(screen[1].x).min(screen[2].x).floor() as i32;
        let max_x = screen[0].x.max(screen[1].x).max(screen[2].x).ceil() as i32;
        let min_y = screen[0].y.min(screen[1].y).min(screen[2].y).floor() as i32;
        let max_y = screen[0].y.max(screen[1].y).max(screen[2].y).ceil() as i32;

        let min_x = min_x.max(0);
        let max_x = max_x.min(buffer.width() as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(buffer.height() as i32 - 1);

        // ─────────────────────────────────────────────────────────────────────
        // Step 4: Sample pixel centers; depth-test and shade covered pixels
        // ─────────────────────────────────────────────────────────────────────
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let weights = match barycentric(screen[0], screen[1], screen[2], p) {
                    Some(weights) => weights,
                    // Degenerate triangle: no pixel can be covered
                    None => return,
                };
                if !weights.is_inside() {
                    continue;
                }

                let depth =
                    weights.interpolate([vertices[0].z, vertices[1].z, vertices[2].z]);
                let normal = weights.interpolate_vec3(normals).normalize();
                let intensity = self.light.intensity(normal);
                buffer.set_pixel_with_depth(x, y, depth, colors::shade(intensity));
            }
        }
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new(DirectionalLight::default())
    }
}
