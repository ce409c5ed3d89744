//! Orthographic viewport mapping.
//!
//! The [`Viewport`] struct is the single source of truth for the raster
//! dimensions. It maps normalized device coordinates onto the pixel grid
//! as a parallel projection: x and y spread across the grid while z is
//! left alone for depth testing.

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Orthographic mapping from normalized device coordinates to screen space.
///
/// Screen space has its origin at the top-left pixel with y growing
/// downward. NDC +y maps to larger row indices, so output is vertically
/// mirrored relative to a y-up convention.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Creates a viewport covering a `width` x `height` pixel grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the viewport width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the viewport height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Projects an NDC position onto the pixel grid.
    ///
    /// `[-1, 1]` maps to `[0, extent]` on each axis. Positions outside
    /// that range land outside the grid; the rasterizer clamps its
    /// bounding boxes rather than rejecting them here.
    #[inline]
    pub fn project(&self, v: Vec3) -> Vec2 {
        Vec2::new(
            (v.x + 1.0) * 0.5 * self.width as f32,
            (v.y + 1.0) * 0.5 * self.height as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn corners_map_to_grid_extents() {
        let viewport = Viewport::new(512, 512);
        let low = viewport.project(Vec3::new(-1.0, -1.0, 0.3));
        let high = viewport.project(Vec3::new(1.0, 1.0, -0.7));
        assert_relative_eq!(low.x, 0.0);
        assert_relative_eq!(low.y, 0.0);
        assert_relative_eq!(high.x, 512.0);
        assert_relative_eq!(high.y, 512.0);
    }

    #[test]
    fn origin_maps_to_center() {
        let viewport = Viewport::new(512, 512);
        let center = viewport.project(Vec3::ZERO);
        assert_relative_eq!(center.x, 256.0);
        assert_relative_eq!(center.y, 256.0);
    }

    #[test]
    fn axes_scale_independently() {
        // Non-square grids keep each axis proportional to its own extent
        let viewport = Viewport::new(640, 480);
        let center = viewport.project(Vec3::ZERO);
        assert_relative_eq!(center.x, 320.0);
        assert_relative_eq!(center.y, 240.0);
    }
}
