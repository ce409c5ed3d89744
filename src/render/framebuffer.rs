//! Frame buffer abstraction for 2D pixel access.
//!
//! Owns the color and depth buffers for one frame and provides
//! bounds-checked access. The depth buffer enables hidden surface removal
//! via the z-buffer algorithm.

use image::RgbImage;

use crate::colors::{self, Rgb};

/// An owned color + depth buffer pair.
///
/// The color buffer holds tightly packed RGB bytes, row-major with the
/// origin at the top-left pixel. The depth buffer holds one z value per
/// pixel.
///
/// # Depth Buffer
///
/// Depths are z coordinates with the camera looking down -z, so larger
/// values are closer to the camera. Every depth starts at negative
/// infinity (infinitely far) and only strictly greater values overwrite
/// a pixel; a pixel at exactly the stored depth is kept, not replaced.
pub struct FrameBuffer {
    color_buffer: Vec<u8>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Create a frame buffer cleared to the background color, with all
    /// depths at negative infinity.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: colors::BACKGROUND.repeat(size),
            depth_buffer: vec![f32::NEG_INFINITY; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reset every pixel to the background color and every depth to
    /// negative infinity, ready for a new frame.
    pub fn clear(&mut self) {
        for pixel in self.color_buffer.chunks_exact_mut(3) {
            pixel.copy_from_slice(&colors::BACKGROUND);
        }
        self.depth_buffer.fill(f32::NEG_INFINITY);
    }

    /// Set a pixel at (x, y) with depth testing.
    ///
    /// The pixel is only written if the depth value is strictly greater
    /// than the existing depth at that location (closer to the camera).
    /// Equal depths keep the pixel already stored. Silently ignores
    /// out-of-bounds coordinates.
    ///
    /// # Arguments
    /// * `x`, `y` - Pixel coordinates
    /// * `depth` - The z value for this pixel (larger = closer)
    /// * `color` - The color to write if the depth test passes
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f32, color: Rgb) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let idx = (y as u32 * self.width + x as u32) as usize;
            // Depth test: larger z means closer to the camera
            if depth > self.depth_buffer[idx] {
                self.depth_buffer[idx] = depth;
                self.color_buffer[3 * idx..3 * idx + 3].copy_from_slice(&color);
            }
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn pixel_at(&self, x: i32, y: i32) -> Option<Rgb> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let idx = 3 * (y as u32 * self.width + x as u32) as usize;
            Some([
                self.color_buffer[idx],
                self.color_buffer[idx + 1],
                self.color_buffer[idx + 2],
            ])
        } else {
            None
        }
    }

    /// Get the depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn depth_at(&self, x: i32, y: i32) -> Option<f32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.depth_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// The raw RGB bytes, row-major from the top-left pixel.
    pub fn as_raw(&self) -> &[u8] {
        &self.color_buffer
    }

    /// Consume the buffer and hand the color data over for encoding.
    pub fn into_image(self) -> RgbImage {
        RgbImage::from_raw(self.width, self.height, self.color_buffer)
            .expect("color buffer length matches dimensions")
    }
}
