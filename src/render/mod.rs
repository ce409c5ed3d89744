//! CPU rendering internals: the frame buffer and the rasterizer.

pub mod framebuffer;
pub mod rasterizer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{barycentric, Rasterizer, Weights};
