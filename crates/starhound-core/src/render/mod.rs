pub mod color;
pub mod frame;
pub mod viewport;

// Re-export key types for convenient access
pub use color::{hsv_to_rgb, Rgba};
pub use frame::{FrameBuffer, QuadInstance, SegmentInstance, SpriteInstance};
pub use viewport::Viewport;
