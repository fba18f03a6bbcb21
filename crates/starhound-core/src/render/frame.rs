use bytemuck::{Pod, Zeroable};

use crate::render::color::Rgba;

/// Per-sprite render data written to SharedArrayBuffer for the TypeScript
/// renderer. Must match the TypeScript protocol: 10 floats = 40 bytes stride.
///
/// Positions are screen-space top-left corners; the viewport transform has
/// already been applied by the time an instance is pushed.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SpriteInstance {
    /// X position in screen space (top-left).
    pub x: f32,
    /// Y position in screen space (top-left).
    pub y: f32,
    /// Rendered width in pixels.
    pub w: f32,
    /// Rendered height in pixels.
    pub h: f32,
    /// Sprite index into the registry (atlas column).
    pub sprite: f32,
    /// 1.0 = mirror horizontally, 0.0 = as-is.
    pub flip_x: f32,
    /// Multiplied tint.
    pub color: Rgba,
}

impl SpriteInstance {
    pub const FLOATS: usize = 10;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Untextured rotated square, used for explosion particles and stars.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct QuadInstance {
    /// Center X in screen space.
    pub x: f32,
    /// Center Y in screen space.
    pub y: f32,
    /// Side length in pixels.
    pub size: f32,
    /// Rotation in radians.
    pub rotation: f32,
    pub color: Rgba,
}

impl QuadInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Line segment, used for bullet trails. 9 floats = 36 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SegmentInstance {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    /// Stroke width in pixels.
    pub width: f32,
    pub color: Rgba,
}

impl SegmentInstance {
    pub const FLOATS: usize = 9;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// All draw output for one frame: sprites, quads and segments in submission
/// order. The host reads each list through its `ptr`/`count` pair after
/// `tick` returns, so the Vecs must not reallocate between those two points.
pub struct FrameBuffer {
    pub sprites: Vec<SpriteInstance>,
    pub quads: Vec<QuadInstance>,
    pub segments: Vec<SegmentInstance>,
}

impl FrameBuffer {
    pub fn with_capacity(sprites: usize, quads: usize, segments: usize) -> Self {
        Self {
            sprites: Vec::with_capacity(sprites),
            quads: Vec::with_capacity(quads),
            segments: Vec::with_capacity(segments),
        }
    }

    pub fn clear(&mut self) {
        self.sprites.clear();
        self.quads.clear();
        self.segments.clear();
    }

    pub fn push_sprite(&mut self, instance: SpriteInstance) {
        self.sprites.push(instance);
    }

    pub fn push_quad(&mut self, instance: QuadInstance) {
        self.quads.push(instance);
    }

    pub fn push_segment(&mut self, instance: SegmentInstance) {
        self.segments.push(instance);
    }

    pub fn sprite_count(&self) -> u32 {
        self.sprites.len() as u32
    }

    pub fn quad_count(&self) -> u32 {
        self.quads.len() as u32
    }

    pub fn segment_count(&self) -> u32 {
        self.segments.len() as u32
    }

    /// Raw pointer to sprite data for SharedArrayBuffer reads.
    pub fn sprites_ptr(&self) -> *const f32 {
        self.sprites.as_ptr() as *const f32
    }

    pub fn quads_ptr(&self) -> *const f32 {
        self.quads.as_ptr() as *const f32
    }

    pub fn segments_ptr(&self) -> *const f32 {
        self.segments.as_ptr() as *const f32
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::with_capacity(256, 256, 64)
    }
}
