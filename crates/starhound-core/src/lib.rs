pub mod api;
pub mod assets;
pub mod core;
pub mod game;
pub mod input;
pub mod render;
pub mod world;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig};
pub use api::types::{GameEvent, SpriteId};
pub use assets::manifest::{SpriteEntry, SpriteManifest};
pub use assets::registry::SpriteRegistry;
pub use assets::AssetError;
pub use crate::core::clock::FrameClock;
pub use crate::core::rng::Rng;
pub use game::Starhound;
pub use input::state::{InputEvent, InputState, Key};
pub use render::color::{hsv_to_rgb, Rgba};
pub use render::frame::{FrameBuffer, QuadInstance, SegmentInstance, SpriteInstance};
pub use render::viewport::Viewport;
pub use world::enemy::{DifficultyLevel, Enemy, ExplosionParticle, DIFFICULTY_LEVELS};
pub use world::player::{Bullet, Player};
pub use world::{BulletHit, Star, World};
