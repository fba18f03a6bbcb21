pub mod game;
pub mod types;

pub use game::{Game, GameConfig};
pub use types::{GameEvent, SpriteId};
