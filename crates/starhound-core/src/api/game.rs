use crate::api::types::GameEvent;
use crate::assets::{AssetError, SpriteRegistry};
use crate::input::InputState;
use crate::render::FrameBuffer;

/// Configuration for the simulation, provided by the game.
///
/// Everything the original build kept as package-level globals lives here
/// instead, so tests can run small worlds and hosts can reseed at will.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Visible screen size in pixels.
    pub screen_width: f32,
    pub screen_height: f32,
    /// Scrollable world width in game units.
    pub world_width: f32,
    /// Background stars seeded at init.
    pub star_count: usize,
    /// Enemies seeded at init.
    pub enemy_count: usize,
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Master RNG seed. World and per-enemy generators derive from it, so
    /// equal seeds replay identical runs.
    pub seed: u64,
    /// Initial draw-buffer capacities.
    pub max_sprites: usize,
    pub max_quads: usize,
    pub max_segments: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 1024.0,
            screen_height: 768.0,
            world_width: 10000.0,
            star_count: 500,
            enemy_count: 20,
            fixed_dt: 1.0 / 60.0,
            seed: 1,
            max_sprites: 512,
            max_quads: 1024,
            max_segments: 1024,
        }
    }
}

/// The core contract between the simulation and its host runner.
pub trait Game {
    /// Return the configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Resolve sprite ids and build initial state. Called once after the
    /// manifest is loaded; a missing required sprite is fatal.
    fn init(&mut self, sprites: &SpriteRegistry) -> Result<(), AssetError>;

    /// One fixed-timestep tick. `t` is accumulated game time in seconds;
    /// `events` collects anything the host should see this tick.
    fn update(&mut self, input: &InputState, t: f32, events: &mut Vec<GameEvent>);

    /// Read-only draw pass: emit this tick's instances into the frame.
    fn draw(&self, frame: &mut FrameBuffer);
}
