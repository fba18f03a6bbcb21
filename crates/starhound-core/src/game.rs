//! The playable game: world, player and viewport wired together behind the
//! [`Game`] contract.

use glam::Vec2;

use crate::api::{Game, GameConfig, GameEvent, SpriteId};
use crate::assets::{AssetError, SpriteRegistry};
use crate::core::rng::Rng;
use crate::input::InputState;
use crate::render::{FrameBuffer, Viewport};
use crate::world::{BulletHit, Player, World, RNG_STREAM_PLAYER};

/// Points for a kill, multiplied by the enemy's level + 1.
const KILL_SCORE_BASE: u32 = 100;

// Game event kinds (Rust → host)
pub const EVENT_ENEMY_DESTROYED: f32 = 1.0;

/// A scrolling shooter: steer the ship with arrows/WASD, fire with space,
/// hunt down the wandering enemies.
pub struct Starhound {
    config: GameConfig,
    world: World,
    player: Player,
    viewport: Viewport,
    ship_sprite: SpriteId,
    enemy_sprite: SpriteId,
    score: u32,
}

impl Starhound {
    pub fn new(config: GameConfig) -> Self {
        let viewport = Viewport::new(
            config.screen_width,
            config.screen_height,
            config.world_width,
            config.screen_height,
        );
        let player = Player::new(
            Vec2::new(config.world_width / 2.0, config.screen_height / 2.0),
            Rng::derive(config.seed, RNG_STREAM_PLAYER),
        );
        let world = World::new(&config);

        Self {
            world,
            player,
            viewport,
            ship_sprite: SpriteId(0),
            enemy_sprite: SpriteId(0),
            score: 0,
            config,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}

impl Game for Starhound {
    fn config(&self) -> GameConfig {
        self.config.clone()
    }

    fn init(&mut self, sprites: &SpriteRegistry) -> Result<(), AssetError> {
        self.ship_sprite = sprites.require("ship")?;
        self.enemy_sprite = sprites.require("enemy")?;
        log::info!(
            "starhound initialized: ship sprite {}, enemy sprite {}",
            self.ship_sprite.0,
            self.enemy_sprite.0
        );
        Ok(())
    }

    fn update(&mut self, input: &InputState, t: f32, events: &mut Vec<GameEvent>) {
        self.world.update(self.player.pos, t);
        self.player.update(input, &mut self.viewport);

        // Route live bullets through the enemies; any hit consumes the
        // bullet, a kill scores.
        for bullet in self.player.bullets_mut() {
            match self.world.check_bullet_hits(bullet.pos) {
                BulletHit::Miss => {}
                BulletHit::Hit => bullet.deactivate(),
                BulletHit::Destroyed { level } => {
                    bullet.deactivate();
                    let points = KILL_SCORE_BASE * (level as u32 + 1);
                    self.score += points;
                    events.push(GameEvent {
                        kind: EVENT_ENEMY_DESTROYED,
                        a: level as f32,
                        b: points as f32,
                        c: self.score as f32,
                    });
                }
            }
        }
    }

    fn draw(&self, frame: &mut FrameBuffer) {
        self.world.draw(frame, &self.viewport, self.enemy_sprite);
        self.player.draw(frame, &self.viewport, self.ship_sprite);
    }
}
