//! Enemy pursuit AI and the explosion state machine.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use crate::api::SpriteId;
use crate::core::rng::Rng;
use crate::render::color::{hsv_to_rgb, Rgba};
use crate::render::frame::{FrameBuffer, QuadInstance, SpriteInstance};
use crate::render::viewport::Viewport;

pub const ENEMY_WIDTH: f32 = 50.0;
pub const ENEMY_HEIGHT: f32 = 40.0;

/// Base movement speed, scaled per level.
const BASE_SPEED: f32 = 2.0;
/// How much random wandering (lower on later levels).
const WANDER_FACTOR: f32 = 0.8;
/// Base precision in tracking (higher on later levels).
const PRECISION_BASE: f32 = 0.3;
/// How often the wander heading is redrawn (ticks).
const WANDER_INTERVAL: u32 = 30;

const START_HEALTH: i32 = 3;
/// Ticks of brightness flash after taking a hit.
const HIT_FLASH_TICKS: u32 = 5;
const BURST_PARTICLES: usize = 20;

/// Movement tuning for one difficulty level.
#[derive(Debug, Clone, Copy)]
pub struct DifficultyLevel {
    /// Actual movement speed.
    pub speed: f32,
    /// Random movement factor (0-1).
    pub wander: f32,
    /// Tracking precision (0-1).
    pub precision: f32,
}

/// Five presets, each trading wander for precision and raising speed.
/// Level 0 is slow and erratic; level 4 is fast and aggressive.
pub const DIFFICULTY_LEVELS: [DifficultyLevel; 5] = [
    DifficultyLevel { speed: BASE_SPEED * 0.3, wander: WANDER_FACTOR, precision: PRECISION_BASE },
    DifficultyLevel { speed: BASE_SPEED * 0.5, wander: WANDER_FACTOR * 0.7, precision: PRECISION_BASE * 1.5 },
    DifficultyLevel { speed: BASE_SPEED * 0.9, wander: WANDER_FACTOR * 0.5, precision: PRECISION_BASE * 2.0 },
    DifficultyLevel { speed: BASE_SPEED, wander: WANDER_FACTOR * 0.3, precision: PRECISION_BASE * 2.5 },
    DifficultyLevel { speed: BASE_SPEED * 1.3, wander: WANDER_FACTOR * 0.1, precision: PRECISION_BASE * 3.0 },
];

/// A single explosion fragment.
#[derive(Debug, Clone)]
pub struct ExplosionParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub rotation: f32,
    pub hue: f32,
    /// Remaining life (1.0 down to 0.0).
    pub life: f32,
}

impl ExplosionParticle {
    /// Advance one tick: drift, spin, fade, shrink.
    fn tick(&mut self) {
        self.pos += self.vel;
        self.rotation += 0.1;
        self.life -= 0.02;
        self.size *= 0.98;
    }
}

/// One pursuer.
///
/// Moves through three states: alive and mobile, exploding (inert, particles
/// animating), and dead (inert, draws nothing). Dead is terminal. Exactly one
/// state holds at any tick; the two flags are private so nothing outside can
/// break that.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    vel: Vec2,
    level: usize,
    wander_angle: f32,
    update_counter: u32,
    rng: Rng,
    health: i32,
    active: bool,
    hit_timer: u32,
    particles: Vec<ExplosionParticle>,
    exploding: bool,
}

impl Enemy {
    /// Spawn an enemy. `rng` is its private generator; handing each enemy an
    /// independent stream keeps runs reproducible from the master seed.
    pub fn new(pos: Vec2, vel: Vec2, level: usize, mut rng: Rng) -> Self {
        let wander_angle = rng.next_f32() * TAU;
        Self {
            pos,
            vel,
            level,
            wander_angle,
            update_counter: 0,
            rng,
            health: START_HEALTH,
            active: true,
            hit_timer: 0,
            particles: Vec::new(),
            exploding: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.active && !self.exploding
    }

    pub fn is_exploding(&self) -> bool {
        self.active && self.exploding
    }

    pub fn is_dead(&self) -> bool {
        !self.active && !self.exploding
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// One simulation tick. Alive enemies pursue the player; exploding ones
    /// animate their particles; dead ones do nothing.
    pub fn update(&mut self, player_pos: Vec2, world_width: f32, world_height: f32) {
        if self.is_dead() {
            return;
        }

        if self.exploding {
            self.update_explosion();
            return;
        }

        if self.hit_timer > 0 {
            self.hit_timer -= 1;
        }

        let diff = DIFFICULTY_LEVELS[self.level];

        // Redraw the wander heading periodically.
        self.update_counter += 1;
        if self.update_counter >= WANDER_INTERVAL {
            self.wander_angle = self.rng.next_f32() * TAU;
            self.update_counter = 0;
        }

        // Unit vector toward the player; zero when coincident.
        let dir = (player_pos - self.pos).normalize_or_zero();
        let wander = Vec2::from_angle(self.wander_angle);

        // Blend tracking against wandering, renormalized so the level's
        // speed is the actual speed.
        let heading = (dir * diff.precision + wander * diff.wander).normalize_or_zero();

        self.vel = heading * diff.speed;
        self.pos += self.vel;

        // Teleport to the opposite edge on crossing either bound.
        if self.pos.x < 0.0 {
            self.pos.x = world_width;
        } else if self.pos.x > world_width {
            self.pos.x = 0.0;
        }
        if self.pos.y < 0.0 {
            self.pos.y = world_height;
        } else if self.pos.y > world_height {
            self.pos.y = 0.0;
        }
    }

    /// Register a bullet hit. Ignored unless alive. The third hit tips the
    /// enemy into its explosion.
    pub fn hit(&mut self) {
        if !self.is_alive() {
            return;
        }

        self.health -= 1;
        self.hit_timer = HIT_FLASH_TICKS;

        if self.health <= 0 {
            self.exploding = true;
            self.spawn_burst();
            log::debug!(
                "enemy destroyed: level {} at ({:.0}, {:.0})",
                self.level,
                self.pos.x,
                self.pos.y
            );
        }
    }

    /// Point-vs-bounds test for a bullet position. On overlap the hit is
    /// applied and the bullet is consumed. Always false unless alive, so
    /// bullets pass through explosions and corpses.
    pub fn check_bullet_collision(&mut self, point: Vec2) -> bool {
        if !self.is_alive() {
            return false;
        }

        let hit = point.x >= self.pos.x
            && point.x <= self.pos.x + ENEMY_WIDTH
            && point.y >= self.pos.y
            && point.y <= self.pos.y + ENEMY_HEIGHT;
        if hit {
            self.hit();
        }
        hit
    }

    fn spawn_burst(&mut self) {
        let center = self.pos + Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT) / 2.0;
        self.particles.clear();
        for _ in 0..BURST_PARTICLES {
            let angle = self.rng.next_f32() * TAU;
            let speed = self.rng.range_f32(2.0, 5.0);
            self.particles.push(ExplosionParticle {
                pos: center,
                vel: Vec2::from_angle(angle) * speed,
                size: self.rng.range_f32(5.0, 15.0),
                rotation: self.rng.next_f32() * PI,
                hue: self.rng.range_f32(0.0, 60.0),
                life: 1.0,
            });
        }
    }

    fn update_explosion(&mut self) {
        for p in &mut self.particles {
            if p.life > 0.0 {
                p.tick();
            }
        }

        // Checked after the pass so death lands on the same tick the last
        // particle expires.
        if self.particles.iter().all(|p| p.life <= 0.0) {
            self.active = false;
            self.exploding = false;
        }
    }

    pub fn draw(&self, frame: &mut FrameBuffer, viewport: &Viewport, sprite: SpriteId) {
        if self.exploding {
            self.draw_explosion(frame, viewport);
            return;
        }

        if !self.active {
            return;
        }

        let screen = viewport.world_to_screen(self.pos);

        // Flash brighter while the hit timer runs.
        let color = if self.hit_timer > 0 {
            Rgba::new(1.5, 1.5, 1.5, 1.0)
        } else {
            Rgba::WHITE
        };

        frame.push_sprite(SpriteInstance {
            x: screen.x,
            y: screen.y,
            w: ENEMY_WIDTH,
            h: ENEMY_HEIGHT,
            sprite: sprite.0 as f32,
            flip_x: 0.0,
            color,
        });
    }

    fn draw_explosion(&self, frame: &mut FrameBuffer, viewport: &Viewport) {
        for p in &self.particles {
            if p.life <= 0.0 {
                continue;
            }

            let screen = viewport.world_to_screen(p.pos);
            frame.push_quad(QuadInstance {
                x: screen.x,
                y: screen.y,
                size: p.size,
                rotation: p.rotation,
                color: hsv_to_rgb(p.hue, 1.0, p.life).with_alpha(p.life),
            });
        }
    }
}
