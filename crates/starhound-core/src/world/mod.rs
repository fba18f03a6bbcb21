//! World orchestration: the star field, the enemy collection, and bullet
//! hit routing.

pub mod enemy;
pub mod player;

pub use enemy::{DifficultyLevel, Enemy, ExplosionParticle, DIFFICULTY_LEVELS};
pub use player::{Bullet, Player};

use glam::Vec2;

use crate::api::{GameConfig, SpriteId};
use crate::core::rng::Rng;
use crate::render::color::Rgba;
use crate::render::frame::{FrameBuffer, QuadInstance};
use crate::render::viewport::Viewport;

// Derived-stream numbers for the master seed. Enemies take 2 + index.
pub(crate) const RNG_STREAM_WORLD: u64 = 0;
pub(crate) const RNG_STREAM_PLAYER: u64 = 1;
const RNG_STREAM_ENEMIES: u64 = 2;

/// One background star. Position is fixed after generation; the color
/// oscillates around the original each tick.
#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgba,
    original_color: Rgba,
    /// How much this star scrolls relative to the camera (0.2-1.0).
    /// Larger stars appear closer and move faster.
    pub parallax: f32,
}

/// What a bullet position test found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletHit {
    Miss,
    /// An enemy took the hit and survived.
    Hit,
    /// The hit destroyed the enemy; carries its difficulty level.
    Destroyed { level: usize },
}

/// The scrollable world: stars and enemies. The player lives outside, at the
/// game level, and is handed in by position where needed.
pub struct World {
    width: f32,
    height: f32,
    stars: Vec<Star>,
    enemies: Vec<Enemy>,
}

impl World {
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = Rng::derive(config.seed, RNG_STREAM_WORLD);

        let stars = generate_stars(&mut rng, config);

        let mut enemies = Vec::with_capacity(config.enemy_count);
        for i in 0..config.enemy_count {
            let pos = Vec2::new(
                rng.range_f32(0.0, config.world_width),
                rng.range_f32(0.0, config.screen_height),
            );
            let vel = Vec2::new(rng.range_f32(-1.0, 1.0), rng.range_f32(-1.0, 1.0));
            let level = rng.next_int(DIFFICULTY_LEVELS.len() as u32) as usize;
            enemies.push(Enemy::new(
                pos,
                vel,
                level,
                Rng::derive(config.seed, RNG_STREAM_ENEMIES + i as u64),
            ));
        }

        log::info!(
            "world seeded: {} stars, {} enemies, width {}",
            stars.len(),
            enemies.len(),
            config.world_width
        );

        Self {
            width: config.world_width,
            height: config.screen_height,
            stars,
            enemies,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    #[cfg(test)]
    pub(crate) fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    /// One tick: oscillate star colors, then run every enemy.
    /// `t` is accumulated game time in seconds.
    pub fn update(&mut self, player_pos: Vec2, t: f32) {
        for (i, star) in self.stars.iter_mut().enumerate() {
            let oscillation = (i as f32 * 0.02 + t * 0.5).sin();
            let brightness = oscillation.abs();
            let scale = 0.8 + brightness * 0.4;

            // Always derived from the original color so repeated ticks
            // cannot fade the star; channels saturate at full.
            star.color.r = (star.original_color.r * scale).min(1.0);
            star.color.g = (star.original_color.g * scale).min(1.0);
            star.color.b = (star.original_color.b * scale).min(1.0);
        }

        for enemy in &mut self.enemies {
            enemy.update(player_pos, self.width, self.height);
        }
    }

    /// Route a bullet position through the enemies, stopping at the first
    /// one that takes the hit.
    pub fn check_bullet_hits(&mut self, point: Vec2) -> BulletHit {
        for enemy in &mut self.enemies {
            if enemy.check_bullet_collision(point) {
                // A true return means the enemy was alive; if it is now
                // exploding, this hit was the killing one.
                if enemy.is_exploding() {
                    return BulletHit::Destroyed {
                        level: enemy.level(),
                    };
                }
                return BulletHit::Hit;
            }
        }
        BulletHit::Miss
    }

    pub fn draw(&self, frame: &mut FrameBuffer, viewport: &Viewport, enemy_sprite: SpriteId) {
        for star in &self.stars {
            // Parallax scales only the horizontal scroll.
            let mut sx = star.pos.x - viewport.x * star.parallax;
            let sy = star.pos.y - viewport.y;

            // Wrap horizontally by a whole world width.
            if sx < -star.radius {
                sx += self.width;
            } else if sx > viewport.width + star.radius {
                sx -= self.width;
            }

            if !viewport.on_screen(Vec2::new(sx, sy), star.radius) {
                continue;
            }

            frame.push_quad(QuadInstance {
                x: sx + star.radius / 2.0,
                y: sy + star.radius / 2.0,
                size: star.radius,
                rotation: 0.0,
                color: star.color,
            });
        }

        for enemy in &self.enemies {
            enemy.draw(frame, viewport, enemy_sprite);
        }
    }
}

fn generate_stars(rng: &mut Rng, config: &GameConfig) -> Vec<Star> {
    let mut stars = Vec::with_capacity(config.star_count);
    for _ in 0..config.star_count {
        let radius = rng.range_f32(1.0, 5.0);
        let color = Rgba::new(rng.next_f32(), rng.next_f32(), rng.next_f32(), 1.0);
        let pos = Vec2::new(
            rng.range_f32(0.0, config.world_width),
            rng.range_f32(0.0, config.screen_height),
        );
        stars.push(Star {
            pos,
            radius,
            color,
            original_color: color,
            parallax: 0.2 + (radius / 5.0) * 0.8,
        });
    }
    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GameConfig {
        GameConfig {
            world_width: 2000.0,
            star_count: 40,
            enemy_count: 5,
            seed: 11,
            ..GameConfig::default()
        }
    }

    #[test]
    fn generation_respects_bounds() {
        let world = World::new(&small_config());

        assert_eq!(world.stars().len(), 40);
        for star in world.stars() {
            assert!(star.pos.x >= 0.0 && star.pos.x < 2000.0);
            assert!(star.pos.y >= 0.0 && star.pos.y < 768.0);
            assert!(star.radius >= 1.0 && star.radius < 5.0);
            assert!(star.parallax > 0.2 && star.parallax < 1.0);
        }

        assert_eq!(world.enemies().len(), 5);
        for enemy in world.enemies() {
            assert!(enemy.pos.x >= 0.0 && enemy.pos.x < 2000.0);
            assert!(enemy.pos.y >= 0.0 && enemy.pos.y < 768.0);
            assert!(enemy.level() < DIFFICULTY_LEVELS.len());
            assert!(enemy.is_alive());
        }
    }

    #[test]
    fn same_seed_reproduces_the_world() {
        let a = World::new(&small_config());
        let b = World::new(&small_config());
        for (sa, sb) in a.stars().iter().zip(b.stars()) {
            assert_eq!(sa.pos, sb.pos);
            assert_eq!(sa.radius, sb.radius);
        }
        for (ea, eb) in a.enemies().iter().zip(b.enemies()) {
            assert_eq!(ea.pos, eb.pos);
            assert_eq!(ea.level(), eb.level());
        }

        let other = World::new(&GameConfig {
            seed: 12,
            ..small_config()
        });
        assert_ne!(a.stars()[0].pos, other.stars()[0].pos);
    }

    #[test]
    fn star_colors_oscillate_from_the_original() {
        let mut world = World::new(&small_config());
        let original = world.stars()[0].original_color;
        let player = Vec2::new(1000.0, 400.0);

        // Ticks at arbitrary times never compound.
        world.update(player, 3.7);
        world.update(player, 9.1);

        // Star 0 at t=0 has zero oscillation, so the scale is exactly 0.8.
        world.update(player, 0.0);
        let star = &world.stars()[0];
        assert_eq!(star.color.r, original.r * 0.8);
        assert_eq!(star.color.g, original.g * 0.8);
        assert_eq!(star.color.b, original.b * 0.8);

        // Channels always stay inside range.
        for _ in 0..50 {
            world.update(player, 12.3);
            for star in world.stars() {
                assert!(star.color.r <= 1.0 && star.color.g <= 1.0 && star.color.b <= 1.0);
            }
        }
    }

    #[test]
    fn bullet_routing_hits_kills_and_misses() {
        let mut world = World::new(&GameConfig {
            enemy_count: 1,
            ..small_config()
        });
        let target = world.enemies()[0].pos + Vec2::new(1.0, 1.0);
        let level = world.enemies()[0].level();

        assert_eq!(world.check_bullet_hits(target), BulletHit::Hit);
        assert_eq!(world.check_bullet_hits(target), BulletHit::Hit);
        assert_eq!(
            world.check_bullet_hits(target),
            BulletHit::Destroyed { level }
        );

        // Bullets pass through the explosion.
        assert_eq!(world.check_bullet_hits(target), BulletHit::Miss);

        // And through empty space.
        assert_eq!(
            world.check_bullet_hits(Vec2::new(-500.0, -500.0)),
            BulletHit::Miss
        );
    }

    #[test]
    fn draw_emits_only_visible_stars() {
        let config = small_config();
        let world = World::new(&config);
        let viewport = Viewport::new(1024.0, 768.0, config.world_width, config.screen_height);
        let mut frame = FrameBuffer::default();

        world.draw(&mut frame, &viewport, SpriteId(1));

        // Stars plus five alive enemy sprites, never more quads than stars.
        assert!(frame.quad_count() > 0);
        assert!(frame.quad_count() <= 40);
        assert_eq!(frame.sprite_count(), 5);
    }
}
