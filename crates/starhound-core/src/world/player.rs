//! Player ship physics, the bullet pool and bullet trails.

use std::collections::VecDeque;

use glam::Vec2;

use crate::api::SpriteId;
use crate::core::rng::Rng;
use crate::input::{InputState, Key};
use crate::render::color::{hsv_to_rgb, Rgba};
use crate::render::frame::{FrameBuffer, SegmentInstance, SpriteInstance};
use crate::render::viewport::Viewport;

pub const SHIP_WIDTH: f32 = 50.0;
pub const SHIP_HEIGHT: f32 = 30.0;

const THRUST_FORCE: f32 = 1.0;
const DRAG_FACTOR: f32 = 0.95;
const MAX_SPEED: f32 = 12.0;
/// Velocity components below this snap to zero.
const SPEED_EPSILON: f32 = 0.1;

const MAX_BULLETS: usize = 20;
const BULLET_SPEED: f32 = 15.0;
/// Kill margin past the right screen edge for right-traveling bullets.
/// Doubles as the trail prune distance for that direction.
const MARGIN_RIGHT: f32 = 200.0;
/// Kill margin past the left screen edge for left-traveling bullets.
const MARGIN_LEFT: f32 = 600.0;

const TRAIL_MAX_POINTS: usize = 50;
/// A trail point is recorded only after moving this far from the last one.
const TRAIL_MIN_SPACING: f32 = 5.0;
const TRAIL_WIDTH: f32 = 2.0;

/// One slot in the player's fixed bullet pool, reused via the active flag.
/// The pool never grows; a fire press with no free slot is dropped.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    vel: Vec2,
    active: bool,
    trail: VecDeque<Vec2>,
    trail_hue: f32,
}

impl Bullet {
    fn idle() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            active: false,
            trail: VecDeque::with_capacity(TRAIL_MAX_POINTS),
            trail_hue: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Retire the bullet, freeing its pool slot.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    fn fire(&mut self, muzzle: Vec2, facing_left: bool, hue: f32) {
        self.pos = muzzle;
        self.vel = Vec2::new(
            if facing_left { -BULLET_SPEED } else { BULLET_SPEED },
            0.0,
        );
        self.active = true;
        self.trail.clear();
        self.trail_hue = hue;
    }

    /// Prune distance and kill margin depend on travel direction; leftward
    /// bullets get the looser threshold.
    fn margin(&self) -> f32 {
        if self.vel.x < 0.0 {
            MARGIN_LEFT
        } else {
            MARGIN_RIGHT
        }
    }

    fn advance(&mut self, viewport: &Viewport) {
        if !self.active {
            return;
        }

        self.pos += self.vel;

        // Distance-gated trail sampling.
        let moved_enough = self
            .trail
            .back()
            .map_or(true, |last| (self.pos - *last).length() > TRAIL_MIN_SPACING);
        if moved_enough {
            self.trail.push_back(self.pos);
        }

        // Drop points too far behind, then enforce the hard cap FIFO.
        let margin = self.margin();
        while let Some(front) = self.trail.front() {
            if (self.pos - *front).length() > margin {
                self.trail.pop_front();
            } else {
                break;
            }
        }
        while self.trail.len() > TRAIL_MAX_POINTS {
            self.trail.pop_front();
        }

        // Retire once past the screen edge by the direction's margin.
        let screen_x = viewport.world_to_screen(self.pos).x;
        if self.vel.x > 0.0 && screen_x > viewport.width + MARGIN_RIGHT {
            self.active = false;
        } else if self.vel.x < 0.0 && screen_x < -MARGIN_LEFT {
            self.active = false;
        }
    }

    /// Trail segments between recorded points plus the head, alpha ramping
    /// up toward the bullet so the tail fades out.
    fn draw(&self, frame: &mut FrameBuffer, viewport: &Viewport) {
        if !self.active || self.trail.is_empty() {
            return;
        }

        let base = hsv_to_rgb(self.trail_hue, 1.0, 1.0);
        let segments = self.trail.len() as f32;

        for (i, (a, b)) in self.trail.iter().zip(self.trail.iter().skip(1)).enumerate() {
            let sa = viewport.world_to_screen(*a);
            let sb = viewport.world_to_screen(*b);
            frame.push_segment(SegmentInstance {
                x1: sa.x,
                y1: sa.y,
                x2: sb.x,
                y2: sb.y,
                width: TRAIL_WIDTH,
                color: base.with_alpha((i + 1) as f32 / segments),
            });
        }

        // Head segment, newest point to the bullet itself.
        if let Some(last) = self.trail.back() {
            let sa = viewport.world_to_screen(*last);
            let sb = viewport.world_to_screen(self.pos);
            frame.push_segment(SegmentInstance {
                x1: sa.x,
                y1: sa.y,
                x2: sb.x,
                y2: sb.y,
                width: TRAIL_WIDTH,
                color: base,
            });
        }
    }
}

/// The player ship: thrust/drag physics, world wrap, and the bullet pool.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    vel: Vec2,
    bullets: Vec<Bullet>,
    prev_fire: bool,
    rng: Rng,
}

impl Player {
    pub fn new(pos: Vec2, rng: Rng) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            bullets: vec![Bullet::idle(); MAX_BULLETS],
            prev_fire: false,
            rng,
        }
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    /// Facing is the sign bit of the horizontal velocity, so a ship that has
    /// drifted to a stop keeps pointing the way it was flying.
    pub fn facing_left(&self) -> bool {
        self.vel.x.is_sign_negative()
    }

    pub fn active_bullet_count(&self) -> usize {
        self.bullets.iter().filter(|b| b.active).count()
    }

    /// Active bullets, mutably, for collision routing.
    pub fn bullets_mut(&mut self) -> impl Iterator<Item = &mut Bullet> + '_ {
        self.bullets.iter_mut().filter(|b| b.active)
    }

    /// One simulation tick: physics, firing, bullet advance, then the one
    /// viewport mutation of the frame.
    pub fn update(&mut self, input: &InputState, viewport: &mut Viewport) {
        // Thrust from held directions.
        if input.is_held(Key::Right) {
            self.vel.x += THRUST_FORCE;
        }
        if input.is_held(Key::Left) {
            self.vel.x -= THRUST_FORCE;
        }
        if input.is_held(Key::Up) {
            self.vel.y -= THRUST_FORCE;
        }
        if input.is_held(Key::Down) {
            self.vel.y += THRUST_FORCE;
        }

        // Drag applies whether or not keys are held.
        self.vel *= DRAG_FACTOR;

        // Limit speed by uniform rescale.
        let speed = self.vel.length();
        if speed > MAX_SPEED {
            self.vel *= MAX_SPEED / speed;
        }

        // Snap creeping velocities to zero. The horizontal snap keeps the
        // IEEE sign so the facing test above does not flicker.
        if self.vel.x.abs() < SPEED_EPSILON {
            self.vel.x = 0.0f32.copysign(self.vel.x);
        }
        if self.vel.y.abs() < SPEED_EPSILON {
            self.vel.y = 0.0;
        }

        self.pos += self.vel;

        // Screen bounds vertically.
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = 0.0;
        }
        if self.pos.y > viewport.height - SHIP_HEIGHT {
            self.pos.y = viewport.height - SHIP_HEIGHT;
            self.vel.y = 0.0;
        }

        // Wrap around the world horizontally.
        if self.pos.x < -SHIP_WIDTH {
            self.pos.x = viewport.world_width;
        }
        if self.pos.x > viewport.world_width {
            self.pos.x = 0.0;
        }

        // Fire on the press edge only, once per press.
        let fire_held = input.is_held(Key::Fire);
        if fire_held && !self.prev_fire {
            self.fire();
        }
        self.prev_fire = fire_held;

        for bullet in &mut self.bullets {
            bullet.advance(viewport);
        }

        viewport.follow(self.pos);

        log::trace!(
            "player position: ({:.2}, {:.2}), velocity: ({:.2}, {:.2})",
            self.pos.x,
            self.pos.y,
            self.vel.x,
            self.vel.y
        );
    }

    fn muzzle(&self) -> Vec2 {
        let y = self.pos.y + SHIP_HEIGHT / 2.0;
        if self.facing_left() {
            Vec2::new(self.pos.x, y)
        } else {
            Vec2::new(self.pos.x + SHIP_WIDTH, y)
        }
    }

    fn fire(&mut self) {
        let muzzle = self.muzzle();
        let facing_left = self.facing_left();
        // With no free slot the press is silently dropped, leaving the RNG
        // untouched.
        if let Some(slot) = self.bullets.iter_mut().find(|b| !b.active) {
            let hue = self.rng.range_f32(0.0, 360.0);
            slot.fire(muzzle, facing_left, hue);
        }
    }

    pub fn draw(&self, frame: &mut FrameBuffer, viewport: &Viewport, sprite: SpriteId) {
        let screen = viewport.world_to_screen(self.pos);
        frame.push_sprite(SpriteInstance {
            x: screen.x,
            y: screen.y,
            w: SHIP_WIDTH,
            h: SHIP_HEIGHT,
            sprite: sprite.0 as f32,
            flip_x: if self.facing_left() { 1.0 } else { 0.0 },
            color: Rgba::WHITE,
        });

        for bullet in &self.bullets {
            bullet.draw(frame, viewport);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_viewport() -> Viewport {
        Viewport::new(1024.0, 768.0, 10000.0, 768.0)
    }

    /// Screen wide enough that bullets survive a whole test.
    fn wide_viewport() -> Viewport {
        Viewport::new(8192.0, 768.0, 100000.0, 768.0)
    }

    fn test_player() -> Player {
        Player::new(Vec2::new(5000.0, 369.0), Rng::new(9))
    }

    fn hold(key: Key) -> InputState {
        let mut input = InputState::new();
        input.set_held(key, true);
        input
    }

    #[test]
    fn thrust_accelerates_and_drag_stops() {
        let mut p = test_player();
        let mut vp = test_viewport();

        for _ in 0..10 {
            p.update(&hold(Key::Right), &mut vp);
        }
        assert!(p.vel().x > 1.0);

        let idle = InputState::new();
        for _ in 0..200 {
            p.update(&idle, &mut vp);
        }
        assert_eq!(p.vel().x, 0.0);
        assert_eq!(p.vel().y, 0.0);
    }

    #[test]
    fn speed_never_exceeds_the_cap() {
        let mut p = test_player();
        let mut vp = test_viewport();
        let mut input = InputState::new();
        input.set_held(Key::Right, true);
        input.set_held(Key::Down, true);

        for _ in 0..200 {
            p.update(&input, &mut vp);
            assert!(p.vel().length() <= MAX_SPEED + 1e-3);
        }
    }

    #[test]
    fn snap_preserves_facing_through_a_stop() {
        let mut p = test_player();
        let mut vp = test_viewport();

        for _ in 0..5 {
            p.update(&hold(Key::Left), &mut vp);
        }
        assert!(p.facing_left());

        // Drift to a stop: velocity is numerically zero, facing survives.
        let idle = InputState::new();
        for _ in 0..200 {
            p.update(&idle, &mut vp);
        }
        assert_eq!(p.vel().x, 0.0);
        assert!(p.facing_left());

        // One tick of rightward thrust flips it back.
        p.update(&hold(Key::Right), &mut vp);
        assert!(!p.facing_left());
    }

    #[test]
    fn vertical_bounds_clamp_and_zero_velocity() {
        let mut p = test_player();
        let mut vp = test_viewport();

        for _ in 0..300 {
            p.update(&hold(Key::Down), &mut vp);
        }
        assert_eq!(p.pos.y, 768.0 - SHIP_HEIGHT);
        assert_eq!(p.vel().y, 0.0);

        for _ in 0..300 {
            p.update(&hold(Key::Up), &mut vp);
        }
        assert_eq!(p.pos.y, 0.0);
    }

    #[test]
    fn wraps_horizontally_at_the_world_edges() {
        let mut p = test_player();
        let mut vp = test_viewport();

        p.pos.x = 9999.9;
        p.update(&hold(Key::Right), &mut vp);
        assert_eq!(p.pos.x, 0.0);

        let mut p = test_player();
        p.pos.x = -SHIP_WIDTH + 0.1;
        p.update(&hold(Key::Left), &mut vp);
        assert_eq!(p.pos.x, 10000.0);
    }

    #[test]
    fn fire_is_edge_triggered() {
        let mut p = test_player();
        let mut vp = wide_viewport();

        let pressed = hold(Key::Fire);
        for _ in 0..10 {
            p.update(&pressed, &mut vp);
        }
        assert_eq!(p.active_bullet_count(), 1);

        let idle = InputState::new();
        p.update(&idle, &mut vp);
        p.update(&pressed, &mut vp);
        assert_eq!(p.active_bullet_count(), 2);
    }

    #[test]
    fn pool_saturates_at_twenty_bullets() {
        let mut p = test_player();
        let mut vp = wide_viewport();
        let pressed = hold(Key::Fire);
        let idle = InputState::new();

        // 21 rapid press/release cycles; the 21st press finds no free slot.
        for _ in 0..21 {
            p.update(&pressed, &mut vp);
            p.update(&idle, &mut vp);
        }
        assert_eq!(p.active_bullet_count(), MAX_BULLETS);
    }

    #[test]
    fn bullet_spawns_at_the_leading_edge() {
        let mut p = test_player();
        let mut vp = wide_viewport();

        p.update(&hold(Key::Fire), &mut vp);
        let bullet = p.bullets_mut().next().expect("one bullet in flight");
        // Fired from the right edge center, advanced once this tick.
        assert_eq!(
            bullet.pos,
            Vec2::new(5000.0 + SHIP_WIDTH + BULLET_SPEED, 369.0 + SHIP_HEIGHT / 2.0)
        );
    }

    #[test]
    fn bullets_retire_past_their_margins() {
        let mut p = test_player();
        let mut vp = test_viewport();
        let idle = InputState::new();

        // Settle the viewport on the player before firing; a bullet fired
        // against a stale viewport would be born past its margin.
        p.update(&idle, &mut vp);

        p.update(&hold(Key::Fire), &mut vp);
        assert_eq!(p.active_bullet_count(), 1);
        for _ in 0..120 {
            p.update(&idle, &mut vp);
        }
        assert_eq!(p.active_bullet_count(), 0);

        // Leftward bullets live longer, but also die.
        for _ in 0..5 {
            p.update(&hold(Key::Left), &mut vp);
        }
        p.update(&hold(Key::Fire), &mut vp);
        assert_eq!(p.active_bullet_count(), 1);
        for _ in 0..200 {
            p.update(&idle, &mut vp);
        }
        assert_eq!(p.active_bullet_count(), 0);
    }

    #[test]
    fn trail_samples_are_distance_gated() {
        let mut b = Bullet::idle();
        b.pos = Vec2::new(1000.0, 100.0);
        b.vel = Vec2::new(3.0, 0.0);
        b.active = true;

        let vp = wide_viewport();
        for _ in 0..10 {
            b.advance(&vp);
        }
        // Moving 3 per tick records every other tick.
        assert_eq!(b.trail.len(), 5);
    }

    #[test]
    fn trail_never_exceeds_fifty_points() {
        let mut b = Bullet::idle();
        b.pos = Vec2::new(90000.0, 100.0);
        // Slow leftward bullet: the loose margin would hold 75 points, so
        // the FIFO cap is what binds.
        b.vel = Vec2::new(-8.0, 0.0);
        b.active = true;

        let vp = wide_viewport();
        for _ in 0..120 {
            b.advance(&vp);
            assert!(b.trail.len() <= TRAIL_MAX_POINTS);
        }
        assert_eq!(b.trail.len(), TRAIL_MAX_POINTS);
    }

    #[test]
    fn trail_prunes_points_behind_the_margin() {
        let mut b = Bullet::idle();
        b.pos = Vec2::new(1000.0, 100.0);
        b.vel = Vec2::new(BULLET_SPEED, 0.0);
        b.active = true;

        let vp = wide_viewport();
        for _ in 0..100 {
            b.advance(&vp);
        }
        for point in &b.trail {
            assert!((b.pos - *point).length() <= MARGIN_RIGHT);
        }
    }

    #[test]
    fn update_follows_the_viewport_once() {
        let mut p = test_player();
        let mut vp = test_viewport();
        p.update(&InputState::new(), &mut vp);
        // Stationary player far right of the fresh viewport drags it over,
        // landing the player at the deadzone edge.
        assert_eq!(vp.x, 5000.0 - 512.0 - 200.0);
    }

    #[test]
    fn draw_flips_the_ship_when_facing_left() {
        let mut p = test_player();
        let mut vp = test_viewport();
        let mut frame = FrameBuffer::default();

        p.draw(&mut frame, &vp, SpriteId(0));
        assert_eq!(frame.sprites[0].flip_x, 0.0);

        for _ in 0..3 {
            p.update(&hold(Key::Left), &mut vp);
        }
        frame.clear();
        p.draw(&mut frame, &vp, SpriteId(0));
        assert_eq!(frame.sprites[0].flip_x, 1.0);
    }

    #[test]
    fn trail_draws_fading_segments() {
        let mut p = test_player();
        let mut vp = wide_viewport();
        let idle = InputState::new();

        p.update(&hold(Key::Fire), &mut vp);
        for _ in 0..5 {
            p.update(&idle, &mut vp);
        }

        let mut frame = FrameBuffer::default();
        p.draw(&mut frame, &vp, SpriteId(0));
        assert!(frame.segment_count() > 1);
        // Later segments are more opaque.
        let first = frame.segments.first().unwrap().color.a;
        let last = frame.segments.last().unwrap().color.a;
        assert!(first < last);
    }
}
