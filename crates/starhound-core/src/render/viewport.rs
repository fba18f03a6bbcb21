use glam::Vec2;

/// How far the target may drift from the viewport center horizontally
/// before scrolling starts.
const DEADZONE_X: f32 = 200.0;
/// Vertical deadzone.
const DEADZONE_Y: f32 = 150.0;

/// Scrolling camera window over the world.
///
/// Stores the top-left corner of the visible region in world coordinates.
/// Draw code reads it to map world positions onto the screen; the only
/// mutation is [`Viewport::follow`], called exactly once per tick from the
/// player update.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Top-left corner in world coordinates.
    pub x: f32,
    pub y: f32,
    /// Visible size in world units (matches the screen).
    pub width: f32,
    pub height: f32,
    /// Scrollable world extents. `world_height` normally equals the screen
    /// height, pinning `y` to 0.
    pub world_width: f32,
    pub world_height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, world_width: f32, world_height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            world_width,
            world_height,
        }
    }

    /// Move the viewport to keep a target inside its deadzone.
    ///
    /// The viewport stays put while the target is within the deadzone around
    /// the viewport center. Once the target crosses a deadzone edge, the
    /// viewport shifts by exactly the excess, so the target rides pinned at
    /// that edge. The result is clamped to the world bounds.
    pub fn follow(&mut self, target: Vec2) {
        let center_x = self.x + self.width / 2.0;
        let center_y = self.y + self.height / 2.0;

        let delta_x = target.x - center_x;
        let delta_y = target.y - center_y;

        if delta_x.abs() > DEADZONE_X {
            if delta_x > 0.0 {
                self.x += delta_x - DEADZONE_X;
            } else {
                self.x += delta_x + DEADZONE_X;
            }
        }

        if delta_y.abs() > DEADZONE_Y {
            if delta_y > 0.0 {
                self.y += delta_y - DEADZONE_Y;
            } else {
                self.y += delta_y + DEADZONE_Y;
            }
        }

        // Keep the viewport within the world bounds. The upper clamp wins if
        // the world is smaller than the viewport.
        if self.x < 0.0 {
            self.x = 0.0;
        }
        if self.x > self.world_width - self.width {
            self.x = self.world_width - self.width;
        }
        if self.y < 0.0 {
            self.y = 0.0;
        }
        if self.y > self.world_height - self.height {
            self.y = self.world_height - self.height;
        }
    }

    /// Map a world position to screen space.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.offset()
    }

    /// Map a screen position back to world space. Exact inverse of
    /// [`Viewport::world_to_screen`].
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.offset()
    }

    /// Whether a screen-space point lies within the visible region,
    /// padded by `slack` on every side.
    pub fn on_screen(&self, screen: Vec2, slack: f32) -> bool {
        screen.x >= -slack
            && screen.x <= self.width + slack
            && screen.y >= -slack
            && screen.y <= self.height + slack
    }

    fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
