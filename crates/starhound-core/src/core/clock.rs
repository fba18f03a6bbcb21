/// Fixed-timestep accumulator.
///
/// The host hands in variable frame deltas; the clock converts them into
/// whole simulation ticks and tracks total simulated time. One tick is one
/// logical frame: all per-frame constants in the simulation (drag, particle
/// decay, hit-flash timers) are expressed per tick.
pub struct FrameClock {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    /// Simulated seconds so far (drives the star-color oscillation).
    elapsed: f32,
}

impl FrameClock {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            elapsed: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed ticks
    /// to run. Capped at 10 ticks per frame so a stalled tab cannot snowball.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        self.elapsed += steps as f32 * self.dt;
        steps
    }

    /// Total simulated time in seconds.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}
