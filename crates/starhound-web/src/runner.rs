use starhound_core::{
    AssetError, FrameBuffer, FrameClock, Game, GameConfig, GameEvent, InputEvent, InputState,
    SpriteManifest, SpriteRegistry,
};

/// Generic game runner that wires the simulation loop to a host.
///
/// The concrete game lives in a `thread_local!` and is driven through free
/// functions exported via `#[wasm_bindgen]`, because wasm-bindgen cannot
/// export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    config: GameConfig,
    input: InputState,
    frame: FrameBuffer,
    clock: FrameClock,
    /// Events emitted during the most recent tick, exposed to the host as a
    /// flat float buffer.
    events: Vec<GameEvent>,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let clock = FrameClock::new(config.fixed_dt);
        let frame =
            FrameBuffer::with_capacity(config.max_sprites, config.max_quads, config.max_segments);

        Self {
            game,
            config,
            input: InputState::new(),
            frame,
            clock,
            events: Vec::new(),
            initialized: false,
        }
    }

    /// Parse the sprite manifest and initialize the game. The simulation
    /// stays inert until this succeeds.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), AssetError> {
        let manifest = SpriteManifest::from_json(json)?;
        let registry = SpriteRegistry::from_manifest(&manifest);
        self.game.init(&registry)?;
        self.initialized = true;
        Ok(())
    }

    /// Fold an input event into the held-key snapshot.
    pub fn apply_input(&mut self, event: InputEvent) {
        self.input.apply(event);
    }

    /// Run one frame: consume the host's delta as whole fixed steps, then
    /// rebuild the draw buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Events are per-frame transient data
        self.events.clear();

        // Fixed timestep accumulation
        let steps = self.clock.advance(dt);
        let t = self.clock.elapsed();
        for _ in 0..steps {
            self.game.update(&self.input, t, &mut self.events);
        }

        // The frame is rebuilt every host frame, including zero-step ones
        self.frame.clear();
        self.game.draw(&mut self.frame);
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    // ---- Pointer accessors for host-side buffer reads ----

    pub fn sprites_ptr(&self) -> *const f32 {
        self.frame.sprites_ptr()
    }

    pub fn sprite_count(&self) -> u32 {
        self.frame.sprite_count()
    }

    pub fn quads_ptr(&self) -> *const f32 {
        self.frame.quads_ptr()
    }

    pub fn quad_count(&self) -> u32 {
        self.frame.quad_count()
    }

    pub fn segments_ptr(&self) -> *const f32 {
        self.frame.segments_ptr()
    }

    pub fn segment_count(&self) -> u32 {
        self.frame.segment_count()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.events.len() as u32
    }

    pub fn screen_width(&self) -> f32 {
        self.config.screen_width
    }

    pub fn screen_height(&self) -> f32 {
        self.config.screen_height
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    // ---- Capacity accessors (read by the host to size GPU buffers) ----

    pub fn max_sprites(&self) -> u32 {
        self.config.max_sprites as u32
    }

    pub fn max_quads(&self) -> u32 {
        self.config.max_quads as u32
    }

    pub fn max_segments(&self) -> u32 {
        self.config.max_segments as u32
    }
}
