pub mod runner;

pub use runner::GameRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use starhound_core::{GameConfig, InputEvent, Starhound};

thread_local! {
    static RUNNER: RefCell<Option<GameRunner<Starhound>>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner<Starhound>) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Game not initialized. Call game_init() first.");
        f(runner)
    })
}

fn install(seed: u64) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = GameConfig {
        seed,
        ..GameConfig::default()
    };
    let runner = GameRunner::new(Starhound::new(config));

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("starhound: initialized (seed {})", seed);
}

/// Start a fresh game seeded from the wall clock.
#[wasm_bindgen]
pub fn game_init() {
    install(js_sys::Date::now() as u64);
}

/// Start a fresh game with a fixed seed. Equal seeds replay identical runs.
#[wasm_bindgen]
pub fn game_init_seeded(seed: u64) {
    install(seed);
}

/// Load the sprite manifest and build the world. A bad manifest is fatal.
#[wasm_bindgen]
pub fn game_load_manifest(json: &str) {
    with_runner(|r| {
        r.load_manifest(json).expect("sprite manifest load failed");
    });
}

#[wasm_bindgen]
pub fn game_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn game_key_down(key_code: u32) {
    with_runner(|r| r.apply_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn game_key_up(key_code: u32) {
    with_runner(|r| r.apply_input(InputEvent::KeyUp { key_code }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_sprites_ptr() -> *const f32 {
    with_runner(|r| r.sprites_ptr())
}

#[wasm_bindgen]
pub fn get_sprite_count() -> u32 {
    with_runner(|r| r.sprite_count())
}

#[wasm_bindgen]
pub fn get_quads_ptr() -> *const f32 {
    with_runner(|r| r.quads_ptr())
}

#[wasm_bindgen]
pub fn get_quad_count() -> u32 {
    with_runner(|r| r.quad_count())
}

#[wasm_bindgen]
pub fn get_segments_ptr() -> *const f32 {
    with_runner(|r| r.segments_ptr())
}

#[wasm_bindgen]
pub fn get_segment_count() -> u32 {
    with_runner(|r| r.segment_count())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_event_count() -> u32 {
    with_runner(|r| r.event_count())
}

#[wasm_bindgen]
pub fn get_screen_width() -> f32 {
    with_runner(|r| r.screen_width())
}

#[wasm_bindgen]
pub fn get_screen_height() -> f32 {
    with_runner(|r| r.screen_height())
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width())
}

#[wasm_bindgen]
pub fn get_score() -> u32 {
    with_runner(|r| r.game().score())
}

// ---- Capacity accessors ----

#[wasm_bindgen]
pub fn get_max_sprites() -> u32 {
    with_runner(|r| r.max_sprites())
}

#[wasm_bindgen]
pub fn get_max_quads() -> u32 {
    with_runner(|r| r.max_quads())
}

#[wasm_bindgen]
pub fn get_max_segments() -> u32 {
    with_runner(|r| r.max_segments())
}
