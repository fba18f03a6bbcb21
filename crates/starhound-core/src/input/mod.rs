pub mod state;

pub use state::{InputEvent, InputState, Key};
