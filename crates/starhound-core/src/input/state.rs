/// Game actions the simulation understands.
///
/// The host maps raw key codes onto these before the tick; the simulation
/// never sees key codes directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Fire,
}

impl Key {
    const COUNT: usize = 5;

    /// Map a browser `keyCode` to an action. Arrows and WASD steer,
    /// space fires. Unknown codes map to `None` and are dropped.
    pub fn from_key_code(key_code: u32) -> Option<Self> {
        match key_code {
            37 | 65 => Some(Key::Left),
            38 | 87 => Some(Key::Up),
            39 | 68 => Some(Key::Right),
            40 | 83 => Some(Key::Down),
            32 => Some(Key::Fire),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Key::Left => 0,
            Key::Right => 1,
            Key::Up => 2,
            Key::Down => 3,
            Key::Fire => 4,
        }
    }
}

/// Input event types the simulation understands.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
}

/// Held-key snapshot sampled by the simulation each tick.
///
/// JS pushes events between frames; the runner applies them before the tick
/// so the whole tick sees one consistent snapshot. Holding a key across
/// frames keeps it held with no repeat events needed.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: [bool; Key::COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event to the snapshot (called from the host bridge).
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown { key_code } => {
                if let Some(key) = Key::from_key_code(key_code) {
                    self.held[key.index()] = true;
                }
            }
            InputEvent::KeyUp { key_code } => {
                if let Some(key) = Key::from_key_code(key_code) {
                    self.held[key.index()] = false;
                }
            }
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    /// Force a key state directly. Test and replay helper.
    pub fn set_held(&mut self, key: Key, held: bool) {
        self.held[key.index()] = held;
    }
}
