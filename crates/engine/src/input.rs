//! Polled-input sampling and rising-edge detection.
//!
//! The engine never talks to a concrete keyboard. Drivers own an
//! [`InputManager`], sample their device through the [`InputOracle`] boundary
//! once per tick, and hand the captured state to the world via
//! [`crate::world::TickEnv`]. There is deliberately no global instance.

use strum::{EnumCount as _, IntoEnumIterator as _};

/// Fixed key space sampled by [`InputManager::capture`].
///
/// Keys outside this space are unrepresentable and therefore never pressed.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
)]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
}

impl Key {
    /// Maps a character to its key, case-insensitively for letters.
    pub fn from_char(c: char) -> Option<Key> {
        let key = match c.to_ascii_uppercase() {
            'A' => Key::A,
            'B' => Key::B,
            'C' => Key::C,
            'D' => Key::D,
            'E' => Key::E,
            'F' => Key::F,
            'G' => Key::G,
            'H' => Key::H,
            'I' => Key::I,
            'J' => Key::J,
            'K' => Key::K,
            'L' => Key::L,
            'M' => Key::M,
            'N' => Key::N,
            'O' => Key::O,
            'P' => Key::P,
            'Q' => Key::Q,
            'R' => Key::R,
            'S' => Key::S,
            'T' => Key::T,
            'U' => Key::U,
            'V' => Key::V,
            'W' => Key::W,
            'X' => Key::X,
            'Y' => Key::Y,
            'Z' => Key::Z,
            '0' => Key::Num0,
            '1' => Key::Num1,
            '2' => Key::Num2,
            '3' => Key::Num3,
            '4' => Key::Num4,
            '5' => Key::Num5,
            '6' => Key::Num6,
            '7' => Key::Num7,
            '8' => Key::Num8,
            '9' => Key::Num9,
            _ => return None,
        };
        Some(key)
    }
}

/// External keyboard-like device, polled synchronously during capture.
///
/// Implementations report the device's view of "held right now"; all edge
/// derivation happens in [`InputManager`].
pub trait InputOracle {
    /// Reports whether `key` is held down at the moment of the call.
    fn is_down(&self, key: Key) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
struct KeyState {
    held: bool,
    first: bool,
}

/// Per-tick input state tracker owned by the top-level driver.
///
/// [`capture`](Self::capture) must run exactly once per tick, before any
/// component reads input. Until the first capture every key reads as "not
/// pressed".
#[derive(Debug)]
pub struct InputManager {
    keys: [KeyState; Key::COUNT],
    any_first_pressed: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            keys: [KeyState::default(); Key::COUNT],
            any_first_pressed: false,
        }
    }

    /// Samples the device for every key and refreshes the derived edge state.
    ///
    /// A key registers as first-pressed only on the capture where it went
    /// from up to down; it stays merely pressed for as long as the device
    /// keeps reporting it held.
    pub fn capture(&mut self, device: &dyn InputOracle) {
        self.any_first_pressed = false;
        for key in Key::iter() {
            let down = device.is_down(key);
            let state = &mut self.keys[key as usize];
            state.first = down && !state.held;
            state.held = down;
            self.any_first_pressed |= state.first;
        }
    }

    /// True iff `key` was held as of the last capture.
    pub fn is_pressed(&self, key: Key) -> bool {
        self.keys[key as usize].held
    }

    /// True iff `key` went from up to down during the last capture.
    pub fn is_first_pressed(&self, key: Key) -> bool {
        self.keys[key as usize].first
    }

    /// True iff at least one key was first-pressed during the last capture.
    pub fn any_first_pressed(&self) -> bool {
        self.any_first_pressed
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
