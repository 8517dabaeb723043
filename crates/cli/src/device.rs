//! Crossterm-backed input device.
//!
//! Terminals report key events rather than key state, so the device counts a
//! key as held exactly when at least one event for it arrived since the
//! previous pump. Key autorepeat therefore shows up as repeated one-frame
//! presses, which the engine turns into discrete movement steps.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use hunt_engine::{InputOracle, Key};

#[derive(Debug, Default)]
pub struct CrosstermDevice {
    down: Vec<Key>,
}

impl CrosstermDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits up to `budget` for input, then drains everything pending.
    ///
    /// The previous pump's keys are forgotten first; only events that arrive
    /// between pumps count as held.
    pub fn pump(&mut self, budget: Duration) -> io::Result<()> {
        self.down.clear();

        let mut wait = budget;
        while event::poll(wait)? {
            wait = Duration::ZERO;
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    if let KeyCode::Char(c) = key.code {
                        if let Some(mapped) = Key::from_char(c) {
                            if !self.down.contains(&mapped) {
                                self.down.push(mapped);
                            }
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

impl InputOracle for CrosstermDevice {
    fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }
}
