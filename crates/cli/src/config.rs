//! Client configuration loaded from the process environment.
use std::env;
use std::str::FromStr;

/// Configuration for a game session: grid size, spawn counts, win threshold.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub world: WorldSize,
    pub spawns: SpawnCounts,
    pub win_score: i32,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `HUNT_WORLD_WIDTH` / `HUNT_WORLD_HEIGHT`
    /// - `HUNT_DAMAGERS` / `HUNT_HEALERS`
    /// - `HUNT_WIN_SCORE`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<u16>("HUNT_WORLD_WIDTH") {
            config.world.width = width.max(4);
        }
        if let Some(height) = read_env::<u16>("HUNT_WORLD_HEIGHT") {
            config.world.height = height.max(4);
        }
        if let Some(damagers) = read_env::<u16>("HUNT_DAMAGERS") {
            config.spawns.damagers = damagers;
        }
        if let Some(healers) = read_env::<u16>("HUNT_HEALERS") {
            config.spawns.healers = healers;
        }
        if let Some(win_score) = read_env::<i32>("HUNT_WIN_SCORE") {
            config.win_score = win_score.max(1);
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            world: WorldSize {
                width: 40,
                height: 20,
            },
            spawns: SpawnCounts {
                damagers: 5,
                healers: 5,
            },
            win_score: 100,
        }
    }
}

/// Playable grid dimensions in cells.
#[derive(Clone, Copy, Debug)]
pub struct WorldSize {
    pub width: u16,
    pub height: u16,
}

/// How many of each NPC pawn the session starts with.
#[derive(Clone, Copy, Debug)]
pub struct SpawnCounts {
    pub damagers: u16,
    pub healers: u16,
}

fn read_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok()?.parse().ok()
}
