//! Game session: spawning, the fixed-step loop, and win/loss tracking.

use std::time::Duration;

use anyhow::Result;
use hunt_content::{CRITICAL_DAMAGE, OverlapEffects, PawnCatalog, PawnKind, PawnTemplate};
use hunt_engine::{ActorId, Frame, InputManager, Key, TickEnv, Vec2, World};
use rand::Rng;

use crate::config::CliConfig;
use crate::device::CrosstermDevice;
use crate::message::{MessageLevel, MessageLog};
use crate::terminal::Tui;
use crate::ui::{self, UiFrame};

const FRAME_INTERVAL_MS: u64 = 16;
const MESSAGE_CAPACITY: usize = 32;

/// Session outcome; terminal states are sticky.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Won,
    Lost,
}

/// One game session: the world, its player, and everything around them.
pub struct Game {
    config: CliConfig,
    world: World,
    player: ActorId,
    input: InputManager,
    messages: MessageLog,
    status: GameStatus,
    prev_cell: (i32, i32),
    first_frame: bool,
}

impl Game {
    /// Builds the world: the player at the center, then damagers and healers
    /// on random cells not already holding a pawn.
    pub fn new(config: CliConfig, catalog: &PawnCatalog) -> Self {
        let mut world = World::new();

        let center = Vec2::new(
            f32::from(config.world.width) / 2.0,
            f32::from(config.world.height) / 2.0,
        );
        let player = catalog.template(PawnKind::Player).spawn(&mut world, center);
        tracing::debug!(%player, x = center.x, y = center.y, "placed player");

        let mut game = Self {
            config,
            world,
            player,
            input: InputManager::new(),
            messages: MessageLog::new(MESSAGE_CAPACITY),
            status: GameStatus::Ongoing,
            prev_cell: (0, 0),
            first_frame: true,
        };
        game.spawn_npcs(catalog);
        game
    }

    fn spawn_npcs(&mut self, catalog: &PawnCatalog) {
        let mut rng = rand::thread_rng();
        let cells = u32::from(self.config.world.width) * u32::from(self.config.world.height);

        // One cell stays reserved for the player; oversized spawn requests
        // are cut down so placement always terminates.
        let free = cells.saturating_sub(1);
        let mut damagers = u32::from(self.config.spawns.damagers);
        let mut healers = u32::from(self.config.spawns.healers);
        if damagers + healers > free {
            tracing::warn!(damagers, healers, free, "spawn counts exceed free cells; clamping");
            damagers = damagers.min(free / 2);
            healers = healers.min(free - damagers);
        }

        while damagers > 0 || healers > 0 {
            if healers > 0 && self.try_place(catalog.template(PawnKind::Healer), &mut rng) {
                healers -= 1;
            }
            if damagers > 0 && self.try_place(catalog.template(PawnKind::Damager), &mut rng) {
                damagers -= 1;
            }
        }
    }

    /// Attempts one random placement; cells already holding a pawn are left
    /// for a later attempt.
    fn try_place(&mut self, template: &PawnTemplate, rng: &mut impl Rng) -> bool {
        let x = rng.gen_range(1..=i32::from(self.config.world.width));
        let y = rng.gen_range(1..=i32::from(self.config.world.height));
        if !self.world.pawns_at(x, y).is_empty() {
            return false;
        }

        let id = template.spawn(&mut self.world, Vec2::new(x as f32, y as f32));
        tracing::debug!(%id, kind = %template.kind, x, y, "placed pawn");
        true
    }

    /// Drives the session until the player quits.
    ///
    /// Each frame: pump the device, capture input, and only advance the
    /// world when a key was freshly pressed (or on the very first frame).
    /// An untouched keyboard leaves the simulation exactly where it was.
    pub fn run(&mut self, device: &mut CrosstermDevice, terminal: &mut Tui) -> Result<()> {
        loop {
            device.pump(Duration::from_millis(FRAME_INTERVAL_MS))?;
            self.input.capture(device);

            if self.input.is_pressed(Key::Q) {
                tracing::info!("exiting simulation");
                return Ok(());
            }

            if self.input.any_first_pressed() || self.first_frame {
                self.advance();
            }
            self.first_frame = false;

            self.render(terminal)?;
        }
    }

    /// One simulation step: capture has already happened; tick the world,
    /// then settle everything that depends on the new positions.
    fn advance(&mut self) {
        let hp_before = self.player_attribute("hp");

        self.world.tick(&TickEnv::new(&self.input));

        self.report_hp_delta(hp_before);
        self.clamp_pawns();
        self.resolve_overlaps();
        self.update_status();
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let view = UiFrame {
            world: &self.world,
            player: self.player,
            grid: self.config.world,
            hp: self.player_attribute("hp").unwrap_or(0),
            score: self.player_attribute("score").unwrap_or(0),
            status: self.status,
            messages: &self.messages,
        };
        ui::render(terminal, &view)
    }

    fn player_attribute(&self, name: &str) -> Option<i32> {
        self.world
            .actor(self.player)
            .and_then(|actor| actor.state().attribute(name))
    }

    fn player_cell(&self) -> Option<(i32, i32)> {
        let pawn = self.world.actor(self.player)?.state().as_pawn()?;
        Some(pawn.frame().position.grid())
    }

    /// Messages for hp changes that happened inside the tick itself (the
    /// manual stat hotkeys); overlap changes are reported separately.
    fn report_hp_delta(&mut self, before: Option<i32>) {
        let (Some(before), Some(after)) = (before, self.player_attribute("hp")) else {
            return;
        };
        let delta = after - before;
        if delta <= -CRITICAL_DAMAGE {
            self.messages
                .push(MessageLevel::Alert, "player took a critical hit!");
        }
        if delta < 0 {
            self.messages
                .push(MessageLevel::Info, format!("player just took {} damage.", -delta));
        }
        if delta > 0 {
            self.messages
                .push(MessageLevel::Info, format!("player just gained {delta} health."));
        }
    }

    /// Keeps every pawn on the playable grid; positions snap to whole cells.
    fn clamp_pawns(&mut self) {
        let width = i32::from(self.config.world.width);
        let height = i32::from(self.config.world.height);

        for actor in self.world.actors_mut() {
            if let Some(pawn) = actor.state_mut().as_pawn_mut() {
                let frame = pawn.frame();
                let (x, y) = frame.position.grid();
                let clamped = Vec2::new(x.clamp(1, width) as f32, y.clamp(1, height) as f32);
                pawn.set_frame(Frame::new(clamped, frame.facing));
            }
        }
    }

    /// Applies overlap effects from every pawn sharing the player's cell.
    ///
    /// Runs only when the player's cell changed this tick, so standing on a
    /// pawn does not re-trigger it.
    fn resolve_overlaps(&mut self) {
        let Some(cell) = self.player_cell() else {
            return;
        };
        if cell == self.prev_cell {
            return;
        }
        self.prev_cell = cell;

        for id in self.world.pawns_at(cell.0, cell.1) {
            if id == self.player {
                continue;
            }
            let Some(other) = self.world.actor(id) else {
                continue;
            };
            let effects = OverlapEffects::read(other.state());
            let Some(player) = self.world.actor_mut(self.player) else {
                return;
            };
            let outcome = effects.apply(player.state_mut());

            if outcome.is_critical() {
                self.messages
                    .push(MessageLevel::Alert, "player took a critical hit!");
            }
            if outcome.damaged > 0 {
                self.messages.push(
                    MessageLevel::Info,
                    format!("player just took {} damage.", outcome.damaged),
                );
            }
            if outcome.healed > 0 {
                self.messages.push(
                    MessageLevel::Info,
                    format!("player just gained {} health.", outcome.healed),
                );
            }
            if outcome.points > 0 {
                self.messages.push(
                    MessageLevel::Info,
                    format!("player scored {} points.", outcome.points),
                );
            }
        }
    }

    fn update_status(&mut self) {
        if self.status != GameStatus::Ongoing {
            return;
        }

        let hp = self.player_attribute("hp").unwrap_or(0);
        let score = self.player_attribute("score").unwrap_or(0);
        if hp < 1 {
            self.status = GameStatus::Lost;
            self.messages.push(MessageLevel::Alert, "You lost!");
            tracing::info!(hp, "session lost");
        } else if score >= self.config.win_score {
            self.status = GameStatus::Won;
            self.messages.push(MessageLevel::Info, "You win!");
            tracing::info!(score, "session won");
        }
    }
}
