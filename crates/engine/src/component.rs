//! Pluggable per-tick behavior units.

use std::any::Any;

use crate::actor::{ActorId, ActorState};
use crate::input::Key;
use crate::math::Vec2;
use crate::world::TickEnv;

/// Behavior unit owned by exactly one actor for that actor's entire lifetime.
///
/// Components are ticked in attachment order as part of their owner's update
/// and may mutate the owner's state or consult the per-tick environment.
pub trait Component: Any {
    /// Called once when the component is attached to its owner.
    fn attached(&mut self, _owner: ActorId) {}

    /// Advances the component by one tick.
    fn tick(&mut self, owner: &mut ActorState, env: &TickEnv<'_>);

    /// Type-erased view enabling typed lookup via [`crate::Actor::component`].
    fn as_any(&self) -> &dyn Any;

    /// Mutable variant of [`as_any`](Self::as_any).
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Directional key bindings for [`MoveComponent`].
#[derive(Clone, Copy, Debug)]
pub struct MoveBindings {
    pub up: Key,
    pub left: Key,
    pub down: Key,
    pub right: Key,
}

impl Default for MoveBindings {
    fn default() -> Self {
        Self {
            up: Key::W,
            left: Key::A,
            down: Key::S,
            right: Key::D,
        }
    }
}

/// Moves the owning pawn one cell per directional key-press edge.
///
/// Movement is a discrete step on the rising edge of each key, not a
/// continuous push while held. Owners without a pawn body ignore it.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveComponent {
    bindings: MoveBindings,
}

impl MoveComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: MoveBindings) -> Self {
        Self { bindings }
    }
}

impl Component for MoveComponent {
    fn tick(&mut self, owner: &mut ActorState, env: &TickEnv<'_>) {
        let input = env.input;

        // Left adds +x and right adds -x: the client's grid projection
        // mirrors both axes.
        let mut movement = Vec2::ZERO;
        if input.is_first_pressed(self.bindings.up) {
            movement.y += 1.0;
        }
        if input.is_first_pressed(self.bindings.left) {
            movement.x += 1.0;
        }
        if input.is_first_pressed(self.bindings.down) {
            movement.y -= 1.0;
        }
        if input.is_first_pressed(self.bindings.right) {
            movement.x -= 1.0;
        }

        if let Some(pawn) = owner.as_pawn_mut() {
            pawn.apply_movement(movement);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
