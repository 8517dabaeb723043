//! Actors: identity, named attributes, components, and the pawn capability.

use std::collections::HashMap;
use std::fmt;

use crate::component::Component;
use crate::math::{Frame, Vec2};
use crate::world::TickEnv;

/// Creation-order identity of an actor within its world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Spatial body of a pawn-capable actor.
///
/// Velocity is write-accumulated by components during a tick and consumed
/// exactly once per tick by [`integrate`](Self::integrate).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PawnState {
    frame: Frame,
    velocity: Vec2,
}

impl PawnState {
    /// Accumulates a movement delta into the pending velocity.
    ///
    /// Multiple calls within one tick combine additively.
    pub fn apply_movement(&mut self, delta: Vec2) {
        self.velocity += delta;
    }

    /// Snapshot of the current position and facing.
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Overwrites position and facing directly, bypassing velocity
    /// integration. Used for initial placement and forced repositioning.
    pub fn set_frame(&mut self, frame: Frame) {
        self.frame = frame;
    }

    /// Folds the accumulated velocity into the frame.
    ///
    /// Deltas that cancel to exactly zero leave position and facing
    /// untouched; the velocity accumulator resets either way.
    pub(crate) fn integrate(&mut self) {
        if !self.velocity.is_zero() {
            self.frame.position += self.velocity;
            self.frame.facing = self.velocity;
        }
        self.velocity = Vec2::ZERO;
    }
}

/// Mutable actor data handed to components during a tick.
///
/// Keeping this separate from the component list is what lets a component
/// mutate its owner while the owner iterates its components.
#[derive(Debug)]
pub struct ActorState {
    id: ActorId,
    attributes: HashMap<String, i32>,
    pawn: Option<PawnState>,
}

impl ActorState {
    fn new(id: ActorId, pawn: Option<PawnState>) -> Self {
        Self {
            id,
            attributes: HashMap::new(),
            pawn,
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    /// Inserts or overwrites a named attribute.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: i32) {
        self.attributes.insert(name.into(), value);
    }

    /// Looks up a named attribute.
    ///
    /// `None` means the actor does not have the attribute, which is distinct
    /// from holding the value zero.
    pub fn attribute(&self, name: &str) -> Option<i32> {
        self.attributes.get(name).copied()
    }

    /// Adds `delta` to an existing attribute.
    ///
    /// Returns `false` without changing anything when the attribute is
    /// missing; unlike [`set_attribute`](Self::set_attribute) this never
    /// creates one.
    pub fn modify_attribute(&mut self, name: &str, delta: i32) -> bool {
        match self.attributes.get_mut(name) {
            Some(value) => {
                *value += delta;
                true
            }
            None => false,
        }
    }

    /// Pawn capability check: `Some` iff this actor has a spatial body.
    pub fn as_pawn(&self) -> Option<&PawnState> {
        self.pawn.as_ref()
    }

    /// Mutable pawn capability check.
    pub fn as_pawn_mut(&mut self) -> Option<&mut PawnState> {
        self.pawn.as_mut()
    }
}

/// An entity owned by a [`crate::world::World`]: named attributes, an
/// optional pawn body, and an ordered set of behavior components.
///
/// Actors live exactly as long as their world; components live exactly as
/// long as their actor.
pub struct Actor {
    state: ActorState,
    components: Vec<Box<dyn Component>>,
}

impl Actor {
    pub(crate) fn new(id: ActorId, pawn: Option<PawnState>) -> Self {
        Self {
            state: ActorState::new(id, pawn),
            components: Vec::new(),
        }
    }

    pub fn id(&self) -> ActorId {
        self.state.id()
    }

    /// Attaches a component. Tick order is attachment order.
    pub fn add_component(&mut self, mut component: Box<dyn Component>) {
        component.attached(self.state.id());
        self.components.push(component);
    }

    /// First attached component of the requested type, if any.
    ///
    /// Absence is a normal outcome, not an error.
    pub fn component<C: Component>(&self) -> Option<&C> {
        self.components
            .iter()
            .find_map(|component| component.as_any().downcast_ref::<C>())
    }

    /// Mutable variant of [`component`](Self::component).
    pub fn component_mut<C: Component>(&mut self) -> Option<&mut C> {
        self.components
            .iter_mut()
            .find_map(|component| component.as_any_mut().downcast_mut::<C>())
    }

    pub fn state(&self) -> &ActorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ActorState {
        &mut self.state
    }

    /// Ticks every component in attachment order, then integrates the pawn
    /// body if one is present.
    pub fn tick(&mut self, env: &TickEnv<'_>) {
        for component in &mut self.components {
            component.tick(&mut self.state, env);
        }
        if let Some(pawn) = self.state.as_pawn_mut() {
            pawn.integrate();
        }
    }
}
