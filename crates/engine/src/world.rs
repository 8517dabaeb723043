//! The world: actor ownership, tick order, and spatial queries.

use crate::actor::{Actor, ActorId, PawnState};
use crate::input::InputManager;

/// Per-tick environment handed down to every component.
///
/// Bundles the context a component may consult while ticking. The input
/// state is owned by the driver and must be captured before the world ticks.
#[derive(Clone, Copy)]
pub struct TickEnv<'a> {
    pub input: &'a InputManager,
}

impl<'a> TickEnv<'a> {
    pub fn new(input: &'a InputManager) -> Self {
        Self { input }
    }
}

/// Owns every actor in the simulation and drives their updates.
///
/// Actors are stored and ticked in creation order, and nothing is removed
/// until the world itself is dropped. Callers depend on that order: the
/// client draws later actors over earlier ones, and a component may observe
/// the effects of actors that already ticked this same frame.
#[derive(Default)]
pub struct World {
    actors: Vec<Actor>,
}

impl World {
    pub fn new() -> Self {
        Self { actors: Vec::new() }
    }

    /// Registers a plain actor (no spatial body) and returns its id.
    pub fn create_actor(&mut self) -> ActorId {
        self.register(None)
    }

    /// Registers a pawn-capable actor and returns its id.
    pub fn create_pawn(&mut self) -> ActorId {
        self.register(Some(PawnState::default()))
    }

    fn register(&mut self, pawn: Option<PawnState>) -> ActorId {
        let id = ActorId(self.actors.len() as u32);
        self.actors.push(Actor::new(id, pawn));
        id
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id.0 as usize)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id.0 as usize)
    }

    /// All actors in creation order.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    /// Mutable iteration in creation order.
    pub fn actors_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        self.actors.iter_mut()
    }

    /// Ids of pawn-carrying actors whose truncated position equals `(x, y)`,
    /// in creation order. An empty result is a normal outcome.
    pub fn pawns_at(&self, x: i32, y: i32) -> Vec<ActorId> {
        self.actors
            .iter()
            .filter(|actor| {
                actor
                    .state()
                    .as_pawn()
                    .is_some_and(|pawn| pawn.frame().position.grid() == (x, y))
            })
            .map(Actor::id)
            .collect()
    }

    /// Advances the simulation by one tick, in creation order.
    pub fn tick(&mut self, env: &TickEnv<'_>) {
        for actor in &mut self.actors {
            actor.tick(env);
        }
    }
}
