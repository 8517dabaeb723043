//! Fixed-step actor simulation framework.
//!
//! `hunt-engine` owns the tick architecture: a [`World`] of actors composed
//! from pluggable [`Component`]s, pawn bodies that integrate accumulated
//! velocity into position once per tick, and an [`InputManager`] that
//! classifies every polled key as idle, held, or freshly pressed. Game flavor
//! (pawn kinds, balance numbers, rendering) lives in the crates layered on
//! top; nothing in here branches on it.
pub mod actor;
pub mod component;
pub mod input;
pub mod math;
pub mod world;

pub use actor::{Actor, ActorId, ActorState, PawnState};
pub use component::{Component, MoveBindings, MoveComponent};
pub use input::{InputManager, InputOracle, Key};
pub use math::{Frame, Vec2};
pub use world::{TickEnv, World};
