//! Facing-dependent glyphs for pawn rendering.

use std::any::Any;

use hunt_engine::{ActorState, Component, TickEnv, Vec2};
use serde::Deserialize;

/// Glyph table keyed by the facing a pawn's movement produced.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct SigilSet {
    pub none: char,
    pub left: char,
    pub right: char,
    pub up: char,
    pub down: char,
}

impl SigilSet {
    /// The same glyph regardless of facing.
    pub const fn uniform(glyph: char) -> Self {
        Self {
            none: glyph,
            left: glyph,
            right: glyph,
            up: glyph,
            down: glyph,
        }
    }

    /// Glyph for `facing`. The vertical sign wins over the horizontal one;
    /// positive x means left because the grid projection mirrors the axis.
    pub fn for_facing(&self, facing: Vec2) -> char {
        let mut sigil = self.none;
        if facing.x > 0.0 {
            sigil = self.left;
        } else if facing.x < 0.0 {
            sigil = self.right;
        }
        if facing.y > 0.0 {
            sigil = self.up;
        } else if facing.y < 0.0 {
            sigil = self.down;
        }
        sigil
    }
}

/// Carries a pawn's sigils so the renderer can pick one per frame.
///
/// Purely presentational; ticking is a no-op.
#[derive(Clone, Copy, Debug)]
pub struct SigilComponent {
    sigils: SigilSet,
}

impl SigilComponent {
    pub fn new(sigils: SigilSet) -> Self {
        Self { sigils }
    }

    pub fn sigils(&self) -> &SigilSet {
        &self.sigils
    }

    /// Glyph for the owning pawn's current facing.
    pub fn glyph(&self, facing: Vec2) -> char {
        self.sigils.for_facing(facing)
    }
}

impl Component for SigilComponent {
    fn tick(&mut self, _owner: &mut ActorState, _env: &TickEnv<'_>) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
