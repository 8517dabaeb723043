//! Data-driven pawn definitions.
//!
//! A pawn flavor is a catalog row instead of a subclass: a kind tag, the
//! attributes the pawn starts with, and the sigils it renders as. The stock
//! catalog ships as embedded RON; clients may parse their own.

use hunt_engine::{ActorId, Frame, MoveComponent, Vec2, World};
use serde::Deserialize;

use crate::components::StatTweakComponent;
use crate::sigil::{SigilComponent, SigilSet};

/// The pawn flavors the game knows how to spawn.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PawnKind {
    Player,
    Damager,
    Healer,
}

impl PawnKind {
    pub const ALL: [PawnKind; 3] = [PawnKind::Player, PawnKind::Damager, PawnKind::Healer];
}

/// Spawnable pawn definition: starting attributes plus presentation sigils.
///
/// Attributes absent from a row simply do not exist on the spawned pawn;
/// overlap resolution reads that as "no effect".
#[derive(Clone, Debug, Deserialize)]
pub struct PawnTemplate {
    pub kind: PawnKind,
    pub attributes: Vec<(String, i32)>,
    pub sigils: SigilSet,
}

impl PawnTemplate {
    /// Spawns a pawn from this template at `position`, wiring the component
    /// set its kind needs.
    ///
    /// The player gets movement and the manual stat hotkeys; every kind
    /// carries its sigils for the renderer. Placement goes through
    /// `set_frame` so the new pawn starts without a facing.
    pub fn spawn(&self, world: &mut World, position: Vec2) -> ActorId {
        let id = world.create_pawn();
        let actor = world
            .actor_mut(id)
            .expect("world returns the actor it just created");

        for (name, value) in &self.attributes {
            actor.state_mut().set_attribute(name.clone(), *value);
        }
        actor
            .state_mut()
            .as_pawn_mut()
            .expect("created as pawn")
            .set_frame(Frame::at(position));

        if self.kind == PawnKind::Player {
            actor.add_component(Box::new(MoveComponent::new()));
            actor.add_component(Box::new(StatTweakComponent::standard()));
        }
        actor.add_component(Box::new(SigilComponent::new(self.sigils)));

        id
    }
}

/// Errors surfaced while loading or validating a pawn catalog.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("failed to parse pawn catalog: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("pawn catalog defines {kind} more than once")]
    DuplicateKind { kind: PawnKind },

    #[error("pawn catalog is missing a {kind} definition")]
    MissingKind { kind: PawnKind },
}

/// Catalog holding one template per pawn kind.
#[derive(Clone, Debug)]
pub struct PawnCatalog {
    templates: Vec<PawnTemplate>,
}

impl PawnCatalog {
    /// Parses a catalog from RON and checks that every kind appears exactly
    /// once.
    pub fn from_ron(source: &str) -> Result<Self, TemplateError> {
        let templates: Vec<PawnTemplate> = ron::from_str(source)?;
        for kind in PawnKind::ALL {
            match templates.iter().filter(|t| t.kind == kind).count() {
                0 => return Err(TemplateError::MissingKind { kind }),
                1 => {}
                _ => return Err(TemplateError::DuplicateKind { kind }),
            }
        }
        Ok(Self { templates })
    }

    /// The built-in catalog with the stock balance numbers.
    pub fn builtin() -> Self {
        Self::from_ron(include_str!("../assets/pawns.ron"))
            .expect("built-in pawn catalog is valid")
    }

    pub fn template(&self, kind: PawnKind) -> &PawnTemplate {
        self.templates
            .iter()
            .find(|t| t.kind == kind)
            .expect("catalog validated at construction")
    }
}
