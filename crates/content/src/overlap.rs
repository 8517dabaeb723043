//! Overlap rules between the player and other pawns.
//!
//! Resolution happens in two phases so callers never need two actors
//! borrowed at once: [`OverlapEffects::read`] copies the effect attributes
//! off the overlapped pawn, then [`OverlapEffects::apply`] mutates the
//! player and reports what actually landed.

use hunt_engine::ActorState;

/// Damage at or above this threshold is reported as a critical hit.
pub const CRITICAL_DAMAGE: i32 = 20;

/// Effect attributes one pawn carries toward whoever overlaps it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlapEffects {
    heal: i32,
    damage: i32,
    points: i32,
}

impl OverlapEffects {
    /// Reads the effect attributes off a pawn; an absent attribute means
    /// that effect does not apply.
    pub fn read(other: &ActorState) -> Self {
        Self {
            heal: other.attribute("heal").unwrap_or(0),
            damage: other.attribute("damage").unwrap_or(0),
            points: other.attribute("points").unwrap_or(0),
        }
    }

    /// Applies the effects to the player.
    ///
    /// Each effect lands only if the player carries the matching attribute
    /// (`modify_attribute` never creates one); the outcome reports the
    /// amounts that actually applied.
    pub fn apply(&self, player: &mut ActorState) -> OverlapOutcome {
        let healed = if player.modify_attribute("hp", self.heal) {
            self.heal
        } else {
            0
        };
        let damaged = if player.modify_attribute("hp", -self.damage) {
            self.damage
        } else {
            0
        };
        let points = if player.modify_attribute("score", self.points) {
            self.points
        } else {
            0
        };

        OverlapOutcome {
            healed,
            damaged,
            points,
        }
    }
}

/// What an overlap did to the player, for message formatting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlapOutcome {
    pub healed: i32,
    pub damaged: i32,
    pub points: i32,
}

impl OverlapOutcome {
    pub fn is_critical(&self) -> bool {
        self.damaged >= CRITICAL_DAMAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hunt_engine::World;

    fn pawn_with(world: &mut World, attributes: &[(&str, i32)]) -> hunt_engine::ActorId {
        let id = world.create_pawn();
        let state = world.actor_mut(id).expect("actor exists").state_mut();
        for (name, value) in attributes {
            state.set_attribute(*name, *value);
        }
        id
    }

    #[test]
    fn damager_contact_hurts_and_scores() {
        let mut world = World::new();
        let player = pawn_with(&mut world, &[("hp", 100), ("score", 0)]);
        let damager = pawn_with(&mut world, &[("damage", 20), ("points", 10)]);

        let effects = OverlapEffects::read(world.actor(damager).unwrap().state());
        let outcome = effects.apply(world.actor_mut(player).unwrap().state_mut());

        assert_eq!(
            outcome,
            OverlapOutcome {
                healed: 0,
                damaged: 20,
                points: 10
            }
        );
        assert!(outcome.is_critical());

        let state = world.actor(player).unwrap().state();
        assert_eq!(state.attribute("hp"), Some(80));
        assert_eq!(state.attribute("score"), Some(10));
    }

    #[test]
    fn healer_contact_heals_below_the_critical_threshold() {
        let mut world = World::new();
        let player = pawn_with(&mut world, &[("hp", 50), ("score", 0)]);
        let healer = pawn_with(&mut world, &[("heal", 5), ("points", 5)]);

        let effects = OverlapEffects::read(world.actor(healer).unwrap().state());
        let outcome = effects.apply(world.actor_mut(player).unwrap().state_mut());

        assert_eq!(outcome.healed, 5);
        assert_eq!(outcome.damaged, 0);
        assert!(!outcome.is_critical());
        assert_eq!(world.actor(player).unwrap().state().attribute("hp"), Some(55));
    }

    #[test]
    fn effects_skip_attributes_the_player_lacks() {
        let mut world = World::new();
        // No score attribute on this one.
        let player = pawn_with(&mut world, &[("hp", 100)]);
        let damager = pawn_with(&mut world, &[("damage", 20), ("points", 10)]);

        let effects = OverlapEffects::read(world.actor(damager).unwrap().state());
        let outcome = effects.apply(world.actor_mut(player).unwrap().state_mut());

        assert_eq!(outcome.points, 0);
        assert_eq!(world.actor(player).unwrap().state().attribute("score"), None);
    }

    #[test]
    fn plain_pawns_have_no_effect() {
        let mut world = World::new();
        let player = pawn_with(&mut world, &[("hp", 100), ("score", 0)]);
        let bystander = pawn_with(&mut world, &[]);

        let effects = OverlapEffects::read(world.actor(bystander).unwrap().state());
        let outcome = effects.apply(world.actor_mut(player).unwrap().state_mut());

        assert_eq!(outcome, OverlapOutcome::default());
        assert_eq!(world.actor(player).unwrap().state().attribute("hp"), Some(100));
    }
}
