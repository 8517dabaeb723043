//! Behavior components making up the pawn flavors.

use std::any::Any;

use hunt_engine::{ActorState, Component, Key, TickEnv};

/// One hotkey row: on the key's rising edge, add `delta` to `attribute`.
#[derive(Clone, Copy, Debug)]
pub struct TweakBinding {
    pub key: Key,
    pub attribute: &'static str,
    pub delta: i32,
}

/// Manual attribute adjustments on number keys.
///
/// Rows only ever modify attributes the owner already has.
#[derive(Clone, Debug)]
pub struct StatTweakComponent {
    bindings: Vec<TweakBinding>,
}

impl StatTweakComponent {
    pub fn new(bindings: Vec<TweakBinding>) -> Self {
        Self { bindings }
    }

    /// The stock table: 1/2 damage the player, 3/4 heal, 5/6 grant score.
    pub fn standard() -> Self {
        Self::new(vec![
            TweakBinding {
                key: Key::Num1,
                attribute: "hp",
                delta: -10,
            },
            TweakBinding {
                key: Key::Num2,
                attribute: "hp",
                delta: -20,
            },
            TweakBinding {
                key: Key::Num3,
                attribute: "hp",
                delta: 10,
            },
            TweakBinding {
                key: Key::Num4,
                attribute: "hp",
                delta: 20,
            },
            TweakBinding {
                key: Key::Num5,
                attribute: "score",
                delta: 10,
            },
            TweakBinding {
                key: Key::Num6,
                attribute: "score",
                delta: 20,
            },
        ])
    }
}

impl Component for StatTweakComponent {
    fn tick(&mut self, owner: &mut ActorState, env: &TickEnv<'_>) {
        for binding in &self.bindings {
            if env.input.is_first_pressed(binding.key) {
                owner.modify_attribute(binding.attribute, binding.delta);
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hunt_engine::{InputManager, InputOracle, World};

    struct Held(Vec<Key>);

    impl InputOracle for Held {
        fn is_down(&self, key: Key) -> bool {
            self.0.contains(&key)
        }
    }

    #[test]
    fn hotkeys_adjust_existing_attributes_on_edges() {
        let mut world = World::new();
        let id = world.create_pawn();
        let actor = world.actor_mut(id).expect("actor exists");
        actor.state_mut().set_attribute("hp", 100);
        actor.state_mut().set_attribute("score", 0);
        actor.add_component(Box::new(StatTweakComponent::standard()));

        let mut input = InputManager::new();
        input.capture(&Held(vec![Key::Num2, Key::Num5]));
        world.tick(&hunt_engine::TickEnv::new(&input));

        let state = world.actor(id).expect("actor exists").state();
        assert_eq!(state.attribute("hp"), Some(80));
        assert_eq!(state.attribute("score"), Some(10));

        // Held keys are not fresh edges; nothing changes on the next tick.
        input.capture(&Held(vec![Key::Num2, Key::Num5]));
        world.tick(&hunt_engine::TickEnv::new(&input));
        let state = world.actor(id).expect("actor exists").state();
        assert_eq!(state.attribute("hp"), Some(80));
        assert_eq!(state.attribute("score"), Some(10));
    }

    #[test]
    fn hotkeys_never_create_attributes() {
        let mut world = World::new();
        let id = world.create_pawn();
        world
            .actor_mut(id)
            .expect("actor exists")
            .add_component(Box::new(StatTweakComponent::standard()));

        let mut input = InputManager::new();
        input.capture(&Held(vec![Key::Num1]));
        world.tick(&hunt_engine::TickEnv::new(&input));

        let state = world.actor(id).expect("actor exists").state();
        assert_eq!(state.attribute("hp"), None);
    }
}
