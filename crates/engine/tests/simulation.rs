//! End-to-end tick behavior through the public API.

use std::any::Any;

use hunt_engine::{
    Actor, ActorId, ActorState, Component, Frame, InputManager, InputOracle, Key, MoveComponent,
    TickEnv, Vec2, World,
};

struct Held(Vec<Key>);

impl InputOracle for Held {
    fn is_down(&self, key: Key) -> bool {
        self.0.contains(&key)
    }
}

/// Applies a single queued movement delta, then goes quiet.
struct Nudge {
    pending: Option<Vec2>,
}

impl Nudge {
    fn once(delta: Vec2) -> Self {
        Self {
            pending: Some(delta),
        }
    }
}

impl Component for Nudge {
    fn tick(&mut self, owner: &mut ActorState, _env: &TickEnv<'_>) {
        if let (Some(delta), Some(pawn)) = (self.pending.take(), owner.as_pawn_mut()) {
            pawn.apply_movement(delta);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn spawn_pawn_at(world: &mut World, position: Vec2) -> ActorId {
    let id = world.create_pawn();
    world
        .actor_mut(id)
        .expect("freshly created actor")
        .state_mut()
        .as_pawn_mut()
        .expect("created as pawn")
        .set_frame(Frame::at(position));
    id
}

fn frame_of(world: &World, id: ActorId) -> Frame {
    world
        .actor(id)
        .expect("actor exists")
        .state()
        .as_pawn()
        .expect("actor is a pawn")
        .frame()
}

#[test]
fn component_movement_integrates_once() {
    let mut world = World::new();
    let pawn = spawn_pawn_at(&mut world, Vec2::new(5.0, 5.0));
    world
        .actor_mut(pawn)
        .expect("pawn exists")
        .add_component(Box::new(Nudge::once(Vec2::new(1.0, 0.0))));

    let input = InputManager::new();
    let env = TickEnv::new(&input);

    world.tick(&env);
    let frame = frame_of(&world, pawn);
    assert_eq!(frame.position, Vec2::new(6.0, 5.0));
    assert_eq!(frame.facing, Vec2::new(1.0, 0.0));

    // No movement on the second tick: position and facing stay put.
    world.tick(&env);
    let frame = frame_of(&world, pawn);
    assert_eq!(frame.position, Vec2::new(6.0, 5.0));
    assert_eq!(frame.facing, Vec2::new(1.0, 0.0));
}

#[test]
fn move_component_steps_on_edges_not_while_held() {
    let mut world = World::new();
    let pawn = spawn_pawn_at(&mut world, Vec2::new(10.0, 10.0));
    world
        .actor_mut(pawn)
        .expect("pawn exists")
        .add_component(Box::new(MoveComponent::new()));

    let mut input = InputManager::new();

    // Press A: one step of +x on the rising edge.
    input.capture(&Held(vec![Key::A]));
    world.tick(&TickEnv::new(&input));
    assert_eq!(frame_of(&world, pawn).position, Vec2::new(11.0, 10.0));

    // Still held: no further steps.
    input.capture(&Held(vec![Key::A]));
    world.tick(&TickEnv::new(&input));
    assert_eq!(frame_of(&world, pawn).position, Vec2::new(11.0, 10.0));

    // Release and press again: another step.
    input.capture(&Held(vec![]));
    world.tick(&TickEnv::new(&input));
    input.capture(&Held(vec![Key::A]));
    world.tick(&TickEnv::new(&input));
    assert_eq!(frame_of(&world, pawn).position, Vec2::new(12.0, 10.0));
}

#[test]
fn opposed_keys_cancel_without_turning() {
    let mut world = World::new();
    let pawn = spawn_pawn_at(&mut world, Vec2::new(7.0, 7.0));
    world
        .actor_mut(pawn)
        .expect("pawn exists")
        .add_component(Box::new(MoveComponent::new()));

    let mut input = InputManager::new();
    input.capture(&Held(vec![Key::A, Key::D]));
    world.tick(&TickEnv::new(&input));

    let frame = frame_of(&world, pawn);
    assert_eq!(frame.position, Vec2::new(7.0, 7.0));
    assert_eq!(frame.facing, Vec2::ZERO);
}

#[test]
fn move_component_on_a_plain_actor_is_a_no_op() {
    let mut world = World::new();
    let actor = world.create_actor();
    world
        .actor_mut(actor)
        .expect("actor exists")
        .add_component(Box::new(MoveComponent::new()));

    let mut input = InputManager::new();
    input.capture(&Held(vec![Key::W]));
    world.tick(&TickEnv::new(&input));

    assert!(world.actor(actor).expect("actor exists").state().as_pawn().is_none());
}

#[test]
fn attribute_flow_matches_presence_rules() {
    let mut world = World::new();
    let id = world.create_pawn();
    let state = world.actor_mut(id).expect("actor exists").state_mut();

    state.set_attribute("hp", 100);
    assert!(state.modify_attribute("hp", -30));
    assert_eq!(state.attribute("hp"), Some(70));

    assert!(!state.modify_attribute("score", 10));
    assert_eq!(state.attribute("score"), None);
    assert_eq!(state.attribute("hp"), Some(70));
}

#[test]
fn typed_component_lookup_scans_in_attachment_order() {
    let mut world = World::new();
    let id = world.create_pawn();
    let actor = world.actor_mut(id).expect("actor exists");
    actor.add_component(Box::new(Nudge::once(Vec2::new(0.0, 1.0))));
    actor.add_component(Box::new(MoveComponent::new()));

    let actor: &Actor = world.actor(id).expect("actor exists");
    assert!(actor.component::<MoveComponent>().is_some());
    assert!(actor.component::<Nudge>().is_some());
}

#[test]
fn missing_component_lookup_is_not_an_error() {
    let mut world = World::new();
    let id = world.create_actor();
    let actor = world.actor(id).expect("actor exists");
    assert!(actor.component::<MoveComponent>().is_none());
}
