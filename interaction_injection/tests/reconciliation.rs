use game_world::{
    BehaviorType, GameObject, InteractionDefinition, InteractionRef, ObjectId, ObjectKind, Sim,
    SimWorld,
};
use interaction_injection::{InjectionReport, InteractionInjector, Registration, Unregistration};

fn interaction(behavior: &'static str) -> InteractionRef {
    InteractionDefinition::new(behavior).into_ref()
}

fn behavior(name: &'static str) -> BehaviorType {
    BehaviorType::from_static(name)
}

fn stereo() -> ObjectKind {
    ObjectKind::from_static("stereo")
}

/// Deliver queued host events, as the engine's dispatcher would.
fn pump(injector: &mut InteractionInjector, world: &mut SimWorld) -> InjectionReport {
    let events = world.drain_events();
    injector.handle_events(world, events).unwrap()
}

fn started() -> (InteractionInjector, SimWorld) {
    let mut world = SimWorld::new();
    let mut injector = InteractionInjector::new();
    injector.initialize(&mut world).unwrap();
    (injector, world)
}

fn loaded(name: &str) -> (InteractionInjector, SimWorld) {
    let (mut injector, mut world) = started();
    world.load(name);
    pump(&mut injector, &mut world);
    (injector, world)
}

fn behaviors_of(world: &SimWorld, id: ObjectId) -> Vec<BehaviorType> {
    world.object(id).unwrap().interactions.behaviors()
}

#[test]
fn test_double_register_is_idempotent() {
    let (mut injector, mut world) = loaded("Sunset Valley");
    let bella = world.spawn(GameObject::new(ObjectKind::SIM, "Bella"));
    pump(&mut injector, &mut world);
    let joke = interaction("chat.joke");

    injector
        .register(&mut world, ObjectKind::SIM, joke.clone())
        .unwrap();
    let registry_after_one = injector.registry().interaction_count();
    let live_after_one = behaviors_of(&world, bella);

    let second = injector.register(&mut world, ObjectKind::SIM, joke).unwrap();

    assert_eq!(second, Registration::AlreadyPresent);
    assert_eq!(injector.registry().interaction_count(), registry_after_one);
    assert_eq!(behaviors_of(&world, bella), live_after_one);
}

#[test]
fn test_register_then_unregister_restores_live_state() {
    let (mut injector, mut world) = loaded("Sunset Valley");
    let bella = world.spawn(
        GameObject::new(ObjectKind::SIM, "Bella").with_interaction(interaction("chat.greet")),
    );
    pump(&mut injector, &mut world);
    let before = behaviors_of(&world, bella);
    let joke = interaction("chat.joke");

    injector
        .register(&mut world, ObjectKind::SIM, joke.clone())
        .unwrap();
    assert_ne!(behaviors_of(&world, bella), before);

    injector
        .unregister(&mut world, ObjectKind::SIM, &joke)
        .unwrap();

    assert_eq!(behaviors_of(&world, bella), before);
    assert!(injector.registry().interactions_for(&ObjectKind::SIM).is_empty());
}

#[test]
fn test_repeated_reconciliation_never_duplicates() {
    let (mut injector, mut world) = started();
    injector
        .register_for::<Sim, _>(&mut world, interaction("chat.joke"))
        .unwrap();
    injector
        .register_for::<Sim, _>(&mut world, interaction("chat.hug"))
        .unwrap();
    let bella = world.spawn(GameObject::new(ObjectKind::SIM, "Bella"));

    for _ in 0..3 {
        world.load("Sunset Valley");
        pump(&mut injector, &mut world);
        world.place(bella);
        pump(&mut injector, &mut world);
        injector.reconcile(&mut world).unwrap();
        world.quit();
        pump(&mut injector, &mut world);
    }

    let object = world.object(bella).unwrap();
    assert_eq!(object.interactions.count_behavior(&behavior("chat.joke")), 1);
    assert_eq!(object.interactions.count_behavior(&behavior("chat.hug")), 1);
    assert_eq!(object.interactions.len(), 2);
}

#[test]
fn test_new_actor_gets_interactions_in_registration_order() {
    let (mut injector, mut world) = loaded("Twinbrook");
    injector
        .register(&mut world, ObjectKind::SIM, interaction("chat.first"))
        .unwrap();
    injector
        .register(&mut world, ObjectKind::SIM, interaction("chat.second"))
        .unwrap();

    let actor = world.spawn_actor(GameObject::new(ObjectKind::SIM, "Vita"));
    pump(&mut injector, &mut world);

    assert_eq!(
        behaviors_of(&world, actor),
        vec![behavior("chat.first"), behavior("chat.second")]
    );
}

#[test]
fn test_register_before_world_defers_to_load() {
    let (mut injector, mut world) = started();
    let bella = world.spawn(GameObject::new(ObjectKind::SIM, "Bella"));
    let radio = world.spawn(GameObject::new(stereo(), "Radio"));

    injector
        .register(&mut world, ObjectKind::SIM, interaction("chat.joke"))
        .unwrap();
    injector
        .register(&mut world, stereo(), interaction("stereo.dance"))
        .unwrap();

    assert_eq!(world.query_count(), 0);
    assert!(behaviors_of(&world, bella).is_empty());

    world.load("Sunset Valley");
    let report = pump(&mut injector, &mut world);

    assert_eq!(report.interactions_added, 2);
    assert_eq!(behaviors_of(&world, bella), vec![behavior("chat.joke")]);
    assert_eq!(behaviors_of(&world, radio), vec![behavior("stereo.dance")]);
}

#[test]
fn test_unresolved_placement_changes_nothing() {
    let (mut injector, mut world) = loaded("Sunset Valley");
    injector
        .register(&mut world, ObjectKind::SIM, interaction("chat.joke"))
        .unwrap();
    let bella = world.spawn(GameObject::new(ObjectKind::SIM, "Bella"));
    pump(&mut injector, &mut world);
    let before = behaviors_of(&world, bella);

    world.place(ObjectId::new());
    let report = pump(&mut injector, &mut world);

    assert_eq!(report, InjectionReport::default());
    assert_eq!(behaviors_of(&world, bella), before);
    assert_eq!(injector.registry().interaction_count(), 1);
}

#[test]
fn test_despawned_object_placement_is_ignored() {
    let (mut injector, mut world) = loaded("Sunset Valley");
    injector
        .register(&mut world, stereo(), interaction("stereo.dance"))
        .unwrap();

    let radio = world.spawn(GameObject::new(stereo(), "Radio"));
    world.despawn(radio);

    let report = pump(&mut injector, &mut world);
    assert_eq!(report.interactions_added, 0);
}

#[test]
fn test_unregister_strips_every_live_object() {
    let (mut injector, mut world) = loaded("Sunset Valley");
    let greet = interaction("chat.greet");
    let o1 = world.spawn(GameObject::new(ObjectKind::SIM, "Bella").with_interaction(greet.clone()));
    let o2 = world.spawn(GameObject::new(ObjectKind::SIM, "Gunther"));
    pump(&mut injector, &mut world);

    let x = interaction("chat.joke");
    injector
        .register(&mut world, ObjectKind::SIM, x.clone())
        .unwrap();
    assert!(world.object(o1).unwrap().has_behavior(&behavior("chat.joke")));
    assert!(world.object(o2).unwrap().has_behavior(&behavior("chat.joke")));

    let outcome = injector.unregister(&mut world, ObjectKind::SIM, &x).unwrap();

    assert!(matches!(outcome, Unregistration::Removed(r) if r.interactions_removed == 2));
    assert_eq!(behaviors_of(&world, o1), vec![behavior("chat.greet")]);
    assert!(behaviors_of(&world, o2).is_empty());
}

#[test]
fn test_existing_behavior_does_not_block_later_interactions() {
    let (mut injector, mut world) = started();
    let bella = world.spawn(
        GameObject::new(ObjectKind::SIM, "Bella").with_interaction(interaction("chat.joke")),
    );
    injector
        .register(&mut world, ObjectKind::SIM, interaction("chat.joke"))
        .unwrap();
    injector
        .register(&mut world, ObjectKind::SIM, interaction("chat.hug"))
        .unwrap();

    world.load("Sunset Valley");
    pump(&mut injector, &mut world);

    assert_eq!(
        behaviors_of(&world, bella),
        vec![behavior("chat.joke"), behavior("chat.hug")]
    );
}

#[test]
fn test_quit_keeps_registry_and_stops_actor_injection() {
    let (mut injector, mut world) = loaded("Sunset Valley");
    injector
        .register(&mut world, ObjectKind::SIM, interaction("chat.joke"))
        .unwrap();

    world.quit();
    pump(&mut injector, &mut world);
    assert!(!injector.is_listening_for_actors());
    assert_eq!(injector.registry().interaction_count(), 1);

    // Actors built while unloaded are caught up by the next load instead
    let vita = world.spawn_actor(GameObject::new(ObjectKind::SIM, "Vita"));
    assert!(world.drain_events().is_empty());

    world.load("Sunset Valley");
    pump(&mut injector, &mut world);
    assert_eq!(behaviors_of(&world, vita), vec![behavior("chat.joke")]);
}
