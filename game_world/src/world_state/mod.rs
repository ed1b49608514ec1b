//! In-memory reference host.
//!
//! `SimWorld` plays the part of the game engine: it owns the objects, tracks
//! whether a world is loaded, and raises lifecycle events. Events are queued in an
//! outbox only for channels somebody is subscribed to, and the embedder drains
//! the outbox into its listeners, the way the engine's dispatcher would.

use std::cell::Cell;
use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace};

use crate::entities::{GameObject, ObjectId, ObjectKind};
use crate::host::{EventChannel, Host, HostError, HostResult, LifecycleEvent, Subscription};
use crate::interactions::{BehaviorType, InteractionRef};

/// The complete state of the reference host.
#[derive(Debug, Default)]
pub struct SimWorld {
    /// Name of the loaded world, `None` while at the main menu.
    current_world: Option<String>,

    objects: HashMap<ObjectId, GameObject>,

    /// Spawn order, used as the query enumeration order.
    spawn_order: Vec<ObjectId>,

    /// Active subscriptions by id.
    subscriptions: HashMap<u64, EventChannel>,
    next_subscription_id: u64,

    outbox: VecDeque<LifecycleEvent>,

    /// Number of object queries served, successful or not.
    queries: Cell<usize>,
}

impl SimWorld {
    /// Create a new host with no world loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the loaded world.
    pub fn current_world(&self) -> Option<&str> {
        self.current_world.as_deref()
    }

    /// Finish loading a world and raise `WorldLoadFinished`.
    ///
    /// Objects spawned earlier become the world's pre-existing objects.
    pub fn load(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!(target: "world", "World '{}' loaded with {} objects", name, self.objects.len());
        self.current_world = Some(name);
        self.emit(LifecycleEvent::WorldLoadFinished);
    }

    /// Raise `WorldQuit` and unload the world.
    ///
    /// Objects are kept, as if saved with the world, so a later `load` sees them
    /// again.
    pub fn quit(&mut self) {
        if let Some(name) = self.current_world.take() {
            debug!(target: "world", "World '{}' quit", name);
        }
        self.emit(LifecycleEvent::WorldQuit);
    }

    /// Add a prop to the world. Raises `ObjectPlacedInLot` when a world is loaded.
    pub fn spawn(&mut self, object: GameObject) -> ObjectId {
        let id = self.insert(object);
        if self.is_world_loaded() {
            self.emit(LifecycleEvent::ObjectPlacedInLot { object: id });
        }
        id
    }

    /// Add an actor to the world. Raises `ActorInstantiated` when a world is loaded.
    pub fn spawn_actor(&mut self, actor: GameObject) -> ObjectId {
        let id = self.insert(actor);
        if self.is_world_loaded() {
            self.emit(LifecycleEvent::ActorInstantiated { actor: id });
        }
        id
    }

    /// Raise `ObjectPlacedInLot` for any id, resolvable or not.
    pub fn place(&mut self, id: ObjectId) {
        self.emit(LifecycleEvent::ObjectPlacedInLot { object: id });
    }

    /// Remove an object from the world.
    pub fn despawn(&mut self, id: ObjectId) -> Option<GameObject> {
        self.spawn_order.retain(|o| *o != id);
        self.objects.remove(&id)
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<LifecycleEvent> {
        self.outbox.drain(..).collect()
    }

    /// Get object by ID.
    pub fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.get(&id)
    }

    /// Get mutable object by ID.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(&id)
    }

    /// All objects in spawn order.
    pub fn objects(&self) -> impl Iterator<Item = &GameObject> {
        self.spawn_order.iter().filter_map(|id| self.objects.get(id))
    }

    /// Check if any subscription is active on the channel.
    pub fn is_subscribed(&self, channel: EventChannel) -> bool {
        self.subscriptions.values().any(|c| *c == channel)
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Number of `objects_of_kind` calls served so far.
    pub fn query_count(&self) -> usize {
        self.queries.get()
    }

    fn insert(&mut self, object: GameObject) -> ObjectId {
        let id = object.id;
        if self.objects.insert(id, object).is_none() {
            self.spawn_order.push(id);
        }
        id
    }

    fn emit(&mut self, event: LifecycleEvent) {
        if self.is_subscribed(event.channel()) {
            self.outbox.push_back(event);
        } else {
            trace!(target: "world", "No listener on {}, dropping event", event.channel());
        }
    }

    fn object_or_err(&self, id: ObjectId) -> HostResult<&GameObject> {
        self.objects.get(&id).ok_or(HostError::ObjectNotFound(id))
    }
}

impl Host for SimWorld {
    fn is_world_loaded(&self) -> bool {
        self.current_world.is_some()
    }

    fn objects_of_kind(&self, kind: &ObjectKind) -> HostResult<Vec<ObjectId>> {
        self.queries.set(self.queries.get() + 1);

        if !self.is_world_loaded() {
            return Err(HostError::QueryFailed {
                kind: kind.clone(),
                reason: "no world is loaded".to_string(),
            });
        }

        Ok(self
            .objects()
            .filter(|o| &o.kind == kind)
            .map(|o| o.id)
            .collect())
    }

    fn resolve_object(&self, id: ObjectId) -> HostResult<Option<ObjectKind>> {
        Ok(self.objects.get(&id).map(|o| o.kind.clone()))
    }

    fn interactions(&self, id: ObjectId) -> HostResult<Vec<InteractionRef>> {
        Ok(self.object_or_err(id)?.interactions.snapshot())
    }

    fn has_behavior(&self, id: ObjectId, behavior: &BehaviorType) -> HostResult<bool> {
        Ok(self.object_or_err(id)?.has_behavior(behavior))
    }

    fn add_interaction(&mut self, id: ObjectId, interaction: InteractionRef) -> HostResult<()> {
        let object = self
            .objects
            .get_mut(&id)
            .ok_or(HostError::ObjectNotFound(id))?;
        object.interactions.push(interaction);
        Ok(())
    }

    fn remove_interaction(
        &mut self,
        id: ObjectId,
        interaction: &InteractionRef,
    ) -> HostResult<()> {
        let object = self
            .objects
            .get_mut(&id)
            .ok_or(HostError::ObjectNotFound(id))?;
        object.interactions.remove_instance(interaction);
        Ok(())
    }

    fn subscribe(&mut self, channel: EventChannel) -> HostResult<Subscription> {
        let id = self.next_subscription_id;
        self.next_subscription_id += 1;
        self.subscriptions.insert(id, channel);
        trace!(target: "world", "Subscription {} opened on {}", id, channel);
        Ok(Subscription::new(id, channel))
    }

    fn unsubscribe(&mut self, subscription: Subscription) -> HostResult<()> {
        match self.subscriptions.remove(&subscription.id()) {
            Some(_) => {
                trace!(target: "world", "Subscription {} closed", subscription.id());
                Ok(())
            }
            None => Err(HostError::UnknownSubscription {
                id: subscription.id(),
                channel: subscription.channel(),
            }),
        }
    }
}
