//! Lifecycle events raised by the host engine.

use serde::{Deserialize, Serialize};

use crate::entities::ObjectId;

/// Named event sources a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventChannel {
    /// A world finished loading and its objects are queryable.
    WorldLoadFinished,
    /// The current world is being torn down.
    WorldQuit,
    /// An object was placed on a lot (bought, moved, or spawned).
    ObjectPlacedInLot,
    /// An actor (sim) was instantiated in the running world.
    ActorInstantiated,
}

impl EventChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventChannel::WorldLoadFinished => "world_load_finished",
            EventChannel::WorldQuit => "world_quit",
            EventChannel::ObjectPlacedInLot => "object_placed_in_lot",
            EventChannel::ActorInstantiated => "actor_instantiated",
        }
    }
}

impl std::fmt::Display for EventChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One event record as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    WorldLoadFinished,
    WorldQuit,
    /// The id may refer to an object that is already gone.
    ObjectPlacedInLot { object: ObjectId },
    ActorInstantiated { actor: ObjectId },
}

impl LifecycleEvent {
    /// The channel this event is delivered on.
    pub fn channel(&self) -> EventChannel {
        match self {
            LifecycleEvent::WorldLoadFinished => EventChannel::WorldLoadFinished,
            LifecycleEvent::WorldQuit => EventChannel::WorldQuit,
            LifecycleEvent::ObjectPlacedInLot { .. } => EventChannel::ObjectPlacedInLot,
            LifecycleEvent::ActorInstantiated { .. } => EventChannel::ActorInstantiated,
        }
    }

    /// The object the event is about, if any.
    pub fn target(&self) -> Option<ObjectId> {
        match self {
            LifecycleEvent::ObjectPlacedInLot { object } => Some(*object),
            LifecycleEvent::ActorInstantiated { actor } => Some(*actor),
            _ => None,
        }
    }
}

/// Handle for one active subscription.
///
/// Not `Clone`: releasing a subscription consumes its handle, so a handle can
/// be released at most once.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: u64,
    channel: EventChannel,
}

impl Subscription {
    /// Issued by host implementations only.
    pub fn new(id: u64, channel: EventChannel) -> Self {
        Self { id, channel }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn channel(&self) -> EventChannel {
        self.channel
    }
}
