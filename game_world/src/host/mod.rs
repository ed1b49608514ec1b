//! The contract between the injector and the game engine.
//!
//! The engine owns every live object and every interaction set. Injection only
//! ever goes through this trait, so a host is free to back it with anything from
//! a scripting bridge to the in-memory [`SimWorld`](crate::SimWorld).

mod events;

pub use events::*;

use thiserror::Error;

use crate::entities::{ObjectId, ObjectKind};
use crate::interactions::{BehaviorType, InteractionRef};

/// Faults raised by the host engine.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("object {0} does not exist")]
    ObjectNotFound(ObjectId),

    #[error("object query for kind '{kind}' failed: {reason}")]
    QueryFailed { kind: ObjectKind, reason: String },

    #[error("host rejected subscription to {0}")]
    SubscriptionRejected(EventChannel),

    #[error("subscription {id} on {channel} is not active")]
    UnknownSubscription { id: u64, channel: EventChannel },
}

pub type HostResult<T> = Result<T, HostError>;

/// Outbound calls the injector makes into the game engine.
pub trait Host {
    /// Whether a world is loaded and its objects may be queried.
    fn is_world_loaded(&self) -> bool;

    /// Live objects of exactly this kind, in the host's enumeration order.
    fn objects_of_kind(&self, kind: &ObjectKind) -> HostResult<Vec<ObjectId>>;

    /// Kind of a live object, or `None` if the id does not resolve.
    fn resolve_object(&self, id: ObjectId) -> HostResult<Option<ObjectKind>>;

    /// Copy of the object's current interaction set.
    fn interactions(&self, id: ObjectId) -> HostResult<Vec<InteractionRef>>;

    /// Whether the object exposes any interaction of this behavior.
    fn has_behavior(&self, id: ObjectId, behavior: &BehaviorType) -> HostResult<bool>;

    /// Append to the object's live interaction set.
    fn add_interaction(&mut self, id: ObjectId, interaction: InteractionRef) -> HostResult<()>;

    /// Remove one entry from the live set, matched by identity.
    fn remove_interaction(&mut self, id: ObjectId, interaction: &InteractionRef)
        -> HostResult<()>;

    fn subscribe(&mut self, channel: EventChannel) -> HostResult<Subscription>;

    fn unsubscribe(&mut self, subscription: Subscription) -> HostResult<()>;
}
