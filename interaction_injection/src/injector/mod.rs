//! Injector - registration API and event-driven reconciliation.
//!
//! The injector reacts to host lifecycle events; it never drives the game loop:
//! 1. **World loaded**: start listening for actors, then bring every existing
//!    object of every registered kind up to date
//! 2. **Object placed**: resolve the object and inject its kind's interactions
//! 3. **Actor instantiated**: same, for the new actor
//! 4. **World quit**: stop listening for actors; the registry is kept
//!
//! Registering or unregistering while a world is loaded also updates live
//! objects immediately. With no world loaded, nothing is queried and the next
//! world load catches up.

mod reconcile;

pub use reconcile::*;

use game_world::{GameObjectKind, Host, InteractionRef, LifecycleEvent, ObjectId, ObjectKind};
use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::events::ListenerSlots;
use crate::registry::Registry;

/// Outcome of a registration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// Added to the registry; the report covers the live back-fill.
    Added(InjectionReport),
    /// An interaction of the same behavior was already registered for the kind.
    AlreadyPresent,
}

/// Outcome of an unregistration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unregistration {
    /// Removed from the registry; the report covers live objects.
    Removed(RemovalReport),
    NotRegistered,
}

/// The interaction registry together with its host subscriptions.
#[derive(Debug, Default)]
pub struct InteractionInjector {
    registry: Registry,
    listeners: ListenerSlots,
}

impl InteractionInjector {
    /// Create an injector with an empty registry and no subscriptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to world load, world quit and object placement.
    ///
    /// Call once at startup. Later calls do nothing.
    pub fn initialize<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        if self.listeners.is_open() {
            return Ok(());
        }
        self.listeners.open(host)?;
        debug!(target: "injection", "Interaction injector initialized");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.listeners.is_open()
    }

    /// Whether the per-world actor subscription is currently held.
    pub fn is_listening_for_actors(&self) -> bool {
        self.listeners.is_listening_for_actors()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Register an interaction for every object of a kind.
    ///
    /// If a world is loaded, existing objects of the kind get the interaction
    /// right away, unless they already expose its behavior.
    pub fn register<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        kind: ObjectKind,
        interaction: InteractionRef,
    ) -> Result<Registration> {
        let behavior = interaction.behavior();
        if !self.registry.insert(kind.clone(), interaction.clone()) {
            trace!(target: "injection", "{} already registered for {}", behavior, kind);
            return Ok(Registration::AlreadyPresent);
        }

        debug!(target: "injection", "Registered {} for {}", behavior, kind);

        if !host.is_world_loaded() {
            return Ok(Registration::Added(InjectionReport::default()));
        }

        let mut report = InjectionReport::default();
        for object in host.objects_of_kind(&kind)? {
            report.merge(inject_into(host, object, std::slice::from_ref(&interaction))?);
        }

        debug!(
            target: "injection",
            "Back-filled {} into {} of {} {} objects",
            behavior, report.interactions_added, report.objects_visited, kind
        );
        Ok(Registration::Added(report))
    }

    /// Typed form of [`register`](Self::register).
    pub fn register_for<K: GameObjectKind, H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        interaction: InteractionRef,
    ) -> Result<Registration> {
        self.register(host, K::KIND, interaction)
    }

    /// Unregister an interaction's behavior from a kind.
    ///
    /// If a world is loaded, every entry of that behavior is removed from the
    /// live objects of the kind. Other interactions are left alone.
    pub fn unregister<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        kind: ObjectKind,
        interaction: &InteractionRef,
    ) -> Result<Unregistration> {
        let behavior = interaction.behavior();
        if self.registry.remove(&kind, &behavior).is_none() {
            trace!(target: "injection", "{} not registered for {}", behavior, kind);
            return Ok(Unregistration::NotRegistered);
        }

        debug!(target: "injection", "Unregistered {} from {}", behavior, kind);

        let mut report = RemovalReport::default();
        if !host.is_world_loaded() {
            return Ok(Unregistration::Removed(report));
        }

        for object in host.objects_of_kind(&kind)? {
            report.objects_visited += 1;
            report.interactions_removed += strip_behavior(host, object, &behavior)?;
        }

        debug!(
            target: "injection",
            "Removed {} x{} across {} {} objects",
            behavior, report.interactions_removed, report.objects_visited, kind
        );
        Ok(Unregistration::Removed(report))
    }

    /// Typed form of [`unregister`](Self::unregister).
    pub fn unregister_for<K: GameObjectKind, H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        interaction: &InteractionRef,
    ) -> Result<Unregistration> {
        self.unregister(host, K::KIND, interaction)
    }

    /// Bring every live object of every registered kind up to date.
    ///
    /// Kinds and interactions are visited in registration order. Does nothing
    /// when no world is loaded.
    pub fn reconcile<H: Host + ?Sized>(&self, host: &mut H) -> Result<InjectionReport> {
        let mut report = InjectionReport::default();
        if !host.is_world_loaded() {
            return Ok(report);
        }

        for entry in self.registry.iter() {
            for object in host.objects_of_kind(&entry.kind)? {
                report.merge(inject_into(host, object, entry.interactions())?);
            }
        }

        debug!(
            target: "injection",
            "Reconciled {} objects, added {} interactions",
            report.objects_visited, report.interactions_added
        );
        Ok(report)
    }

    /// React to one host lifecycle event.
    pub fn handle_event<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        event: &LifecycleEvent,
    ) -> Result<InjectionReport> {
        match event {
            LifecycleEvent::WorldLoadFinished => {
                self.listeners.listen_for_actors(host)?;
                self.reconcile(host)
            }
            LifecycleEvent::ObjectPlacedInLot { object } => self.inject_object(host, *object),
            LifecycleEvent::ActorInstantiated { actor } => self.inject_object(host, *actor),
            LifecycleEvent::WorldQuit => {
                self.listeners.release_actors(host)?;
                debug!(target: "injection", "World quit, actor listener released");
                Ok(InjectionReport::default())
            }
        }
    }

    /// React to a batch of events in delivery order.
    ///
    /// A host fault on one event does not stop the batch: every event is still
    /// handled, and the first fault is returned once the batch is done.
    pub fn handle_events<H, I>(&mut self, host: &mut H, events: I) -> Result<InjectionReport>
    where
        H: Host + ?Sized,
        I: IntoIterator<Item = LifecycleEvent>,
    {
        let mut report = InjectionReport::default();
        let mut first_fault = None;

        for event in events {
            match self.handle_event(host, &event) {
                Ok(handled) => report.merge(handled),
                Err(err) => {
                    warn!(target: "injection", "Failed to handle {}: {}", event.channel(), err);
                    first_fault.get_or_insert(err);
                }
            }
        }

        match first_fault {
            Some(err) => Err(err),
            None => Ok(report),
        }
    }

    fn inject_object<H: Host + ?Sized>(
        &self,
        host: &mut H,
        object: ObjectId,
    ) -> Result<InjectionReport> {
        // The host may report objects that are already gone
        let Some(kind) = host.resolve_object(object)? else {
            trace!(target: "injection", "Ignoring unresolved object {}", object);
            return Ok(InjectionReport::default());
        };

        let interactions = self.registry.interactions_for(&kind);
        if interactions.is_empty() {
            return Ok(InjectionReport::default());
        }

        inject_into(host, object, interactions)
    }
}
