//! Lifecycle subscriptions the injector holds against the host.
//!
//! Three subscriptions are opened once at startup and kept for the life of the
//! injector. The actor-instantiated subscription only lives while a world is
//! loaded: it is opened on world load and released on world quit.

use game_world::{EventChannel, Host, Subscription};
use tracing::trace;

use crate::error::Result;

/// Channels subscribed to once at startup.
pub const STARTUP_CHANNELS: [EventChannel; 3] = [
    EventChannel::WorldLoadFinished,
    EventChannel::WorldQuit,
    EventChannel::ObjectPlacedInLot,
];

/// Subscription handles, one slot per channel.
#[derive(Debug, Default)]
pub struct ListenerSlots {
    startup: Vec<Subscription>,
    actor_instantiated: Option<Subscription>,
}

impl ListenerSlots {
    /// Whether the startup subscriptions are open.
    pub fn is_open(&self) -> bool {
        !self.startup.is_empty()
    }

    /// Whether the per-world actor subscription is held.
    pub fn is_listening_for_actors(&self) -> bool {
        self.actor_instantiated.is_some()
    }

    /// Subscribe to the startup channels. Does nothing if already open.
    pub fn open<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        if self.is_open() {
            return Ok(());
        }

        for channel in STARTUP_CHANNELS {
            let subscription = host.subscribe(channel)?;
            trace!(target: "injection", "Listening on {}", channel);
            self.startup.push(subscription);
        }
        Ok(())
    }

    /// Subscribe to actor instantiation unless a subscription is already held.
    pub fn listen_for_actors<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        if self.actor_instantiated.is_none() {
            self.actor_instantiated = Some(host.subscribe(EventChannel::ActorInstantiated)?);
            trace!(target: "injection", "Listening on {}", EventChannel::ActorInstantiated);
        }
        Ok(())
    }

    /// Release the actor subscription, if held.
    ///
    /// The slot is cleared before the host is called, so it ends up empty even
    /// when the host rejects the release.
    pub fn release_actors<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        if let Some(subscription) = self.actor_instantiated.take() {
            trace!(target: "injection", "Releasing {} subscription", subscription.channel());
            host.unsubscribe(subscription)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_world::SimWorld;

    #[test]
    fn test_open_is_idempotent() {
        let mut world = SimWorld::new();
        let mut slots = ListenerSlots::default();

        slots.open(&mut world).unwrap();
        slots.open(&mut world).unwrap();

        assert!(slots.is_open());
        assert_eq!(world.subscription_count(), 3);
        for channel in STARTUP_CHANNELS {
            assert!(world.is_subscribed(channel));
        }
        assert!(!world.is_subscribed(EventChannel::ActorInstantiated));
    }

    #[test]
    fn test_actor_subscription_lifecycle() {
        let mut world = SimWorld::new();
        let mut slots = ListenerSlots::default();

        slots.listen_for_actors(&mut world).unwrap();
        slots.listen_for_actors(&mut world).unwrap();
        assert_eq!(world.subscription_count(), 1);
        assert!(slots.is_listening_for_actors());

        slots.release_actors(&mut world).unwrap();
        assert!(!slots.is_listening_for_actors());
        assert!(!world.is_subscribed(EventChannel::ActorInstantiated));

        // Releasing with nothing held is fine
        slots.release_actors(&mut world).unwrap();
    }
}
