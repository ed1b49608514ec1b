//! # Interaction Injection
//!
//! Adds custom interactions to game objects at runtime without touching the
//! base game. Interactions are registered per object kind; the injector keeps
//! live objects in step with that registry as worlds load, objects are placed,
//! and sims are instantiated.
//!
//! ## Core Components
//!
//! - **registry**: Ordered kind -> interactions table, one entry per behavior type
//! - **injector**: Registration API and the event-driven reconciliation
//! - **events**: Lifecycle subscriptions held against the host
//! - **config**: Registration manifests loaded from TOML or JSON
//!
//! ## Usage
//!
//! ```
//! use game_world::{GameObject, InteractionDefinition, ObjectKind, SimWorld};
//! use interaction_injection::InteractionInjector;
//!
//! let mut world = SimWorld::new();
//! let mut injector = InteractionInjector::new();
//! injector.initialize(&mut world)?;
//!
//! let joke = InteractionDefinition::new("chat.tell_joke").into_ref();
//! injector.register(&mut world, ObjectKind::SIM, joke)?;
//!
//! let bella = world.spawn(GameObject::new(ObjectKind::SIM, "Bella"));
//! world.load("Sunset Valley");
//! let events = world.drain_events();
//! injector.handle_events(&mut world, events)?;
//!
//! assert_eq!(world.object(bella).map(|o| o.interactions.len()), Some(1));
//! # Ok::<(), interaction_injection::InjectionError>(())
//! ```
//!
//! All calls run synchronously on the caller's thread. Host faults are passed
//! back to the caller unchanged; nothing else is treated as an error.

pub mod config;
pub mod error;
pub mod events;
pub mod injector;
pub mod registry;

pub use config::*;
pub use error::*;
pub use injector::*;
pub use registry::*;
