//! # Game World
//!
//! The host side of interaction injection. This crate describes what the injector
//! may assume about the game engine: object identity and kinds, interaction
//! descriptors, the lifecycle events the engine raises, and the [`Host`] trait
//! through which live objects are queried and mutated.
//!
//! [`SimWorld`] is an in-memory host that embedders and tests can drive directly.

pub mod entities;
pub mod host;
pub mod interactions;
pub mod world_state;

pub use entities::*;
pub use host::*;
pub use interactions::*;
pub use world_state::*;
