//! Interaction descriptors and the per-object interaction set.
//!
//! Interactions are owned by the host. Everything downstream holds them as
//! [`InteractionRef`]s and compares them by [`BehaviorType`], never by value.

mod definition;
mod set;

pub use definition::*;
pub use set::*;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

/// Identifier of the concrete behavior behind an interaction.
///
/// Two descriptors with the same behavior type are the same interaction as far
/// as duplicate checks go, even if they differ in every other field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BehaviorType(Cow<'static, str>);

impl BehaviorType {
    /// Create a behavior type from a compile-time name.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Create a behavior type from a runtime name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BehaviorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for BehaviorType {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

/// A player-invokable action that can be attached to a game object.
pub trait Interaction: std::fmt::Debug + Send + Sync {
    /// The concrete behavior this descriptor stands for.
    fn behavior(&self) -> BehaviorType;

    /// Label shown in the pie menu.
    fn display_name(&self) -> Cow<'_, str> {
        Cow::Owned(self.behavior().to_string())
    }
}

/// Shared reference to a host-owned interaction descriptor.
pub type InteractionRef = Arc<dyn Interaction>;

/// Check whether two references point at the same descriptor instance.
pub fn same_instance(a: &InteractionRef, b: &InteractionRef) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}
