//! Object identity and kind definitions for the game world.

mod object;

pub use object::*;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;

/// Unique identifier for a live game object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub Uuid);

impl ObjectId {
    /// Create a new random object ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable tag naming a category of game object.
///
/// Kinds are compared by tag only. Two kinds built from the same string are the
/// same kind, whether the tag was borrowed at compile time or loaded from data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectKind(Cow<'static, str>);

impl ObjectKind {
    /// Playable and non-playable characters.
    pub const SIM: ObjectKind = ObjectKind::from_static("sim");

    /// Create a kind from a compile-time tag.
    pub const fn from_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    /// Create a kind from a runtime tag (e.g. read from a manifest).
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Cow::Owned(tag.into()))
    }

    /// The tag string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ObjectKind {
    fn from(tag: &'static str) -> Self {
        Self::from_static(tag)
    }
}

/// A game object category with a canonical tag fixed at compile time.
///
/// Implement this on a marker type to get typed registration:
///
/// ```
/// use game_world::{GameObjectKind, ObjectKind};
///
/// struct Bookshelf;
///
/// impl GameObjectKind for Bookshelf {
///     const KIND: ObjectKind = ObjectKind::from_static("bookshelf");
/// }
///
/// assert_eq!(Bookshelf::KIND.as_str(), "bookshelf");
/// ```
pub trait GameObjectKind {
    const KIND: ObjectKind;
}

/// Marker for [`ObjectKind::SIM`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sim;

impl GameObjectKind for Sim {
    const KIND: ObjectKind = ObjectKind::SIM;
}
