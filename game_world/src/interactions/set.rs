//! The live interaction set of one game object.

use super::{same_instance, BehaviorType, InteractionRef};

/// Ordered interactions exposed by a live object.
///
/// Order is pie menu order. The set permits several entries of one behavior
/// type, because the base game may ship objects that way.
#[derive(Debug, Clone, Default)]
pub struct InteractionSet {
    entries: Vec<InteractionRef>,
}

impl InteractionSet {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an interaction at the end.
    pub fn push(&mut self, interaction: InteractionRef) {
        self.entries.push(interaction);
    }

    /// Remove one entry by identity. Returns whether anything was removed.
    pub fn remove_instance(&mut self, interaction: &InteractionRef) -> bool {
        match self.entries.iter().position(|e| same_instance(e, interaction)) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Check whether any entry has the given behavior type.
    pub fn contains_behavior(&self, behavior: &BehaviorType) -> bool {
        self.entries.iter().any(|e| &e.behavior() == behavior)
    }

    /// Count entries with the given behavior type.
    pub fn count_behavior(&self, behavior: &BehaviorType) -> usize {
        self.entries
            .iter()
            .filter(|e| &e.behavior() == behavior)
            .count()
    }

    /// Copy the current entries out.
    pub fn snapshot(&self) -> Vec<InteractionRef> {
        self.entries.clone()
    }

    /// Behavior types in set order.
    pub fn behaviors(&self) -> Vec<BehaviorType> {
        self.entries.iter().map(|e| e.behavior()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InteractionRef> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
