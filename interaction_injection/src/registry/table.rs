//! The registry table.

use std::collections::HashMap;

use game_world::{BehaviorType, InteractionRef, ObjectKind};

use super::KindEntry;

/// Mapping from object kind to the interactions injected into it.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Entries in first-registration order.
    entries: Vec<KindEntry>,

    /// Index: kind -> position in `entries`.
    index: HashMap<ObjectKind, usize>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an interaction for a kind.
    ///
    /// Returns `false` without changing anything if the kind already lists an
    /// interaction of the same behavior type.
    pub fn insert(&mut self, kind: ObjectKind, interaction: InteractionRef) -> bool {
        let position = match self.index.get(&kind) {
            Some(position) => *position,
            None => {
                self.entries.push(KindEntry::new(kind.clone()));
                self.index.insert(kind, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };

        self.entries[position].push_unique(interaction)
    }

    /// Remove the interaction of the given behavior from a kind.
    ///
    /// A kind left with no interactions is dropped from the table.
    pub fn remove(&mut self, kind: &ObjectKind, behavior: &BehaviorType) -> Option<InteractionRef> {
        let position = *self.index.get(kind)?;
        let removed = self.entries[position].remove(behavior)?;

        if self.entries[position].is_empty() {
            self.entries.remove(position);
            self.rebuild_index();
        }

        Some(removed)
    }

    /// Interactions registered for a kind, in registration order.
    pub fn interactions_for(&self, kind: &ObjectKind) -> &[InteractionRef] {
        self.index
            .get(kind)
            .map(|position| self.entries[*position].interactions())
            .unwrap_or(&[])
    }

    /// Check if a kind lists an interaction of the given behavior.
    pub fn contains(&self, kind: &ObjectKind, behavior: &BehaviorType) -> bool {
        self.index
            .get(kind)
            .is_some_and(|position| self.entries[*position].contains(behavior))
    }

    /// Registered kinds in first-registration order.
    pub fn kinds(&self) -> impl Iterator<Item = &ObjectKind> {
        self.entries.iter().map(|e| &e.kind)
    }

    /// All entries in first-registration order.
    pub fn iter(&self) -> impl Iterator<Item = &KindEntry> {
        self.entries.iter()
    }

    /// Number of kinds with at least one interaction.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total registered interactions across all kinds.
    pub fn interaction_count(&self) -> usize {
        self.entries.iter().map(|e| e.interactions().len()).sum()
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.kind.clone(), position))
            .collect();
    }
}
