//! One row of the registry.

use game_world::{BehaviorType, InteractionRef, ObjectKind};

/// The interactions registered for one object kind.
#[derive(Debug, Clone)]
pub struct KindEntry {
    pub kind: ObjectKind,
    interactions: Vec<InteractionRef>,
}

impl KindEntry {
    pub(crate) fn new(kind: ObjectKind) -> Self {
        Self {
            kind,
            interactions: Vec::new(),
        }
    }

    /// Registered interactions in registration order.
    pub fn interactions(&self) -> &[InteractionRef] {
        &self.interactions
    }

    /// Check if an interaction of this behavior is registered.
    pub fn contains(&self, behavior: &BehaviorType) -> bool {
        self.interactions.iter().any(|i| &i.behavior() == behavior)
    }

    /// Append unless the behavior is already listed.
    pub(crate) fn push_unique(&mut self, interaction: InteractionRef) -> bool {
        if self.contains(&interaction.behavior()) {
            return false;
        }
        self.interactions.push(interaction);
        true
    }

    pub(crate) fn remove(&mut self, behavior: &BehaviorType) -> Option<InteractionRef> {
        let index = self
            .interactions
            .iter()
            .position(|i| &i.behavior() == behavior)?;
        Some(self.interactions.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }
}
