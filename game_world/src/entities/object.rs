//! Game object records held by the reference world.

use super::{ObjectId, ObjectKind};
use crate::interactions::{BehaviorType, InteractionRef, InteractionSet};

/// A placed or simulated entity, including props and sims.
#[derive(Debug, Clone)]
pub struct GameObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub name: String,

    /// Interactions the object currently exposes, in pie menu order.
    pub interactions: InteractionSet,
}

impl GameObject {
    /// Create a new object of the given kind with no interactions.
    pub fn new(kind: ObjectKind, name: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            kind,
            name: name.into(),
            interactions: InteractionSet::new(),
        }
    }

    /// Add a stock interaction, as the base game does when it builds an object.
    pub fn with_interaction(mut self, interaction: InteractionRef) -> Self {
        self.interactions.push(interaction);
        self
    }

    /// Check if the object exposes an interaction of the given behavior.
    pub fn has_behavior(&self, behavior: &BehaviorType) -> bool {
        self.interactions.contains_behavior(behavior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::InteractionDefinition;

    #[test]
    fn test_new_object() {
        let object = GameObject::new(ObjectKind::from_static("fridge"), "Fridge")
            .with_interaction(InteractionDefinition::new("fridge.open").into_ref());

        assert_eq!(object.name, "Fridge");
        assert_eq!(object.interactions.len(), 1);
        assert!(object.has_behavior(&BehaviorType::from_static("fridge.open")));
        assert!(!object.has_behavior(&BehaviorType::from_static("fridge.raid")));
    }
}
