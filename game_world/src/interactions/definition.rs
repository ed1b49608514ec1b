//! Data-driven interaction descriptors.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

use super::{BehaviorType, Interaction, InteractionRef};

/// An interaction descriptor that can be built in code or loaded from data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionDefinition {
    pub behavior: BehaviorType,

    /// Pie menu label. Falls back to the behavior name when absent.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Pie menu submenu path, outermost first.
    #[serde(default)]
    pub path: Vec<String>,
}

impl InteractionDefinition {
    /// Create a new definition for the given behavior.
    pub fn new(behavior: impl Into<BehaviorType>) -> Self {
        Self {
            behavior: behavior.into(),
            display_name: None,
            path: Vec::new(),
        }
    }

    /// Set the pie menu label.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Append a submenu to the pie menu path.
    pub fn with_path_segment(mut self, segment: impl Into<String>) -> Self {
        self.path.push(segment.into());
        self
    }

    /// Wrap this definition in a shared reference.
    pub fn into_ref(self) -> InteractionRef {
        Arc::new(self)
    }
}

impl Interaction for InteractionDefinition {
    fn behavior(&self) -> BehaviorType {
        self.behavior.clone()
    }

    fn display_name(&self) -> Cow<'_, str> {
        match &self.display_name {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Borrowed(self.behavior.as_str()),
        }
    }
}
