//! Registration manifests.
//!
//! A manifest lists interactions to register at startup, so a mod can ship its
//! injections as data instead of code:
//!
//! ```toml
//! [[inject]]
//! kind = "sim"
//! behavior = "chat.tell_joke"
//! display_name = "Tell Joke"
//! path = ["Friendly"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use game_world::{Host, InteractionDefinition, ObjectKind};
use tracing::debug;

use crate::error::{InjectionError, Result};
use crate::injector::{InteractionInjector, Registration};

/// One `[[inject]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Kind tag of the objects to inject into.
    pub kind: ObjectKind,

    #[serde(flatten)]
    pub definition: InteractionDefinition,
}

/// A list of registrations, applied in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectionManifest {
    #[serde(default, rename = "inject")]
    pub entries: Vec<ManifestEntry>,
}

impl InjectionManifest {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a manifest, choosing the format from the file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| InjectionError::ManifestIo {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&source),
            Some("json") => Self::from_json_str(&source),
            _ => Err(InjectionError::UnsupportedManifest(path.to_path_buf())),
        }
    }

    /// Register every entry with the injector, in file order.
    ///
    /// Entries whose behavior is already registered for their kind come back
    /// as [`Registration::AlreadyPresent`].
    pub fn apply<H: Host + ?Sized>(
        &self,
        injector: &mut InteractionInjector,
        host: &mut H,
    ) -> Result<Vec<Registration>> {
        let mut outcomes = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let interaction = Arc::new(entry.definition.clone());
            outcomes.push(injector.register(host, entry.kind.clone(), interaction)?);
        }

        debug!(target: "injection", "Applied manifest with {} entries", self.entries.len());
        Ok(outcomes)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
