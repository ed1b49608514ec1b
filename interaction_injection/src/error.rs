//! Error type for the injector and its manifest loader.

use std::path::PathBuf;

use game_world::HostError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InjectionError {
    /// A host fault, passed through untouched.
    #[error(transparent)]
    Host(#[from] HostError),

    #[error("invalid TOML manifest: {0}")]
    ManifestParse(#[from] toml::de::Error),

    #[error("invalid JSON manifest: {0}")]
    ManifestJson(#[from] serde_json::Error),

    #[error("failed to read manifest {}: {source}", path.display())]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported manifest format: {}", .0.display())]
    UnsupportedManifest(PathBuf),
}

pub type Result<T> = std::result::Result<T, InjectionError>;
