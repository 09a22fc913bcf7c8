// Common error types for upm-semver

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a bump run, grouped by failure category so
/// callers can branch on the kind instead of parsing message text.
#[derive(Debug, Error)]
pub enum UpmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "UPM directory '{}' does not contain the expected folders (missing: {}).\n\
         Unity's UPM layout requires the directories: editor, runtime, tests, documentation.\n\
         See https://docs.unity3d.com/Manual/cus-layout.html",
        .root.display(),
        .missing.join(", ")
    )]
    Layout { root: PathBuf, missing: Vec<String> },

    #[error("Failed to read manifest {}: {}", .path.display(), .source)]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest {} is not a valid JSON object: {}", .path.display(), .source)]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "No valid version property found in {}.\n\
         See https://docs.unity3d.com/Manual/upm-manifestPkg.html",
        .path.display()
    )]
    MissingVersion { path: PathBuf },

    #[error("Invalid version string '{value}': {reason}")]
    InvalidVersion { value: String, reason: String },

    #[error("Failed to serialize JSON output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(
        "Failed to write manifest {} (version was computed but not persisted): {}",
        .path.display(),
        .source
    )]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, UpmError>;
