// UPM package manifest model

use serde_json::{Map, Value};
use std::path::Path;

use crate::models::version::Version;
use crate::utils::error::{Result, UpmError};

/// An in-memory `package.json`, kept as a generic ordered JSON object so
/// every field the tool does not understand survives the round-trip with
/// its position intact. Only the `version` key is ever mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    fields: Map<String, Value>,
}

impl PackageManifest {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Read and parse the manifest's `version` field.
    ///
    /// An absent or non-string field is a `MissingVersion` error; a string
    /// that is not a dotted integer triple is an `InvalidVersion` error.
    /// `manifest_path` is only used for error reporting.
    pub fn version(&self, manifest_path: &Path) -> Result<Version> {
        let value = self
            .fields
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| UpmError::MissingVersion {
                path: manifest_path.to_path_buf(),
            })?;

        value.parse()
    }

    /// Overwrite the `version` field with the canonical form of `version`.
    /// All other fields are left untouched.
    pub fn set_version(&mut self, version: &Version) {
        self.fields
            .insert("version".to_string(), Value::String(version.to_string()));
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
