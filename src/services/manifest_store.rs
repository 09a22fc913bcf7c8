// Manifest file loading and write-back

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::models::manifest::PackageManifest;
use crate::utils::error::{Result, UpmError};

const MANIFEST_FILE_NAME: &str = "package.json";

/// Path to the manifest inside a UPM package root.
pub fn manifest_path(package_root: &Path) -> PathBuf {
    package_root.join(MANIFEST_FILE_NAME)
}

/// Load `<package_root>/package.json` into a [`PackageManifest`].
pub async fn load(package_root: &Path) -> Result<PackageManifest> {
    let path = manifest_path(package_root);

    let content = fs::read_to_string(&path)
        .await
        .map_err(|source| UpmError::ManifestRead {
            path: path.clone(),
            source,
        })?;

    let fields: Map<String, Value> =
        serde_json::from_str(&content).map_err(|source| UpmError::ManifestParse {
            path: path.clone(),
            source,
        })?;

    Ok(PackageManifest::new(fields))
}

/// Write the manifest back as pretty-printed JSON with tab indentation,
/// matching the formatting Unity package manifests ship with.
pub async fn save(package_root: &Path, manifest: &PackageManifest) -> Result<()> {
    let path = manifest_path(package_root);

    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    manifest.fields().serialize(&mut serializer)?;
    buffer.push(b'\n');

    fs::write(&path, buffer)
        .await
        .map_err(|source| UpmError::ManifestWrite { path, source })
}
