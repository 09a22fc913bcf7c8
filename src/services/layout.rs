// UPM directory layout validation

use std::path::Path;
use tokio::fs;

use crate::utils::error::{Result, UpmError};

/// Top-level folders Unity's UPM layout convention requires.
pub const REQUIRED_DIRECTORIES: [&str; 4] = ["editor", "runtime", "tests", "documentation"];

/// Check that every required UPM folder is present in `directory_names`.
///
/// `directory_names` is expected to be lowercased already (see
/// [`list_subdirectories`]); matching is exact string equality, so extra
/// or unrecognized directories are irrelevant and ordering does not
/// matter. On failure the error carries the missing names for diagnostics.
pub fn validate_layout(root: &Path, directory_names: &[String]) -> Result<()> {
    let missing: Vec<String> = REQUIRED_DIRECTORIES
        .iter()
        .filter(|required| !directory_names.iter().any(|name| name.as_str() == **required))
        .map(|required| (*required).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(UpmError::Layout {
            root: root.to_path_buf(),
            missing,
        })
    }
}

/// List the lowercase names of the immediate subdirectories of `root`.
pub async fn list_subdirectories(root: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let mut entries = fs::read_dir(root).await?;

    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            names.push(entry.file_name().to_string_lossy().to_lowercase());
        }
    }

    Ok(names)
}
