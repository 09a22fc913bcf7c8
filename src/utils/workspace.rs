// Workspace path resolution

use std::path::{Path, PathBuf};

/// Resolve the UPM package root from the CI workspace root and the
/// caller-supplied relative directory.
///
/// Pure function of its inputs; reading the workspace root out of the
/// process environment happens at the CLI edge, not here.
pub fn resolve_package_root(workspace_root: &Path, relative: &str) -> PathBuf {
    let relative = relative
        .trim_start_matches('/')
        .trim_start_matches('\\');
    workspace_root.join(relative)
}
