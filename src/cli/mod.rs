// CLI module for command-line interface

pub mod bump;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::error::Result;

use self::bump::BumpCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "upm-semver")]
#[command(about = "Bump the semantic version of a Unity UPM package manifest")]
#[command(long_about = r#"upm-semver is a CI step for Unity UPM packages: it validates the
package's directory layout, bumps the major.minor.patch version in
package.json according to the requested update class, writes the manifest
back with its field order intact, and reports the new version to the
invoking pipeline.

The workspace root and inputs can be supplied as flags or picked up from
the environment (GITHUB_WORKSPACE, UPM_PACKAGE_DIRECTORY,
SEMVER_UPDATE_TYPE), matching how CI runners hand them over.

Examples:
  upm-semver bump --package-directory Packages/com.example.tools --update-type patch
  upm-semver bump --package-directory Packages/com.example.tools --update-type minor --json
  GITHUB_WORKSPACE=/repo upm-semver bump --package-directory Packages/pkg --update-type major

For Unity's UPM layout requirements, see:
https://docs.unity3d.com/Manual/cus-layout.html"#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Bump the version recorded in a UPM package.json
    #[command(long_about = r#"Bump the version recorded in a UPM package.json.

The package directory must contain Unity's required UPM folders (editor,
runtime, tests, documentation — any casing) and a package.json with a
"version" field of the form "<major>.<minor>.<patch>".

Update classes (case-insensitive):
  patch    1.2.3 -> 1.2.4
  minor    1.2.3 -> 1.3.0
  major    1.2.3 -> 2.0.0

Any other update class is a no-op: the run succeeds, the version is left
unchanged, and the outcome is reported as "no change applied".

The new version is printed and, when GITHUB_OUTPUT is set, appended to
that file as `semver-number=<version>` for downstream pipeline steps."#)]
    Bump {
        /// UPM package directory, relative to the workspace root
        #[arg(long, env = "UPM_PACKAGE_DIRECTORY")]
        package_directory: String,

        /// Update class: patch, minor or major (case-insensitive)
        #[arg(long, env = "SEMVER_UPDATE_TYPE")]
        update_type: String,

        /// Workspace root the package directory is resolved against
        #[arg(long, env = "GITHUB_WORKSPACE")]
        workspace_root: PathBuf,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub async fn execute(command: Commands) -> Result<()> {
        match command {
            Commands::Bump {
                package_directory,
                update_type,
                workspace_root,
                json,
            } => {
                let cmd = BumpCommand {
                    package_directory,
                    update_type,
                    workspace_root,
                    json,
                };
                cmd.run().await
            }
        }
    }
}
