use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::models::version::{BumpOutcome, UpdateClass};
use crate::services::{layout, manifest_store};
use crate::utils::error::Result;
use crate::utils::workspace::resolve_package_root;

/// Bump the semantic version recorded in a UPM package manifest
#[derive(Debug, Args)]
pub struct BumpCommand {
    /// UPM package directory, relative to the workspace root
    #[arg(long, env = "UPM_PACKAGE_DIRECTORY")]
    pub package_directory: String,

    /// Update class: patch, minor or major (case-insensitive)
    #[arg(long, env = "SEMVER_UPDATE_TYPE")]
    pub update_type: String,

    /// Workspace root the package directory is resolved against
    #[arg(long, env = "GITHUB_WORKSPACE")]
    pub workspace_root: PathBuf,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for the bump command
#[derive(Debug, Serialize, Deserialize)]
pub struct BumpResponse {
    pub status: String,
    pub package_path: String,
    pub previous_version: String,
    pub semver_number: String,
    pub update_type: String,
    pub applied: bool,
}

impl BumpCommand {
    /// Execute the bump command
    pub async fn run(&self) -> Result<()> {
        let package_root = resolve_package_root(&self.workspace_root, &self.package_directory);

        if !self.json {
            println!(
                "Working from this directory for the UPM root directory:\n{}",
                package_root.display()
            );
        }

        // Layout gate runs before the manifest is touched
        let directories = layout::list_subdirectories(&package_root).await?;
        if !self.json {
            println!("Directories found in the UPM root: {:?}", directories);
        }
        layout::validate_layout(&package_root, &directories)?;

        let manifest_path = manifest_store::manifest_path(&package_root);
        let mut manifest = manifest_store::load(&package_root).await?;
        let current = manifest.version(&manifest_path)?;
        if !self.json {
            println!("Detected existing semver as: {}", current);
        }

        let class = UpdateClass::parse(&self.update_type);
        let outcome = BumpOutcome::compute(current, class);
        let next = outcome.result_version();

        // The manifest is rewritten even on the unrecognized-class no-op;
        // the write is idempotent in that case.
        manifest.set_version(&next);
        manifest_store::save(&package_root, &manifest).await?;

        self.report(&outcome, &package_root.display().to_string())
            .await
    }

    async fn report(&self, outcome: &BumpOutcome, package_path: &str) -> Result<()> {
        let next = outcome.result_version();

        if self.json {
            let response = match outcome {
                BumpOutcome::Applied {
                    class, previous, ..
                } => BumpResponse {
                    status: "success".to_string(),
                    package_path: package_path.to_string(),
                    previous_version: previous.to_string(),
                    semver_number: next.to_string(),
                    update_type: class.to_string(),
                    applied: true,
                },
                BumpOutcome::Unchanged { class, version } => BumpResponse {
                    status: "success".to_string(),
                    package_path: package_path.to_string(),
                    previous_version: version.to_string(),
                    semver_number: next.to_string(),
                    update_type: class.clone(),
                    applied: false,
                },
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            match outcome {
                BumpOutcome::Applied {
                    class, previous, ..
                } => {
                    println!("Applied {} update: {} -> {}", class, previous, next);
                }
                BumpOutcome::Unchanged { class, .. } => {
                    println!(
                        "Unrecognized update class '{}', no change applied (version stays {})",
                        class, next
                    );
                }
            }
            println!("semver-number: {}", next);
        }

        // CI output surface: append to the GITHUB_OUTPUT file when the
        // pipeline provides one.
        if let Ok(output_file) = std::env::var("GITHUB_OUTPUT") {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&output_file)
                .await?;
            file.write_all(format!("semver-number={}\n", next).as_bytes())
                .await?;
        }

        Ok(())
    }
}
