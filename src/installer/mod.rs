// file: src/installer/mod.rs
// version: 1.0.0
// guid: b6c05e93-1a7f-4d82-ae64-f93d07285c1a

//! Bulk import of OpenVPN profile files

use crate::nm::profile::profile_name_from_path;
use crate::nm::NmClient;
use crate::{BulkerError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Options for a batch install run
pub struct InstallOptions {
    pub username: String,
    pub password: String,
    pub autoconnect: bool,
    pub dry_run: bool,
}

/// Imports every `.ovpn` file in a directory and tags it with credentials.
pub struct BulkInstaller {
    client: NmClient,
}

impl BulkInstaller {
    pub fn new(client: NmClient) -> Self {
        Self { client }
    }

    /// Find all `.ovpn` files directly inside `directory`, sorted by path.
    ///
    /// The scan is non-recursive and matches the extension case-insensitively.
    pub fn scan_profiles(directory: &Path) -> Result<Vec<PathBuf>> {
        if !directory.is_dir() {
            return Err(BulkerError::validation(format!(
                "Profile directory not found: {}",
                directory.display()
            )));
        }

        let mut files: Vec<PathBuf> = WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.eq_ignore_ascii_case("ovpn"))
                    .unwrap_or(false)
            })
            .collect();

        files.sort();
        Ok(files)
    }

    /// Import every profile in `directory`, returning the connection names.
    ///
    /// Each file goes through the full sequence: import, set username, store
    /// the password, and enable autoconnect. A failure on any file aborts the
    /// batch so partial state is visible in the error rather than silently
    /// skipped.
    pub async fn install_all(
        &self,
        directory: &Path,
        options: &InstallOptions,
    ) -> Result<Vec<String>> {
        let files = Self::scan_profiles(directory)?;

        if files.is_empty() {
            warn!("No .ovpn files found in {}", directory.display());
            return Ok(Vec::new());
        }

        info!("Installing {} VPN profiles...", files.len());

        if options.dry_run {
            let mut names = Vec::new();
            for file in &files {
                let name = profile_name_from_path(file)?;
                info!("DRY RUN: Would import '{}' from {}", name, file.display());
                names.push(name);
            }
            return Ok(names);
        }

        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        // Steady tick keeps the spinner moving while nmcli blocks.
        pb.enable_steady_tick(Duration::from_millis(100));

        let mut names = Vec::new();
        for file in &files {
            let name = profile_name_from_path(file)?;
            pb.set_message(name.clone());
            debug!("Importing profile from {}", file.display());

            self.client.import_profile(file).await?;
            self.client.set_username(&name, &options.username).await?;
            self.client.set_password(&name, &options.password).await?;
            if options.autoconnect {
                self.client.set_autoconnect(&name, true).await?;
            }

            pb.inc(1);
            names.push(name);
        }

        pb.finish_with_message("All profiles installed");
        Ok(names)
    }
}
