// file: src/cli/commands.rs
// version: 1.0.0
// guid: 471be0a9-68d2-4f3c-95a7-d1c80e6352fb

//! Command implementations for the CLI

use crate::{
    installer::{BulkInstaller, InstallOptions},
    nm::NmClient,
    utils::system::SystemUtils,
    Result,
};
use dialoguer::Confirm;
use std::path::Path;
use tracing::{error, info, warn};

/// Import all .ovpn files in a directory and tag them with credentials
pub async fn install_command(
    directory: &str,
    username: &str,
    password: &str,
    autoconnect: bool,
    dry_run: bool,
) -> Result<()> {
    let installer = BulkInstaller::new(NmClient::new());
    let options = InstallOptions {
        username: username.to_string(),
        password: password.to_string(),
        autoconnect,
        dry_run,
    };

    let names = installer
        .install_all(Path::new(directory), &options)
        .await?;

    if names.is_empty() {
        return Ok(());
    }

    if dry_run {
        info!("DRY RUN: {} profiles would be imported", names.len());
        return Ok(());
    }

    for name in &names {
        info!(
            "Imported '{}'{}",
            name,
            if autoconnect {
                " and enabled autoconnect"
            } else {
                ""
            }
        );
    }
    info!("All {} VPN profiles installed", names.len());
    Ok(())
}

/// Show all imported VPN connections
pub async fn list_command(json_output: bool) -> Result<()> {
    let client = NmClient::new();
    let profiles = client.list_vpn_connections().await?;

    if json_output {
        let json = serde_json::to_string_pretty(&profiles)?;
        println!("{}", json);
        return Ok(());
    }

    if profiles.is_empty() {
        info!("No VPN connections found");
        return Ok(());
    }

    println!("VPN Profiles:");
    for profile in &profiles {
        println!("  - {}", profile.name);
    }
    info!("Found {} VPN connections", profiles.len());

    Ok(())
}

/// Connect to a specific VPN
///
/// nmcli's own activation progress goes straight to the terminal.
pub async fn connect_command(name: &str) -> Result<()> {
    info!("Connecting to '{}'", name);
    let client = NmClient::new();
    client.up(name).await
}

/// Disconnect a VPN
pub async fn disconnect_command(name: &str) -> Result<()> {
    info!("Disconnecting '{}'", name);
    let client = NmClient::new();
    client.down(name).await
}

/// Delete a single VPN connection
pub async fn delete_command(name: &str) -> Result<()> {
    let client = NmClient::new();
    client.delete(name).await?;
    info!("Deleted '{}'", name);
    Ok(())
}

/// Remove all imported VPN connections
pub async fn delete_all_command(yes: bool, dry_run: bool) -> Result<()> {
    let client = NmClient::new();
    let profiles = client.list_vpn_connections().await?;

    if profiles.is_empty() {
        info!("No VPN connections to delete");
        return Ok(());
    }

    if dry_run {
        info!("DRY RUN: Would delete {} VPN connections:", profiles.len());
        for profile in &profiles {
            info!("  - {}", profile.name);
        }
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to delete all {} VPN connections?",
                profiles.len()
            ))
            .default(false)
            .interact()
            .map_err(|e| {
                crate::error::BulkerError::execution(format!(
                    "Confirmation prompt failed: {}",
                    e
                ))
            })?;

        if !confirmed {
            info!("Aborted");
            return Ok(());
        }
    }

    for profile in &profiles {
        client.delete(&profile.name).await?;
        info!("Deleted '{}'", profile.name);
    }
    info!("All {} VPN connections deleted", profiles.len());

    Ok(())
}

/// Enable or disable autoconnect for a VPN connection
pub async fn autoconnect_command(name: &str, enabled: bool) -> Result<()> {
    let client = NmClient::new();
    client.set_autoconnect(name, enabled).await?;
    info!(
        "Autoconnect {} for '{}'",
        if enabled { "enabled" } else { "disabled" },
        name
    );
    Ok(())
}

/// Check that nmcli and the OpenVPN plugin are available
pub async fn check_prereqs_command() -> Result<()> {
    info!("Checking prerequisites for NetworkManager OpenVPN operations");

    let mut ready = true;

    if SystemUtils::command_exists("nmcli") {
        info!("✓ nmcli is available");
    } else {
        error!("✗ nmcli not found in PATH");
        info!("  Install NetworkManager: sudo apt install network-manager");
        ready = false;
    }

    if SystemUtils::has_openvpn_plugin() {
        info!("✓ NetworkManager OpenVPN plugin is installed");
    } else {
        error!("✗ NetworkManager OpenVPN plugin not found");
        info!("  Install it: sudo apt install network-manager-openvpn");
        ready = false;
    }

    if SystemUtils::is_root() {
        info!("✓ Running as root - no polkit prompts expected");
    } else {
        warn!("⚠ Not running as root - nmcli may prompt for polkit authorization");
    }

    if ready {
        info!("System is ready for OpenVPN profile management");
        Ok(())
    } else {
        Err(crate::error::BulkerError::system(
            "Missing required dependencies".to_string(),
        ))
    }
}
