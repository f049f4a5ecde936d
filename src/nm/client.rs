// file: src/nm/client.rs
// version: 1.0.0
// guid: 8e42d6b0-57c3-4a19-bf8d-20e9a4c1753f

//! nmcli process invocation with fixed argument templates

use crate::nm::profile::{parse_terse_connections, VpnProfile};
use crate::{BulkerError, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Client for NetworkManager's command-line tool.
///
/// Each method maps to exactly one fixed nmcli argument template. The client
/// holds no connection state; NetworkManager owns all of it.
pub struct NmClient {
    binary: String,
}

impl NmClient {
    pub fn new() -> Self {
        Self {
            binary: "nmcli".to_string(),
        }
    }

    /// Use a different binary in place of `nmcli`. Intended for tests.
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// List the names of all VPN-type connections NetworkManager knows about.
    pub async fn list_vpn_connections(&self) -> Result<Vec<VpnProfile>> {
        let stdout = self
            .run(&["-t", "-f", "NAME,TYPE", "connection", "show"])
            .await?;
        Ok(parse_terse_connections(&stdout))
    }

    /// Import an OpenVPN profile file as a new connection.
    pub async fn import_profile(&self, path: &Path) -> Result<()> {
        let path_str = path.to_str().ok_or_else(|| {
            BulkerError::validation(format!("Profile path is not valid UTF-8: {}", path.display()))
        })?;
        self.run(&["connection", "import", "type", "openvpn", "file", path_str])
            .await?;
        Ok(())
    }

    /// Set the VPN username on a connection.
    pub async fn set_username(&self, name: &str, username: &str) -> Result<()> {
        self.run(&["connection", "modify", name, "vpn.user-name", username])
            .await?;
        Ok(())
    }

    /// Store the VPN password in NetworkManager's keyring.
    ///
    /// `password-flags=0` tells NetworkManager to persist the secret itself
    /// instead of prompting the user on every activation.
    pub async fn set_password(&self, name: &str, password: &str) -> Result<()> {
        self.run(&["connection", "modify", name, "+vpn.data", "password-flags=0"])
            .await?;
        let secret = format!("password={}", password);
        self.run(&["connection", "modify", name, "vpn.secrets", &secret])
            .await?;
        Ok(())
    }

    /// Enable or disable autoconnect on a connection.
    pub async fn set_autoconnect(&self, name: &str, enabled: bool) -> Result<()> {
        let flag = if enabled { "yes" } else { "no" };
        self.run(&["connection", "modify", name, "connection.autoconnect", flag])
            .await?;
        Ok(())
    }

    /// Delete a connection by name.
    pub async fn delete(&self, name: &str) -> Result<()> {
        self.run(&["connection", "delete", name]).await?;
        Ok(())
    }

    /// Activate a connection.
    ///
    /// Activation can take a while, so nmcli's own progress output goes
    /// straight to the terminal instead of being captured.
    pub async fn up(&self, name: &str) -> Result<()> {
        self.run_interactive(&["connection", "up", name]).await
    }

    /// Deactivate a connection. Output is passed through like [`Self::up`].
    pub async fn down(&self, name: &str) -> Result<()> {
        self.run_interactive(&["connection", "down", name]).await
    }

    /// Run nmcli with the given arguments, returning captured stdout.
    ///
    /// A non-zero exit status becomes an error carrying the exit code and
    /// whatever nmcli wrote to stderr.
    async fn run(&self, args: &[&str]) -> Result<String> {
        debug!("Executing: {} {}", self.binary, args.join(" "));

        let output = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                BulkerError::execution(format!("Failed to run {}: {}", self.binary, e))
            })?;

        if !output.status.success() {
            return Err(BulkerError::Nmcli {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Run nmcli with stdio inherited so its output reaches the user as it
    /// happens. Only the exit status is checked.
    async fn run_interactive(&self, args: &[&str]) -> Result<()> {
        debug!("Executing: {} {}", self.binary, args.join(" "));

        let status = Command::new(&self.binary)
            .args(args)
            .status()
            .await
            .map_err(|e| {
                BulkerError::execution(format!("Failed to run {}: {}", self.binary, e))
            })?;

        if !status.success() {
            return Err(BulkerError::Nmcli {
                code: status.code().unwrap_or(-1),
                stderr: "see nmcli output above".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for NmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Create a shell script that stands in for nmcli and appends each
    /// invocation's arguments to a log file.
    fn recording_stub(dir: &Path) -> (PathBuf, PathBuf) {
        use std::os::unix::fs::PermissionsExt;

        let log = dir.join("calls.log");
        let script = dir.join("nmcli-stub.sh");
        std::fs::write(
            &script,
            format!("#!/bin/sh\necho \"$@\" >> \"{}\"\n", log.display()),
        )
        .unwrap();
        let mut perms = std::fs::metadata(&script).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script, perms).unwrap();
        (script, log)
    }

    fn recorded_calls(log: &Path) -> Vec<String> {
        std::fs::read_to_string(log)
            .unwrap_or_default()
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    fn stub_client(script: &Path) -> NmClient {
        NmClient::with_binary(script.to_str().unwrap())
    }

    #[tokio::test]
    async fn test_run_missing_binary_is_execution_error() {
        let client = NmClient::with_binary("nonexistent-binary-12345");
        let result = client.list_vpn_connections().await;
        assert!(matches!(result, Err(BulkerError::Execution(_))));
    }

    #[tokio::test]
    async fn test_run_nonzero_exit_carries_status() {
        let client = NmClient::with_binary("false");
        let result = client.up("office").await;
        match result {
            Err(BulkerError::Nmcli { code, .. }) => assert_eq!(code, 1),
            other => panic!("expected Nmcli error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_parses_echoed_output() {
        // `echo` stands in for nmcli; its output has no vpn rows.
        let client = NmClient::with_binary("echo");
        let profiles = client.list_vpn_connections().await.unwrap();
        assert!(profiles.is_empty());
    }

    #[tokio::test]
    async fn test_list_argument_template() {
        let temp_dir = TempDir::new().unwrap();
        let (script, log) = recording_stub(temp_dir.path());

        stub_client(&script).list_vpn_connections().await.unwrap();

        assert_eq!(
            recorded_calls(&log),
            vec!["-t -f NAME,TYPE connection show"]
        );
    }

    #[tokio::test]
    async fn test_import_profile_argument_template() {
        let temp_dir = TempDir::new().unwrap();
        let (script, log) = recording_stub(temp_dir.path());

        stub_client(&script)
            .import_profile(Path::new("/tmp/office.ovpn"))
            .await
            .unwrap();

        assert_eq!(
            recorded_calls(&log),
            vec!["connection import type openvpn file /tmp/office.ovpn"]
        );
    }

    #[tokio::test]
    async fn test_credential_argument_templates() {
        let temp_dir = TempDir::new().unwrap();
        let (script, log) = recording_stub(temp_dir.path());
        let client = stub_client(&script);

        client.set_username("office", "alice").await.unwrap();
        client.set_password("office", "hunter2").await.unwrap();

        assert_eq!(
            recorded_calls(&log),
            vec![
                "connection modify office vpn.user-name alice",
                "connection modify office +vpn.data password-flags=0",
                "connection modify office vpn.secrets password=hunter2",
            ]
        );
    }

    #[tokio::test]
    async fn test_autoconnect_argument_templates() {
        let temp_dir = TempDir::new().unwrap();
        let (script, log) = recording_stub(temp_dir.path());
        let client = stub_client(&script);

        client.set_autoconnect("office", true).await.unwrap();
        client.set_autoconnect("office", false).await.unwrap();

        assert_eq!(
            recorded_calls(&log),
            vec![
                "connection modify office connection.autoconnect yes",
                "connection modify office connection.autoconnect no",
            ]
        );
    }

    #[tokio::test]
    async fn test_lifecycle_verb_templates() {
        let temp_dir = TempDir::new().unwrap();
        let (script, log) = recording_stub(temp_dir.path());
        let client = stub_client(&script);

        client.up("office").await.unwrap();
        client.down("office").await.unwrap();
        client.delete("office").await.unwrap();

        assert_eq!(
            recorded_calls(&log),
            vec![
                "connection up office",
                "connection down office",
                "connection delete office",
            ]
        );
    }
}
