// file: src/nm/profile.rs
// version: 1.0.0
// guid: 5d27c8f1-03b9-4e6a-92d5-b4a861f0e73c

//! VPN profile naming and nmcli terse-output parsing

use crate::{BulkerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A VPN connection known to NetworkManager.
///
/// The name is the only identity this tool tracks; everything else about the
/// connection lives in NetworkManager's own configuration store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpnProfile {
    pub name: String,
}

impl VpnProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Derive the connection name nmcli will assign when importing a profile file.
///
/// nmcli names an imported connection after the file's stem, so
/// `us-east-01.ovpn` becomes the connection `us-east-01`.
pub fn profile_name_from_path(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            BulkerError::validation(format!(
                "Cannot derive a profile name from path: {}",
                path.display()
            ))
        })
}

/// Parse `nmcli -t -f NAME,TYPE connection show` output into VPN profiles.
///
/// Terse output separates fields with `:` and escapes literal colons in
/// values as `\:`. Only rows whose type field is exactly `vpn` are kept.
pub fn parse_terse_connections(output: &str) -> Vec<VpnProfile> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let fields = split_terse_line(line);
            if fields.len() >= 2 && fields[1] == "vpn" {
                Some(VpnProfile::new(fields[0].clone()))
            } else {
                None
            }
        })
        .collect()
}

/// Split one terse-output line on unescaped `:` separators, unescaping values.
fn split_terse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            ':' => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
