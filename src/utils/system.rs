// file: src/utils/system.rs
// version: 1.0.0
// guid: 96d510fb-3c84-4a2e-b715-08e4f6a29dc3

//! System utility functions

use std::path::Path;

/// System utility functions
pub struct SystemUtils;

impl SystemUtils {
    /// Check if a command exists in PATH
    pub fn command_exists(command: &str) -> bool {
        which::which(command).is_ok()
    }

    /// Check if running as root
    pub fn is_root() -> bool {
        #[cfg(unix)]
        {
            unsafe { libc::getuid() == 0 }
        }
        #[cfg(windows)]
        {
            // NetworkManager is Linux-only; assume non-root elsewhere
            false
        }
    }

    /// Check whether NetworkManager's OpenVPN plugin is installed.
    ///
    /// nmcli cannot report installed VPN plugins, so look for the service
    /// definition file the plugin package ships.
    pub fn has_openvpn_plugin() -> bool {
        const PLUGIN_PATHS: [&str; 3] = [
            "/usr/lib/NetworkManager/VPN/nm-openvpn-service.name",
            "/usr/lib64/NetworkManager/VPN/nm-openvpn-service.name",
            "/etc/NetworkManager/VPN/nm-openvpn-service.name",
        ];

        PLUGIN_PATHS.iter().any(|p| Path::new(p).exists())
    }
}
